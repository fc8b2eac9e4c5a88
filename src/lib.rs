//! linkshort — a command-line client for the is.gd / v.gd URL-shortening service.
//!
//! This library crate exposes all modules for use by the binary and integration tests.

pub mod app;
pub mod cli;
pub mod database;
pub mod managers;
pub mod platform;
pub mod services;
pub mod types;
pub mod ui;
