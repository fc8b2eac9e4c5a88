//! Command-line interface definitions.

use clap::{Args, Parser, Subcommand};

use crate::types::shorten::ShortenService;

#[derive(Debug, Parser)]
#[command(
    name = "linkshort",
    version,
    about = "Shorten URLs with is.gd / v.gd from the terminal"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shorten a URL
    Shorten(ShortenArgs),
    /// Show or clear past shortenings
    History {
        #[command(subcommand)]
        command: Option<HistoryCommand>,
    },
    /// Print a suggested custom alias
    Alias,
    /// Read or change configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Debug, Args)]
pub struct ShortenArgs {
    /// The URL to shorten; https:// is assumed when no scheme is given
    pub url: String,

    /// Custom alias for the short link (5-30 chars: letters, digits, underscore)
    #[arg(long)]
    pub alias: Option<String>,

    /// Target service
    #[arg(long, value_parser = parse_service)]
    pub service: Option<ShortenService>,

    /// Enable click statistics for the link
    #[arg(long)]
    pub stats: bool,

    /// Skip the QR code
    #[arg(long)]
    pub no_qr: bool,
}

#[derive(Debug, Subcommand)]
pub enum HistoryCommand {
    /// Delete all stored entries
    Clear {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Print one setting
    Get { key: String },
    /// Change one setting
    Set { key: String, value: String },
    /// Restore default settings
    Reset,
    /// Print the settings file location
    Path,
}

fn parse_service(s: &str) -> Result<ShortenService, String> {
    s.parse()
}
