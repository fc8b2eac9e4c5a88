//! linkshort — command-line client for the is.gd / v.gd URL shortener.
//!
//! Entry point: parses arguments, opens the app against the per-user data
//! directory, and dispatches to the requested command.

use std::io::{self, BufRead, Write};
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use linkshort::app::{App, ShortenOptions};
use linkshort::cli::{Cli, Command, ConfigCommand, HistoryCommand, ShortenArgs};
use linkshort::services::qr_renderer::{QrRenderer, QrRendererTrait};
use linkshort::services::settings_engine::SettingsEngineTrait;
use linkshort::services::validation;
use linkshort::types::errors::AppError;
use linkshort::types::settings::ThemeMode;
use linkshort::ui::renderer;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("linkshort=warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let mut app = match App::open_default() {
        Ok(app) => app,
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    };
    let palette = app.palette();

    let result = match cli.command {
        Command::Shorten(args) => run_shorten(&mut app, args),
        Command::History { command: None } => run_history(&app),
        Command::History {
            command: Some(HistoryCommand::Clear { yes }),
        } => run_history_clear(&mut app, yes),
        Command::Alias => {
            println!("{}", validation::suggest_alias());
            Ok(())
        }
        Command::Config { command } => run_config(&mut app, command),
    };

    if let Err(e) = result {
        renderer::render_error(&palette, &e.to_string());
        process::exit(1);
    }
}

fn run_shorten(app: &mut App, args: ShortenArgs) -> Result<(), AppError> {
    let options = ShortenOptions {
        alias: args.alias,
        service: args.service,
        log_stats: if args.stats { Some(true) } else { None },
    };

    let link = app.shorten(&args.url, &options)?;

    let show_qr = !args.no_qr && app.settings_engine.get_settings().general.show_qr;
    let qr = if show_qr {
        let invert = matches!(app.resolved_theme(), ThemeMode::Dark);
        match QrRenderer::new().render_unicode(&link.short_url, invert) {
            Ok(text) => Some(text),
            Err(e) => {
                tracing::warn!("QR rendering failed: {}", e);
                None
            }
        }
    } else {
        None
    };

    renderer::render_result(&app.palette(), &link, qr.as_deref());
    Ok(())
}

fn run_history(app: &App) -> Result<(), AppError> {
    let entries = app.history()?;
    renderer::render_history(&app.palette(), &entries);
    Ok(())
}

fn run_history_clear(app: &mut App, yes: bool) -> Result<(), AppError> {
    if !yes && !confirm("Clear all history?") {
        println!("Aborted.");
        return Ok(());
    }
    app.clear_history()?;
    println!("History cleared.");
    Ok(())
}

fn run_config(app: &mut App, command: ConfigCommand) -> Result<(), AppError> {
    match command {
        ConfigCommand::Get { key } => {
            let value = app.settings_engine.get_value(&key)?;
            println!("{}", value);
        }
        ConfigCommand::Set { key, value } => {
            app.settings_engine
                .set_value(&key, parse_config_value(&value))?;
            println!("{} = {}", key, value);
        }
        ConfigCommand::Reset => {
            app.settings_engine.reset()?;
            println!("Settings reset to defaults.");
        }
        ConfigCommand::Path => {
            println!("{}", app.settings_engine.get_config_path());
        }
    }
    Ok(())
}

/// Interprets a raw CLI value: JSON literals (booleans, numbers) pass
/// through, anything else is treated as a string.
fn parse_config_value(raw: &str) -> serde_json::Value {
    serde_json::from_str(raw).unwrap_or_else(|_| serde_json::Value::String(raw.to_string()))
}

/// Asks a yes/no question on stdin. Anything but `y`/`yes` declines.
fn confirm(prompt: &str) -> bool {
    print!("{} [y/N] ", prompt);
    let _ = io::stdout().flush();

    let mut answer = String::new();
    if io::stdin().lock().read_line(&mut answer).is_err() {
        return false;
    }
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
