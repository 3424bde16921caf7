use anyhow::{Context, Result};
use clap::Parser;
use log::{LevelFilter, warn};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

mod codegen;
mod commands;
mod config;
mod zones;

use commands::Commands;
use config::AppConfig;

#[derive(Parser)]
#[command(name = "zonemap")]
#[command(
    about = "Keyboard backlight zone to key label mapping (German QWERTZ)",
    long_about = None
)]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn main() -> Result<()> {
    let args = Cli::parse();

    let config = AppConfig::load()?;
    let (level, level_error) = match config.level_filter() {
        _ if args.verbose => (LevelFilter::Debug, None),
        Ok(level) => (level, None),
        Err(e) => (LevelFilter::Warn, Some(e)),
    };

    // Logs go to stderr; stdout carries the report and generated code.
    TermLogger::init(level, Config::default(), TerminalMode::Stderr, ColorChoice::Auto)
        .context("Failed to initialize logger")?;

    if let Some(e) = level_error {
        warn!("{}, falling back to warn", e);
    }

    args.command.unwrap_or_default().execute()
}
