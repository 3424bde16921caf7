use crate::zones::{ZONE_TO_KEY, ZoneEntry};
use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Json,
    Toml,
}

#[derive(Serialize)]
struct ZoneTableDoc<'a> {
    zones: &'a [ZoneEntry],
}

pub fn execute(format: ExportFormat) -> Result<()> {
    println!("{}", render(format)?);
    Ok(())
}

pub fn render(format: ExportFormat) -> Result<String> {
    match format {
        ExportFormat::Json => {
            serde_json::to_string_pretty(ZONE_TO_KEY).context("Failed to serialize zones as JSON")
        }
        ExportFormat::Toml => {
            let doc = ZoneTableDoc { zones: ZONE_TO_KEY };
            toml::to_string_pretty(&doc).context("Failed to serialize zones as TOML")
        }
    }
}
