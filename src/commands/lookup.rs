use crate::zones::{UNUSED_LABEL, find_label, get_key_label};
use anyhow::{Context, Result};
use log::debug;
use std::io::{self, Write};

pub fn execute(zones: &[i64]) -> Result<()> {
    let stdout = io::stdout();
    print_lookup(&mut stdout.lock(), zones)
}

fn print_lookup<W: Write>(out: &mut W, zones: &[i64]) -> Result<()> {
    write_lookup(out, zones).context("Failed to write zone labels")?;
    out.flush().context("Failed to flush stdout")?;
    Ok(())
}

pub fn write_lookup<W: Write>(out: &mut W, zones: &[i64]) -> io::Result<()> {
    for &zone in zones {
        match find_label(zone) {
            None => debug!("Zone {} is not mapped, using fallback label", zone),
            Some(UNUSED_LABEL) => debug!("Zone {} has no physical key assigned", zone),
            Some(_) => {}
        }
        writeln!(out, "Zone {}: {}", zone, get_key_label(zone))?;
    }
    Ok(())
}
