use crate::zones::{ZONE_TO_KEY, unused_count};
use anyhow::{Context, Result};
use log::debug;
use std::io::{self, Write};

pub fn execute() -> Result<()> {
    let stdout = io::stdout();
    print_report(&mut stdout.lock())
}

fn print_report<W: Write>(out: &mut W) -> Result<()> {
    write_report(out).context("Failed to write zone report")?;
    out.flush().context("Failed to flush stdout")?;
    Ok(())
}

pub fn write_report<W: Write>(out: &mut W) -> io::Result<()> {
    debug!("Reporting {} zones", ZONE_TO_KEY.len());

    writeln!(out, "Tuxedo Keyboard Zone Mappings (German QWERTZ Layout):")?;
    writeln!(out, "Note: Y and Z positions are swapped compared to US QWERTY")?;
    writeln!(out)?;

    for entry in ZONE_TO_KEY {
        writeln!(out, "  Zone {}: {}", entry.zone_id, entry.label)?;
    }

    writeln!(out)?;
    writeln!(out, "Total mapped zones: {}", ZONE_TO_KEY.len())?;
    writeln!(out, "Unused zones: {}", unused_count())?;

    Ok(())
}
