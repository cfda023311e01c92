//! Write the built-in distribution tables as JSON.
//!
//! Usage: `export_tables [PATH]`. Without a path the JSON goes to stdout.
//! Edit the output and point `REALITY_CHECK_TABLES` at it (or use
//! File → Load tables…) to run the calculator on different data.

use std::io::Write;

use anyhow::{Context, Result};
use reality_check::data::tables::DistributionTables;

fn main() -> Result<()> {
    env_logger::init();

    let tables = DistributionTables::default();
    let json = serde_json::to_string_pretty(&tables).context("serializing tables")?;

    match std::env::args().nth(1) {
        Some(path) => {
            std::fs::write(&path, json).with_context(|| format!("writing {path}"))?;
            log::info!("Wrote distribution tables to {path}");
            eprintln!("Wrote distribution tables to {path}");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{json}").context("writing to stdout")?;
        }
    }

    Ok(())
}
