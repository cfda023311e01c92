use std::path::Path;

use anyhow::{bail, Context, Result};

use super::tables::DistributionTables;

/// Environment variable naming a tables file to use instead of the
/// built-in data.
pub const TABLES_ENV_VAR: &str = "REALITY_CHECK_TABLES";

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load distribution tables from a file.  Dispatch by extension.
///
/// Only `.json` is supported: the serialized form of
/// [`DistributionTables`], as written by the `export_tables` binary.
/// The loaded tables are validated before being returned.
pub fn load_tables(path: &Path) -> Result<DistributionTables> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "json" => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading tables file {}", path.display()))?;
            tables_from_json(&text).with_context(|| format!("loading {}", path.display()))
        }
        other => bail!("Unsupported tables file extension: .{other}"),
    }
}

/// Parse and validate tables from JSON text.
///
/// Expected shape (maps keyed by age, race, height label or income):
///
/// ```json
/// {
///   "total_population": 168500000,
///   "age": { "18": 0.0125, ... },
///   "race": { "any": 1.0, "white": 0.594, ... },
///   "height": { "5'0\"": 0.998, ... },
///   "income": { "0": 1.0, "10000": 0.88, ... },
///   "marital_unmarried": { "18": 0.995, ... },
///   "non_obese_rate": 0.57,
///   "employment_rate": 0.71
/// }
/// ```
pub fn tables_from_json(text: &str) -> Result<DistributionTables> {
    let tables: DistributionTables = serde_json::from_str(text).context("parsing tables JSON")?;
    tables.validate().context("validating tables")?;
    Ok(tables)
}

/// Tables selected by [`TABLES_ENV_VAR`], or the built-in tables when the
/// variable is unset or the file cannot be loaded.
pub fn configured_tables() -> DistributionTables {
    match std::env::var_os(TABLES_ENV_VAR) {
        Some(path) => tables_or_default(Path::new(&path)),
        None => DistributionTables::default(),
    }
}

fn tables_or_default(path: &Path) -> DistributionTables {
    match load_tables(path) {
        Ok(tables) => {
            log::info!("Loaded distribution tables from {}", path.display());
            tables
        }
        Err(e) => {
            log::error!("Failed to load tables, using built-in data: {e:#}");
            DistributionTables::default()
        }
    }
}
