use std::collections::BTreeSet;
use std::path::Path;

use anyhow::{bail, Context, Result};

use super::model::InstrumentConfig;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load an instrument table from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.json` – `[{ "id": "...", "min_wavelength": 3300, "max_wavelength": 10100, "step": 0.35, "oversampling": 3 }, ...]`
/// * `.csv`  – header row `id,min_wavelength,max_wavelength,step,oversampling[,pad]`
///
/// `pad` is optional in both formats.
pub fn load_instruments(path: &Path) -> Result<Vec<InstrumentConfig>> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let table = match ext.as_str() {
        "json" => load_json(path)?,
        "csv" => load_csv(path)?,
        other => bail!("Unsupported instrument table extension: .{other}"),
    };

    check_unique_ids(&table)?;
    Ok(table)
}

/// Reject tables where two rows would write the same output file.
pub fn check_unique_ids(table: &[InstrumentConfig]) -> Result<()> {
    let mut seen = BTreeSet::new();
    for cfg in table {
        if !seen.insert(cfg.id.as_str()) {
            bail!("Instrument '{}' appears more than once", cfg.id);
        }
    }
    Ok(())
}

/// Keep only the configurations named in `ids`, in table order.
///
/// An empty `ids` keeps the whole table. Unknown identifiers are an error.
pub fn select(table: Vec<InstrumentConfig>, ids: &[String]) -> Result<Vec<InstrumentConfig>> {
    if ids.is_empty() {
        return Ok(table);
    }
    for id in ids {
        if !table.iter().any(|cfg| &cfg.id == id) {
            bail!("Unknown instrument '{id}'");
        }
    }
    Ok(table
        .into_iter()
        .filter(|cfg| ids.contains(&cfg.id))
        .collect())
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

fn load_json(path: &Path) -> Result<Vec<InstrumentConfig>> {
    let text = std::fs::read_to_string(path).context("reading JSON instrument table")?;
    parse_json(&text)
}

fn parse_json(text: &str) -> Result<Vec<InstrumentConfig>> {
    serde_json::from_str(text).context("parsing JSON instrument table")
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

fn load_csv(path: &Path) -> Result<Vec<InstrumentConfig>> {
    let reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .from_path(path)
        .context("opening CSV instrument table")?;
    parse_csv(reader)
}

/// Errors name the 1-based file line, header and comment lines included.
fn parse_csv<R: std::io::Read>(mut reader: csv::Reader<R>) -> Result<Vec<InstrumentConfig>> {
    reader
        .deserialize::<InstrumentConfig>()
        .map(|record| {
            record.map_err(|e| {
                let location = match e.position() {
                    Some(pos) => format!("CSV line {}", pos.line()),
                    None => "CSV record".to_string(),
                };
                anyhow::Error::new(e).context(location)
            })
        })
        .collect()
}
