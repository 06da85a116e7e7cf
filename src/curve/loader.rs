use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::debug;

use super::model::ReferenceCurve;
use crate::error::{KlamError, Result};

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load the reference curve from a two-column whitespace-delimited table.
///
/// Layout: `wavelength coefficient` per line, no header. Blank lines and
/// lines starting with `#` are ignored. Any other malformed row aborts the
/// load; there is no per-row recovery.
pub fn load_reference(path: &Path) -> Result<ReferenceCurve> {
    let file = File::open(path).map_err(|e| KlamError::io(path, e))?;
    let curve = read_reference(BufReader::new(file)).map_err(|e| match e {
        KlamError::Io { source, .. } => KlamError::io(path, source),
        other => other,
    })?;
    debug!("parsed {} reference rows from {}", curve.len(), path.display());
    Ok(curve)
}

/// Parse a reference table from any buffered reader.
pub fn read_reference<R: BufRead>(reader: R) -> Result<ReferenceCurve> {
    let mut rows = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.map_err(|e| KlamError::io("<reference>", e))?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let (w, k) = parse_row(trimmed, line_no)?;
        rows.push((line_no, w, k));
    }

    ReferenceCurve::from_numbered_rows(rows)
}

// ---------------------------------------------------------------------------
// Row parsing
// ---------------------------------------------------------------------------

fn parse_row(line: &str, line_no: usize) -> Result<(f64, f64)> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != 2 {
        return Err(KlamError::Format {
            line: line_no,
            reason: format!("expected 2 columns, found {}", fields.len()),
        });
    }
    let wavelength = parse_field(fields[0], line_no, "wavelength")?;
    let coefficient = parse_field(fields[1], line_no, "coefficient")?;
    Ok((wavelength, coefficient))
}

fn parse_field(tok: &str, line_no: usize, col: &str) -> Result<f64> {
    match tok.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        Ok(_) => Err(KlamError::Format {
            line: line_no,
            reason: format!("{col} '{tok}' is not finite"),
        }),
        Err(_) => Err(KlamError::Format {
            line: line_no,
            reason: format!("{col} '{tok}' is not a number"),
        }),
    }
}
