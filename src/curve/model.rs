use std::io::Write;

use crate::error::{KlamError, Result};

// ---------------------------------------------------------------------------
// ReferenceCurve – the authoritative tabulated k(λ)
// ---------------------------------------------------------------------------

/// Tabulated extinction curve: wavelength (Å) → extinction coefficient.
///
/// Wavelengths are strictly increasing. The curve is immutable once built and
/// is shared by reference with every resampling call of a run.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceCurve {
    wavelengths: Vec<f64>,
    coefficients: Vec<f64>,
}

impl ReferenceCurve {
    /// Build a curve from `(wavelength, coefficient)` pairs in any order.
    ///
    /// The pairs are sorted by wavelength; a repeated wavelength is rejected
    /// with the 1-based position of its later occurrence.
    pub fn from_points(points: Vec<(f64, f64)>) -> Result<Self> {
        let rows = points
            .into_iter()
            .enumerate()
            .map(|(i, (w, k))| (i + 1, w, k))
            .collect();
        Self::from_numbered_rows(rows)
    }

    /// Sort `(line, wavelength, coefficient)` rows and reject non-finite
    /// values and duplicates.
    pub(crate) fn from_numbered_rows(mut rows: Vec<(usize, f64, f64)>) -> Result<Self> {
        for &(line, w, k) in &rows {
            if !w.is_finite() {
                return Err(KlamError::Format {
                    line,
                    reason: format!("wavelength {w} is not finite"),
                });
            }
            if !k.is_finite() {
                return Err(KlamError::Format {
                    line,
                    reason: format!("coefficient {k} is not finite"),
                });
            }
        }

        rows.sort_by(|a, b| a.1.total_cmp(&b.1));

        for pair in rows.windows(2) {
            let (line_a, w_a, _) = pair[0];
            let (line_b, w_b, _) = pair[1];
            if w_a == w_b {
                return Err(KlamError::DuplicateWavelength {
                    line: line_a.max(line_b),
                    wavelength: w_b,
                });
            }
        }

        let (wavelengths, coefficients) = rows.into_iter().map(|(_, w, k)| (w, k)).unzip();
        Ok(ReferenceCurve {
            wavelengths,
            coefficients,
        })
    }

    pub fn wavelengths(&self) -> &[f64] {
        &self.wavelengths
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Number of tabulated points.
    pub fn len(&self) -> usize {
        self.wavelengths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wavelengths.is_empty()
    }

    /// `(min, max)` wavelength covered by the table, `None` when empty.
    pub fn domain(&self) -> Option<(f64, f64)> {
        Some((*self.wavelengths.first()?, *self.wavelengths.last()?))
    }
}

// ---------------------------------------------------------------------------
// ResampledCurve – k(λ) evaluated on a target grid
// ---------------------------------------------------------------------------

/// Curve evaluated on a target grid, ready to be written out once.
#[derive(Debug, Clone, PartialEq)]
pub struct ResampledCurve {
    pub wavelengths: Vec<f64>,
    pub coefficients: Vec<f64>,
}

impl ResampledCurve {
    pub fn len(&self) -> usize {
        self.wavelengths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wavelengths.is_empty()
    }

    /// Iterate `(wavelength, coefficient)` rows in ascending wavelength order.
    pub fn rows(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.wavelengths
            .iter()
            .copied()
            .zip(self.coefficients.iter().copied())
    }

    /// Write rows as `%.3f %.5f`, no header, one row per line.
    pub fn write_table<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        for (w, k) in self.rows() {
            writeln!(out, "{w:.3} {k:.5}")?;
        }
        Ok(())
    }
}
