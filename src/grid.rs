use serde::{Deserialize, Serialize};

use crate::error::{KlamError, Result};

/// Wavelength margin (Å) added below the nominal minimum and above the
/// nominal maximum of every instrument grid.
pub const GRID_PADDING: f64 = 100.0;

/// Largest grid a single configuration may request.
pub const MAX_GRID_POINTS: usize = 10_000_000;

fn default_pad() -> f64 {
    GRID_PADDING
}

// ---------------------------------------------------------------------------
// GridSpec – parameters of one target sampling
// ---------------------------------------------------------------------------

/// Target sampling `[min - pad, max + step + pad)` at interval `step / oversampling`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridSpec {
    pub min_wavelength: f64,
    pub max_wavelength: f64,
    /// Native pixel step of the instrument (Å).
    pub step: f64,
    /// Divisor applied to `step`; 3 for gratings, 1 for echelles.
    pub oversampling: u32,
    #[serde(default = "default_pad")]
    pub pad: f64,
}

impl GridSpec {
    /// Spec with the standard [`GRID_PADDING`].
    pub fn new(min_wavelength: f64, max_wavelength: f64, step: f64, oversampling: u32) -> Self {
        GridSpec {
            min_wavelength,
            max_wavelength,
            step,
            oversampling,
            pad: GRID_PADDING,
        }
    }

    /// Evaluation interval, `step / oversampling`.
    pub fn spacing(&self) -> f64 {
        self.step / f64::from(self.oversampling)
    }

    /// First grid point.
    pub fn start(&self) -> f64 {
        self.min_wavelength - self.pad
    }

    /// Exclusive upper bound of the grid.
    pub fn stop(&self) -> f64 {
        self.max_wavelength + self.step + self.pad
    }

    /// Number of grid points, before any size check.
    pub fn point_count(&self) -> f64 {
        ((self.stop() - self.start()) / self.spacing()).ceil()
    }

    /// Reject parameters that cannot produce a strictly increasing grid.
    pub fn validate(&self, id: &str) -> Result<()> {
        let values = [
            ("min_wavelength", self.min_wavelength),
            ("max_wavelength", self.max_wavelength),
            ("step", self.step),
            ("pad", self.pad),
        ];
        for (name, v) in values {
            if !v.is_finite() {
                return Err(KlamError::config(id, format!("{name} is not finite ({v})")));
            }
        }
        if self.step <= 0.0 {
            return Err(KlamError::config(
                id,
                format!("step must be positive, got {}", self.step),
            ));
        }
        if self.oversampling == 0 {
            return Err(KlamError::config(id, "oversampling factor must be at least 1"));
        }
        if self.min_wavelength >= self.max_wavelength {
            return Err(KlamError::config(
                id,
                format!(
                    "min_wavelength ({}) must be below max_wavelength ({})",
                    self.min_wavelength, self.max_wavelength
                ),
            ));
        }
        if self.pad < 0.0 {
            return Err(KlamError::config(
                id,
                format!("pad must not be negative, got {}", self.pad),
            ));
        }
        let count = self.point_count();
        if !count.is_finite() || count > MAX_GRID_POINTS as f64 {
            return Err(KlamError::config(
                id,
                format!("grid of {count} points exceeds the limit of {MAX_GRID_POINTS}"),
            ));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// TargetGrid
// ---------------------------------------------------------------------------

/// Strictly increasing wavelengths generated from a [`GridSpec`].
#[derive(Debug, Clone, PartialEq)]
pub struct TargetGrid {
    points: Vec<f64>,
}

impl TargetGrid {
    pub fn points(&self) -> &[f64] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<f64> {
        self.points.first().copied()
    }

    pub fn last(&self) -> Option<f64> {
        self.points.last().copied()
    }
}

/// Generate the target grid for configuration `id`.
///
/// Points are `start + i * dx` for `i in 0..ceil((stop - start) / dx)`,
/// so the spacing does not accumulate rounding error.
pub fn build_grid(id: &str, spec: &GridSpec) -> Result<TargetGrid> {
    spec.validate(id)?;

    let start = spec.start();
    let dx = spec.spacing();
    let count = spec.point_count() as usize;

    let points = (0..count).map(|i| start + i as f64 * dx).collect();
    Ok(TargetGrid { points })
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn mage_grid_length_and_start() {
        let spec = GridSpec::new(3300.0, 10100.0, 0.35, 3);
        let grid = build_grid("MAGE", &spec).unwrap();
        let expected = ((10100.0_f64 + 0.35 + 100.0 - (3300.0 - 100.0)) / (0.35 / 3.0)).ceil();
        assert_eq!(grid.len(), expected as usize);
        assert_eq!(grid.first(), Some(3200.0));
        assert!(grid.last().unwrap() < 10100.0 + 0.35 + 100.0);
    }

    #[test]
    fn grid_is_strictly_increasing_with_constant_spacing() {
        let spec = GridSpec::new(4600.0, 9000.0, 2.63, 3);
        let grid = build_grid("IMACS", &spec).unwrap();
        let dx = 2.63 / 3.0;
        for pair in grid.points().windows(2) {
            assert!(pair[1] > pair[0]);
            assert_relative_eq!(pair[1] - pair[0], dx, epsilon = 1e-9);
        }
    }

    #[test]
    fn echelle_grid_uses_native_step() {
        let spec = GridSpec::new(3350.0, 5000.0, 0.02, 1);
        assert_eq!(spec.spacing(), 0.02);
        let grid = build_grid("MIKE", &spec).unwrap();
        let expected = ((5000.0_f64 + 0.02 + 100.0 - (3350.0 - 100.0)) / 0.02).ceil();
        assert_eq!(grid.len(), expected as usize);
    }

    #[test]
    fn grid_is_deterministic() {
        let spec = GridSpec::new(3650.0, 10100.0, 1.89, 3);
        assert_eq!(build_grid("A", &spec).unwrap(), build_grid("A", &spec).unwrap());
    }

    #[test]
    fn non_positive_step_is_config_error() {
        for step in [0.0, -0.5, f64::NAN] {
            let spec = GridSpec::new(3000.0, 4000.0, step, 3);
            let err = build_grid("BAD", &spec).unwrap_err();
            assert!(matches!(err, KlamError::Config { ref id, .. } if id == "BAD"), "{err}");
        }
    }

    #[test]
    fn oversized_grid_is_config_error() {
        for step in [1e-300, 5e-324, 1e-4] {
            let spec = GridSpec::new(3000.0, 4000.0, step, 1);
            let err = build_grid("TINY", &spec).unwrap_err();
            assert!(matches!(err, KlamError::Config { ref id, .. } if id == "TINY"), "{err}");
            assert!(err.to_string().contains("limit"));
        }
    }

    #[test]
    fn finest_builtin_grid_fits_under_limit() {
        let spec = GridSpec::new(3350.0, 5000.0, 0.02, 1);
        assert!(spec.point_count() < MAX_GRID_POINTS as f64);
    }

    #[test]
    fn inverted_range_is_config_error() {
        let spec = GridSpec::new(5000.0, 5000.0, 1.0, 3);
        let err = build_grid("FLAT", &spec).unwrap_err();
        assert!(err.to_string().contains("FLAT"));
        assert!(err.to_string().contains("min_wavelength"));
    }

    #[test]
    fn zero_oversampling_is_config_error() {
        let spec = GridSpec::new(3000.0, 4000.0, 1.0, 0);
        assert!(matches!(build_grid("K0", &spec), Err(KlamError::Config { .. })));
    }

    #[test]
    fn pad_defaults_when_deserialized() {
        let spec: GridSpec = serde_json::from_str(
            r#"{"min_wavelength": 3000, "max_wavelength": 4000, "step": 1.0, "oversampling": 3}"#,
        )
        .unwrap();
        assert_eq!(spec.pad, GRID_PADDING);
    }
}
