use super::model::{ReferenceCurve, ResampledCurve};
use crate::error::{KlamError, Result};
use crate::grid::TargetGrid;

/// Piecewise-linear interpolant over a [`ReferenceCurve`].
///
/// Outside the tabulated domain the nearest boundary segment is continued
/// with constant slope; values are never clamped.
#[derive(Debug, Clone, Copy)]
pub struct LinearInterpolant<'a> {
    xp: &'a [f64],
    fp: &'a [f64],
}

impl<'a> LinearInterpolant<'a> {
    pub fn new(curve: &'a ReferenceCurve) -> Result<Self> {
        if curve.len() < 2 {
            return Err(KlamError::InsufficientData {
                points: curve.len(),
            });
        }
        Ok(LinearInterpolant {
            xp: curve.wavelengths(),
            fp: curve.coefficients(),
        })
    }

    /// Evaluate at a single wavelength.
    pub fn eval(&self, x: f64) -> f64 {
        let (xp, fp) = (self.xp, self.fp);
        let n = xp.len();

        // First index with xp[idx] >= x.
        let idx = xp.partition_point(|&v| v < x);
        if idx < n && xp[idx] == x {
            return fp[idx];
        }

        let hi = idx.clamp(1, n - 1);
        let lo = hi - 1;
        let slope = (fp[hi] - fp[lo]) / (xp[hi] - xp[lo]);
        fp[lo] + (x - xp[lo]) * slope
    }

    /// Evaluate on every point of `grid`.
    pub fn resample(&self, grid: &TargetGrid) -> ResampledCurve {
        let wavelengths = grid.points().to_vec();
        let coefficients = wavelengths.iter().map(|&x| self.eval(x)).collect();
        ResampledCurve {
            wavelengths,
            coefficients,
        }
    }
}

/// Build an interpolant over `curve` and evaluate it on `grid`.
pub fn resample(curve: &ReferenceCurve, grid: &TargetGrid) -> Result<ResampledCurve> {
    Ok(LinearInterpolant::new(curve)?.resample(grid))
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::grid::{build_grid, GridSpec};

    fn curve(points: &[(f64, f64)]) -> ReferenceCurve {
        ReferenceCurve::from_points(points.to_vec()).unwrap()
    }

    #[test]
    fn interpolates_between_points() {
        let c = curve(&[(0.0, 0.0), (1.0, 10.0), (2.0, 20.0)]);
        let f = LinearInterpolant::new(&c).unwrap();
        assert_relative_eq!(f.eval(0.5), 5.0);
        assert_relative_eq!(f.eval(1.5), 15.0);
    }

    #[test]
    fn reproduces_reference_points_exactly() {
        let pts = [
            (3000.0, 5.123_456_789),
            (3333.3, 4.9),
            (4100.7, 4.000_000_1),
            (7000.25, 1.7),
            (10900.0, 0.3),
        ];
        let c = curve(&pts);
        let f = LinearInterpolant::new(&c).unwrap();
        for (w, k) in pts {
            assert_eq!(f.eval(w), k);
        }
    }

    #[test]
    fn extrapolates_with_boundary_slope() {
        let c = curve(&[(1.0, 10.0), (2.0, 20.0), (3.0, 25.0), (4.0, 26.0)]);
        let f = LinearInterpolant::new(&c).unwrap();
        // Below: slope of first segment (10 per unit).
        assert_relative_eq!(f.eval(0.0), 0.0);
        assert_relative_eq!(f.eval(-1.5), -15.0);
        // Above: slope of last segment (1 per unit).
        assert_relative_eq!(f.eval(5.0), 27.0);
        assert_relative_eq!(f.eval(14.0), 36.0);
    }

    #[test]
    fn monotonic_tail_keeps_decreasing() {
        let c = curve(&[(3000.0, 5.0), (5000.0, 3.0), (9000.0, 1.0)]);
        let f = LinearInterpolant::new(&c).unwrap();
        let beyond: Vec<f64> = (0..5).map(|i| f.eval(9000.0 + 100.0 * i as f64)).collect();
        for pair in beyond.windows(2) {
            assert_relative_eq!(pair[0] - pair[1], 0.05, epsilon = 1e-12);
        }
    }

    #[test]
    fn fewer_than_two_points_is_insufficient() {
        let empty = curve(&[]);
        assert!(matches!(
            LinearInterpolant::new(&empty),
            Err(KlamError::InsufficientData { points: 0 })
        ));
        let single = curve(&[(5000.0, 1.0)]);
        assert!(matches!(
            LinearInterpolant::new(&single),
            Err(KlamError::InsufficientData { points: 1 })
        ));
    }

    #[test]
    fn resample_is_deterministic() {
        let c = curve(&[(3000.0, 4.0), (6000.0, 2.5), (9000.0, 1.2)]);
        let grid = build_grid("TEST", &GridSpec::new(4000.0, 8000.0, 1.5, 3)).unwrap();
        let a = resample(&c, &grid).unwrap();
        let b = resample(&c, &grid).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), grid.len());
    }
}
