use std::path::Path;

use anyhow::{Context, Result};

use klam_resample::curve::model::ResampledCurve;
use klam_resample::output::write_curve;

/// Total-to-selective extinction ratio of the diffuse ISM.
const R_V: f64 = 3.1;

/// Cardelli, Clayton & Mathis (1989) k(λ) = A(λ)/E(B-V), λ in Å.
fn ccm_k(wavelength: f64) -> f64 {
    let x = 1.0e4 / wavelength;
    let (a, b) = if x < 1.1 {
        let p = x.powf(1.61);
        (0.574 * p, -0.527 * p)
    } else {
        let y = x - 1.82;
        let a = [1.0, 0.17699, -0.50447, -0.02427, 0.72085, 0.01979, -0.77530, 0.32999];
        let b = [0.0, 1.41338, 2.28305, 1.07233, -5.38434, -0.62251, 5.30260, -2.09002];
        (poly(&a, y), poly(&b, y))
    };
    R_V * a + b
}

/// Evaluate `c[0] + c[1] y + c[2] y² + ...`.
fn poly(c: &[f64], y: f64) -> f64 {
    c.iter().rev().fold(0.0, |acc, &ci| acc * y + ci)
}

fn main() -> Result<()> {
    // 3000 → 11000 Å, step 10 Å
    let wavelengths: Vec<f64> = (0..=800).map(|i| 3000.0 + i as f64 * 10.0).collect();
    let coefficients = wavelengths.iter().map(|&w| ccm_k(w)).collect();
    let curve = ResampledCurve {
        wavelengths,
        coefficients,
    };

    let path = write_curve(Path::new("."), "klam.dat", &curve).context("writing klam.dat")?;

    println!(
        "Wrote {} reference points (CCM89, R_V = {R_V}) to {}",
        curve.len(),
        path.display()
    );
    Ok(())
}
