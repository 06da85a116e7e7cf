use std::path::{Path, PathBuf};

use log::{debug, error, info};

use crate::curve::interp::LinearInterpolant;
use crate::curve::loader::load_reference;
use crate::curve::model::ReferenceCurve;
use crate::error::{KlamError, Result};
use crate::grid::build_grid;
use crate::instrument::InstrumentConfig;
use crate::output::write_curve;

// ---------------------------------------------------------------------------
// Per-configuration result
// ---------------------------------------------------------------------------

/// A table that was written successfully.
#[derive(Debug, Clone, PartialEq)]
pub struct Written {
    pub path: PathBuf,
    pub rows: usize,
}

/// What happened to one configuration of a batch.
#[derive(Debug)]
pub struct Outcome {
    pub id: String,
    pub result: Result<Written>,
}

/// Outcomes of a batch run, in table order.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub outcomes: Vec<Outcome>,
}

impl BatchReport {
    pub fn written(&self) -> impl Iterator<Item = (&str, &Written)> {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().ok().map(|w| (o.id.as_str(), w)))
    }

    pub fn failures(&self) -> impl Iterator<Item = (&str, &KlamError)> {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().err().map(|e| (o.id.as_str(), e)))
    }

    pub fn is_success(&self) -> bool {
        self.failures().next().is_none()
    }
}

// ---------------------------------------------------------------------------
// Pipeline
// ---------------------------------------------------------------------------

/// Grid, evaluate and write one configuration.
pub fn process(
    config: &InstrumentConfig,
    interp: &LinearInterpolant<'_>,
    domain: (f64, f64),
    out_dir: &Path,
) -> Result<Written> {
    let grid = build_grid(&config.id, &config.grid_spec())?;

    if let (Some(first), Some(last)) = (grid.first(), grid.last()) {
        if first < domain.0 || last > domain.1 {
            debug!(
                "{}: grid [{first:.3}, {last:.3}] extends past reference domain [{:.3}, {:.3}]",
                config.id, domain.0, domain.1
            );
        }
    }

    let resampled = interp.resample(&grid);
    let path = write_curve(out_dir, &config.output_file_name(), &resampled)?;
    Ok(Written {
        path,
        rows: resampled.len(),
    })
}

/// Resample `curve` for every configuration in `configs`.
///
/// The interpolant is built once and shared. A curve with fewer than two
/// points fails the whole batch; a bad configuration only fails itself.
pub fn run_batch(
    curve: &ReferenceCurve,
    configs: &[InstrumentConfig],
    out_dir: &Path,
) -> Result<BatchReport> {
    let interp = LinearInterpolant::new(curve)?;
    let domain = curve.domain().ok_or(KlamError::InsufficientData { points: 0 })?;

    let mut report = BatchReport::default();
    for config in configs {
        let result = process(config, &interp, domain, out_dir);
        match &result {
            Ok(w) => info!("{}: wrote {} rows to {}", config.id, w.rows, w.path.display()),
            Err(e) => error!("{}: skipped: {e}", config.id),
        }
        report.outcomes.push(Outcome {
            id: config.id.clone(),
            result,
        });
    }
    Ok(report)
}

/// Load the reference table at `reference`, then resample it for `configs`.
///
/// The reference is fully parsed and validated before `out_dir` is created,
/// so a bad reference leaves the filesystem untouched.
pub fn run_from_file(
    reference: &Path,
    configs: &[InstrumentConfig],
    out_dir: &Path,
) -> Result<BatchReport> {
    let curve = load_reference(reference)?;
    if let Some((lo, hi)) = curve.domain() {
        info!(
            "loaded {} reference points spanning {lo:.3}..{hi:.3} from {}",
            curve.len(),
            reference.display()
        );
    }

    std::fs::create_dir_all(out_dir).map_err(|e| KlamError::io(out_dir, e))?;
    run_batch(&curve, configs, out_dir)
}
