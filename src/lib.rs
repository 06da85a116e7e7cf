//! Resample a tabulated extinction curve k(λ) onto instrument wavelength grids.
//!
//! The reference curve is loaded once, a piecewise-linear interpolant is
//! built over it, and every instrument configuration is evaluated on its own
//! padded, oversampled grid and written as `<ID>_KLAM.dat`.
//!
//! ```no_run
//! use std::path::Path;
//! use klam_resample::{batch, curve, instrument};
//!
//! let curve = curve::loader::load_reference(Path::new("klam.dat"))?;
//! let report = batch::run_batch(&curve, &instrument::builtin_instruments(), Path::new("."))?;
//! assert!(report.is_success());
//! # Ok::<(), klam_resample::KlamError>(())
//! ```

pub mod batch;
pub mod curve;
pub mod error;
pub mod grid;
pub mod instrument;
pub mod output;

pub use error::KlamError;
