use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading, gridding, resampling or writing a curve.
#[derive(Debug, Error)]
pub enum KlamError {
    /// A reference row could not be parsed.
    #[error("line {line}: {reason}")]
    Format { line: usize, reason: String },

    /// Two reference rows share a wavelength, which leaves the interpolant ill-defined.
    #[error("line {line}: duplicate wavelength {wavelength}")]
    DuplicateWavelength { line: usize, wavelength: f64 },

    /// Linear interpolation needs at least two points.
    #[error("reference curve has {points} point(s), at least 2 are required")]
    InsufficientData { points: usize },

    /// Grid parameters of a configuration are unusable.
    #[error("configuration {id}: {reason}")]
    Config { id: String, reason: String },

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl KlamError {
    pub(crate) fn config(id: &str, reason: impl Into<String>) -> Self {
        KlamError::Config {
            id: id.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        KlamError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T, E = KlamError> = std::result::Result<T, E>;
