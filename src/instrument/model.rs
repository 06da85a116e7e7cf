use std::fmt;

use serde::{Deserialize, Serialize};

use crate::grid::{GridSpec, GRID_PADDING};

fn default_pad() -> f64 {
    GRID_PADDING
}

/// One row of the instrument table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstrumentConfig {
    /// Identifier used to name the output file, e.g. `MAGELLAN2_MIKE_RED`.
    pub id: String,
    pub min_wavelength: f64,
    pub max_wavelength: f64,
    pub step: f64,
    pub oversampling: u32,
    #[serde(default = "default_pad")]
    pub pad: f64,
}

impl InstrumentConfig {
    pub fn new(
        id: &str,
        min_wavelength: f64,
        max_wavelength: f64,
        step: f64,
        oversampling: u32,
    ) -> Self {
        InstrumentConfig {
            id: id.to_string(),
            min_wavelength,
            max_wavelength,
            step,
            oversampling,
            pad: GRID_PADDING,
        }
    }

    pub fn grid_spec(&self) -> GridSpec {
        GridSpec {
            min_wavelength: self.min_wavelength,
            max_wavelength: self.max_wavelength,
            step: self.step,
            oversampling: self.oversampling,
            pad: self.pad,
        }
    }

    /// Output file name, `<ID>_KLAM.dat`.
    pub fn output_file_name(&self) -> String {
        format!("{}_KLAM.dat", self.id)
    }
}

impl fmt::Display for InstrumentConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<32} {:>8.1} {:>8.1} {:>7.3} /{}",
            self.id, self.min_wavelength, self.max_wavelength, self.step, self.oversampling
        )
    }
}
