/// Instrument configurations: the data table that drives a batch run.
///
/// The built-in table reproduces the Magellan set; `loader` reads a
/// replacement table from `.json` or `.csv`.

pub mod loader;
pub mod model;
pub mod table;

pub use model::InstrumentConfig;
pub use table::builtin_instruments;
