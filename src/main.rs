use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser, ValueHint};
use log::info;

use klam_resample::batch::run_from_file;
use klam_resample::instrument::loader::{load_instruments, select};
use klam_resample::instrument::builtin_instruments;

#[derive(Parser, Debug)]
#[command(author, version, about = "Resample an extinction curve onto instrument grids", long_about = None)]
struct Cli {
    /// Two-column reference table (wavelength, coefficient)
    #[arg(default_value = "klam.dat", value_hint = ValueHint::FilePath)]
    reference: PathBuf,

    /// Directory receiving the `<ID>_KLAM.dat` tables
    #[arg(short, long, default_value = ".", value_hint = ValueHint::DirPath)]
    output_dir: PathBuf,

    /// Instrument table (.json or .csv) replacing the built-in one
    #[arg(long, value_hint = ValueHint::FilePath)]
    instruments: Option<PathBuf>,

    /// Only process this instrument (repeatable)
    #[arg(long = "only", value_name = "ID")]
    only: Vec<String>,

    /// Print the active instrument table and exit
    #[arg(long, action = ArgAction::SetTrue)]
    list: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let table = match &cli.instruments {
        Some(path) => load_instruments(path)
            .with_context(|| format!("loading instrument table {}", path.display()))?,
        None => builtin_instruments(),
    };
    let configs = select(table, &cli.only)?;

    if cli.list {
        for cfg in &configs {
            println!("{cfg}");
        }
        return Ok(());
    }

    let report = run_from_file(&cli.reference, &configs, &cli.output_dir)
        .with_context(|| format!("resampling {}", cli.reference.display()))?;

    let n_written = report.written().count();
    let failed: Vec<&str> = report.failures().map(|(id, _)| id).collect();
    info!("{n_written} of {} configurations written", configs.len());

    if !failed.is_empty() {
        bail!("{} configuration(s) failed: {}", failed.len(), failed.join(", "));
    }
    Ok(())
}
