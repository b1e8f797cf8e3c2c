//! Command-line arguments, config resolution and the headless `--csv` mode

use std::io::Write;
use std::path::{Path, PathBuf};

use clap::Parser;
use color_eyre::eyre::{bail, eyre};
use pricesim_core::simulate_inputs;

use crate::config::SimulatorConfig;
use crate::export::{expand_path, export_table, export_to_writer};
use crate::state::InputValues;

#[derive(Parser, Debug)]
#[command(name = "pricesim")]
#[command(about = "A terminal pricing scenario simulator with demand elasticity")]
#[command(allow_negative_numbers = true)]
pub struct Args {
    /// Path to the data directory (default: ~/.pricesim/)
    #[arg(short, long)]
    pub data_dir: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    pub log_level: String,

    /// Current sales revenue in dollars
    #[arg(long)]
    pub sales: Option<f64>,

    /// Current units sold
    #[arg(long)]
    pub units: Option<i64>,

    /// Price elasticity of demand
    #[arg(long)]
    pub elasticity: Option<f64>,

    /// Lowest price change in percent
    #[arg(long)]
    pub range_lo: Option<i32>,

    /// Highest price change in percent
    #[arg(long)]
    pub range_hi: Option<i32>,

    /// Write the results as CSV to FILE ("-" for stdout) and exit
    #[arg(long, value_name = "FILE")]
    pub csv: Option<String>,
}

impl Args {
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(default_data_dir)
    }
}

pub fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".pricesim")
}

/// Load the config file, seeding it on first run. Returns a notice for the
/// status bar when the file could not be used.
pub fn load_config(data_dir: &Path) -> (SimulatorConfig, Option<String>) {
    let path = SimulatorConfig::path(data_dir);

    if !path.exists() {
        let config = SimulatorConfig::default();
        match config.save(data_dir) {
            Ok(()) => tracing::info!(path = %path.display(), "Wrote default config"),
            Err(e) => tracing::warn!("Could not write default config: {}", e),
        }
        return (config, None);
    }

    match SimulatorConfig::load(data_dir) {
        Ok(config) => {
            tracing::info!(path = %path.display(), "Loaded config");
            (config, None)
        }
        Err(e) => {
            tracing::warn!("{}; using built-in defaults", e);
            let notice = format!("Ignoring {}: {}", path.display(), e);
            (SimulatorConfig::default(), Some(notice))
        }
    }
}

/// Command-line values win over the config file
pub fn apply_overrides(config: &mut SimulatorConfig, args: &Args) -> color_eyre::Result<()> {
    let bounds = config.range_bounds;
    for (flag, value) in [("--range-lo", args.range_lo), ("--range-hi", args.range_hi)] {
        if let Some(pct) = value.filter(|p| !(bounds.min..=bounds.max).contains(p)) {
            bail!(
                "{flag} {pct} is outside the slider range {}..={}",
                bounds.min,
                bounds.max
            );
        }
    }

    let defaults = &mut config.defaults;
    defaults.current_sales = args.sales.unwrap_or(defaults.current_sales);
    defaults.current_units = args.units.unwrap_or(defaults.current_units);
    defaults.elasticity = args.elasticity.unwrap_or(defaults.elasticity);
    defaults.range_lo = args.range_lo.unwrap_or(defaults.range_lo);
    defaults.range_hi = args.range_hi.unwrap_or(defaults.range_hi);

    if defaults.range_lo > defaults.range_hi {
        bail!(
            "price change range is inverted: {} > {}",
            defaults.range_lo,
            defaults.range_hi
        );
    }
    if !(defaults.current_sales.is_finite() && defaults.elasticity.is_finite()) {
        bail!("sales and elasticity must be finite numbers");
    }

    Ok(())
}

/// Destination of `--csv`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CsvTarget {
    Stdout,
    File(PathBuf),
}

impl CsvTarget {
    /// `-` means stdout; anything else is a path, with `~/` expanded
    pub fn parse(raw: &str) -> Self {
        if raw == "-" {
            CsvTarget::Stdout
        } else {
            CsvTarget::File(expand_path(raw))
        }
    }
}

/// Compute the table once and write it without starting the terminal UI.
///
/// `stdout` receives the document when the target is [`CsvTarget::Stdout`].
/// Returns the number of rows written.
pub fn run_headless<W: Write>(
    config: &SimulatorConfig,
    target: &CsvTarget,
    stdout: W,
) -> color_eyre::Result<usize> {
    let inputs = InputValues::from(&config.defaults).to_pricing_inputs()?;
    let table = simulate_inputs(&inputs).map_err(|e| eyre!("cannot simulate: {e}"))?;

    let rows = match target {
        CsvTarget::Stdout => export_to_writer(&table, stdout)?,
        CsvTarget::File(path) => export_table(&table, path)?,
    };
    Ok(rows)
}
