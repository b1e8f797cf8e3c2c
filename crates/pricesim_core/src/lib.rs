//! Pricing scenario simulation library
//!
//! Models how revenue responds to a hypothetical price change under a
//! constant price-elasticity-of-demand assumption. It provides:
//! - Validated pricing inputs and an inclusive percentage range
//! - A pure scenario generator producing one row per percentage point
//! - Table queries for charting and picking the revenue-maximising price
//! - CSV encoding and decoding of the results
//!
//! # Example
//!
//! ```
//! use pricesim_core::simulate;
//!
//! let rows = simulate(183_000.0, 8_451, -1.3, -10, 10).unwrap();
//! assert_eq!(rows.len(), 21);
//! assert_eq!(rows[10].price_change_pct, 0);
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod error;
pub mod export;
pub mod simulation;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use error::{CsvError, InputField, SimulationError};
pub use export::{CSV_HEADER, CsvRecord, DEFAULT_FILE_NAME, parse_csv, to_csv_string, write_csv};
pub use model::{PriceChangeRange, PricingInputs, ScenarioRow, ScenarioTable};
pub use simulation::{scenario_row, simulate, simulate_inputs, validate};
