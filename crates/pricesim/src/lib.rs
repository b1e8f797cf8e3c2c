//! Terminal front end for the pricing scenario simulator
//!
//! Wraps [`pricesim_core`] in a ratatui application:
//! - Input panel with stepping, typed edits and a two-handle range slider
//! - Results table and revenue chart that refresh on every change
//! - CSV export through an atomic file write
//! - YAML configuration and file logging under the data directory
//! - Command-line overrides and a headless CSV mode

// ============================================================================
// Application
// ============================================================================

pub mod actions;
pub mod app;
pub mod components;
pub mod modals;
pub mod screens;
pub mod state;

// ============================================================================
// Support modules
// ============================================================================

pub mod cli;
pub mod config;
pub mod export;
pub mod logging;
pub mod util;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use app::App;
pub use config::SimulatorConfig;
pub use export::{export_table, export_to_writer};
pub use logging::init_logging;
