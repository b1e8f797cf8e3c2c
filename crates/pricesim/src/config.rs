//! Simulator configuration stored in `{data_dir}/config.yaml`.
//!
//! Every field is optional; missing values fall back to the built-in
//! defaults of the calculator.

use std::path::{Path, PathBuf};

use pricesim_core::{DEFAULT_FILE_NAME, PriceChangeRange};
use serde::{Deserialize, Serialize};

use crate::state::ConfigError;
use crate::util::io::atomic_write;

/// Starting value of every input field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputDefaults {
    pub current_sales: f64,
    pub current_units: i64,
    pub elasticity: f64,
    pub range_lo: i32,
    pub range_hi: i32,
}

impl Default for InputDefaults {
    fn default() -> Self {
        Self {
            current_sales: 183_000.0,
            current_units: 8_451,
            elasticity: -1.3,
            range_lo: -10,
            range_hi: 10,
        }
    }
}

/// Increment applied by one step of the left/right keys
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputSteps {
    pub current_sales: f64,
    pub current_units: i64,
    pub elasticity: f64,
    pub range: i32,
}

impl Default for InputSteps {
    fn default() -> Self {
        Self {
            current_sales: 1_000.0,
            current_units: 1,
            elasticity: 0.1,
            range: 1,
        }
    }
}

/// Limits of the two-handle percentage slider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RangeBounds {
    pub min: i32,
    pub max: i32,
}

impl Default for RangeBounds {
    fn default() -> Self {
        Self {
            min: PriceChangeRange::SLIDER_MIN,
            max: PriceChangeRange::SLIDER_MAX,
        }
    }
}

impl RangeBounds {
    pub fn clamp(&self, pct: i32) -> i32 {
        pct.clamp(self.min, self.max)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulatorConfig {
    pub defaults: InputDefaults,
    pub steps: InputSteps,
    pub range_bounds: RangeBounds,
    /// Path offered when exporting results
    pub export_file: String,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            defaults: InputDefaults::default(),
            steps: InputSteps::default(),
            range_bounds: RangeBounds::default(),
            export_file: DEFAULT_FILE_NAME.to_string(),
        }
    }
}

impl SimulatorConfig {
    /// Get the config file path
    pub fn path(data_dir: &Path) -> PathBuf {
        data_dir.join("config.yaml")
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, serde_saphyr::Error> {
        serde_saphyr::from_str(yaml)
    }

    pub fn to_yaml(&self) -> Result<String, serde_saphyr::ser::Error> {
        serde_saphyr::to_string(self)
    }

    /// Load the config file. A missing file yields the defaults.
    pub fn load(data_dir: &Path) -> Result<Self, ConfigError> {
        let path = Self::path(data_dir);
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path).map_err(|e| {
            ConfigError::Io(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let config = Self::from_yaml(&content).map_err(|e| {
            ConfigError::Parse(format!("Failed to parse {}: {}", path.display(), e))
        })?;

        Ok(config.sanitized())
    }

    /// Save the config file atomically, creating the data directory if needed.
    pub fn save(&self, data_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(data_dir)
            .map_err(|e| ConfigError::Io(format!("Failed to create data directory: {}", e)))?;

        let yaml = self
            .to_yaml()
            .map_err(|e| ConfigError::Serialize(format!("Failed to serialize config: {}", e)))?;

        atomic_write(&Self::path(data_dir), &yaml)
            .map_err(|e| ConfigError::Io(format!("Failed to write config: {}", e)))
    }

    /// Repair values a hand-edited file may get wrong: swapped slider
    /// bounds, defaults outside the slider, and non-positive steps.
    pub fn sanitized(mut self) -> Self {
        let defaults = InputDefaults::default();
        let steps = InputSteps::default();

        if self.range_bounds.min > self.range_bounds.max {
            std::mem::swap(&mut self.range_bounds.min, &mut self.range_bounds.max);
        }

        let lo = self.range_bounds.clamp(self.defaults.range_lo);
        let hi = self.range_bounds.clamp(self.defaults.range_hi);
        self.defaults.range_lo = lo.min(hi);
        self.defaults.range_hi = lo.max(hi);

        if !self.defaults.current_sales.is_finite() {
            self.defaults.current_sales = defaults.current_sales;
        }
        if !self.defaults.elasticity.is_finite() {
            self.defaults.elasticity = defaults.elasticity;
        }
        if !(self.steps.current_sales.is_finite() && self.steps.current_sales > 0.0) {
            self.steps.current_sales = steps.current_sales;
        }
        if self.steps.current_units <= 0 {
            self.steps.current_units = steps.current_units;
        }
        if !(self.steps.elasticity.is_finite() && self.steps.elasticity > 0.0) {
            self.steps.elasticity = steps.elasticity;
        }
        if self.steps.range <= 0 {
            self.steps.range = steps.range;
        }
        if self.export_file.trim().is_empty() {
            self.export_file = DEFAULT_FILE_NAME.to_string();
        }

        self
    }
}
