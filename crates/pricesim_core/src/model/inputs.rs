//! Scalar inputs to the scenario generator

use serde::Serialize;

use crate::error::{Result, SimulationError};

/// Inclusive range of integer percentage price changes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PriceChangeRange {
    lo: i32,
    hi: i32,
}

impl PriceChangeRange {
    /// Slider bounds used by the interactive front end
    pub const SLIDER_MIN: i32 = -30;
    pub const SLIDER_MAX: i32 = 30;

    pub fn new(lo: i32, hi: i32) -> Result<Self> {
        if lo > hi {
            return Err(SimulationError::InvertedRange { lo, hi });
        }
        Ok(Self { lo, hi })
    }

    /// Range holding a single percentage point
    pub fn single(pct: i32) -> Self {
        Self { lo: pct, hi: pct }
    }

    pub fn lo(&self) -> i32 {
        self.lo
    }

    pub fn hi(&self) -> i32 {
        self.hi
    }

    /// Number of integer steps, `hi - lo + 1`
    pub fn len(&self) -> usize {
        (i64::from(self.hi) - i64::from(self.lo) + 1) as usize
    }

    /// Never true; a constructed range holds at least one point
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn contains(&self, pct: i32) -> bool {
        (self.lo..=self.hi).contains(&pct)
    }

    /// Ascending iterator over every percentage point in the range
    pub fn iter(&self) -> std::ops::RangeInclusive<i32> {
        self.lo..=self.hi
    }
}

impl Default for PriceChangeRange {
    fn default() -> Self {
        Self { lo: -10, hi: 10 }
    }
}

impl IntoIterator for PriceChangeRange {
    type Item = i32;
    type IntoIter = std::ops::RangeInclusive<i32>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// The four inputs that fully determine a scenario table
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PricingInputs {
    /// Current sales revenue in dollars
    pub current_sales: f64,
    /// Current unit volume
    pub current_units: i64,
    /// Price elasticity of demand, typically negative
    pub elasticity: f64,
    pub range: PriceChangeRange,
}

impl PricingInputs {
    pub fn new(
        current_sales: f64,
        current_units: i64,
        elasticity: f64,
        range: PriceChangeRange,
    ) -> Self {
        Self {
            current_sales,
            current_units,
            elasticity,
            range,
        }
    }

    /// Average price per unit today. Infinite or NaN when units are zero;
    /// call [`crate::simulation::validate`] first.
    pub fn current_price(&self) -> f64 {
        self.current_sales / self.current_units as f64
    }
}

impl Default for PricingInputs {
    fn default() -> Self {
        Self {
            current_sales: 183_000.0,
            current_units: 8_451,
            elasticity: -1.3,
            range: PriceChangeRange::default(),
        }
    }
}
