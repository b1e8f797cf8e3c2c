use serde::{Deserialize, Serialize};

/// Projected outcome of a single percentage price change.
///
/// Monetary fields keep full precision; rounding to cents is a presentation
/// concern handled by the CSV codec and the front end.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioRow {
    pub price_change_pct: i32,
    pub new_price: f64,
    /// Fractional change in quantity demanded, `elasticity * pct / 100`
    pub quantity_change_pct: f64,
    /// Projected units, rounded to the nearest whole unit
    pub new_quantity: i64,
    /// Revenue from the unrounded projected quantity
    pub new_revenue: f64,
    pub revenue_change: f64,
}

impl ScenarioRow {
    /// True when the elasticity drives projected demand below zero
    pub fn is_demand_negative(&self) -> bool {
        self.new_quantity < 0
    }

    /// False when any monetary field overflowed
    pub fn is_finite(&self) -> bool {
        self.new_price.is_finite()
            && self.new_revenue.is_finite()
            && self.revenue_change.is_finite()
    }

    /// Revenue change as a fraction of current sales
    pub fn revenue_change_ratio(&self) -> f64 {
        let current = self.new_revenue - self.revenue_change;
        if current == 0.0 {
            0.0
        } else {
            self.revenue_change / current
        }
    }
}
