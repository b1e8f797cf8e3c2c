//! Scenario generation
//!
//! Every row follows the same closed-form projection:
//!
//! - New Price = Current Price × (1 + % Price Change)
//! - Quantity Change % = Elasticity × % Price Change
//! - New Quantity = Current Quantity × (1 + Quantity Change %)
//! - New Revenue = New Price × New Quantity
//!
//! The table is rebuilt from scratch on every call; nothing is cached.

use crate::error::{InputField, Result, SimulationError};
use crate::model::{PriceChangeRange, PricingInputs, ScenarioRow, ScenarioTable};

/// Check the preconditions of the projection formulas.
///
/// Negative units, positive elasticity and ranges that push demand below zero
/// are accepted; they produce odd but well-defined numbers.
pub fn validate(inputs: &PricingInputs) -> Result<()> {
    if !inputs.current_sales.is_finite() {
        return Err(SimulationError::NonFiniteInput {
            field: InputField::CurrentSales,
            value: inputs.current_sales,
        });
    }
    if !inputs.elasticity.is_finite() {
        return Err(SimulationError::NonFiniteInput {
            field: InputField::Elasticity,
            value: inputs.elasticity,
        });
    }
    if inputs.current_units == 0 {
        return Err(SimulationError::ZeroUnits);
    }
    Ok(())
}

/// Project a single percentage price change.
pub fn scenario_row(inputs: &PricingInputs, pct: i32) -> ScenarioRow {
    let price_change = f64::from(pct) / 100.0;
    let quantity_change_pct = inputs.elasticity * price_change;

    let new_price = inputs.current_price() * (1.0 + price_change);
    let new_quantity = inputs.current_units as f64 * (1.0 + quantity_change_pct);
    // sales * (1 + p) * (1 + e*p) equals new_price * new_quantity and is exact at p = 0
    let new_revenue = inputs.current_sales * (1.0 + price_change) * (1.0 + quantity_change_pct);

    ScenarioRow {
        price_change_pct: pct,
        new_price,
        quantity_change_pct,
        new_quantity: new_quantity.round_ties_even() as i64,
        new_revenue,
        revenue_change: new_revenue - inputs.current_sales,
    }
}

/// Build the full scenario table for a set of inputs.
///
/// Fails when any row overflows, since such a table cannot be exported.
pub fn simulate_inputs(inputs: &PricingInputs) -> Result<ScenarioTable> {
    validate(inputs)?;

    let rows = inputs
        .range
        .iter()
        .map(|pct| {
            let row = scenario_row(inputs, pct);
            if row.is_finite() {
                Ok(row)
            } else {
                Err(SimulationError::NonFiniteResult { pct })
            }
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(ScenarioTable::new(*inputs, rows))
}

/// Generate one row per integer percentage point in `[pct_lo, pct_hi]`,
/// ascending.
pub fn simulate(
    current_sales: f64,
    current_units: i64,
    elasticity: f64,
    pct_lo: i32,
    pct_hi: i32,
) -> Result<Vec<ScenarioRow>> {
    let range = PriceChangeRange::new(pct_lo, pct_hi)?;
    let inputs = PricingInputs::new(current_sales, current_units, elasticity, range);
    simulate_inputs(&inputs).map(ScenarioTable::into_rows)
}
