//! Input validation
//!
//! Only the preconditions of the formulas are enforced. Inputs that are odd
//! but computable still produce a table.

use crate::error::{InputField, SimulationError};
use crate::model::{PriceChangeRange, PricingInputs};
use crate::simulation::{simulate, simulate_inputs};

#[test]
fn test_zero_units_is_rejected() {
    assert_eq!(
        simulate(183_000.0, 0, -1.3, -10, 10),
        Err(SimulationError::ZeroUnits)
    );
}

#[test]
fn test_inverted_range_is_rejected() {
    assert_eq!(
        simulate(183_000.0, 8_451, -1.3, 10, -10),
        Err(SimulationError::InvertedRange { lo: 10, hi: -10 })
    );
}

#[test]
fn test_non_finite_inputs_are_rejected() {
    let err = simulate(f64::NAN, 8_451, -1.3, -1, 1).unwrap_err();
    assert!(matches!(
        err,
        SimulationError::NonFiniteInput {
            field: InputField::CurrentSales,
            ..
        }
    ));

    let inputs = PricingInputs {
        elasticity: f64::NEG_INFINITY,
        ..PricingInputs::default()
    };
    assert_eq!(
        simulate_inputs(&inputs),
        Err(SimulationError::NonFiniteInput {
            field: InputField::Elasticity,
            value: f64::NEG_INFINITY,
        })
    );
}

#[test]
fn test_extreme_elasticity_goes_negative_without_error() {
    // -5 elasticity at +30% wipes out 150% of demand
    let inputs = PricingInputs {
        elasticity: -5.0,
        range: PriceChangeRange::new(25, 30).unwrap(),
        ..PricingInputs::default()
    };
    let table = simulate_inputs(&inputs).unwrap();
    let row = table.row_at(30).unwrap();

    assert!(row.is_demand_negative());
    assert!(row.new_revenue < 0.0);
    assert!(table.has_negative_quantity());
}

#[test]
fn test_negative_units_and_positive_elasticity_are_computed() {
    let rows = simulate(1_000.0, -10, 0.5, 0, 2).unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].new_quantity, -10);
    // Giffen-style demand: quantity grows with price
    let rows = simulate(1_000.0, 100, 0.5, 0, 10).unwrap();
    assert!(rows[10].new_quantity > rows[0].new_quantity);
}

#[test]
fn test_overflowing_projection_is_rejected() {
    // Finite inputs whose revenue exceeds f64::MAX at +10%
    assert_eq!(
        simulate(1.7e308, 1, 1.0, 10, 10),
        Err(SimulationError::NonFiniteResult { pct: 10 })
    );

    // 1.7e308 * 1.03 * 1.03 is the first row past f64::MAX
    let inputs = PricingInputs {
        current_sales: 1.7e308,
        current_units: 1,
        elasticity: 1.0,
        range: PriceChangeRange::new(-10, 10).unwrap(),
    };
    assert_eq!(
        simulate_inputs(&inputs),
        Err(SimulationError::NonFiniteResult { pct: 3 })
    );
}
