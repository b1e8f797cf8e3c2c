//! The editable input fields and the values they hold.

use pricesim_core::{PriceChangeRange, PricingInputs, SimulationError};

use crate::config::{InputDefaults, InputSteps, RangeBounds};
use crate::util::format::{format_currency, format_units};

use super::InputError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    CurrentSales,
    CurrentUnits,
    Elasticity,
    RangeLow,
    RangeHigh,
}

impl FieldId {
    pub const ALL: [FieldId; 5] = [
        FieldId::CurrentSales,
        FieldId::CurrentUnits,
        FieldId::Elasticity,
        FieldId::RangeLow,
        FieldId::RangeHigh,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FieldId::CurrentSales => "Current Sales ($)",
            FieldId::CurrentUnits => "Current Units Sold",
            FieldId::Elasticity => "Price Elasticity of Demand",
            FieldId::RangeLow => "Price Change From (%)",
            FieldId::RangeHigh => "Price Change To (%)",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            FieldId::CurrentSales => 0,
            FieldId::CurrentUnits => 1,
            FieldId::Elasticity => 2,
            FieldId::RangeLow => 3,
            FieldId::RangeHigh => 4,
        }
    }

    /// Next field, wrapping around
    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous field, wrapping around
    pub fn prev(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    pub fn is_range(&self) -> bool {
        matches!(self, FieldId::RangeLow | FieldId::RangeHigh)
    }
}

/// Current values of the input widgets.
///
/// The range pair always satisfies `range_lo <= range_hi` within the slider
/// bounds; moving one handle past the other drags it along.
#[derive(Debug, Clone, PartialEq)]
pub struct InputValues {
    pub current_sales: f64,
    pub current_units: i64,
    pub elasticity: f64,
    pub range_lo: i32,
    pub range_hi: i32,
}

impl From<&InputDefaults> for InputValues {
    fn from(defaults: &InputDefaults) -> Self {
        Self {
            current_sales: defaults.current_sales,
            current_units: defaults.current_units,
            elasticity: defaults.elasticity,
            range_lo: defaults.range_lo.min(defaults.range_hi),
            range_hi: defaults.range_lo.max(defaults.range_hi),
        }
    }
}

/// Drop float noise left behind by repeated decimal steps (-1.2000000000000002)
fn snap(value: f64) -> f64 {
    (value * 1e9).round() / 1e9
}

fn parse_number(field: FieldId, raw: &str) -> Result<f64, InputError> {
    let cleaned: String = raw
        .trim()
        .chars()
        .filter(|c| !matches!(c, ',' | '$' | '_' | '%'))
        .collect();
    let value: f64 = cleaned.parse().map_err(|_| InputError::Parse {
        field,
        value: raw.trim().to_string(),
    })?;
    if !value.is_finite() {
        return Err(InputError::NonFinite { field });
    }
    Ok(value)
}

fn parse_whole(field: FieldId, raw: &str) -> Result<i64, InputError> {
    let value = parse_number(field, raw)?;
    if value.fract() != 0.0 || value.abs() > i64::MAX as f64 {
        return Err(InputError::Parse {
            field,
            value: raw.trim().to_string(),
        });
    }
    Ok(value as i64)
}

impl InputValues {
    /// Build the core inputs. Fails only if the range pair was corrupted.
    pub fn to_pricing_inputs(&self) -> Result<PricingInputs, SimulationError> {
        let range = PriceChangeRange::new(self.range_lo, self.range_hi)?;
        Ok(PricingInputs::new(
            self.current_sales,
            self.current_units,
            self.elasticity,
            range,
        ))
    }

    /// Raw text used to prefill the edit modal
    pub fn raw_value(&self, field: FieldId) -> String {
        match field {
            FieldId::CurrentSales => format!("{}", self.current_sales),
            FieldId::CurrentUnits => self.current_units.to_string(),
            FieldId::Elasticity => format!("{}", self.elasticity),
            FieldId::RangeLow => self.range_lo.to_string(),
            FieldId::RangeHigh => self.range_hi.to_string(),
        }
    }

    /// Formatted text shown in the input panel
    pub fn display_value(&self, field: FieldId) -> String {
        match field {
            FieldId::CurrentSales => format_currency(self.current_sales),
            FieldId::CurrentUnits => format_units(self.current_units),
            FieldId::Elasticity => format!("{}", self.elasticity),
            FieldId::RangeLow => format!("{}%", self.range_lo),
            FieldId::RangeHigh => format!("{}%", self.range_hi),
        }
    }

    fn set_range_low(&mut self, pct: i32, bounds: &RangeBounds) {
        self.range_lo = bounds.clamp(pct);
        if self.range_hi < self.range_lo {
            self.range_hi = self.range_lo;
        }
    }

    fn set_range_high(&mut self, pct: i32, bounds: &RangeBounds) {
        self.range_hi = bounds.clamp(pct);
        if self.range_lo > self.range_hi {
            self.range_lo = self.range_hi;
        }
    }

    /// Move a field by `direction` steps (negative steps down)
    pub fn step(
        &mut self,
        field: FieldId,
        direction: i32,
        steps: &InputSteps,
        bounds: &RangeBounds,
    ) {
        match field {
            FieldId::CurrentSales => {
                self.current_sales =
                    snap(self.current_sales + f64::from(direction) * steps.current_sales);
            }
            FieldId::CurrentUnits => {
                let delta = i64::from(direction).saturating_mul(steps.current_units);
                self.current_units = self.current_units.saturating_add(delta);
            }
            FieldId::Elasticity => {
                self.elasticity = snap(self.elasticity + f64::from(direction) * steps.elasticity);
            }
            FieldId::RangeLow => {
                let target = self.range_lo.saturating_add(direction.saturating_mul(steps.range));
                self.set_range_low(target, bounds);
            }
            FieldId::RangeHigh => {
                let target = self.range_hi.saturating_add(direction.saturating_mul(steps.range));
                self.set_range_high(target, bounds);
            }
        }
    }

    /// Parse typed text into a field. On error the values are untouched.
    pub fn set_from_str(
        &mut self,
        field: FieldId,
        raw: &str,
        bounds: &RangeBounds,
    ) -> Result<(), InputError> {
        match field {
            FieldId::CurrentSales => self.current_sales = parse_number(field, raw)?,
            FieldId::CurrentUnits => self.current_units = parse_whole(field, raw)?,
            FieldId::Elasticity => self.elasticity = parse_number(field, raw)?,
            FieldId::RangeLow | FieldId::RangeHigh => {
                let pct = parse_whole(field, raw)?;
                if pct < i64::from(bounds.min) || pct > i64::from(bounds.max) {
                    return Err(InputError::OutOfRange {
                        field,
                        value: pct.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32,
                        min: bounds.min,
                        max: bounds.max,
                    });
                }
                if field == FieldId::RangeLow {
                    self.set_range_low(pct as i32, bounds);
                } else {
                    self.set_range_high(pct as i32, bounds);
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values() -> InputValues {
        InputValues::from(&InputDefaults::default())
    }

    #[test]
    fn test_field_cycle() {
        assert_eq!(FieldId::CurrentSales.next(), FieldId::CurrentUnits);
        assert_eq!(FieldId::RangeHigh.next(), FieldId::CurrentSales);
        assert_eq!(FieldId::CurrentSales.prev(), FieldId::RangeHigh);
        assert!(FieldId::RangeLow.is_range());
        assert!(!FieldId::Elasticity.is_range());
    }

    #[test]
    fn test_elasticity_step_has_no_float_noise() {
        let mut v = values();
        v.step(FieldId::Elasticity, 1, &InputSteps::default(), &RangeBounds::default());
        assert_eq!(v.elasticity, -1.2);
        assert_eq!(v.raw_value(FieldId::Elasticity), "-1.2");
    }

    #[test]
    fn test_parse_number_strips_formatting() {
        assert_eq!(parse_number(FieldId::CurrentSales, " $183,000.50 "), Ok(183_000.5));
        assert_eq!(parse_whole(FieldId::CurrentUnits, "8,451"), Ok(8_451));
        assert!(parse_whole(FieldId::CurrentUnits, "12.5").is_err());
        assert_eq!(
            parse_number(FieldId::Elasticity, "inf"),
            Err(InputError::NonFinite {
                field: FieldId::Elasticity
            })
        );
    }

    #[test]
    fn test_display_values() {
        let v = values();
        assert_eq!(v.display_value(FieldId::CurrentSales), "$183,000.00");
        assert_eq!(v.display_value(FieldId::CurrentUnits), "8,451");
        assert_eq!(v.display_value(FieldId::RangeLow), "-10%");
    }
}
