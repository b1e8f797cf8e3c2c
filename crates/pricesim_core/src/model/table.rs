//! Ordered scenario rows together with the inputs that produced them

use serde::Serialize;

use super::{PricingInputs, ScenarioRow};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioTable {
    inputs: PricingInputs,
    rows: Vec<ScenarioRow>,
}

impl ScenarioTable {
    pub(crate) fn new(inputs: PricingInputs, rows: Vec<ScenarioRow>) -> Self {
        Self { inputs, rows }
    }

    pub fn inputs(&self) -> &PricingInputs {
        &self.inputs
    }

    pub fn rows(&self) -> &[ScenarioRow] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<ScenarioRow> {
        self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Row for a given percentage change, if it lies inside the range
    pub fn row_at(&self, pct: i32) -> Option<&ScenarioRow> {
        if !self.inputs.range.contains(pct) {
            return None;
        }
        let index = i64::from(pct) - i64::from(self.inputs.range.lo());
        self.rows.get(usize::try_from(index).ok()?)
    }

    /// Scenario with the highest projected revenue. The lowest price change
    /// wins when several rows tie.
    pub fn max_revenue_row(&self) -> Option<&ScenarioRow> {
        self.rows.iter().fold(None, |best, row| match best {
            Some(b) if b.new_revenue >= row.new_revenue => Some(b),
            _ => Some(row),
        })
    }

    /// `(price_change_pct, new_revenue)` points for charting
    pub fn revenue_series(&self) -> Vec<(f64, f64)> {
        self.rows
            .iter()
            .map(|r| (f64::from(r.price_change_pct), r.new_revenue))
            .collect()
    }

    /// `(price_change_pct, revenue_change)` points for charting
    pub fn revenue_change_series(&self) -> Vec<(f64, f64)> {
        self.rows
            .iter()
            .map(|r| (f64::from(r.price_change_pct), r.revenue_change))
            .collect()
    }

    /// Smallest and largest y value across both revenue series
    pub fn y_bounds(&self) -> Option<(f64, f64)> {
        self.rows
            .iter()
            .flat_map(|r| [r.new_revenue, r.revenue_change])
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }

    pub fn has_negative_quantity(&self) -> bool {
        self.rows.iter().any(ScenarioRow::is_demand_negative)
    }
}

impl<'a> IntoIterator for &'a ScenarioTable {
    type Item = &'a ScenarioRow;
    type IntoIter = std::slice::Iter<'a, ScenarioRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PriceChangeRange;
    use crate::simulation::scenario_row;

    #[test]
    fn test_row_at_spans_full_i32_range() {
        let range = PriceChangeRange::new(i32::MIN, i32::MAX).unwrap();
        let inputs = PricingInputs {
            range,
            ..PricingInputs::default()
        };
        let table = ScenarioTable::new(inputs, vec![scenario_row(&inputs, i32::MIN)]);

        assert_eq!(table.row_at(i32::MIN).map(|r| r.price_change_pct), Some(i32::MIN));
        assert!(table.row_at(i32::MAX).is_none());
    }
}
