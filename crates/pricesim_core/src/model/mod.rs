//! Data model for pricing scenarios
//!
//! - `inputs` - The four scalar inputs and the percentage range
//! - `scenario` - One projected outcome per price change
//! - `table` - The ordered outcome sequence and queries over it

mod inputs;
mod scenario;
mod table;

pub use inputs::{PriceChangeRange, PricingInputs};
pub use scenario::ScenarioRow;
pub use table::ScenarioTable;
