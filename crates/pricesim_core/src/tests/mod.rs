//! Tests for the scenario generator and CSV codec
//!
//! Tests are organized by topic:
//! - `properties` - Invariants that hold for every valid input
//! - `example` - The reference scenario with the default inputs
//! - `validation` - Rejected inputs and tolerated oddities
//! - `csv_round_trip` - Decoding exported files back into values

mod validation;
