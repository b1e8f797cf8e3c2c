use super::ActionResult;
use crate::state::{AppState, FieldId};

/// Apply a typed value from the edit modal to `field`
pub fn handle_edit_field(state: &mut AppState, field: FieldId, value: &str) -> ActionResult {
    match state.set_field(field, value) {
        Ok(()) => ActionResult::modified(),
        Err(e) => ActionResult::Error(e.to_string()),
    }
}
