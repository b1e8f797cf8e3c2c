//! Handlers for confirmed modal values.

mod export;
mod input;

pub use export::*;
pub use input::*;

use crate::state::ModalState;

/// Result of an action handler
pub enum ActionResult {
    /// Action completed, set modal to this state (None closes the modal)
    Done(Option<ModalState>),
    /// Inputs changed and the table was rebuilt
    Modified(Option<ModalState>),
    /// Action failed with an error message
    Error(String),
}

impl ActionResult {
    /// Create a result that shows a new modal
    pub fn modal(state: ModalState) -> Self {
        ActionResult::Done(Some(state))
    }

    /// Create a result that closes the modal after changing inputs
    pub fn modified() -> Self {
        ActionResult::Modified(None)
    }
}
