mod app_state;
mod errors;
mod fields;
mod modal;

// Re-export all types from submodules
pub use app_state::*;
pub use errors::*;
pub use fields::*;
pub use modal::*;
