//! Front-end tests driven through the public `App` API
//!
//! Tests are organized by topic:
//! - `input_editing` - Field stepping, typed edits and range dragging
//! - `export` - CSV export through the modal and to disk
//! - `config` - YAML loading, saving and partial files
//! - `cli` - Flag parsing, overrides and headless CSV output
//! - `rendering` - Full-frame rendering on a test backend

mod export;
mod rendering;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::App;

pub(crate) fn press(app: &mut App, code: KeyCode) {
    app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
}

pub(crate) fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

/// Clear the open text modal and type a replacement value
pub(crate) fn replace_text(app: &mut App, text: &str) {
    app.handle_key_event(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL));
    type_text(app, text);
}
