//! CSV export from the running app

use std::fs;

use crossterm::event::KeyCode;
use pricesim_core::{CsvRecord, parse_csv};
use tempfile::tempdir;

use super::{press, replace_text};
use crate::state::ModalState;
use crate::{App, SimulatorConfig, export_table};

#[test]
fn test_export_through_modal() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("results.csv");

    let mut app = App::default();
    press(&mut app, KeyCode::Char('e'));
    replace_text(&mut app, &path.display().to_string());
    press(&mut app, KeyCode::Enter);

    match &app.state().modal {
        ModalState::Message(msg) => {
            assert!(!msg.is_error);
            assert_eq!(msg.detail("Rows"), Some("21"));
            assert_eq!(msg.detail("File"), Some(path.display().to_string().as_str()));
        }
        other => panic!("expected a confirmation, got {other:?}"),
    }

    let records = parse_csv(&fs::read_to_string(&path).unwrap()).unwrap();
    let table = app.state().table().unwrap();
    assert_eq!(records.len(), table.len());
    for (record, row) in records.iter().zip(table.rows()) {
        assert!(record.matches(row), "{record:?} vs {row:?}");
        assert_eq!(*record, CsvRecord::from(row));
    }

    // Enter dismisses the confirmation
    press(&mut app, KeyCode::Enter);
    assert!(matches!(app.state().modal, ModalState::None));
}

#[test]
fn test_export_uses_configured_default_path() {
    let mut config = SimulatorConfig::default();
    config.export_file = "custom/out.csv".to_string();

    let mut app = App::new(config);
    press(&mut app, KeyCode::Char('e'));
    match &app.state().modal {
        ModalState::TextInput(modal) => assert_eq!(modal.value, "custom/out.csv"),
        other => panic!("expected export prompt, got {other:?}"),
    }
}

#[test]
fn test_export_to_missing_directory_fails() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nope").join("results.csv");

    let mut app = App::default();
    press(&mut app, KeyCode::Char('e'));
    replace_text(&mut app, &path.display().to_string());
    press(&mut app, KeyCode::Enter);

    match &app.state().modal {
        ModalState::Message(msg) => {
            assert!(msg.is_error);
            assert!(msg.message.contains("does not exist"), "{}", msg.message);
        }
        other => panic!("expected an error message, got {other:?}"),
    }
    assert!(!path.exists());
}

#[test]
fn test_export_empty_path_fails() {
    let mut app = App::default();
    press(&mut app, KeyCode::Char('e'));
    replace_text(&mut app, "   ");
    press(&mut app, KeyCode::Enter);

    assert_eq!(
        app.state().error_message.as_deref(),
        Some("No file path given")
    );
}

#[test]
fn test_export_overwrites_existing_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("results.csv");
    fs::write(&path, "stale").unwrap();

    let app = App::default();
    let rows = export_table(app.state().table().unwrap(), &path).unwrap();
    assert_eq!(rows, 21);

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("10,23.82,7352,175131.00,-7869.00"), "{content}");
    assert!(!dir.path().join("results.csv.tmp").exists());
}
