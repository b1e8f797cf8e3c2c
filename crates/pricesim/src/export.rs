//! Writing the results table to disk or stdout.

use std::io::Write;
use std::path::{Path, PathBuf};

use pricesim_core::{ScenarioTable, to_csv_string, write_csv};

use crate::state::ExportError;
use crate::util::io::atomic_write_bytes;

/// Expand a leading `~/` to the home directory
pub fn expand_path(raw: &str) -> PathBuf {
    match raw.strip_prefix("~/") {
        Some(rest) => dirs::home_dir()
            .map(|home| home.join(rest))
            .unwrap_or_else(|| PathBuf::from(raw)),
        None => PathBuf::from(raw),
    }
}

/// Write `table` as CSV to `path`, replacing any existing file.
///
/// Returns the number of data rows written.
pub fn export_table(table: &ScenarioTable, path: &Path) -> Result<usize, ExportError> {
    if path.as_os_str().is_empty() {
        return Err(ExportError::EmptyPath);
    }

    let missing_parent = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty() && !p.exists());
    if let Some(parent) = missing_parent {
        return Err(ExportError::Io(format!(
            "Directory {} does not exist",
            parent.display()
        )));
    }

    let csv = to_csv_string(table);
    atomic_write_bytes(path, csv.as_bytes())
        .map_err(|e| ExportError::Io(format!("Failed to write {}: {}", path.display(), e)))?;

    tracing::info!(rows = table.len(), path = %path.display(), "Exported CSV");
    Ok(table.len())
}

/// Write `table` as CSV to an arbitrary writer such as stdout.
pub fn export_to_writer<W: Write>(table: &ScenarioTable, writer: W) -> Result<usize, ExportError> {
    write_csv(table, writer).map_err(|e| ExportError::Io(format!("Failed to write CSV: {}", e)))?;
    tracing::info!(rows = table.len(), "Exported CSV to stream");
    Ok(table.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_path() {
        assert_eq!(expand_path("out.csv"), PathBuf::from("out.csv"));
        assert_eq!(expand_path("/tmp/out.csv"), PathBuf::from("/tmp/out.csv"));
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_path("~/out.csv"), home.join("out.csv"));
        }
    }

    #[test]
    fn test_empty_path_is_rejected() {
        let table = pricesim_core::simulate_inputs(&Default::default()).unwrap();
        assert!(matches!(
            export_table(&table, Path::new("")),
            Err(ExportError::EmptyPath)
        ));
    }

    #[test]
    fn test_missing_directory_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let table = pricesim_core::simulate_inputs(&Default::default()).unwrap();
        let path = dir.path().join("missing").join("out.csv");
        assert!(matches!(export_table(&table, &path), Err(ExportError::Io(_))));
    }

    #[test]
    fn test_export_to_writer() {
        let table = pricesim_core::simulate_inputs(&Default::default()).unwrap();
        let mut buf = Vec::new();
        assert_eq!(export_to_writer(&table, &mut buf).unwrap(), 21);
        assert!(String::from_utf8(buf).unwrap().starts_with("Price Change (%)"));
    }
}
