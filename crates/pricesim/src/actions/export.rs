use super::ActionResult;
use crate::export::{expand_path, export_table};
use crate::state::{AppState, ExportError, MessageModal, ModalState};

/// Write the current table to the path typed in the export modal
pub fn handle_export(state: &AppState, value: &str) -> ActionResult {
    let path_str = value.trim();
    if path_str.is_empty() {
        return ActionResult::Error(ExportError::EmptyPath.to_string());
    }

    let table = match &state.table {
        Ok(table) => table,
        Err(e) => return ActionResult::Error(ExportError::NoResults(e.to_string()).to_string()),
    };

    let path = expand_path(path_str);
    match export_table(table, &path) {
        Ok(rows) => ActionResult::modal(ModalState::Message(
            MessageModal::info("Exported", "Scenario table written as CSV.")
                .with_detail("File", path.display())
                .with_detail("Rows", rows),
        )),
        Err(e) => {
            tracing::warn!("Export to {} failed: {}", path.display(), e);
            ActionResult::modal(ModalState::Message(MessageModal::error(
                "Export Failed",
                &e.to_string(),
            )))
        }
    }
}
