use pricesim_core::{ScenarioTable, SimulationError, simulate_inputs};

use crate::config::SimulatorConfig;

use super::{FieldId, InputError, InputValues, ModalState};

#[derive(Debug, Default)]
pub struct ResultsState {
    pub scroll_offset: usize,
}

#[derive(Debug)]
pub struct AppState {
    pub config: SimulatorConfig,
    pub inputs: InputValues,
    pub focused_field: FieldId,
    /// Regenerated from `inputs` after every change
    pub table: Result<ScenarioTable, SimulationError>,
    pub results_state: ResultsState,
    pub modal: ModalState,
    pub error_message: Option<String>,
    pub status_message: Option<String>,
    pub exit: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(SimulatorConfig::default())
    }
}

impl AppState {
    pub fn new(config: SimulatorConfig) -> Self {
        let inputs = InputValues::from(&config.defaults);
        let mut state = Self {
            config,
            inputs,
            focused_field: FieldId::CurrentSales,
            table: Err(SimulationError::ZeroUnits),
            results_state: ResultsState::default(),
            modal: ModalState::None,
            error_message: None,
            status_message: None,
            exit: false,
        };
        state.recompute();
        state
    }

    /// Rebuild the scenario table from the current inputs.
    pub fn recompute(&mut self) {
        self.table = self
            .inputs
            .to_pricing_inputs()
            .and_then(|inputs| simulate_inputs(&inputs));

        match &self.table {
            Ok(table) => {
                tracing::debug!(
                    rows = table.len(),
                    current_sales = self.inputs.current_sales,
                    current_units = self.inputs.current_units,
                    elasticity = self.inputs.elasticity,
                    "Recomputed scenario table"
                );
                let max_offset = table.len().saturating_sub(1);
                self.results_state.scroll_offset = self.results_state.scroll_offset.min(max_offset);
            }
            Err(e) => {
                tracing::warn!("Scenario table unavailable: {}", e);
                self.results_state.scroll_offset = 0;
            }
        }
    }

    pub fn table(&self) -> Option<&ScenarioTable> {
        self.table.as_ref().ok()
    }

    pub fn focus_next(&mut self) {
        self.focused_field = self.focused_field.next();
    }

    pub fn focus_prev(&mut self) {
        self.focused_field = self.focused_field.prev();
    }

    /// Step the focused field up (`1`) or down (`-1`) and recompute
    pub fn step_focused(&mut self, direction: i32) {
        let field = self.focused_field;
        self.inputs.step(
            field,
            direction,
            &self.config.steps,
            &self.config.range_bounds,
        );
        tracing::debug!(
            "Stepped {} to {}",
            field.label(),
            self.inputs.raw_value(field)
        );
        self.recompute();
    }

    /// Apply typed text to a field and recompute
    pub fn set_field(&mut self, field: FieldId, raw: &str) -> Result<(), InputError> {
        self.inputs
            .set_from_str(field, raw, &self.config.range_bounds)?;
        tracing::debug!("Set {} to {}", field.label(), self.inputs.raw_value(field));
        self.recompute();
        Ok(())
    }

    /// Restore every field to its configured default
    pub fn reset_inputs(&mut self) {
        self.inputs = InputValues::from(&self.config.defaults);
        self.results_state.scroll_offset = 0;
        self.recompute();
        self.set_status("Inputs reset to defaults".to_string());
    }

    pub fn scroll_down(&mut self, rows: usize) {
        if let Some(table) = self.table() {
            let max_offset = table.len().saturating_sub(1);
            self.results_state.scroll_offset =
                (self.results_state.scroll_offset + rows).min(max_offset);
        }
    }

    pub fn scroll_up(&mut self, rows: usize) {
        self.results_state.scroll_offset = self.results_state.scroll_offset.saturating_sub(rows);
    }

    /// Set an error message to display in the status bar
    pub fn set_error(&mut self, msg: String) {
        tracing::warn!("{}", msg);
        self.status_message = None;
        self.error_message = Some(msg);
    }

    /// Set an informational message to display in the status bar
    pub fn set_status(&mut self, msg: String) {
        self.error_message = None;
        self.status_message = Some(msg);
    }

    /// Clear the error and status messages
    pub fn clear_error(&mut self) {
        self.error_message = None;
        self.status_message = None;
    }
}
