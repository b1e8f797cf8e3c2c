//! The single simulator screen: inputs on the left, results on the right.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

use super::Screen;
use crate::components::{
    Component, EventResult, formula_panel::FormulaPanel, input_panel::InputPanel,
    results_table::ResultsTable, revenue_chart::RevenueChart, summary_panel::SummaryPanel,
};
use crate::state::{AppState, ModalAction, ModalState, TextInputModal};

pub struct SimulatorScreen {
    input_panel: InputPanel,
    summary_panel: SummaryPanel,
    formula_panel: FormulaPanel,
    revenue_chart: RevenueChart,
    results_table: ResultsTable,
}

impl SimulatorScreen {
    pub fn new() -> Self {
        Self {
            input_panel: InputPanel::new(),
            summary_panel: SummaryPanel::new(),
            formula_panel: FormulaPanel::new(),
            revenue_chart: RevenueChart::new(),
            results_table: ResultsTable::new(),
        }
    }

    /// Open the export prompt, or explain why there is nothing to export
    fn open_export(state: &mut AppState) {
        if let Err(e) = &state.table {
            state.set_error(format!("Nothing to export: {}", e));
            return;
        }

        let path = state.config.export_file.clone();
        state.modal = ModalState::TextInput(TextInputModal::new(
            "Export CSV",
            "Write results to:",
            &path,
            ModalAction::ExportCsv,
        ));
    }
}

impl Default for SimulatorScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for SimulatorScreen {
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        if key.code == KeyCode::Char('e') {
            Self::open_export(state);
            return EventResult::Handled;
        }

        let result = self.input_panel.handle_key(key, state);
        if result != EventResult::NotHandled {
            return result;
        }

        self.results_table.handle_key(key, state)
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(48), Constraint::Min(40)])
            .split(area);

        let left = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(15), // Inputs
                Constraint::Min(8),     // Summary
                Constraint::Length(12), // Formulas
            ])
            .split(columns[0]);

        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(columns[1]);

        self.input_panel.render(frame, left[0], state);
        self.summary_panel.render(frame, left[1], state);
        self.formula_panel.render(frame, left[2], state);
        self.revenue_chart.render(frame, right[0], state);
        self.results_table.render(frame, right[1], state);
    }
}

impl Screen for SimulatorScreen {
    fn title(&self) -> &str {
        "Pricing Scenario Simulator"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FieldId;
    use crossterm::event::KeyModifiers;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_export_key_prefills_configured_path() {
        let mut state = AppState::default();
        let mut screen = SimulatorScreen::new();
        screen.handle_key(press(KeyCode::Char('e')), &mut state);

        match &state.modal {
            ModalState::TextInput(modal) => {
                assert_eq!(modal.value, "pricing_simulation.csv");
                assert_eq!(modal.action, ModalAction::ExportCsv);
            }
            other => panic!("expected export prompt, got {other:?}"),
        }
    }

    #[test]
    fn test_export_refused_without_table() {
        let mut state = AppState::default();
        state.set_field(FieldId::CurrentUnits, "0").unwrap();

        let mut screen = SimulatorScreen::new();
        screen.handle_key(press(KeyCode::Char('e')), &mut state);

        assert!(matches!(state.modal, ModalState::None));
        assert!(state.error_message.is_some());
    }

    #[test]
    fn test_keys_reach_both_panels() {
        let mut state = AppState::default();
        let mut screen = SimulatorScreen::new();

        screen.handle_key(press(KeyCode::Char('j')), &mut state);
        assert_eq!(state.focused_field, FieldId::CurrentUnits);

        screen.handle_key(press(KeyCode::PageDown), &mut state);
        assert_eq!(state.results_state.scroll_offset, 10);
    }
}
