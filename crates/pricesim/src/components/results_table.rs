//! Scrollable table of scenario rows.

use crossterm::event::{KeyCode, KeyEvent};
use pricesim_core::{ScenarioRow, ScenarioTable};
use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Table, Wrap},
};

use super::{Component, EventResult};
use crate::state::AppState;
use crate::util::format::{format_currency, format_units};
use crate::util::styles::{ACCENT_COLOR, HEADER_COLOR, LOSS_COLOR, change_style, keyed_panel, panel};

const PAGE_ROWS: usize = 10;

const HEADERS: [&str; 5] = [
    "Price Change (%)",
    "New Price ($)",
    "New Quantity",
    "New Revenue ($)",
    "Revenue Change ($)",
];

pub struct ResultsTable;

impl ResultsTable {
    pub fn new() -> Self {
        Self
    }

    fn right(text: String) -> Cell<'static> {
        Cell::from(Line::from(text).right_aligned())
    }

    fn table_row(row: &ScenarioRow, best: bool) -> Row<'static> {
        let quantity_style = if row.is_demand_negative() {
            Style::default().fg(LOSS_COLOR)
        } else {
            Style::default()
        };
        let cells = vec![
            Self::right(row.price_change_pct.to_string()),
            Self::right(format_currency(row.new_price)),
            Self::right(format_units(row.new_quantity)).style(quantity_style),
            Self::right(format_currency(row.new_revenue)),
            Self::right(format_currency(row.revenue_change))
                .style(change_style(row.revenue_change)),
        ];

        let row_style = if best {
            Style::default().fg(ACCENT_COLOR).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        Row::new(cells).style(row_style)
    }

    /// Index range of rows that fit below the header
    fn visible_window(total: usize, offset: usize, height: u16) -> (usize, usize) {
        // Borders plus the header line
        let visible = (height as usize).saturating_sub(3).max(1);
        let start = offset.min(total.saturating_sub(1));
        let end = (start + visible).min(total);
        (start, end)
    }

    fn render_table(frame: &mut Frame, area: Rect, table: &ScenarioTable, offset: usize) {
        let (start, end) = Self::visible_window(table.len(), offset, area.height);
        let best_pct = table.max_revenue_row().map(|r| r.price_change_pct);

        let header = Row::new(
            HEADERS
                .iter()
                .map(|h| Cell::from(Line::from(*h).right_aligned())),
        )
        .style(Style::default().fg(HEADER_COLOR).add_modifier(Modifier::BOLD));

        let rows: Vec<Row> = table.rows()[start..end]
            .iter()
            .map(|row| Self::table_row(row, Some(row.price_change_pct) == best_pct))
            .collect();

        let block = keyed_panel(" SIMULATION RESULTS ", "J/K scroll").title_bottom(
            Line::from(format!(" rows {}-{} of {} ", start + 1, end, table.len())).right_aligned(),
        );

        let widths = [
            Constraint::Length(16),
            Constraint::Length(14),
            Constraint::Length(13),
            Constraint::Length(16),
            Constraint::Length(19),
        ];
        let widget = Table::new(rows, widths)
            .header(header)
            .column_spacing(1)
            .block(block);

        frame.render_widget(widget, area);
    }
}

impl Default for ResultsTable {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for ResultsTable {
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        match key.code {
            KeyCode::Char('J') => {
                state.scroll_down(1);
                EventResult::Handled
            }
            KeyCode::Char('K') => {
                state.scroll_up(1);
                EventResult::Handled
            }
            KeyCode::PageDown => {
                state.scroll_down(PAGE_ROWS);
                EventResult::Handled
            }
            KeyCode::PageUp => {
                state.scroll_up(PAGE_ROWS);
                EventResult::Handled
            }
            KeyCode::Home => {
                state.results_state.scroll_offset = 0;
                EventResult::Handled
            }
            _ => EventResult::NotHandled,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        match &state.table {
            Ok(table) => {
                Self::render_table(frame, area, table, state.results_state.scroll_offset);
            }
            Err(e) => {
                let paragraph = Paragraph::new(Span::styled(
                    e.to_string(),
                    Style::default().fg(LOSS_COLOR),
                ))
                .block(panel(" SIMULATION RESULTS "))
                .wrap(Wrap { trim: true });
                frame.render_widget(paragraph, area);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    #[test]
    fn test_visible_window() {
        assert_eq!(ResultsTable::visible_window(21, 0, 13), (0, 10));
        assert_eq!(ResultsTable::visible_window(21, 15, 13), (15, 21));
        assert_eq!(ResultsTable::visible_window(21, 50, 13), (20, 21));
        // Never zero rows, even in a tiny area
        assert_eq!(ResultsTable::visible_window(21, 0, 2), (0, 1));
    }

    #[test]
    fn test_scroll_keys() {
        let mut state = AppState::default();
        let mut table = ResultsTable::new();

        table.handle_key(KeyEvent::new(KeyCode::PageDown, KeyModifiers::NONE), &mut state);
        assert_eq!(state.results_state.scroll_offset, PAGE_ROWS);

        table.handle_key(KeyEvent::new(KeyCode::Char('K'), KeyModifiers::SHIFT), &mut state);
        assert_eq!(state.results_state.scroll_offset, PAGE_ROWS - 1);

        table.handle_key(KeyEvent::new(KeyCode::Home, KeyModifiers::NONE), &mut state);
        assert_eq!(state.results_state.scroll_offset, 0);
    }
}
