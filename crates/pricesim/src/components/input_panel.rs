//! Sidebar with the editable simulation inputs.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::{Component, EventResult};
use crate::config::{InputSteps, RangeBounds};
use crate::state::{AppState, FieldId, ModalAction, ModalState, TextInputModal};
use crate::util::format::{format_currency, format_units};
use crate::util::styles::{ACCENT_COLOR, HEADER_COLOR, HELP_COLOR, keyed_panel};

const LABEL_WIDTH: usize = 28;

pub struct InputPanel;

impl InputPanel {
    pub fn new() -> Self {
        Self
    }

    fn step_text(field: FieldId, steps: &InputSteps) -> String {
        match field {
            FieldId::CurrentSales => format_currency(steps.current_sales),
            FieldId::CurrentUnits => format_units(steps.current_units),
            FieldId::Elasticity => format!("{}", steps.elasticity),
            FieldId::RangeLow | FieldId::RangeHigh => format!("{}%", steps.range),
        }
    }

    fn open_editor(state: &mut AppState) {
        let field = state.focused_field;
        let prompt = if field.is_range() {
            format!(
                "{} ({}% to {}%):",
                field.label(),
                state.config.range_bounds.min,
                state.config.range_bounds.max
            )
        } else {
            format!("{}:", field.label())
        };

        state.modal = ModalState::TextInput(TextInputModal::new(
            "Edit Input",
            &prompt,
            &state.inputs.raw_value(field),
            ModalAction::EditField(field),
        ));
    }

    fn field_line(state: &AppState, field: FieldId) -> Line<'static> {
        let focused = field == state.focused_field;
        let marker = if focused { "▶ " } else { "  " };
        let label_style = if focused {
            Style::default().fg(ACCENT_COLOR).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };

        Line::from(vec![
            Span::styled(marker, Style::default().fg(ACCENT_COLOR)),
            Span::styled(
                format!("{:<width$}", field.label(), width = LABEL_WIDTH),
                label_style,
            ),
            Span::styled(
                state.inputs.display_value(field),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ])
    }

    /// Two-handle slider track for the percentage range
    fn slider_line(lo: i32, hi: i32, bounds: &RangeBounds, width: usize) -> Line<'static> {
        let width = width.max(3);
        let span = (bounds.max - bounds.min).max(1) as f64;
        let column = |pct: i32| -> usize {
            let ratio = f64::from(pct - bounds.min) / span;
            (ratio * (width - 1) as f64).round() as usize
        };
        let (lo_col, hi_col) = (column(lo), column(hi));

        let mut spans = Vec::with_capacity(width);
        for col in 0..width {
            let (symbol, color) = if col == lo_col || col == hi_col {
                ("●", ACCENT_COLOR)
            } else if col > lo_col && col < hi_col {
                ("━", HEADER_COLOR)
            } else {
                ("─", HELP_COLOR)
            };
            spans.push(Span::styled(symbol, Style::default().fg(color)));
        }

        Line::from(spans)
    }
}

impl Default for InputPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for InputPanel {
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down | KeyCode::Tab => {
                state.focus_next();
                EventResult::Handled
            }
            KeyCode::Char('k') | KeyCode::Up | KeyCode::BackTab => {
                state.focus_prev();
                EventResult::Handled
            }
            KeyCode::Char('h') | KeyCode::Left | KeyCode::Char('-') => {
                state.step_focused(-1);
                EventResult::Handled
            }
            KeyCode::Char('l') | KeyCode::Right | KeyCode::Char('+') | KeyCode::Char('=') => {
                state.step_focused(1);
                EventResult::Handled
            }
            KeyCode::Enter => {
                Self::open_editor(state);
                EventResult::Handled
            }
            KeyCode::Char('r') => {
                state.reset_inputs();
                EventResult::Handled
            }
            _ => EventResult::NotHandled,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let block = keyed_panel(" INPUT PARAMETERS ", "Enter: type a value");
        let inner = block.inner(area);

        let mut lines: Vec<Line> = vec![Line::from("")];
        for field in FieldId::ALL {
            lines.push(Self::field_line(state, field));
        }

        lines.push(Line::from(""));
        let mut slider = Self::slider_line(
            state.inputs.range_lo,
            state.inputs.range_hi,
            &state.config.range_bounds,
            (inner.width as usize).saturating_sub(4),
        );
        slider.spans.insert(0, Span::raw("  "));
        lines.push(slider);
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(
                format!("{}%", state.config.range_bounds.min),
                Style::default().fg(HELP_COLOR),
            ),
            Span::raw(" .. "),
            Span::styled(
                format!("{}%", state.config.range_bounds.max),
                Style::default().fg(HELP_COLOR),
            ),
        ]));

        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("  Step: ", Style::default().fg(HELP_COLOR)),
            Span::styled(
                Self::step_text(state.focused_field, &state.config.steps),
                Style::default().fg(Color::Gray),
            ),
        ]));

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}
