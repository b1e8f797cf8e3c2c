use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use super::{Component, EventResult};
use crate::state::AppState;
use crate::util::format::format_currency;
use crate::util::styles::{HEADER_COLOR, HELP_COLOR, panel};

const FORMULAS: [(&str, &str); 4] = [
    ("New Price", "Current Price × (1 + % Price Change)"),
    ("Quantity Change %", "Elasticity × % Price Change"),
    ("New Quantity", "Current Quantity × (1 + Quantity Change %)"),
    ("New Revenue", "New Price × New Quantity"),
];

/// Static panel explaining how each column is derived
pub struct FormulaPanel;

impl FormulaPanel {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FormulaPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for FormulaPanel {
    fn handle_key(&mut self, _key: KeyEvent, _state: &mut AppState) -> EventResult {
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let mut lines = Vec::with_capacity(FORMULAS.len() * 2 + 2);
        for (name, formula) in FORMULAS {
            lines.push(Line::from(Span::styled(
                name,
                Style::default().fg(HEADER_COLOR).add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(format!("  = {formula}")));
        }

        lines.push(Line::from(""));
        let price_text = match state.inputs.to_pricing_inputs() {
            Ok(inputs) if inputs.current_units != 0 => format_currency(inputs.current_price()),
            _ => "n/a".to_string(),
        };
        lines.push(Line::from(vec![
            Span::styled("Current Price: ", Style::default().fg(HELP_COLOR)),
            Span::styled(price_text, Style::default().add_modifier(Modifier::BOLD)),
        ]));

        let paragraph = Paragraph::new(lines)
            .block(panel(" FORMULAS "))
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, area);
    }
}
