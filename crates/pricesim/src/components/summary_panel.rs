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
use crate::util::format::{format_change_ratio, format_currency, format_signed_pct, format_units};
use crate::util::styles::{ACCENT_COLOR, HELP_COLOR, LOSS_COLOR, change_style, panel};

/// Headline numbers for the current inputs
pub struct SummaryPanel;

impl SummaryPanel {
    pub fn new() -> Self {
        Self
    }

    fn labelled(label: &str, value: String, style: Style) -> Line<'static> {
        Line::from(vec![
            Span::styled(format!("{:<18}", label), Style::default().fg(HELP_COLOR)),
            Span::styled(value, style),
        ])
    }

    fn summary_lines(state: &AppState) -> Vec<Line<'static>> {
        let table = match &state.table {
            Ok(table) => table,
            Err(e) => {
                return vec![Line::from(Span::styled(
                    format!("Cannot simulate: {e}"),
                    Style::default().fg(LOSS_COLOR),
                ))];
            }
        };

        let bold = Style::default().add_modifier(Modifier::BOLD);
        let mut lines = vec![
            Self::labelled(
                "Current Price",
                format_currency(table.inputs().current_price()),
                bold,
            ),
            Self::labelled("Scenarios", table.len().to_string(), Style::default()),
        ];

        if let Some(best) = table.max_revenue_row() {
            lines.push(Self::labelled(
                "Best Change",
                format_signed_pct(best.price_change_pct),
                Style::default().fg(ACCENT_COLOR).add_modifier(Modifier::BOLD),
            ));
            lines.push(Self::labelled(
                "Best Revenue",
                format_currency(best.new_revenue),
                bold,
            ));
            lines.push(Self::labelled(
                "vs Current",
                format!(
                    "{} ({})",
                    format_currency(best.revenue_change),
                    format_change_ratio(best.revenue_change_ratio())
                ),
                change_style(best.revenue_change),
            ));
            lines.push(Self::labelled(
                "Units Sold",
                format_units(best.new_quantity),
                Style::default(),
            ));
        }

        if table.has_negative_quantity() {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "Warning: projected demand falls below zero",
                Style::default().fg(LOSS_COLOR),
            )));
        }

        lines
    }
}

impl Default for SummaryPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for SummaryPanel {
    fn handle_key(&mut self, _key: KeyEvent, _state: &mut AppState) -> EventResult {
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let paragraph = Paragraph::new(Self::summary_lines(state))
            .block(panel(" SUMMARY "))
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }
}
