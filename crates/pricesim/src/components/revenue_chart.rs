//! Line chart of revenue against price change.

use crossterm::event::KeyEvent;
use pricesim_core::ScenarioTable;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Style, Stylize},
    symbols,
    text::Span,
    widgets::{Axis, Chart, Dataset, GraphType, Paragraph, Wrap},
};

use super::{Component, EventResult};
use crate::state::AppState;
use crate::util::format::format_compact_currency;
use crate::util::styles::{LOSS_COLOR, REVENUE_CHANGE_COLOR, REVENUE_COLOR, panel};

pub struct RevenueChart;

impl RevenueChart {
    pub fn new() -> Self {
        Self
    }

    /// X bounds, widened by one point either side when the range is a single value
    fn x_bounds(table: &ScenarioTable) -> [f64; 2] {
        let range = table.inputs().range;
        let (lo, hi) = (f64::from(range.lo()), f64::from(range.hi()));
        if lo == hi { [lo - 1.0, hi + 1.0] } else { [lo, hi] }
    }

    /// Y bounds with a 10% margin so lines never sit on the border
    fn y_bounds(table: &ScenarioTable) -> [f64; 2] {
        let (min, max) = table.y_bounds().unwrap_or((0.0, 1.0));
        let padding = (max - min).abs().max(1.0) * 0.1;
        [min - padding, max + padding]
    }

    fn render_chart(frame: &mut Frame, area: Rect, table: &ScenarioTable) {
        let revenue = table.revenue_series();
        let change = table.revenue_change_series();

        let datasets = vec![
            Dataset::default()
                .name("New Revenue ($)")
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(REVENUE_COLOR))
                .data(&revenue),
            Dataset::default()
                .name("Revenue Change ($)")
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(REVENUE_CHANGE_COLOR))
                .data(&change),
        ];

        let [x_min, x_max] = Self::x_bounds(table);
        let [y_min, y_max] = Self::y_bounds(table);

        let x_labels = vec![
            Span::raw(format!("{:.0}%", x_min)),
            Span::raw(format!("{:.0}%", (x_min + x_max) / 2.0)),
            Span::raw(format!("{:.0}%", x_max)),
        ];
        let y_labels = vec![
            Span::raw(format_compact_currency(y_min)),
            Span::raw(format_compact_currency((y_min + y_max) / 2.0)),
            Span::raw(format_compact_currency(y_max)),
        ];

        let chart = Chart::new(datasets)
            .block(panel(" REVENUE VS PRICE CHANGE (%) "))
            .x_axis(
                Axis::default()
                    .title("Price Change (%)".dark_gray())
                    .bounds([x_min, x_max])
                    .labels(x_labels),
            )
            .y_axis(
                Axis::default()
                    .title("$".dark_gray())
                    .bounds([y_min, y_max])
                    .labels(y_labels),
            );

        frame.render_widget(chart, area);
    }
}

impl Default for RevenueChart {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for RevenueChart {
    fn handle_key(&mut self, _key: KeyEvent, _state: &mut AppState) -> EventResult {
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        match &state.table {
            Ok(table) => Self::render_chart(frame, area, table),
            Err(e) => {
                let paragraph = Paragraph::new(Span::styled(
                    e.to_string(),
                    Style::default().fg(LOSS_COLOR),
                ))
                .block(panel(" REVENUE VS PRICE CHANGE (%) "))
                .wrap(Wrap { trim: true });
                frame.render_widget(paragraph, area);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FieldId;

    #[test]
    fn test_bounds_for_defaults() {
        let state = AppState::default();
        let table = state.table().unwrap();

        assert_eq!(RevenueChart::x_bounds(table), [-10.0, 10.0]);
        let [y_min, y_max] = RevenueChart::y_bounds(table);
        assert!(y_min < -7_869.0);
        assert!(y_max > 186_111.0);
    }

    #[test]
    fn test_single_point_range_is_widened() {
        let mut state = AppState::default();
        state.set_field(FieldId::RangeLow, "5").unwrap();
        state.set_field(FieldId::RangeHigh, "5").unwrap();
        assert_eq!(RevenueChart::x_bounds(state.table().unwrap()), [4.0, 6.0]);
    }
}
