//! Export confirmations and failure notices

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Constraint,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Paragraph, Wrap},
};

use crate::state::MessageModal;
use crate::util::styles::{GAIN_COLOR, HEADER_COLOR, HELP_COLOR, LOSS_COLOR};

use super::ModalResult;
use super::helpers::{HelpText, render_modal_frame};

const MODAL_WIDTH: u16 = 56;
/// Border, the two blank rows and the help line
const CHROME_HEIGHT: u16 = 5;
/// Detail labels are padded to this many columns
const LABEL_WIDTH: usize = 7;

/// Rows `text` needs when wrapped to `width` columns. Counts chars, so a
/// path with accents takes the same room as an ASCII one.
pub fn wrapped_height(text: &str, width: usize) -> usize {
    let width = width.max(1);
    text.lines()
        .map(|line| line.chars().count().div_ceil(width).max(1))
        .sum::<usize>()
        .max(1)
}

fn detail_line<'a>(label: &str, value: &'a str) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{label:<LABEL_WIDTH$}"), Style::default().fg(HELP_COLOR)),
        Span::styled(
            value,
            Style::default().fg(HEADER_COLOR).add_modifier(Modifier::BOLD),
        ),
    ])
}

pub fn render_message_modal(frame: &mut Frame, modal: &MessageModal) {
    let text_width = usize::from(MODAL_WIDTH - 2);
    let body_rows = wrapped_height(&modal.message, text_width)
        + modal
            .details
            .iter()
            .map(|(_, value)| wrapped_height(value, text_width - LABEL_WIDTH))
            .sum::<usize>();
    let height = CHROME_HEIGHT
        .saturating_add(u16::try_from(body_rows).unwrap_or(u16::MAX))
        .min(frame.area().height.saturating_sub(2));

    let border_color = if modal.is_error { LOSS_COLOR } else { GAIN_COLOR };

    let mf = render_modal_frame(
        frame,
        &modal.title,
        MODAL_WIDTH,
        height,
        border_color,
        &[
            Constraint::Length(1), // Spacing
            Constraint::Min(1),    // Message and details
            Constraint::Length(1), // Spacing
            Constraint::Length(1), // Help text
        ],
    );

    let mut body = Text::from(modal.message.as_str());
    for (label, value) in &modal.details {
        body.push_line(detail_line(label, value));
    }
    frame.render_widget(Paragraph::new(body).wrap(Wrap { trim: true }), mf.chunks[1]);

    let help = HelpText::new()
        .key("[Enter]", Color::Green, "close")
        .build();
    frame.render_widget(help, mf.chunks[3]);
}

/// Enter, Esc or Space close the notice
pub fn handle_message_key(key: KeyEvent) -> ModalResult {
    match key.code {
        KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => ModalResult::Cancelled,
        _ => ModalResult::Continue,
    }
}
