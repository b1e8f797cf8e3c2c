use super::{Component, EventResult};
use crate::modals::HelpText;
use crate::state::{AppState, ModalState};
use crate::util::styles::{GAIN_COLOR, HELP_COLOR, LOSS_COLOR};
use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub struct StatusBar;

impl StatusBar {
    pub fn new() -> Self {
        Self
    }

    fn help_line(state: &AppState) -> Line<'static> {
        if !matches!(state.modal, ModalState::None) {
            return Line::from(Span::styled(
                "Enter: confirm | Esc: cancel",
                Style::default().fg(HELP_COLOR),
            ));
        }

        HelpText::new()
            .separator(" | ")
            .key("j/k", Color::Gray, "field")
            .key("h/l", Color::Gray, "step")
            .key("Enter", Color::Gray, "edit")
            .key("r", Color::Gray, "reset")
            .key("J/K", Color::Gray, "scroll")
            .key("e", Color::Gray, "export CSV")
            .key("q", Color::Gray, "quit")
            .line()
    }
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for StatusBar {
    fn handle_key(&mut self, _key: KeyEvent, _state: &mut AppState) -> EventResult {
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let content = if let Some(error) = &state.error_message {
            Line::from(vec![
                Span::styled("Error: ", Style::default().fg(LOSS_COLOR)),
                Span::raw(error.clone()),
            ])
        } else if let Some(status) = &state.status_message {
            Line::from(Span::styled(
                status.clone(),
                Style::default().fg(GAIN_COLOR),
            ))
        } else {
            Self::help_line(state)
        };

        let paragraph = Paragraph::new(content).block(Block::default().borders(Borders::TOP));

        frame.render_widget(paragraph, area);
    }
}
