use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::actions::{self, ActionResult};
use crate::components::{Component, status_bar::StatusBar};
use crate::config::SimulatorConfig;
use crate::modals::{ModalResult, handle_modal_key, render_modal};
use crate::screens::{Screen, simulator::SimulatorScreen};
use crate::state::{AppState, ModalAction, ModalState};
use crate::util::styles::{HEADER_COLOR, HELP_COLOR};

pub struct App {
    state: AppState,
    status_bar: StatusBar,
    simulator_screen: SimulatorScreen,
}

impl Default for App {
    fn default() -> Self {
        Self::new(SimulatorConfig::default())
    }
}

impl App {
    pub fn new(config: SimulatorConfig) -> Self {
        Self {
            state: AppState::new(config),
            status_bar: StatusBar::new(),
            simulator_screen: SimulatorScreen::new(),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Show a start-up notice in the status bar
    pub fn notify(&mut self, msg: String) {
        self.state.set_status(msg);
    }

    /// runs the application's main loop until the user quits
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        while !self.state.exit {
            terminal.draw(|frame| self.draw(frame))?;
            self.handle_events()?;
        }
        Ok(())
    }

    pub fn draw(&mut self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Title
                Constraint::Min(0),    // Content
                Constraint::Length(2), // Status bar
            ])
            .split(frame.area());

        let title = Line::from(vec![
            Span::styled(
                format!(" {} ", self.simulator_screen.title()),
                Style::default().fg(HEADER_COLOR).add_modifier(Modifier::BOLD),
            ),
            Span::styled("with elasticity", Style::default().fg(HELP_COLOR)),
        ]);
        frame.render_widget(Paragraph::new(title), chunks[0]);

        self.simulator_screen.render(frame, chunks[1], &self.state);
        self.status_bar.render(frame, chunks[2], &self.state);

        render_modal(frame, &self.state);
    }

    fn handle_events(&mut self) -> io::Result<()> {
        match event::read()? {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_event(key_event)
            }
            _ => {}
        };
        Ok(())
    }

    pub fn handle_key_event(&mut self, key_event: KeyEvent) {
        if key_event.code == KeyCode::Char('c')
            && key_event.modifiers.contains(KeyModifiers::CONTROL)
        {
            self.state.exit = true;
            return;
        }

        // Handle modal first if active
        if !matches!(self.state.modal, ModalState::None) {
            match handle_modal_key(key_event, &mut self.state) {
                ModalResult::Confirmed(action, value) => {
                    self.handle_modal_result(action, value);
                }
                ModalResult::Cancelled => {
                    self.state.modal = ModalState::None;
                }
                ModalResult::Continue => {}
            }
            return;
        }

        match key_event.code {
            KeyCode::Char('q') if key_event.modifiers.is_empty() => {
                self.state.exit = true;
                return;
            }
            KeyCode::Esc => {
                self.state.clear_error();
                return;
            }
            _ => {}
        }

        self.simulator_screen.handle_key(key_event, &mut self.state);
    }

    fn handle_modal_result(&mut self, action: ModalAction, value: String) {
        let result = match action {
            ModalAction::EditField(field) => {
                actions::handle_edit_field(&mut self.state, field, &value)
            }
            ModalAction::ExportCsv => actions::handle_export(&self.state, &value),
        };

        self.apply_action_result(result);
    }

    /// Apply the result of an action handler
    fn apply_action_result(&mut self, result: ActionResult) {
        match result {
            ActionResult::Done(modal) => {
                self.state.modal = modal.unwrap_or(ModalState::None);
            }
            ActionResult::Modified(modal) => {
                self.state.clear_error();
                self.state.modal = modal.unwrap_or(ModalState::None);
            }
            ActionResult::Error(msg) => {
                self.state.set_error(msg);
                self.state.modal = ModalState::None;
            }
        }
    }
}
