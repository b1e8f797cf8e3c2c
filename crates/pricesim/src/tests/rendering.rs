//! Full-frame rendering on a test backend

use crossterm::event::KeyCode;
use ratatui::{Terminal, backend::TestBackend};

use super::{press, replace_text};
use crate::App;

fn render(app: &mut App, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|frame| app.draw(frame)).unwrap();

    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

#[test]
fn test_default_screen_shows_every_panel() {
    let mut app = App::default();
    let screen = render(&mut app, 160, 50);

    for label in [
        "Pricing Scenario Simulator",
        "INPUT PARAMETERS",
        "Current Sales ($)",
        "$183,000.00",
        "Price Elasticity of Demand",
        "FORMULAS",
        "New Revenue",
        "SUMMARY",
        "REVENUE VS PRICE CHANGE (%)",
        "SIMULATION RESULTS",
        "Revenue Change ($)",
        "$19.49",
        "$186,111.00",
        "rows 1-",
        "q quit",
    ] {
        assert!(screen.contains(label), "missing {label:?} in\n{screen}");
    }
}

#[test]
fn test_invalid_inputs_replace_results() {
    let mut app = App::default();
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);
    replace_text(&mut app, "0");
    press(&mut app, KeyCode::Enter);

    let screen = render(&mut app, 160, 50);
    assert!(screen.contains("current units must be non-zero"), "{screen}");
    assert!(!screen.contains("$19.49"));
}

#[test]
fn test_modal_is_drawn_over_screen() {
    let mut app = App::default();
    press(&mut app, KeyCode::Char('e'));

    let screen = render(&mut app, 160, 50);
    assert!(screen.contains("Export CSV"), "{screen}");
    assert!(screen.contains("pricing_simulation.csv"));
}

#[test]
fn test_small_terminal_does_not_panic() {
    let mut app = App::default();
    render(&mut app, 20, 6);
    press(&mut app, KeyCode::Enter);
    render(&mut app, 20, 6);
}
