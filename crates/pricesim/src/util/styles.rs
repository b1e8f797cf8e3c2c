//! Colours and panel chrome shared by the simulator widgets

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders};

/// Best scenario, selected input and slider handles
pub const ACCENT_COLOR: Color = Color::Yellow;
pub const HELP_COLOR: Color = Color::DarkGray;
pub const HEADER_COLOR: Color = Color::Cyan;
pub const GAIN_COLOR: Color = Color::Green;
pub const LOSS_COLOR: Color = Color::Red;

/// Chart line colours
pub const REVENUE_COLOR: Color = Color::Cyan;
pub const REVENUE_CHANGE_COLOR: Color = Color::Magenta;

/// Read-only panel
pub fn panel(title: &str) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .title(title.to_string())
}

/// Panel that takes keys. The border is accented and `help` goes on the
/// bottom edge.
pub fn keyed_panel(title: &str, help: &str) -> Block<'static> {
    let block = panel(title).border_style(Style::default().fg(ACCENT_COLOR));
    if help.is_empty() {
        block
    } else {
        block.title_bottom(Line::from(format!(" {help} ")).fg(HELP_COLOR))
    }
}

/// Style of a revenue delta: green for a gain, red for a loss, plain when
/// revenue is unchanged
pub fn change_style(delta: f64) -> Style {
    if delta > 0.0 {
        Style::default().fg(GAIN_COLOR)
    } else if delta < 0.0 {
        Style::default().fg(LOSS_COLOR)
    } else {
        Style::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyed_panel_is_accented() {
        let block = keyed_panel(" INPUTS ", "Enter: type a value");
        let debug = format!("{block:?}");
        assert!(debug.contains("INPUTS"));
        assert!(debug.contains("Enter: type a value"));
        assert_ne!(format!("{:?}", panel(" INPUTS ")), debug);
    }

    #[test]
    fn test_change_style() {
        assert_eq!(change_style(511.3), Style::default().fg(GAIN_COLOR));
        assert_eq!(change_style(-7_869.0), Style::default().fg(LOSS_COLOR));
        assert_eq!(change_style(0.0), Style::default());
    }
}
