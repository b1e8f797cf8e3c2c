//! Common rendering helpers for modal widgets.

use std::rc::Rc;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::centered_rect;

// ========== Cursor Rendering ==========

/// Render a line of text with a block cursor at char position `cursor_pos`.
///
/// The line is split into the text before the cursor, the highlighted char
/// (a blank cell at the end of the text) and the rest.
pub fn render_cursor_line(display_value: &str, cursor_pos: usize, prefix: &str) -> Line<'static> {
    let cursor_style = Style::default().bg(Color::White).fg(Color::Black);
    let before: String = display_value.chars().take(cursor_pos).collect();
    let mut rest = display_value.chars().skip(cursor_pos);
    let under_cursor = rest.next().map_or_else(|| " ".to_string(), String::from);
    let after: String = rest.collect();

    let mut spans = Vec::with_capacity(4);
    if !prefix.is_empty() {
        spans.push(Span::raw(prefix.to_string()));
    }
    if !before.is_empty() {
        spans.push(Span::raw(before));
    }
    spans.push(Span::styled(under_cursor, cursor_style));
    if !after.is_empty() {
        spans.push(Span::raw(after));
    }

    Line::from(spans)
}

// ========== Horizontal Scroll ==========

/// Visible slice of a text input that is wider than its container.
pub struct ScrolledView {
    pub display_value: String,
    /// The cursor position within `display_value`, in chars
    pub cursor_pos: usize,
}

/// Calculate horizontal scroll for a text input that's wider than its container.
///
/// Centers the cursor in the visible area when the text is longer than `max_width`.
pub fn calculate_scroll(value: &str, cursor_pos: usize, max_width: usize) -> ScrolledView {
    let input_width = max_width.saturating_sub(2);
    let chars: Vec<char> = value.chars().collect();

    if chars.len() <= input_width {
        return ScrolledView {
            display_value: value.to_string(),
            cursor_pos,
        };
    }

    let start = cursor_pos.saturating_sub(input_width / 2);
    let end = (start + input_width).min(chars.len());
    let start = end.saturating_sub(input_width);

    ScrolledView {
        display_value: chars[start..end].iter().collect(),
        cursor_pos: cursor_pos - start,
    }
}

// ========== Modal Frame ==========

/// Result of rendering a modal frame, containing layout information.
pub struct ModalFrame {
    /// The layout chunks for content placement
    pub chunks: Rc<[Rect]>,
}

/// Render a standard modal frame: centered, cleared background, titled
/// border, and a vertical layout built from `constraints`.
pub fn render_modal_frame(
    frame: &mut Frame,
    title: &str,
    width: u16,
    height: u16,
    border_color: Color,
    constraints: &[Constraint],
) -> ModalFrame {
    let modal_area = centered_rect(width, height, frame.area());

    frame.render_widget(Clear, modal_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(format!(" {} ", title));

    let inner = block.inner(modal_area);
    frame.render_widget(block, modal_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    ModalFrame { chunks }
}

// ========== Help Text Builder ==========

/// Builder for help text with consistent styling.
///
/// Creates a paragraph with key-description pairs, where keys are colored
/// and descriptions are plain text.
///
/// # Example
/// ```ignore
/// let help = HelpText::new()
///     .key("[Enter]", Color::Green, "Confirm")
///     .key("[Esc]", Color::Yellow, "Cancel")
///     .build();
/// frame.render_widget(help, area);
/// ```
pub struct HelpText {
    items: Vec<(String, Color, String)>,
    separator: String,
}

impl HelpText {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            separator: "  ".to_string(),
        }
    }

    /// Set a custom separator between key-description pairs.
    pub fn separator(mut self, sep: &str) -> Self {
        self.separator = sep.to_string();
        self
    }

    /// Add a key-description pair.
    pub fn key(mut self, key: &str, color: Color, desc: &str) -> Self {
        self.items.push((key.to_string(), color, desc.to_string()));
        self
    }

    /// Build the help text into a single styled line.
    pub fn line(self) -> Line<'static> {
        let mut spans: Vec<Span> = Vec::new();

        for (i, (key, color, desc)) in self.items.into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(self.separator.clone()));
            }
            spans.push(Span::styled(key, Style::default().fg(color)));
            spans.push(Span::raw(format!(" {}", desc)));
        }

        Line::from(spans)
    }

    /// Build the help text into a Paragraph widget.
    pub fn build(self) -> Paragraph<'static> {
        Paragraph::new(self.line())
    }
}

impl Default for HelpText {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_scroll_short_text() {
        let result = calculate_scroll("hello", 3, 20);
        assert_eq!(result.display_value, "hello");
        assert_eq!(result.cursor_pos, 3);
    }

    #[test]
    fn test_calculate_scroll_long_text() {
        let value = "/home/analyst/reports/pricing_simulation.csv";
        let result = calculate_scroll(value, 20, 15);
        assert_eq!(result.display_value.chars().count(), 13);
        assert!(result.cursor_pos <= result.display_value.chars().count());
    }

    #[test]
    fn test_render_cursor_line_middle() {
        let line = render_cursor_line("héllo", 2, "");
        let parts: Vec<&str> = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(parts, ["hé", "l", "lo"]);
    }

    #[test]
    fn test_render_cursor_line_end() {
        let line = render_cursor_line("hi", 2, "> ");
        let parts: Vec<&str> = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(parts, ["> ", "hi", " "]);
    }

    #[test]
    fn test_help_text_line() {
        let line = HelpText::new()
            .key("[Enter]", Color::Green, "Confirm")
            .separator(" | ")
            .key("[Esc]", Color::Yellow, "Cancel")
            .line();

        // key, desc, separator, key, desc
        assert_eq!(line.spans.len(), 5);
        assert_eq!(line.spans[2].content, " | ");
    }
}
