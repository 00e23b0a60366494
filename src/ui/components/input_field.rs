//! Input Field Component
//!
//! A single-row text field: placeholder when empty, horizontal scrolling to
//! keep the cursor visible, terminal cursor placed while focused.

use ratatui::{
    layout::{Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::ui::helpers::{scroll_to_cursor, truncate_to_width};
use crate::ui::theme::Palette;

/// Configuration for rendering an input field
#[derive(Debug, Clone)]
pub struct InputFieldConfig<'a> {
    pub value: &'a str,
    /// Cursor position in chars
    pub cursor: usize,
    pub focused: bool,
    pub placeholder: Option<&'a str>,
}

impl<'a> InputFieldConfig<'a> {
    pub fn new(value: &'a str, cursor: usize) -> Self {
        Self {
            value,
            cursor,
            focused: false,
            placeholder: None,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }
}

/// Render the field into the first row of `area`.
pub fn render_input_field(
    frame: &mut Frame,
    area: Rect,
    config: &InputFieldConfig,
    palette: &Palette,
) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let row = Rect { height: 1, ..area };
    let width = row.width as usize;

    let (line, cursor_col) = match config.placeholder {
        Some(placeholder) if config.value.is_empty() => (
            Line::from(Span::styled(
                truncate_to_width(placeholder, width),
                Style::default().fg(palette.placeholder),
            )),
            0,
        ),
        _ => {
            let (shown, col) = scroll_to_cursor(config.value, config.cursor, width);
            (
                Line::from(Span::styled(shown, Style::default().fg(palette.text))),
                col,
            )
        }
    };

    frame.render_widget(Paragraph::new(line), row);

    if config.focused {
        let x = row.x + (cursor_col as u16).min(row.width.saturating_sub(1));
        frame.set_cursor_position(Position::new(x, row.y));
    }
}
