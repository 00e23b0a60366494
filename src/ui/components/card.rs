//! Card block.

use ratatui::{
    style::Style,
    widgets::{Block, BorderType, Borders},
};

use crate::ui::theme::Palette;

/// Rounded card on the card background; the border takes the accent color
/// while the card holds focus.
pub fn card_block(palette: &Palette, focused: bool) -> Block<'static> {
    let border = if focused {
        palette.primary
    } else {
        palette.border
    };
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border).bg(palette.card_background))
        .style(Style::default().bg(palette.card_background).fg(palette.text))
}
