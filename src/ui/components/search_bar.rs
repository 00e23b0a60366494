//! Search card.

use ratatui::{layout::Rect, style::Style, widgets::Block, Frame};

use super::card::card_block;
use super::input_field::{render_input_field, InputFieldConfig};
use crate::domain::InputBuffer;
use crate::ui::interaction::{ClickAction, HitAreaRegistry};
use crate::ui::theme::Palette;

pub const SEARCH_PLACEHOLDER: &str = "Search todos...";

/// Render the search card (3 rows). The field sits on the page background
/// color inside the card.
pub fn render_search_bar(
    frame: &mut Frame,
    area: Rect,
    search: &InputBuffer,
    focused: bool,
    palette: &Palette,
    registry: &mut HitAreaRegistry,
) {
    let block = card_block(palette, focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    registry.register(area, ClickAction::FocusSearch);

    if inner.width < 4 || inner.height == 0 {
        return;
    }

    let well = Rect::new(inner.x + 1, inner.y, inner.width - 2, 1);
    frame.render_widget(
        Block::default().style(Style::default().bg(palette.background)),
        well,
    );

    let field = Rect::new(well.x + 1, well.y, well.width.saturating_sub(2), 1);
    let config = InputFieldConfig::new(search.text(), search.cursor())
        .focused(focused)
        .placeholder(SEARCH_PLACEHOLDER);
    render_input_field(frame, field, &config, palette);
}
