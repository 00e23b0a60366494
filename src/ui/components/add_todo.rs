//! New-todo card: empty checkbox, input, add button.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    widgets::Paragraph,
    Frame,
};

use super::card::card_block;
use super::input_field::{render_input_field, InputFieldConfig};
use crate::domain::InputBuffer;
use crate::ui::interaction::{ClickAction, HitAreaRegistry};
use crate::ui::theme::Palette;

pub const ADD_PLACEHOLDER: &str = "Create a new todo...";

/// Render the card (3 rows).
pub fn render_add_todo(
    frame: &mut Frame,
    area: Rect,
    draft: &InputBuffer,
    focused: bool,
    palette: &Palette,
    registry: &mut HitAreaRegistry,
) {
    let block = card_block(palette, focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    registry.register(area, ClickAction::FocusNewTodo);

    if inner.width < 8 || inner.height == 0 {
        return;
    }

    let checkbox = Rect::new(inner.x + 1, inner.y, 2, 1);
    frame.render_widget(
        Paragraph::new(Span::styled("◯", Style::default().fg(palette.border))),
        checkbox,
    );

    let button = Rect::new(inner.x + inner.width - 3, inner.y, 3, 1);
    frame.render_widget(
        Paragraph::new(Span::styled(
            " + ",
            Style::default()
                .fg(palette.primary)
                .add_modifier(Modifier::BOLD),
        )),
        button,
    );
    registry.register(button, ClickAction::AddTodo);

    let field = Rect::new(inner.x + 4, inner.y, inner.width.saturating_sub(8), 1);
    let config = InputFieldConfig::new(draft.text(), draft.cursor())
        .focused(focused)
        .placeholder(ADD_PLACEHOLDER);
    render_input_field(frame, field, &config, palette);
}
