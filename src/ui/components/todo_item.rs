//! One list row.
//!
//! Read-only: `◯ text` (or `✓ text` struck through), plus `×` when the row
//! is selected. Editing: the checkbox, an inline input and a Save button.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use super::input_field::{render_input_field, InputFieldConfig};
use crate::domain::InputBuffer;
use crate::models::Todo;
use crate::ui::helpers::truncate_to_width;
use crate::ui::interaction::{ClickAction, HitAreaRegistry};
use crate::ui::theme::Palette;

pub const UNCHECKED: &str = "◯";
pub const CHECKED: &str = "✓";
pub const DELETE_GLYPH: &str = "×";
pub const SAVE_LABEL: &str = "Save";

#[derive(Debug, Clone)]
pub struct TodoItemConfig<'a> {
    pub todo: &'a Todo,
    pub selected: bool,
    /// Draft when this row holds the edit session
    pub editing: Option<&'a InputBuffer>,
    /// Whether keyboard focus is on the list
    pub list_focused: bool,
}

pub fn render_todo_item(
    frame: &mut Frame,
    row: Rect,
    config: &TodoItemConfig,
    palette: &Palette,
    registry: &mut HitAreaRegistry,
) {
    if row.width < 8 || row.height == 0 {
        return;
    }
    let row = Rect { height: 1, ..row };
    let todo = config.todo;

    if config.selected && config.list_focused {
        frame.render_widget(
            Block::default().style(Style::default().bg(palette.background)),
            row,
        );
    }

    let checkbox = Rect::new(row.x, row.y, 3, 1);
    let (mark, mark_style) = if todo.completed {
        (CHECKED, Style::default().fg(palette.primary).add_modifier(Modifier::BOLD))
    } else {
        (UNCHECKED, Style::default().fg(palette.border))
    };
    frame.render_widget(
        Paragraph::new(Span::styled(format!(" {} ", mark), mark_style)),
        checkbox,
    );
    registry.register(checkbox, ClickAction::ToggleTodo(todo.id.clone()));

    let body = Rect::new(row.x + 4, row.y, row.width - 4, 1);

    match config.editing {
        Some(draft) => {
            let save_width = SAVE_LABEL.width() as u16 + 2;
            let save = Rect::new(body.x + body.width.saturating_sub(save_width), row.y, save_width, 1);
            let field = Rect::new(body.x, row.y, body.width.saturating_sub(save_width + 1), 1);

            frame.render_widget(
                Block::default().style(Style::default().bg(palette.background)),
                field,
            );
            let input = InputFieldConfig::new(draft.text(), draft.cursor()).focused(true);
            render_input_field(frame, field, &input, palette);
            registry.register(field, ClickAction::FocusEdit);

            frame.render_widget(
                Paragraph::new(Span::styled(
                    format!(" {} ", SAVE_LABEL),
                    Style::default()
                        .fg(palette.primary)
                        .add_modifier(Modifier::BOLD),
                )),
                save,
            );
            registry.register(save, ClickAction::SaveEdit);
        }
        None => {
            let show_delete = config.selected;
            let text_width = body.width.saturating_sub(if show_delete { 3 } else { 0 });
            let text_rect = Rect::new(body.x, row.y, text_width, 1);

            let text_style = if todo.completed {
                Style::default()
                    .fg(palette.completed)
                    .add_modifier(Modifier::CROSSED_OUT)
            } else if config.selected && config.list_focused {
                Style::default().fg(palette.text).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(palette.text)
            };
            frame.render_widget(
                Paragraph::new(Span::styled(
                    truncate_to_width(&todo.text, text_width as usize),
                    text_style,
                )),
                text_rect,
            );
            registry.register(text_rect, ClickAction::EditTodo(todo.id.clone()));

            if show_delete {
                let delete = Rect::new(row.x + row.width - 3, row.y, 3, 1);
                frame.render_widget(
                    Paragraph::new(Span::styled(
                        format!(" {} ", DELETE_GLYPH),
                        Style::default().fg(palette.text_secondary),
                    )),
                    delete,
                );
                registry.register(delete, ClickAction::DeleteTodo(todo.id.clone()));
            }
        }
    }
}
