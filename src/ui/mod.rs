//! Screen rendering.
//!
//! One frame is a pure function of [`App`] state plus the terminal size:
//!
//! ```text
//! ┌──────────── gradient header: title ─────────── ☾ ┐
//! │ ╭ ◯ Create a new todo...                  + ╮    │
//! │ ╭ Search todos...                           ╮    │
//! │ ╭ ✓ list rows / placeholder                 ╮    │
//! │ │ 3 items left   All  Active  Completed  Clear│    │  (expanded)
//! │ ╰───────────────────────────────────────────╯    │
//! │ ╭ compact filter card (narrow terminals)    ╮    │
//! │ key hints                                        │
//! └──────────────────────────────────────────────────┘
//! ```
//!
//! Hit areas are re-registered on every render, so mouse dispatch always
//! matches what is on screen.

pub mod components;
mod header;
pub mod helpers;
pub mod interaction;
pub mod layout;
pub mod screen;
pub mod theme;

pub use interaction::{ClickAction, HitArea, HitAreaRegistry};
pub use layout::{breakpoints, FilterTabsVariant, LayoutContext};
pub use screen::ScreenState;
pub use theme::{Palette, ThemeMode, ThemeStore};

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::app::{App, Focus};
use crate::domain::items_left;
use components::{
    card_block, filter_tabs_height, render_add_todo, render_alert, render_filter_tabs,
    render_search_bar, render_todo_item, FilterTabsConfig, TodoItemConfig,
};
use header::render_header;

const CARD_HEIGHT: u16 = 3;

/// Render the whole screen.
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    let ctx = LayoutContext::new(area.width, area.height);
    let mode = app.theme.current();
    let palette = mode.palette();

    app.hit_areas.clear();
    frame.render_widget(
        Block::default().style(Style::default().bg(palette.background)),
        area,
    );

    let header_area = Rect {
        height: ctx.header_height().min(area.height),
        ..area
    };
    let content_width = ctx.content_width().min(area.width);
    let column = Rect {
        x: area.x + (area.width - content_width) / 2,
        y: header_area.bottom(),
        width: content_width,
        height: area.height - header_area.height,
    };

    render_header(
        frame,
        header_area,
        Rect { height: header_area.height, y: header_area.y, ..column },
        mode,
        &app.assets,
        &mut app.hit_areas,
    );

    let variant = ctx.filter_tabs_variant();
    let compact_card_height = match variant {
        FilterTabsVariant::Compact => filter_tabs_height(variant) + 2,
        FilterTabsVariant::Expanded => 0,
    };
    let [add_area, search_area, list_area, compact_area, hint_area] = Layout::vertical([
        Constraint::Length(CARD_HEIGHT),
        Constraint::Length(CARD_HEIGHT),
        Constraint::Min(3),
        Constraint::Length(compact_card_height),
        Constraint::Length(1),
    ])
    .areas(column);

    let interactive = app.alert.is_none();
    render_add_todo(
        frame,
        add_area,
        &app.draft,
        interactive && app.focus == Focus::NewTodo,
        palette,
        &mut app.hit_areas,
    );
    render_search_bar(
        frame,
        search_area,
        &app.search,
        interactive && app.focus == Focus::Search,
        palette,
        &mut app.hit_areas,
    );

    let tabs = FilterTabsConfig {
        active: app.filter,
        items_left: app.todos.as_deref().map(items_left).unwrap_or(0),
        variant,
    };
    render_list_card(frame, list_area, app, &tabs, palette);

    if variant == FilterTabsVariant::Compact && compact_area.height > 0 {
        let block = card_block(palette, false);
        let inner = block.inner(compact_area);
        frame.render_widget(block, compact_area);
        render_filter_tabs(frame, inner, &tabs, palette, &mut app.hit_areas);
    }

    frame.render_widget(
        Paragraph::new(Span::styled(
            key_hints(app),
            Style::default().fg(palette.text_secondary),
        )),
        hint_area,
    );

    if let Some(message) = &app.alert {
        render_alert(frame, area, &ctx, palette, message, &mut app.hit_areas);
    }
}

/// The list card: rows or a placeholder, and the expanded tabs at the bottom.
fn render_list_card(
    frame: &mut Frame,
    area: Rect,
    app: &mut App,
    tabs: &FilterTabsConfig,
    palette: &Palette,
) {
    let list_focused = app.alert.is_none() && app.focus == Focus::List;
    let block = card_block(palette, list_focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height == 0 {
        return;
    }

    // Expanded tabs keep their row; the separator goes first when rows run short
    let mut rows_area = inner;
    if tabs.variant == FilterTabsVariant::Expanded {
        let tabs_y = inner.bottom() - 1;
        rows_area.height -= 1;
        if inner.height >= 3 {
            rows_area.height -= 1;
            frame.render_widget(
                Paragraph::new(Span::styled(
                    "─".repeat(inner.width as usize),
                    Style::default().fg(palette.border),
                )),
                Rect::new(inner.x, tabs_y - 1, inner.width, 1),
            );
        }
        let tabs_row = Rect::new(inner.x + 1, tabs_y, inner.width.saturating_sub(2), 1);
        render_filter_tabs(frame, tabs_row, tabs, palette, &mut app.hit_areas);
    }

    let state = app.screen_state();
    let visible = state.visible_todos();
    if visible.is_empty() {
        let placeholder = state.placeholder_lines();
        let top = rows_area.y + rows_area.height.saturating_sub(placeholder.len() as u16) / 2;
        for (i, text) in placeholder.iter().enumerate() {
            let y = top + i as u16;
            if y >= rows_area.bottom() {
                break;
            }
            let style = if i == 0 {
                Style::default().fg(palette.text)
            } else {
                Style::default().fg(palette.text_secondary)
            };
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(*text, style))).centered(),
                Rect::new(rows_area.x, y, rows_area.width, 1),
            );
        }
        app.list_offset = 0;
        return;
    }

    let capacity = rows_area.height as usize;
    app.list_offset = scroll_offset(app.selected, app.list_offset, capacity, visible.len());

    for (row, (index, todo)) in visible
        .iter()
        .enumerate()
        .skip(app.list_offset)
        .take(capacity)
        .enumerate()
    {
        let editing = app
            .edit
            .as_ref()
            .filter(|session| session.is_for(&todo.id))
            .map(|session| &session.draft);
        let config = TodoItemConfig {
            todo,
            selected: index == app.selected,
            editing,
            list_focused,
        };
        let rect = Rect::new(rows_area.x, rows_area.y + row as u16, rows_area.width, 1);
        render_todo_item(frame, rect, &config, palette, &mut app.hit_areas);
    }
}

/// First visible row such that `selected` stays on screen.
pub fn scroll_offset(selected: usize, offset: usize, capacity: usize, len: usize) -> usize {
    if capacity == 0 {
        return 0;
    }
    let max_offset = len.saturating_sub(capacity);
    let offset = if selected < offset {
        selected
    } else if selected >= offset + capacity {
        selected + 1 - capacity
    } else {
        offset
    };
    offset.min(max_offset)
}

fn key_hints(app: &App) -> &'static str {
    if app.alert.is_some() {
        return "Enter/Esc dismiss";
    }
    if app.edit.is_some() {
        return "Enter save · Esc cancel";
    }
    match app.focus {
        Focus::NewTodo => "Enter add · Tab next · Ctrl+T theme · Ctrl+Q quit",
        Focus::Search => "Type to filter · Tab next · Ctrl+T theme · Ctrl+Q quit",
        Focus::List => {
            "↑↓ select · Space toggle · Enter edit · d delete · ←→ filter · C clear · Tab next"
        }
    }
}
