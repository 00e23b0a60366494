//! Filter tabs, items-left counter and "Clear Completed".

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::models::StatusFilter;
use crate::ui::interaction::{ClickAction, HitAreaRegistry};
use crate::ui::layout::FilterTabsVariant;
use crate::ui::theme::Palette;

pub const CLEAR_COMPLETED_LABEL: &str = "Clear Completed";

const TAB_GAP: u16 = 3;

/// Inputs of one filter tabs render.
#[derive(Debug, Clone, Copy)]
pub struct FilterTabsConfig {
    pub active: StatusFilter,
    /// Incomplete todos in the full list, not the visible subset
    pub items_left: usize,
    pub variant: FilterTabsVariant,
}

pub fn items_left_label(items_left: usize) -> String {
    format!("{} items left", items_left)
}

/// Rows the tabs occupy, not counting any surrounding card.
pub fn filter_tabs_height(variant: FilterTabsVariant) -> u16 {
    match variant {
        FilterTabsVariant::Compact => 2,
        FilterTabsVariant::Expanded => 1,
    }
}

/// Draw `text` at `x` on `row`, clipped to `row`. Returns the drawn rect.
fn put(frame: &mut Frame, row: Rect, x: u16, text: &str, style: Style) -> Rect {
    let rect = Rect::new(x, row.y, text.width() as u16, 1).intersection(row);
    frame.render_widget(Paragraph::new(Span::styled(text.to_string(), style)), rect);
    rect
}

/// Render the three filter labels centered in `row`.
fn render_tabs_row(
    frame: &mut Frame,
    row: Rect,
    active: StatusFilter,
    palette: &Palette,
    registry: &mut HitAreaRegistry,
) {
    let total: u16 = StatusFilter::ALL
        .iter()
        .map(|f| f.label().width() as u16)
        .sum::<u16>()
        + TAB_GAP * (StatusFilter::ALL.len() as u16 - 1);

    let mut x = row.x + row.width.saturating_sub(total) / 2;
    for filter in StatusFilter::ALL {
        let style = if filter == active {
            Style::default()
                .fg(palette.primary)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.text_secondary)
        };
        let rect = put(frame, row, x, filter.label(), style);
        registry.register(rect, ClickAction::SelectFilter(filter));
        x = x.saturating_add(filter.label().width() as u16 + TAB_GAP);
    }
}

/// Render counter (left) and "Clear Completed" (right) in `row`.
fn render_counter_row(
    frame: &mut Frame,
    row: Rect,
    items_left: usize,
    palette: &Palette,
    registry: &mut HitAreaRegistry,
) {
    let secondary = Style::default().fg(palette.text_secondary);
    put(frame, row, row.x, &items_left_label(items_left), secondary);

    let clear_width = CLEAR_COMPLETED_LABEL.width() as u16;
    let clear_x = row.x + row.width.saturating_sub(clear_width);
    let rect = put(frame, row, clear_x, CLEAR_COMPLETED_LABEL, secondary);
    registry.register(rect, ClickAction::ClearCompleted);
}

/// Render the tabs into `area` using the configured variant.
///
/// Expanded puts everything on one row; compact puts the counter and
/// "Clear Completed" on the first row and the filters on the second.
pub fn render_filter_tabs(
    frame: &mut Frame,
    area: Rect,
    config: &FilterTabsConfig,
    palette: &Palette,
    registry: &mut HitAreaRegistry,
) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let first = Rect { height: 1, ..area };

    match config.variant {
        FilterTabsVariant::Expanded => {
            render_counter_row(frame, first, config.items_left, palette, registry);
            render_tabs_row(frame, first, config.active, palette, registry);
        }
        FilterTabsVariant::Compact => {
            render_counter_row(frame, first, config.items_left, palette, registry);
            if area.height >= 2 {
                let second = Rect {
                    y: area.y + 1,
                    height: 1,
                    ..area
                };
                render_tabs_row(frame, second, config.active, palette, registry);
            }
        }
    }
}
