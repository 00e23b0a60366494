//! Gradient header: per-theme banner texture, title and theme toggle.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use super::components::render_theme_toggle;
use super::interaction::HitAreaRegistry;
use super::theme::{gradient_at, ThemeMode, COLOR_TITLE};
use crate::startup::Assets;

/// Render the header across `area`, aligning the title and toggle with the
/// content column `content`.
pub fn render_header(
    frame: &mut Frame,
    area: Rect,
    content: Rect,
    mode: ThemeMode,
    assets: &Assets,
    registry: &mut HitAreaRegistry,
) {
    if area.height == 0 || area.width == 0 {
        return;
    }

    paint_gradient(frame.buffer_mut(), area, assets.banner(mode));

    let title: Vec<&str> = assets.title().lines().collect();
    let title_rows = if title.len() as u16 <= area.height.saturating_sub(2) {
        title.len() as u16
    } else {
        1
    };
    let top = area.y + area.height.saturating_sub(title_rows) / 2;
    let style = Style::default()
        .fg(COLOR_TITLE)
        .add_modifier(Modifier::BOLD);

    for (offset, line) in title.iter().take(title_rows as usize).enumerate() {
        let row = Rect::new(
            content.x,
            top + offset as u16,
            (line.width() as u16).min(content.width.saturating_sub(4)),
            1,
        );
        frame.render_widget(Paragraph::new(Span::styled(line.to_string(), style)), row);
    }

    let toggle_row = Rect::new(content.x, top, content.width, 1);
    render_theme_toggle(frame, toggle_row, mode, assets, registry);
}

/// Fill `area` with the horizontal gradient and the banner texture.
fn paint_gradient(buf: &mut Buffer, area: Rect, banner: &str) {
    let lines: Vec<Vec<char>> = banner
        .lines()
        .map(|l| l.chars().collect())
        .filter(|l: &Vec<char>| !l.is_empty())
        .collect();
    let span = area.width.saturating_sub(1).max(1) as f32;

    for dy in 0..area.height {
        let pattern = if lines.is_empty() {
            None
        } else {
            Some(&lines[dy as usize % lines.len()])
        };
        for dx in 0..area.width {
            let bg = gradient_at(dx as f32 / span);
            let cell = &mut buf[(area.x + dx, area.y + dy)];
            let symbol = pattern.map(|p| p[dx as usize % p.len()]).unwrap_or(' ');
            cell.set_char(symbol)
                .set_style(Style::default().bg(bg).fg(gradient_at(1.0 - dx as f32 / span)));
        }
    }
}
