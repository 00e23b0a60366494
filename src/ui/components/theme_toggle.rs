//! Theme toggle: moon in light mode, sun in dark mode.

use ratatui::{layout::Rect, style::Style, text::Span, widgets::Paragraph, Frame};

use crate::startup::Assets;
use crate::ui::interaction::{ClickAction, HitAreaRegistry};
use crate::ui::theme::{ThemeMode, COLOR_TITLE};

/// Render the glyph right-aligned in `area` and register it as one tap
/// target.
pub fn render_theme_toggle(
    frame: &mut Frame,
    area: Rect,
    mode: ThemeMode,
    assets: &Assets,
    registry: &mut HitAreaRegistry,
) {
    if area.width < 3 || area.height == 0 {
        return;
    }
    let target = Rect::new(area.x + area.width - 3, area.y, 3, 1);
    let glyph = format!(" {} ", assets.toggle_glyph(mode));
    frame.render_widget(
        Paragraph::new(Span::styled(glyph, Style::default().fg(COLOR_TITLE))),
        target,
    );
    registry.register(target, ClickAction::ToggleTheme);
}
