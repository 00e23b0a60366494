//! Modal error alert.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use super::dialog_frame::{render_dialog_frame, DialogFrameConfig};
use crate::ui::interaction::{ClickAction, HitAreaRegistry};
use crate::ui::layout::LayoutContext;
use crate::ui::theme::Palette;

pub const ALERT_TITLE: &str = "Error";
const OK_LABEL: &str = "[ OK ]";

/// Render `message` in a centered dialog with an OK button.
///
/// The whole screen is registered as a dismiss target last, under the
/// dialog, so a pending alert captures every click.
pub fn render_alert(
    frame: &mut Frame,
    area: Rect,
    ctx: &LayoutContext,
    palette: &Palette,
    message: &str,
    registry: &mut HitAreaRegistry,
) {
    registry.clear();
    registry.register(area, ClickAction::DismissAlert);

    let config = DialogFrameConfig::new(ALERT_TITLE, 4);
    let inner = render_dialog_frame(frame, area, ctx, palette, &config);
    if inner.height == 0 {
        return;
    }

    let text = Paragraph::new(Line::from(Span::styled(
        message.to_string(),
        Style::default().fg(palette.text),
    )))
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });
    frame.render_widget(text, Rect { height: inner.height.min(2), ..inner });

    let ok_width = OK_LABEL.width() as u16;
    let ok = Rect::new(
        inner.x + inner.width.saturating_sub(ok_width) / 2,
        inner.y + inner.height - 1,
        ok_width.min(inner.width),
        1,
    );
    frame.render_widget(
        Paragraph::new(Span::styled(
            OK_LABEL,
            Style::default()
                .fg(palette.primary)
                .add_modifier(Modifier::BOLD),
        )),
        ok,
    );
}
