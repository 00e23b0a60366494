//! Text fitting helpers.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncate `text` to at most `max_width` display columns, ending with `…`
/// when cut.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// The slice of `text` to display in a field `width` columns wide so that
/// the char at `cursor` stays visible.
///
/// Returns the visible text and the cursor's column within it.
pub fn scroll_to_cursor(text: &str, cursor: usize, width: usize) -> (String, usize) {
    if width == 0 {
        return (String::new(), 0);
    }
    let chars: Vec<char> = text.chars().collect();
    let cursor = cursor.min(chars.len());

    // Walk left from the cursor until the field (minus the cursor cell) is full
    let mut start = cursor;
    let mut used = 1;
    while start > 0 {
        let w = chars[start - 1].width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        start -= 1;
    }

    let cursor_col: usize = chars[start..cursor]
        .iter()
        .map(|c| c.width().unwrap_or(0))
        .sum();

    let mut shown = String::new();
    let mut col = 0;
    for &c in &chars[start..] {
        let w = c.width().unwrap_or(0);
        if col + w > width {
            break;
        }
        shown.push(c);
        col += w;
    }
    (shown, cursor_col)
}

/// Pad `left` and `right` apart to exactly `width` columns.
///
/// Falls back to `left` alone when both do not fit.
pub fn spread(left: &str, right: &str, width: usize) -> String {
    let used = left.width() + right.width();
    if used + 1 > width {
        return truncate_to_width(left, width);
    }
    format!("{}{}{}", left, " ".repeat(width - used), right)
}
