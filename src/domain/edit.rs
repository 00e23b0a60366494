//! Text normalization and the single inline edit session.

use crate::domain::input::InputBuffer;
use crate::models::TodoId;

/// Trim user input; `None` when nothing but whitespace remains.
///
/// Every create and rename goes through this before reaching the gateway,
/// so blank text is never written.
pub fn normalize_text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// The one todo currently being edited in place, with its draft text.
///
/// At most one session exists at a time: starting a new one replaces the
/// old one and its unsaved draft is dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    pub id: TodoId,
    pub draft: InputBuffer,
}

impl EditSession {
    pub fn new(id: TodoId, text: &str) -> Self {
        Self {
            id,
            draft: InputBuffer::with_text(text),
        }
    }

    pub fn is_for(&self, id: &TodoId) -> bool {
        &self.id == id
    }

    /// The text to commit, or `None` if the draft is blank.
    pub fn commit_text(&self) -> Option<String> {
        normalize_text(self.draft.text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_trims() {
        assert_eq!(normalize_text("  Buy milk  "), Some("Buy milk".to_string()));
    }

    #[test]
    fn test_normalize_rejects_whitespace() {
        assert_eq!(normalize_text(""), None);
        assert_eq!(normalize_text("   "), None);
        assert_eq!(normalize_text("\t \u{00a0}"), None);
    }

    #[test]
    fn test_session_starts_with_current_text() {
        let session = EditSession::new(TodoId::new("a"), "Walk");
        assert_eq!(session.draft.text(), "Walk");
        assert_eq!(session.draft.cursor(), 4);
        assert!(session.is_for(&TodoId::new("a")));
        assert!(!session.is_for(&TodoId::new("b")));
    }

    #[test]
    fn test_commit_text_blank_is_none() {
        let mut session = EditSession::new(TodoId::new("a"), "x");
        session.draft.clear();
        session.draft.insert_str("   ");
        assert_eq!(session.commit_text(), None);
    }
}
