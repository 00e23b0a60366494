//! Event types of the subscription stream.

use crate::models::Todo;

/// Event name carrying a full result snapshot.
pub const SNAPSHOT_EVENT: &str = "snapshot";
/// Event name carrying a backend error.
pub const ERROR_EVENT: &str = "error";
/// Heartbeat event name.
pub const PING_EVENT: &str = "ping";

/// Typed events of the `todos:get` subscription.
#[derive(Debug, Clone, PartialEq)]
pub enum SseEvent {
    /// The complete ordered list, replacing any earlier one
    Snapshot(Vec<Todo>),
    /// The backend gave up on the subscription
    Error { message: String },
    /// Heartbeat, or an event this client does not know
    Ping,
}

impl SseEvent {
    pub fn event_type_name(&self) -> &'static str {
        match self {
            SseEvent::Snapshot(_) => SNAPSHOT_EVENT,
            SseEvent::Error { .. } => ERROR_EVENT,
            SseEvent::Ping => PING_EVENT,
        }
    }
}

/// A single classified line of the stream.
#[derive(Debug, Clone, PartialEq)]
pub enum SseLine {
    /// Event type declaration (e.g., "event: snapshot")
    Event(String),
    /// Data payload (e.g., "data: [...]")
    Data(String),
    /// Empty line - signals end of event
    Empty,
    /// Comment line (starts with ':')
    Comment(String),
}

/// Errors that can occur during SSE parsing.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SseParseError {
    #[error("Invalid JSON for event '{event_type}': {message}")]
    InvalidJson { event_type: String, message: String },

    #[error("Missing data for event type: {event_type}")]
    MissingData { event_type: String },
}
