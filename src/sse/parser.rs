//! SSE line parsing.

use serde::Deserialize;

use super::events::{SseEvent, SseLine, SseParseError, ERROR_EVENT, PING_EVENT, SNAPSHOT_EVENT};
use crate::models::Todo;

#[derive(Deserialize)]
struct ErrorPayload {
    message: String,
}

/// Parse a single SSE line into its component type
pub fn parse_sse_line(line: &str) -> SseLine {
    if line.is_empty() {
        return SseLine::Empty;
    }

    if let Some(stripped) = line.strip_prefix(':') {
        return SseLine::Comment(stripped.trim().to_string());
    }

    if let Some(rest) = line.strip_prefix("event:") {
        return SseLine::Event(rest.trim().to_string());
    }

    if let Some(rest) = line.strip_prefix("data:") {
        return SseLine::Data(rest.trim().to_string());
    }

    // Unknown field names are ignored by the SSE format
    SseLine::Comment(line.to_string())
}

/// Parse an event type and its data into a typed [`SseEvent`].
pub fn parse_sse_event(event_type: &str, data: &str) -> Result<SseEvent, SseParseError> {
    let invalid = |e: serde_json::Error| SseParseError::InvalidJson {
        event_type: event_type.to_string(),
        message: e.to_string(),
    };

    match event_type {
        SNAPSHOT_EVENT => {
            let todos: Vec<Todo> = serde_json::from_str(data).map_err(invalid)?;
            Ok(SseEvent::Snapshot(todos))
        }
        ERROR_EVENT => {
            let payload: ErrorPayload = serde_json::from_str(data).map_err(invalid)?;
            Ok(SseEvent::Error {
                message: payload.message,
            })
        }
        PING_EVENT => Ok(SseEvent::Ping),
        other => {
            tracing::trace!(event_type = other, "unknown subscription event ignored");
            Ok(SseEvent::Ping)
        }
    }
}

/// Stateful SSE parser that accumulates lines and emits complete events
#[derive(Debug, Default)]
pub struct SseParser {
    current_event_type: Option<String>,
    /// SSE allows multiple data: lines per event
    data_buffer: Vec<String>,
}

impl SseParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a line to the parser, potentially returning a complete event
    ///
    /// Returns:
    /// - `Ok(Some(event))` - A complete event was parsed
    /// - `Ok(None)` - Line was consumed but event is incomplete
    /// - `Err(error)` - Parse error occurred
    pub fn feed_line(&mut self, line: &str) -> Result<Option<SseEvent>, SseParseError> {
        match parse_sse_line(line) {
            SseLine::Event(event_type) => {
                self.current_event_type = Some(event_type);
                Ok(None)
            }
            SseLine::Data(data) => {
                self.data_buffer.push(data);
                Ok(None)
            }
            SseLine::Empty => self.try_emit_event(),
            SseLine::Comment(_) => Ok(None),
        }
    }

    fn try_emit_event(&mut self) -> Result<Option<SseEvent>, SseParseError> {
        if self.current_event_type.is_none() && self.data_buffer.is_empty() {
            return Ok(None);
        }

        // Default SSE event type is "message", which this stream never uses
        let event_type = self
            .current_event_type
            .take()
            .unwrap_or_else(|| "message".to_string());
        let data = self.data_buffer.join("\n");
        self.data_buffer.clear();

        if data.is_empty() {
            if event_type == SNAPSHOT_EVENT || event_type == ERROR_EVENT {
                return Err(SseParseError::MissingData { event_type });
            }
            return Ok(Some(SseEvent::Ping));
        }
        parse_sse_event(&event_type, &data).map(Some)
    }

    /// Drop any partially accumulated event.
    pub fn reset(&mut self) {
        self.current_event_type = None;
        self.data_buffer.clear();
    }
}
