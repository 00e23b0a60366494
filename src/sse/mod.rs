//! Server-Sent Events for the live `todos:get` subscription.
//!
//! Wire format:
//! - `event: <type>` - event type line
//! - `data: <json>` - data payload line
//! - Empty line - signals end of event
//! - Lines starting with `:` - comments (keep-alives, ignored)
//!
//! # Module structure
//! - `events` - [`SseEvent`], [`SseLine`], [`SseParseError`]
//! - `parser` - line classification and the stateful [`SseParser`]
//! - `stream` - turns a body [`ByteStream`](crate::traits::ByteStream) into events

mod events;
mod parser;
mod stream;

pub use events::{SseEvent, SseLine, SseParseError, ERROR_EVENT, PING_EVENT, SNAPSHOT_EVENT};
pub use parser::{parse_sse_event, parse_sse_line, SseParser};
pub use stream::{decode_events, EventStream, SseStreamError};
