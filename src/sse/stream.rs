//! Byte stream to event stream.

use std::pin::Pin;

use futures::stream::{self, Stream, StreamExt};

use super::events::{SseEvent, SseParseError};
use super::parser::SseParser;
use crate::traits::{ByteStream, HttpError};

/// Failure while reading the subscription stream.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SseStreamError {
    #[error("transport error: {0}")]
    Http(#[from] HttpError),

    #[error(transparent)]
    Parse(#[from] SseParseError),
}

pub type EventStream = Pin<Box<dyn Stream<Item = Result<SseEvent, SseStreamError>> + Send>>;

struct DecodeState {
    bytes: ByteStream,
    parser: SseParser,
    /// Raw bytes not yet terminated by a newline
    buffer: Vec<u8>,
    finished: bool,
}

impl DecodeState {
    /// Next complete line in the buffer, without its terminator.
    fn take_line(&mut self) -> Option<String> {
        let pos = self.buffer.iter().position(|b| *b == b'\n')?;
        let raw: Vec<u8> = self.buffer.drain(..=pos).collect();
        let line = String::from_utf8_lossy(&raw[..pos]);
        Some(line.trim_end_matches('\r').to_string())
    }
}

/// Decode an SSE body into typed events.
///
/// Lines are split on raw bytes so multi-byte characters spanning chunk
/// boundaries survive. The stream ends when the body ends; a trailing
/// unterminated event is flushed first.
pub fn decode_events(bytes: ByteStream) -> EventStream {
    let state = DecodeState {
        bytes,
        parser: SseParser::new(),
        buffer: Vec::new(),
        finished: false,
    };

    let events = stream::unfold(state, |mut state| async move {
        loop {
            if let Some(line) = state.take_line() {
                match state.parser.feed_line(&line) {
                    Ok(Some(event)) => return Some((Ok(event), state)),
                    Ok(None) => continue,
                    Err(e) => return Some((Err(e.into()), state)),
                }
            }

            if state.finished {
                return None;
            }

            match state.bytes.next().await {
                Some(Ok(chunk)) => state.buffer.extend_from_slice(&chunk),
                Some(Err(e)) => {
                    state.finished = true;
                    return Some((Err(e.into()), state));
                }
                None => {
                    state.finished = true;
                    // Terminate the last line and the last event
                    if !state.buffer.is_empty() {
                        state.buffer.push(b'\n');
                    }
                    state.buffer.push(b'\n');
                }
            }
        }
    });

    Box::pin(events)
}
