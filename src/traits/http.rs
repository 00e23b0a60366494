//! HTTP transport abstraction.
//!
//! The remote gateway talks to the backend exclusively through
//! [`HttpClient`], so tests can substitute a recording mock.

use async_trait::async_trait;
use bytes::Bytes;
use futures::Stream;
use std::pin::Pin;

/// Body stream of a long-lived response.
pub type ByteStream = Pin<Box<dyn Stream<Item = Result<Bytes, HttpError>> + Send>>;

/// Buffered HTTP response.
#[derive(Debug, Clone)]
pub struct Response {
    pub status: u16,
    pub body: Bytes,
}

impl Response {
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn text(&self) -> Result<String, std::string::FromUtf8Error> {
        String::from_utf8(self.body.to_vec())
    }

    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }
}

/// Transport-level failures.
#[derive(Debug, Clone, PartialEq)]
pub enum HttpError {
    ConnectionFailed(String),
    Timeout(String),
    /// Non-success status on a streaming request
    ServerError { status: u16, message: String },
    Cancelled,
    Io(String),
    InvalidUrl(String),
    Other(String),
}

impl std::fmt::Display for HttpError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HttpError::ConnectionFailed(msg) => write!(f, "Connection failed: {}", msg),
            HttpError::Timeout(msg) => write!(f, "Request timeout: {}", msg),
            HttpError::ServerError { status, message } => {
                write!(f, "Server error ({}): {}", status, message)
            }
            HttpError::Cancelled => write!(f, "Request cancelled"),
            HttpError::Io(msg) => write!(f, "IO error: {}", msg),
            HttpError::InvalidUrl(msg) => write!(f, "Invalid URL: {}", msg),
            HttpError::Other(msg) => write!(f, "HTTP error: {}", msg),
        }
    }
}

impl std::error::Error for HttpError {}

/// The two requests the remote gateway makes.
///
/// ```ignore
/// let reply = client
///     .post_json("http://localhost:3210/api/query", r#"{"path":"todos:get","args":{}}"#)
///     .await?;
/// let events = client
///     .open_event_stream("http://localhost:3210/api/subscribe?path=todos:get")
///     .await?;
/// ```
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// POST a JSON body and buffer the response, whatever its status.
    async fn post_json(&self, url: &str, body: &str) -> Result<Response, HttpError>;

    /// Open a `text/event-stream` GET whose body arrives incrementally.
    ///
    /// A non-success status is reported as [`HttpError::ServerError`] before
    /// any body is read.
    async fn open_event_stream(&self, url: &str) -> Result<ByteStream, HttpError>;
}
