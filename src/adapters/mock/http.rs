//! Mock HTTP client for testing.
//!
//! Function calls are answered by the response registered for their `path`,
//! falling back to the default. Event streams are answered from a queue,
//! one entry per connection attempt, falling back to the default.

use async_trait::async_trait;
use bytes::Bytes;
use futures::stream::{self, StreamExt};
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::traits::{ByteStream, HttpClient, HttpError, Response};

/// A recorded HTTP request for verification in tests.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// "GET" or "POST"
    pub method: String,
    pub url: String,
    /// Request body (POST only)
    pub body: Option<String>,
}

impl RecordedRequest {
    /// The body parsed as JSON, if it is JSON.
    pub fn json_body(&self) -> Option<serde_json::Value> {
        self.body
            .as_deref()
            .and_then(|b| serde_json::from_str(b).ok())
    }

    /// The `path` field of a function-call body.
    pub fn function_path(&self) -> Option<String> {
        self.json_body()?
            .get("path")?
            .as_str()
            .map(str::to_string)
    }
}

/// Configuration for a mock response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    Success(Response),
    Error(HttpError),
    /// Byte chunks, then the body ends
    Stream(Vec<Bytes>),
    /// Byte chunks, then the body stays open without further data
    OpenStream(Vec<Bytes>),
    /// Chunks followed by a transport error mid-body
    BrokenStream(Vec<Bytes>, HttpError),
}

#[derive(Debug, Default)]
struct MockState {
    function_responses: HashMap<String, MockResponse>,
    stream_queue: VecDeque<MockResponse>,
    default_response: Option<MockResponse>,
    requests: Vec<RecordedRequest>,
}

/// Mock HTTP client for testing.
///
/// Clones share configuration and the request log.
///
/// ```ignore
/// let client = MockHttpClient::new();
/// client.set_function_response(
///     "todos:create",
///     MockResponse::Success(Response::new(200, r#"{"status":"success","value":"a"}"#)),
/// );
/// let gateway = RemoteGateway::new(client.clone(), "http://backend");
/// gateway.create("Buy milk").await?;
/// assert_eq!(client.get_requests()[0].function_path().as_deref(), Some("todos:create"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockHttpClient {
    state: Arc<Mutex<MockState>>,
}

impl MockHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Answer function calls naming `path`.
    pub fn set_function_response(&self, path: &str, response: MockResponse) {
        self.lock()
            .function_responses
            .insert(path.to_string(), response);
    }

    /// Queue the answer to the next event-stream connection.
    pub fn push_stream(&self, response: MockResponse) {
        self.lock().stream_queue.push_back(response);
    }

    /// Answer for anything without a specific response.
    pub fn set_default_response(&self, response: MockResponse) {
        self.lock().default_response = Some(response);
    }

    pub fn get_requests(&self) -> Vec<RecordedRequest> {
        self.lock().requests.clone()
    }

    /// Recorded requests with the given method.
    pub fn requests_with_method(&self, method: &str) -> Vec<RecordedRequest> {
        self.lock()
            .requests
            .iter()
            .filter(|r| r.method == method)
            .cloned()
            .collect()
    }

    fn record(&self, request: RecordedRequest) {
        self.lock().requests.push(request);
    }
}

fn missing(url: &str) -> HttpError {
    HttpError::Other(format!("No mock response for URL: {}", url))
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn post_json(&self, url: &str, body: &str) -> Result<Response, HttpError> {
        let request = RecordedRequest {
            method: "POST".to_string(),
            url: url.to_string(),
            body: Some(body.to_string()),
        };
        let path = request.function_path();
        self.record(request);

        let response = {
            let state = self.lock();
            let found = path
                .and_then(|p| state.function_responses.get(&p).cloned())
                .or_else(|| state.default_response.clone());
            found
        };
        match response {
            Some(MockResponse::Success(response)) => Ok(response),
            Some(MockResponse::Error(err)) => Err(err),
            Some(_) => Err(HttpError::Other(
                "Stream response on a function call".to_string(),
            )),
            None => Err(missing(url)),
        }
    }

    async fn open_event_stream(&self, url: &str) -> Result<ByteStream, HttpError> {
        self.record(RecordedRequest {
            method: "GET".to_string(),
            url: url.to_string(),
            body: None,
        });

        let response = {
            let mut state = self.lock();
            let found = match state.stream_queue.pop_front() {
                Some(queued) => Some(queued),
                None => state.default_response.clone(),
            };
            found
        };
        match response {
            Some(MockResponse::Stream(chunks)) => {
                Ok(Box::pin(stream::iter(chunks.into_iter().map(Ok))))
            }
            Some(MockResponse::OpenStream(chunks)) => Ok(Box::pin(
                stream::iter(chunks.into_iter().map(Ok)).chain(stream::pending()),
            )),
            Some(MockResponse::BrokenStream(chunks, err)) => Ok(Box::pin(
                stream::iter(chunks.into_iter().map(Ok)).chain(stream::once(async move { Err(err) })),
            )),
            Some(MockResponse::Error(err)) => Err(err),
            Some(MockResponse::Success(response)) => Err(HttpError::ServerError {
                status: response.status,
                message: response.text().unwrap_or_default(),
            }),
            None => Err(missing(url)),
        }
    }
}
