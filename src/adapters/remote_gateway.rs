//! Gateway backed by the HTTP function-call protocol.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use futures_util::StreamExt;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use tokio::sync::watch;

use crate::error::{GatewayError, GatewayResult};
use crate::models::{Todo, TodoId};
use crate::protocol::{paths, FunctionCall, FunctionResult, MUTATION_ROUTE, QUERY_ROUTE, SUBSCRIBE_ROUTE};
use crate::sse::{decode_events, SseEvent, SseStreamError};
use crate::traits::{HttpClient, LiveQuery, Snapshot, TodoGateway};

/// Delay before re-opening a dropped subscription.
pub const DEFAULT_RECONNECT_DELAY: Duration = Duration::from_millis(2000);

/// [`TodoGateway`] talking to a backend over HTTP.
///
/// Queries and mutations are `POST`s of a [`FunctionCall`]; the live list is
/// an SSE subscription read by a background task.
pub struct RemoteGateway<C: HttpClient> {
    client: Arc<C>,
    base_url: String,
    reconnect_delay: Duration,
}

impl<C: HttpClient> std::fmt::Debug for RemoteGateway<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RemoteGateway")
            .field("base_url", &self.base_url)
            .field("reconnect_delay", &self.reconnect_delay)
            .finish()
    }
}

impl<C: HttpClient + 'static> RemoteGateway<C> {
    pub fn new(client: C, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: Arc::new(client),
            base_url,
            reconnect_delay: DEFAULT_RECONNECT_DELAY,
        }
    }

    pub fn with_reconnect_delay(mut self, delay: Duration) -> Self {
        self.reconnect_delay = delay;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// POST one function call and unwrap the result envelope.
    async fn call<T: DeserializeOwned>(&self, route: &str, path: &str, args: Value) -> GatewayResult<T> {
        let url = format!("{}{}", self.base_url, route);
        let body = serde_json::to_string(&FunctionCall::new(path, args))?;

        tracing::debug!(%path, "calling backend function");
        let response = self.client.post_json(&url, &body).await?;

        let value = match response.json::<FunctionResult>() {
            Ok(FunctionResult::Success { value }) => value,
            Ok(FunctionResult::Error { error_message }) => {
                return Err(GatewayError::Rejected {
                    path: path.to_string(),
                    message: error_message,
                })
            }
            Err(_) if !response.is_success() => {
                return Err(GatewayError::Backend {
                    status: response.status,
                    message: response.text().unwrap_or_default(),
                })
            }
            Err(e) => return Err(e.into()),
        };

        Ok(serde_json::from_value(value)?)
    }

    async fn mutate(&self, path: &str, args: Value) -> GatewayResult<()> {
        self.call::<Value>(MUTATION_ROUTE, path, args)
            .await
            .map(|_| ())
            .map_err(|e| {
                tracing::warn!(
                    %path,
                    code = e.error_code(),
                    retryable = e.is_retryable(),
                    error = %e,
                    "mutation failed"
                );
                e
            })
    }

    /// One-shot `todos:get`.
    pub async fn fetch(&self) -> GatewayResult<Vec<Todo>> {
        self.call(QUERY_ROUTE, paths::GET, json!({})).await
    }

    fn subscribe_url(&self) -> String {
        format!("{}{}?path={}", self.base_url, SUBSCRIBE_ROUTE, paths::GET)
    }
}

/// Read snapshots into `tx` until every receiver is gone, reconnecting
/// after `delay` whenever the stream ends or fails.
async fn run_subscription<C: HttpClient>(
    client: Arc<C>,
    url: String,
    tx: watch::Sender<Snapshot>,
    delay: Duration,
) {
    loop {
        match client.open_event_stream(&url).await {
            Ok(body) => {
                tracing::debug!(%url, "subscription opened");
                let mut events = decode_events(body);
                while let Some(event) = events.next().await {
                    match event {
                        Ok(SseEvent::Snapshot(todos)) => {
                            tracing::trace!(count = todos.len(), "snapshot received");
                            tx.send_replace(Some(todos));
                        }
                        Ok(SseEvent::Ping) => {}
                        Ok(SseEvent::Error { message }) => {
                            tracing::warn!(%message, "backend ended subscription");
                            break;
                        }
                        Err(SseStreamError::Parse(e)) => {
                            tracing::warn!(error = %e, "skipping malformed event");
                        }
                        Err(SseStreamError::Http(e)) => {
                            tracing::warn!(error = %e, "subscription stream failed");
                        }
                    }
                }
            }
            Err(e) => {
                let err = GatewayError::from(e);
                tracing::warn!(
                    code = err.error_code(),
                    retryable = err.is_retryable(),
                    error = %err,
                    "subscription failed to open"
                );
            }
        }

        if tx.is_closed() {
            return;
        }
        tokio::time::sleep(delay).await;
    }
}

#[async_trait]
impl<C: HttpClient + 'static> TodoGateway for RemoteGateway<C> {
    /// Must be called inside a tokio runtime.
    fn list(&self) -> LiveQuery {
        let (tx, rx) = watch::channel(None);
        let task = tokio::spawn(run_subscription(
            Arc::clone(&self.client),
            self.subscribe_url(),
            tx,
            self.reconnect_delay,
        ));
        LiveQuery::with_task(rx, task)
    }

    async fn create(&self, text: &str) -> GatewayResult<TodoId> {
        self.call(MUTATION_ROUTE, paths::CREATE, json!({ "text": text }))
            .await
            .map_err(|e| {
                tracing::warn!(
                    code = e.error_code(),
                    retryable = e.is_retryable(),
                    error = %e,
                    "create failed"
                );
                e
            })
    }

    async fn set_completion(&self, id: &TodoId, completed: bool) -> GatewayResult<()> {
        self.mutate(paths::UPDATE, json!({ "id": id, "completed": completed }))
            .await
    }

    async fn rename(&self, id: &TodoId, text: &str) -> GatewayResult<()> {
        self.mutate(paths::UPDATE_TEXT, json!({ "id": id, "text": text }))
            .await
    }

    async fn delete(&self, id: &TodoId) -> GatewayResult<()> {
        self.mutate(paths::REMOVE, json!({ "id": id })).await
    }

    async fn clear_completed(&self) -> GatewayResult<()> {
        self.mutate(paths::CLEAR_COMPLETED, json!({})).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{MockHttpClient, MockResponse};
    use crate::traits::{HttpError, Response};
    use bytes::Bytes;

    const BASE: &str = "http://backend";

    fn success(value: Value) -> MockResponse {
        MockResponse::Success(Response::new(
            200,
            json!({ "status": "success", "value": value }).to_string(),
        ))
    }

    fn gateway(client: &MockHttpClient) -> RemoteGateway<MockHttpClient> {
        RemoteGateway::new(client.clone(), format!("{}/", BASE))
            .with_reconnect_delay(Duration::from_millis(10))
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = MockHttpClient::new();
        assert_eq!(gateway(&client).base_url(), BASE);
        assert_eq!(
            gateway(&client).subscribe_url(),
            "http://backend/api/subscribe?path=todos:get"
        );
    }

    #[tokio::test]
    async fn test_create_sends_function_call() {
        let client = MockHttpClient::new();
        client.set_function_response(paths::CREATE, success(json!("abc")));

        let id = gateway(&client).create("Buy milk").await.unwrap();
        assert_eq!(id, TodoId::new("abc"));

        let requests = client.get_requests();
        assert_eq!(requests[0].url, "http://backend/api/mutation");
        assert_eq!(
            requests[0].json_body().unwrap(),
            json!({"path":"todos:create","args":{"text":"Buy milk"},"format":"json"})
        );
    }

    #[tokio::test]
    async fn test_mutation_args() {
        let client = MockHttpClient::new();
        client.set_default_response(success(Value::Null));
        let gw = gateway(&client);
        let id = TodoId::new("t1");

        gw.set_completion(&id, true).await.unwrap();
        gw.rename(&id, "Walk dog").await.unwrap();
        gw.delete(&id).await.unwrap();
        gw.clear_completed().await.unwrap();

        let bodies: Vec<Value> = client
            .get_requests()
            .iter()
            .map(|r| r.json_body().unwrap())
            .collect();
        assert_eq!(bodies[0]["path"], "todos:update");
        assert_eq!(bodies[0]["args"], json!({"id":"t1","completed":true}));
        assert_eq!(bodies[1]["path"], "todos:updateText");
        assert_eq!(bodies[1]["args"], json!({"id":"t1","text":"Walk dog"}));
        assert_eq!(bodies[2]["path"], "todos:remove");
        assert_eq!(bodies[2]["args"], json!({"id":"t1"}));
        assert_eq!(bodies[3]["path"], "todos:clearCompleted");
        assert_eq!(bodies[3]["args"], json!({}));
    }

    #[tokio::test]
    async fn test_error_envelope_is_rejected() {
        let client = MockHttpClient::new();
        client.set_default_response(MockResponse::Success(Response::new(
            400,
            r#"{"status":"error","errorMessage":"todo t1 not found"}"#,
        )));

        let err = gateway(&client)
            .delete(&TodoId::new("t1"))
            .await
            .unwrap_err();
        assert_eq!(
            err,
            GatewayError::Rejected {
                path: "todos:remove".into(),
                message: "todo t1 not found".into()
            }
        );
    }

    #[tokio::test]
    async fn test_non_json_error_status() {
        let client = MockHttpClient::new();
        client.set_default_response(MockResponse::Success(Response::new(502, "Bad Gateway")));

        let err = gateway(&client).clear_completed().await.unwrap_err();
        assert_eq!(
            err,
            GatewayError::Backend {
                status: 502,
                message: "Bad Gateway".into()
            }
        );
    }

    #[tokio::test]
    async fn test_transport_failure() {
        let client = MockHttpClient::new();
        client.set_default_response(MockResponse::Error(HttpError::ConnectionFailed(
            "refused".into(),
        )));
        let err = gateway(&client).create("x").await.unwrap_err();
        assert_eq!(err, GatewayError::Connection("refused".into()));
    }

    #[tokio::test]
    async fn test_fetch_parses_documents() {
        let client = MockHttpClient::new();
        client.set_function_response(
            paths::GET,
            success(json!([{"_id":"a","text":"A","completed":true,"createdAt":7}])),
        );
        let todos = gateway(&client).fetch().await.unwrap();
        assert_eq!(todos, vec![Todo::new(TodoId::new("a"), "A", 7).with_completed(true)]);
    }

    #[tokio::test]
    async fn test_list_starts_loading_then_resolves() {
        let client = MockHttpClient::new();
        client.push_stream(MockResponse::OpenStream(vec![Bytes::from(
            "event: snapshot\ndata: []\n\n",
        )]));

        let mut query = gateway(&client).list();
        let todos = query.wait_for(|_| true).await.unwrap();
        assert!(todos.is_empty());
        assert!(!query.is_loading());
    }

    #[tokio::test]
    async fn test_list_reconnects_and_keeps_last_snapshot() {
        let client = MockHttpClient::new();
        client.push_stream(MockResponse::BrokenStream(
            vec![Bytes::from(
                r#"event: snapshot
data: [{"_id":"a","text":"A","completed":false,"createdAt":1}]

"#,
            )],
            HttpError::Io("reset".into()),
        ));
        client.push_stream(MockResponse::Error(HttpError::ConnectionFailed("down".into())));
        client.push_stream(MockResponse::OpenStream(vec![Bytes::from(
            r#"event: snapshot
data: [{"_id":"b","text":"B","completed":false,"createdAt":2},{"_id":"a","text":"A","completed":false,"createdAt":1}]

"#,
        )]));

        let mut query = gateway(&client).list();
        let first = query.wait_for(|t| !t.is_empty()).await.unwrap();
        assert_eq!(first.last().map(|t| t.text.as_str()), Some("A"));

        let second = query.wait_for(|t| t.len() == 2).await.unwrap();
        assert_eq!(second[0].text, "B");
        assert_eq!(client.requests_with_method("GET").len(), 3);
    }
}
