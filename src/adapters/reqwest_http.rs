//! [`HttpClient`] over reqwest.

use async_trait::async_trait;
use futures_util::StreamExt;
use reqwest::header::{ACCEPT, CACHE_CONTROL, CONTENT_TYPE};

use crate::traits::{ByteStream, HttpClient, HttpError, Response};

const JSON: &str = "application/json";
const EVENT_STREAM: &str = "text/event-stream";

/// Production transport for the remote gateway.
///
/// ```ignore
/// let gateway = RemoteGateway::new(ReqwestHttpClient::new(), "http://127.0.0.1:3210");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
}

impl ReqwestHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a preconfigured client (timeouts, pools, TLS).
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    fn function_call(&self, url: &str, body: &str) -> reqwest::RequestBuilder {
        self.client
            .post(url)
            .header(CONTENT_TYPE, JSON)
            .header(ACCEPT, JSON)
            .body(body.to_string())
    }

    fn subscription(&self, url: &str) -> reqwest::RequestBuilder {
        self.client
            .get(url)
            .header(ACCEPT, EVENT_STREAM)
            .header(CACHE_CONTROL, "no-cache")
    }
}

fn transport_error(err: reqwest::Error) -> HttpError {
    if err.is_timeout() {
        HttpError::Timeout(err.to_string())
    } else if err.is_connect() {
        HttpError::ConnectionFailed(err.to_string())
    } else if err.is_builder() {
        HttpError::InvalidUrl(err.to_string())
    } else if err.is_body() || err.is_decode() {
        HttpError::Io(err.to_string())
    } else {
        HttpError::Other(err.to_string())
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn post_json(&self, url: &str, body: &str) -> Result<Response, HttpError> {
        let response = self
            .function_call(url, body)
            .send()
            .await
            .map_err(transport_error)?;
        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(transport_error)?;
        Ok(Response::new(status, body))
    }

    async fn open_event_stream(&self, url: &str) -> Result<ByteStream, HttpError> {
        let response = self.subscription(url).send().await.map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(HttpError::ServerError {
                status: status.as_u16(),
                message,
            });
        }

        Ok(Box::pin(response.bytes_stream().map(|chunk| chunk.map_err(transport_error))))
    }
}
