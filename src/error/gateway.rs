//! Gateway failures and the user-facing action they belong to.

use crate::traits::HttpError;

/// Failure of a gateway call against the backend.
///
/// Every mutation either succeeds or returns one of these; nothing is
/// swallowed at the gateway level.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GatewayError {
    /// The backend could not be reached.
    #[error("connection failed: {0}")]
    Connection(String),

    /// The transport gave up waiting.
    #[error("request timed out: {0}")]
    Timeout(String),

    /// The backend answered with a non-success HTTP status.
    #[error("backend returned HTTP {status}: {message}")]
    Backend { status: u16, message: String },

    /// The backend ran the function and reported an error.
    #[error("backend rejected {path}: {message}")]
    Rejected { path: String, message: String },

    /// The response body could not be understood.
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// The live subscription ended and will not deliver more snapshots.
    #[error("subscription closed")]
    SubscriptionClosed,
}

impl GatewayError {
    /// Whether the same call could succeed later. Logged with failures;
    /// nothing is retried automatically.
    pub fn is_retryable(&self) -> bool {
        match self {
            GatewayError::Connection(_) | GatewayError::Timeout(_) => true,
            GatewayError::Backend { status, .. } => *status >= 500 || *status == 429,
            GatewayError::Rejected { .. }
            | GatewayError::InvalidResponse(_)
            | GatewayError::SubscriptionClosed => false,
        }
    }

    /// Short code for log lines.
    pub fn error_code(&self) -> &'static str {
        match self {
            GatewayError::Connection(_) => "E_GW_CONN",
            GatewayError::Timeout(_) => "E_GW_TIMEOUT",
            GatewayError::Backend { .. } => "E_GW_HTTP",
            GatewayError::Rejected { .. } => "E_GW_REJECTED",
            GatewayError::InvalidResponse(_) => "E_GW_INVALID",
            GatewayError::SubscriptionClosed => "E_GW_CLOSED",
        }
    }
}

impl From<HttpError> for GatewayError {
    fn from(err: HttpError) -> Self {
        match err {
            HttpError::ConnectionFailed(msg) => GatewayError::Connection(msg),
            HttpError::Timeout(msg) => GatewayError::Timeout(msg),
            HttpError::ServerError { status, message } => GatewayError::Backend { status, message },
            HttpError::Cancelled => GatewayError::Connection("request cancelled".to_string()),
            HttpError::Io(msg) => GatewayError::Connection(msg),
            HttpError::InvalidUrl(msg) => GatewayError::Connection(format!("invalid URL: {}", msg)),
            HttpError::Other(msg) => GatewayError::Connection(msg),
        }
    }
}

impl From<serde_json::Error> for GatewayError {
    fn from(err: serde_json::Error) -> Self {
        GatewayError::InvalidResponse(err.to_string())
    }
}

/// The user intent a gateway call was made for.
///
/// Determines the alert text shown when the call fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GatewayAction {
    Create,
    Toggle,
    Rename,
    Delete,
    ClearCompleted,
}

impl GatewayAction {
    /// Generic alert text naming the failed action category.
    pub fn failure_message(self) -> &'static str {
        match self {
            GatewayAction::Create => "Failed to create todo",
            GatewayAction::Toggle | GatewayAction::Rename => "Failed to update todo",
            GatewayAction::Delete => "Failed to delete todo",
            GatewayAction::ClearCompleted => "Failed to clear completed todos",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            GatewayAction::Create => "create",
            GatewayAction::Toggle => "toggle",
            GatewayAction::Rename => "rename",
            GatewayAction::Delete => "delete",
            GatewayAction::ClearCompleted => "clear_completed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_messages() {
        assert_eq!(GatewayAction::Create.failure_message(), "Failed to create todo");
        assert_eq!(GatewayAction::Toggle.failure_message(), "Failed to update todo");
        assert_eq!(GatewayAction::Rename.failure_message(), "Failed to update todo");
        assert_eq!(GatewayAction::Delete.failure_message(), "Failed to delete todo");
        assert_eq!(
            GatewayAction::ClearCompleted.failure_message(),
            "Failed to clear completed todos"
        );
    }

    #[test]
    fn test_retryable() {
        assert!(GatewayError::Connection("x".into()).is_retryable());
        assert!(GatewayError::Timeout("x".into()).is_retryable());
        assert!(GatewayError::Backend { status: 503, message: String::new() }.is_retryable());
        assert!(!GatewayError::Backend { status: 404, message: String::new() }.is_retryable());
        assert!(!GatewayError::Rejected { path: "todos:create".into(), message: "bad".into() }
            .is_retryable());
    }

    #[test]
    fn test_from_http_error() {
        let err: GatewayError = HttpError::ServerError {
            status: 500,
            message: "boom".into(),
        }
        .into();
        assert_eq!(
            err,
            GatewayError::Backend {
                status: 500,
                message: "boom".into()
            }
        );
        assert_eq!(err.error_code(), "E_GW_HTTP");

        let err: GatewayError = HttpError::Timeout("30s".into()).into();
        assert_eq!(err, GatewayError::Timeout("30s".into()));
    }

    #[test]
    fn test_display() {
        let err = GatewayError::Rejected {
            path: "todos:update".into(),
            message: "not found".into(),
        };
        assert_eq!(err.to_string(), "backend rejected todos:update: not found");
    }
}
