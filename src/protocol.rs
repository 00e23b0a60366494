//! JSON wire protocol shared by the backend service and the remote gateway.
//!
//! Function calls are addressed by `module:function` paths and answered with
//! a tagged envelope:
//!
//! ```text
//! POST /api/mutation {"path":"todos:create","args":{"text":"Buy milk"},"format":"json"}
//! 200 {"status":"success","value":"3f2a..."}
//! 400 {"status":"error","errorMessage":"todo text must not be empty"}
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const QUERY_ROUTE: &str = "/api/query";
pub const MUTATION_ROUTE: &str = "/api/mutation";
pub const SUBSCRIBE_ROUTE: &str = "/api/subscribe";

/// Function paths of the "todos" module.
pub mod paths {
    pub const GET: &str = "todos:get";
    pub const CREATE: &str = "todos:create";
    pub const UPDATE: &str = "todos:update";
    pub const UPDATE_TEXT: &str = "todos:updateText";
    pub const REMOVE: &str = "todos:remove";
    pub const CLEAR_COMPLETED: &str = "todos:clearCompleted";
}

fn default_format() -> String {
    "json".to_string()
}

/// Request body of `/api/query` and `/api/mutation`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionCall {
    pub path: String,
    #[serde(default = "empty_args")]
    pub args: Value,
    #[serde(default = "default_format")]
    pub format: String,
}

fn empty_args() -> Value {
    Value::Object(Default::default())
}

impl FunctionCall {
    pub fn new(path: &str, args: Value) -> Self {
        Self {
            path: path.to_string(),
            args,
            format: default_format(),
        }
    }
}

/// Response body of a function call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum FunctionResult {
    Success {
        #[serde(default)]
        value: Value,
    },
    Error {
        #[serde(rename = "errorMessage")]
        error_message: String,
    },
}

impl FunctionResult {
    pub fn success(value: impl Serialize) -> Self {
        FunctionResult::Success {
            value: serde_json::to_value(value).unwrap_or(Value::Null),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        FunctionResult::Error {
            error_message: message.into(),
        }
    }
}

/// Query parameters of `/api/subscribe`.
#[derive(Debug, Clone, Deserialize)]
pub struct SubscribeParams {
    pub path: String,
}
