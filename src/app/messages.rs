//! AppMessage enum for async communication within the application.

use crate::error::{GatewayAction, GatewayError};
use crate::models::{Todo, TodoId};

/// Messages received from background tasks
#[derive(Debug, Clone, PartialEq)]
pub enum AppMessage {
    /// The live query delivered a new snapshot
    TodosUpdated { todos: Vec<Todo> },
    /// A mutation was acknowledged by the backend
    MutationCompleted {
        action: GatewayAction,
        /// Todo the mutation addressed, if any
        target: Option<TodoId>,
    },
    /// A mutation failed; shown as a modal alert
    MutationFailed {
        action: GatewayAction,
        error: GatewayError,
    },
}
