//! The todo data gateway and its live query handle.

use async_trait::async_trait;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::error::{GatewayError, GatewayResult};
use crate::models::{Todo, TodoId};

/// State of a live query: `None` until the first result arrives, then the
/// latest full list ordered newest first.
pub type Snapshot = Option<Vec<Todo>>;

/// Push-updated view of the todo collection.
///
/// Wraps a `watch` channel, so intermediate states may be coalesced and only
/// the latest snapshot is ever observed. Dropping the handle tears down the
/// background task feeding it, if there is one.
#[derive(Debug)]
pub struct LiveQuery {
    rx: watch::Receiver<Snapshot>,
    task: Option<JoinHandle<()>>,
}

impl LiveQuery {
    pub fn new(rx: watch::Receiver<Snapshot>) -> Self {
        Self { rx, task: None }
    }

    /// Bind the query to the task that produces its snapshots.
    pub fn with_task(rx: watch::Receiver<Snapshot>, task: JoinHandle<()>) -> Self {
        Self {
            rx,
            task: Some(task),
        }
    }

    /// The latest known snapshot.
    pub fn current(&self) -> Snapshot {
        self.rx.borrow().clone()
    }

    /// Still waiting for the first result.
    pub fn is_loading(&self) -> bool {
        self.rx.borrow().is_none()
    }

    /// Wait for the next snapshot not yet seen through this handle.
    pub async fn changed(&mut self) -> GatewayResult<Snapshot> {
        self.rx
            .changed()
            .await
            .map_err(|_| GatewayError::SubscriptionClosed)?;
        Ok(self.rx.borrow_and_update().clone())
    }

    /// Wait until a resolved snapshot satisfies `pred` and return it.
    ///
    /// Checks the current snapshot first.
    pub async fn wait_for<F>(&mut self, mut pred: F) -> GatewayResult<Vec<Todo>>
    where
        F: FnMut(&[Todo]) -> bool,
    {
        let snapshot = self
            .rx
            .wait_for(|snapshot| match snapshot {
                Some(todos) => pred(todos),
                None => false,
            })
            .await
            .map_err(|_| GatewayError::SubscriptionClosed)?;
        Ok(snapshot.clone().unwrap_or_default())
    }
}

impl Drop for LiveQuery {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

/// Operations on the remote "todos" collection.
///
/// Implementations never report success for a mutation that failed. Text
/// arguments are expected to be trimmed and non-empty already.
#[async_trait]
pub trait TodoGateway: Send + Sync {
    /// Subscribe to the ordered todo list.
    fn list(&self) -> LiveQuery;

    /// Insert a todo with `completed = false` and `createdAt = now`.
    async fn create(&self, text: &str) -> GatewayResult<TodoId>;

    /// Patch the `completed` flag.
    async fn set_completion(&self, id: &TodoId, completed: bool) -> GatewayResult<()>;

    /// Patch the `text` field.
    async fn rename(&self, id: &TodoId, text: &str) -> GatewayResult<()>;

    /// Remove a single todo.
    async fn delete(&self, id: &TodoId) -> GatewayResult<()>;

    /// Remove every todo whose `completed` flag is set.
    async fn clear_completed(&self) -> GatewayResult<()>;
}
