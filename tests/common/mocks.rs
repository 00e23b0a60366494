//! Gateway test doubles.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::watch;

use todosync::error::{GatewayError, GatewayResult};
use todosync::models::{Todo, TodoId};
use todosync::traits::{LiveQuery, Snapshot, TodoGateway};

/// Gateway whose list is driven by the test and whose mutations all fail.
pub struct FailingGateway {
    tx: watch::Sender<Snapshot>,
    calls: AtomicUsize,
}

impl FailingGateway {
    /// Starts resolved with `todos`.
    pub fn with_todos(todos: Vec<Todo>) -> Self {
        let (tx, _) = watch::channel(Some(todos));
        Self {
            tx,
            calls: AtomicUsize::new(0),
        }
    }

    /// Starts unresolved.
    pub fn loading() -> Self {
        let (tx, _) = watch::channel(None);
        Self {
            tx,
            calls: AtomicUsize::new(0),
        }
    }

    /// Push a new snapshot to every live query.
    pub fn push(&self, todos: Vec<Todo>) {
        self.tx.send_replace(Some(todos));
    }

    /// Mutations attempted so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn fail<T>(&self) -> GatewayResult<T> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(GatewayError::Connection("backend unreachable".to_string()))
    }
}

#[async_trait]
impl TodoGateway for FailingGateway {
    fn list(&self) -> LiveQuery {
        LiveQuery::new(self.tx.subscribe())
    }

    async fn create(&self, _text: &str) -> GatewayResult<TodoId> {
        self.fail()
    }

    async fn set_completion(&self, _id: &TodoId, _completed: bool) -> GatewayResult<()> {
        self.fail()
    }

    async fn rename(&self, _id: &TodoId, _text: &str) -> GatewayResult<()> {
        self.fail()
    }

    async fn delete(&self, _id: &TodoId) -> GatewayResult<()> {
        self.fail()
    }

    async fn clear_completed(&self) -> GatewayResult<()> {
        self.fail()
    }
}
