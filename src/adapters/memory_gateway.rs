//! In-process gateway over a [`TodoStore`].

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::watch;

use crate::error::{GatewayError, GatewayResult};
use crate::models::TodoId;
use crate::protocol::paths;
use crate::store::{StoreError, TodoStore};
use crate::traits::{LiveQuery, TodoGateway};

/// [`TodoGateway`] calling a shared [`TodoStore`] directly.
///
/// Store errors surface as [`GatewayError::Rejected`], exactly as the
/// HTTP backend would report them.
#[derive(Debug, Clone)]
pub struct MemoryGateway {
    store: Arc<TodoStore>,
}

impl Default for MemoryGateway {
    fn default() -> Self {
        Self::new(Arc::new(TodoStore::new()))
    }
}

impl MemoryGateway {
    pub fn new(store: Arc<TodoStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<TodoStore> {
        &self.store
    }
}

fn rejected(path: &str) -> impl FnOnce(StoreError) -> GatewayError + '_ {
    move |e| GatewayError::Rejected {
        path: path.to_string(),
        message: e.to_string(),
    }
}

#[async_trait]
impl TodoGateway for MemoryGateway {
    /// Resolves immediately. Must be called inside a tokio runtime.
    fn list(&self) -> LiveQuery {
        let mut changes = self.store.subscribe();
        let initial = changes.borrow_and_update().clone();
        let (tx, rx) = watch::channel(Some(initial));

        let task = tokio::spawn(async move {
            while changes.changed().await.is_ok() {
                let todos = changes.borrow_and_update().clone();
                if tx.send(Some(todos)).is_err() {
                    break;
                }
            }
        });
        LiveQuery::with_task(rx, task)
    }

    async fn create(&self, text: &str) -> GatewayResult<TodoId> {
        self.store.create(text).map_err(rejected(paths::CREATE))
    }

    async fn set_completion(&self, id: &TodoId, completed: bool) -> GatewayResult<()> {
        self.store
            .update(id, completed)
            .map_err(rejected(paths::UPDATE))
    }

    async fn rename(&self, id: &TodoId, text: &str) -> GatewayResult<()> {
        self.store
            .update_text(id, text)
            .map_err(rejected(paths::UPDATE_TEXT))
    }

    async fn delete(&self, id: &TodoId) -> GatewayResult<()> {
        self.store.remove(id).map_err(rejected(paths::REMOVE))
    }

    async fn clear_completed(&self) -> GatewayResult<()> {
        self.store.clear_completed();
        Ok(())
    }
}
