//! In-memory "todos" document collection.
//!
//! This is the backend side of the gateway: the six handlers the service
//! exposes map one-to-one onto [`TodoStore`] methods. Every successful
//! mutation publishes the full ordered list to subscribers.

use std::collections::{HashMap, HashSet};
use std::sync::{Mutex, MutexGuard};

use tokio::sync::watch;

use crate::models::{Todo, TodoId};

/// Errors a store handler can report.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("todo {0} not found")]
    NotFound(TodoId),

    #[error("todo text must not be empty")]
    EmptyText,
}

type Clock = Box<dyn Fn() -> i64 + Send + Sync>;

#[derive(Debug)]
struct Entry {
    todo: Todo,
    /// Insertion sequence, breaks `createdAt` ties newest first
    seq: u64,
}

#[derive(Debug, Default)]
struct Collection {
    docs: HashMap<TodoId, Entry>,
    /// Index of ids with `completed == true`
    completed: HashSet<TodoId>,
    next_seq: u64,
}

impl Collection {
    fn ordered(&self) -> Vec<Todo> {
        let mut entries: Vec<&Entry> = self.docs.values().collect();
        entries.sort_by(|a, b| {
            b.todo
                .created_at
                .cmp(&a.todo.created_at)
                .then_with(|| b.seq.cmp(&a.seq))
        });
        entries.into_iter().map(|e| e.todo.clone()).collect()
    }

    fn get_mut(&mut self, id: &TodoId) -> Result<&mut Entry, StoreError> {
        self.docs
            .get_mut(id)
            .ok_or_else(|| StoreError::NotFound(id.clone()))
    }
}

/// Shared document collection with change notification.
pub struct TodoStore {
    state: Mutex<Collection>,
    changes: watch::Sender<Vec<Todo>>,
    clock: Clock,
}

impl Default for TodoStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TodoStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TodoStore")
            .field("len", &self.len())
            .finish()
    }
}

impl TodoStore {
    /// Empty store stamping documents with the wall clock.
    pub fn new() -> Self {
        Self::with_clock(|| chrono::Utc::now().timestamp_millis())
    }

    /// Empty store with a custom millisecond clock.
    pub fn with_clock<F>(clock: F) -> Self
    where
        F: Fn() -> i64 + Send + Sync + 'static,
    {
        let (changes, _) = watch::channel(Vec::new());
        Self {
            state: Mutex::new(Collection::default()),
            changes,
            clock: Box::new(clock),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Collection> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn publish(&self, collection: &Collection) {
        self.changes.send_replace(collection.ordered());
    }

    /// Number of documents.
    pub fn len(&self) -> usize {
        self.lock().docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `todos:get` - every todo, newest first.
    pub fn get(&self) -> Vec<Todo> {
        self.lock().ordered()
    }

    /// Receive the ordered list after every mutation.
    ///
    /// The receiver starts out holding the current list.
    pub fn subscribe(&self) -> watch::Receiver<Vec<Todo>> {
        self.changes.subscribe()
    }

    /// `todos:create` - insert and return the new id.
    pub fn create(&self, text: &str) -> Result<TodoId, StoreError> {
        if text.trim().is_empty() {
            return Err(StoreError::EmptyText);
        }
        let mut collection = self.lock();
        let id = TodoId::generate();
        let seq = collection.next_seq;
        collection.next_seq += 1;
        let todo = Todo::new(id.clone(), text, (self.clock)());
        collection.docs.insert(id.clone(), Entry { todo, seq });
        self.publish(&collection);
        tracing::debug!(%id, "todo created");
        Ok(id)
    }

    /// `todos:update` - patch the completion flag.
    pub fn update(&self, id: &TodoId, completed: bool) -> Result<(), StoreError> {
        let mut collection = self.lock();
        collection.get_mut(id)?.todo.completed = completed;
        if completed {
            collection.completed.insert(id.clone());
        } else {
            collection.completed.remove(id);
        }
        self.publish(&collection);
        Ok(())
    }

    /// `todos:updateText` - patch the text.
    pub fn update_text(&self, id: &TodoId, text: &str) -> Result<(), StoreError> {
        if text.trim().is_empty() {
            return Err(StoreError::EmptyText);
        }
        let mut collection = self.lock();
        collection.get_mut(id)?.todo.text = text.to_string();
        self.publish(&collection);
        Ok(())
    }

    /// `todos:remove` - delete one document.
    pub fn remove(&self, id: &TodoId) -> Result<(), StoreError> {
        let mut collection = self.lock();
        if collection.docs.remove(id).is_none() {
            return Err(StoreError::NotFound(id.clone()));
        }
        collection.completed.remove(id);
        self.publish(&collection);
        Ok(())
    }

    /// `todos:clearCompleted` - delete every completed document via the
    /// completed index. Returns how many were removed.
    pub fn clear_completed(&self) -> usize {
        let mut collection = self.lock();
        let ids: Vec<TodoId> = collection.completed.drain().collect();
        for id in &ids {
            collection.docs.remove(id);
        }
        if !ids.is_empty() {
            self.publish(&collection);
        }
        tracing::debug!(removed = ids.len(), "completed todos cleared");
        ids.len()
    }
}
