//! User intents: gateway calls spawned in the background, plus the purely
//! local state changes (focus, filter, edit session, theme, alert).
//!
//! Mutations never block the UI task. Their outcome comes back as an
//! [`AppMessage`] and the resulting list arrives through the live query.

use std::future::Future;
use std::sync::Arc;

use super::{App, AppMessage, Focus};
use crate::domain::{normalize_text, EditSession};
use crate::error::{GatewayAction, GatewayResult};
use crate::models::{StatusFilter, TodoId};
use crate::traits::TodoGateway;

impl App {
    /// Subscribe to the todo list and forward snapshots to the message
    /// channel. Replaces any earlier subscription.
    pub fn start_sync(&mut self) {
        if let Some(task) = self.sync_task.take() {
            task.abort();
        }
        let mut query = self.gateway.list();
        let tx = self.message_tx.clone();

        self.sync_task = Some(tokio::spawn(async move {
            if let Some(todos) = query.current() {
                if tx.send(AppMessage::TodosUpdated { todos }).is_err() {
                    return;
                }
            }
            loop {
                match query.changed().await {
                    Ok(Some(todos)) => {
                        if tx.send(AppMessage::TodosUpdated { todos }).is_err() {
                            break;
                        }
                    }
                    Ok(None) => {}
                    Err(err) => {
                        tracing::warn!(error = %err, "live query ended");
                        break;
                    }
                }
            }
        }));
    }

    /// Run `call` against the gateway on a background task and report the
    /// outcome as a message.
    fn spawn_mutation<F, Fut>(&self, action: GatewayAction, target: Option<TodoId>, call: F)
    where
        F: FnOnce(Arc<dyn TodoGateway>) -> Fut + Send + 'static,
        Fut: Future<Output = GatewayResult<()>> + Send + 'static,
    {
        let gateway = Arc::clone(&self.gateway);
        let tx = self.message_tx.clone();
        tracing::debug!(action = action.as_str(), target = ?target, "mutation started");

        tokio::spawn(async move {
            let msg = match call(gateway).await {
                Ok(()) => AppMessage::MutationCompleted { action, target },
                Err(error) => AppMessage::MutationFailed { action, error },
            };
            let _ = tx.send(msg);
        });
    }

    /// Create a todo from the draft. Blank drafts are ignored.
    pub fn submit_new_todo(&mut self) {
        let Some(text) = normalize_text(self.draft.text()) else {
            return;
        };
        self.spawn_mutation(GatewayAction::Create, None, move |gateway| async move {
            gateway.create(&text).await.map(|_| ())
        });
    }

    /// Flip the completion flag of `id`.
    pub fn toggle_todo(&mut self, id: &TodoId) {
        let Some(completed) = self.find(id).map(|t| t.completed) else {
            return;
        };
        let target = id.clone();
        self.spawn_mutation(GatewayAction::Toggle, Some(id.clone()), move |gateway| async move {
            gateway.set_completion(&target, !completed).await
        });
    }

    /// Open an edit session on `id`, discarding any other open session.
    ///
    /// Completed todos cannot be edited from the list.
    pub fn start_edit(&mut self, id: &TodoId) {
        let text = match self.find(id) {
            Some(todo) if !todo.completed => todo.text.clone(),
            _ => return,
        };
        self.edit = Some(EditSession::new(id.clone(), &text));
        self.focus = Focus::List;
        self.select_id(id);
    }

    /// Save the open edit session. A blank draft keeps the session open.
    pub fn commit_edit(&mut self) {
        let Some(session) = &self.edit else {
            return;
        };
        let Some(text) = session.commit_text() else {
            return;
        };
        let id = session.id.clone();
        let target = id.clone();
        self.spawn_mutation(GatewayAction::Rename, Some(id), move |gateway| async move {
            gateway.rename(&target, &text).await
        });
    }

    /// Discard the open edit session, if any.
    pub fn cancel_edit(&mut self) {
        self.edit = None;
    }

    pub fn delete_todo(&mut self, id: &TodoId) {
        let target = id.clone();
        self.spawn_mutation(GatewayAction::Delete, Some(id.clone()), move |gateway| async move {
            gateway.delete(&target).await
        });
    }

    pub fn clear_completed(&mut self) {
        self.spawn_mutation(GatewayAction::ClearCompleted, None, |gateway| async move {
            gateway.clear_completed().await
        });
    }

    pub fn set_filter(&mut self, filter: StatusFilter) {
        self.filter = filter;
        self.clamp_selection();
    }

    pub fn toggle_theme(&mut self) {
        let mode = self.theme.toggle();
        tracing::debug!(theme = %mode, "theme toggled");
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    /// Move the list selection by `delta` rows, clamped to the visible list.
    pub fn move_selection(&mut self, delta: isize) {
        let len = self.visible().len();
        if len == 0 {
            self.selected = 0;
            return;
        }
        let next = (self.selected as isize + delta).clamp(0, len as isize - 1);
        self.selected = next as usize;
    }
}
