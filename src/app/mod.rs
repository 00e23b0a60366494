//! Application state and logic for the TUI.
//!
//! This module contains the core [`App`] struct and related types:
//! - [`Focus`] - Which input has keyboard focus
//! - [`AppMessage`] - Messages from the live query and mutation tasks
//!
//! All state here is ephemeral. The todo list itself lives in the backend
//! and only reaches [`App::todos`] through the live query.

mod actions;
mod handlers;
mod messages;
mod types;

pub use messages::AppMessage;
pub use types::Focus;

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::domain::{visible, EditSession, InputBuffer};
use crate::models::{StatusFilter, Todo, TodoId};
use crate::startup::Assets;
use crate::traits::TodoGateway;
use crate::ui::{HitAreaRegistry, ScreenState, ThemeStore};

/// Main application state
pub struct App {
    /// Latest live query result; `None` while loading
    pub todos: Option<Vec<Todo>>,
    /// Text of the new-todo input
    pub draft: InputBuffer,
    /// Text of the search input
    pub search: InputBuffer,
    pub filter: StatusFilter,
    /// Open inline edit, at most one
    pub edit: Option<EditSession>,
    pub focus: Focus,
    /// Index into the visible list
    pub selected: usize,
    /// First visible list row, kept by the renderer
    pub list_offset: usize,
    /// Pending modal error message
    pub alert: Option<String>,
    pub theme: ThemeStore,
    pub assets: Assets,
    /// Click targets registered by the last render
    pub hit_areas: HitAreaRegistry,
    pub gateway: Arc<dyn TodoGateway>,
    /// Channel for receiving async messages
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Channel sender for async tasks
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Task forwarding live query snapshots into the message channel
    sync_task: Option<JoinHandle<()>>,
    /// Flag indicating the UI needs to be redrawn
    pub needs_redraw: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(gateway: Arc<dyn TodoGateway>, theme: ThemeStore, assets: Assets) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        Self {
            todos: None,
            draft: InputBuffer::new(),
            search: InputBuffer::new(),
            filter: StatusFilter::All,
            edit: None,
            focus: Focus::default(),
            selected: 0,
            list_offset: 0,
            alert: None,
            theme,
            assets,
            hit_areas: HitAreaRegistry::new(),
            gateway,
            message_rx: Some(message_rx),
            message_tx,
            sync_task: None,
            needs_redraw: true,
            should_quit: false,
        }
    }

    /// Mark the UI as needing a redraw
    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Todos passing the current search and filter, in list order.
    pub fn visible(&self) -> Vec<Todo> {
        self.todos
            .as_deref()
            .map(|todos| visible(todos, self.search.text(), self.filter))
            .unwrap_or_default()
    }

    pub fn screen_state(&self) -> ScreenState {
        ScreenState::derive(self.todos.as_deref(), self.search.text(), self.filter)
    }

    /// The todo under the list selection.
    pub fn selected_todo(&self) -> Option<Todo> {
        self.visible().into_iter().nth(self.selected)
    }

    fn find(&self, id: &TodoId) -> Option<&Todo> {
        self.todos.as_deref()?.iter().find(|t| &t.id == id)
    }

    /// Keep the selection inside the visible list.
    fn clamp_selection(&mut self) {
        let len = self.visible().len();
        self.selected = self.selected.min(len.saturating_sub(1));
    }

    /// Move the selection onto `id` if it is visible.
    fn select_id(&mut self, id: &TodoId) {
        if let Some(index) = self.visible().iter().position(|t| &t.id == id) {
            self.selected = index;
        }
    }

    /// Handle every message already queued, without waiting.
    ///
    /// The event loop reads the channel through `select!` instead; this is
    /// for driving the app without a terminal.
    pub fn pump_messages(&mut self) -> usize {
        let Some(mut rx) = self.message_rx.take() else {
            return 0;
        };
        let mut handled = 0;
        while let Ok(msg) = rx.try_recv() {
            self.handle_message(msg);
            handled += 1;
        }
        self.message_rx = Some(rx);
        handled
    }
}

impl Drop for App {
    fn drop(&mut self) {
        if let Some(task) = self.sync_task.take() {
            task.abort();
        }
    }
}
