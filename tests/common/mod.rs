//! Common test utilities for integration tests.
//!
//! ```ignore
//! mod common;
//! use common::{memory_app, settle};
//!
//! let (mut app, store) = memory_app();
//! app.start_sync();
//! settle(&mut app, |app| app.todos.is_some()).await;
//! ```

#![allow(dead_code)]

pub mod mocks;

pub use mocks::*;

use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

use todosync::adapters::MemoryGateway;
use todosync::app::App;
use todosync::models::{Todo, TodoId};
use todosync::startup::Assets;
use todosync::store::TodoStore;
use todosync::traits::TodoGateway;
use todosync::ui::{self, ThemeStore};

/// A todo with a fixed id and timestamp.
pub fn todo(id: &str, text: &str, created_at: i64) -> Todo {
    Todo::new(TodoId::new(id), text, created_at)
}

pub fn done(id: &str, text: &str, created_at: i64) -> Todo {
    todo(id, text, created_at).with_completed(true)
}

/// App over an arbitrary gateway with the default theme and built-in art.
pub fn app_with(gateway: Arc<dyn TodoGateway>) -> App {
    App::new(gateway, ThemeStore::default(), Assets::builtin())
}

/// App over a fresh in-memory store.
pub fn memory_app() -> (App, Arc<TodoStore>) {
    let gateway = MemoryGateway::default();
    let store = Arc::clone(gateway.store());
    (app_with(Arc::new(gateway)), store)
}

/// Handle app messages until `pred` holds. Panics after two seconds.
pub async fn settle<F>(app: &mut App, mut pred: F)
where
    F: FnMut(&App) -> bool,
{
    let mut rx = app.message_rx.take().expect("message receiver already taken");
    let deadline = tokio::time::Instant::now() + Duration::from_secs(2);
    while !pred(app) {
        let msg = tokio::time::timeout_at(deadline, rx.recv())
            .await
            .expect("timed out waiting for app state")
            .expect("message channel closed");
        app.handle_message(msg);
    }
    app.message_rx = Some(rx);
}

pub fn press(app: &mut App, code: KeyCode) {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
}

pub fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

/// Render one frame into a buffer of the given size.
pub fn render(app: &mut App, width: u16, height: u16) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|frame| ui::render(frame, app)).unwrap();
    terminal.backend().buffer().clone()
}

/// Rows of `buf` as plain strings.
pub fn lines(buf: &Buffer) -> Vec<String> {
    (0..buf.area.height)
        .map(|y| (0..buf.area.width).map(|x| buf[(x, y)].symbol()).collect())
        .collect()
}

pub fn screen_contains(buf: &Buffer, needle: &str) -> bool {
    lines(buf).iter().any(|line| line.contains(needle))
}

/// Cell position of the first occurrence of `needle`.
pub fn find_text(buf: &Buffer, needle: &str) -> Option<(u16, u16)> {
    for y in 0..buf.area.height {
        let cells: Vec<&str> = (0..buf.area.width).map(|x| buf[(x, y)].symbol()).collect();
        let row: String = cells.concat();
        if let Some(byte) = row.find(needle) {
            // Map the byte offset back to a column
            let mut offset = 0;
            for (x, symbol) in cells.iter().enumerate() {
                if offset == byte {
                    return Some((x as u16, y));
                }
                offset += symbol.len();
            }
        }
    }
    None
}
