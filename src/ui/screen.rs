//! Which of the three screen states to render.

use crate::domain::visible;
use crate::models::{StatusFilter, Todo};

pub const LOADING_TEXT: &str = "Loading todos...";
pub const EMPTY_TITLE: &str = "No todos yet";
pub const EMPTY_HINT: &str = "Add a todo to get started!";
pub const NO_MATCH_TEXT: &str = "No todos match your search";

/// Renderable state of the list card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenState {
    /// Subscription has not delivered a result yet
    Loading,
    /// Resolved, but nothing passes the search and filter
    Empty { searching: bool },
    /// The visible subset, in list order
    Populated(Vec<Todo>),
}

impl ScreenState {
    /// Derive the state from the live query result and the ephemeral filters.
    pub fn derive(todos: Option<&[Todo]>, search: &str, filter: StatusFilter) -> Self {
        let Some(todos) = todos else {
            return ScreenState::Loading;
        };
        let shown = visible(todos, search, filter);
        if shown.is_empty() {
            ScreenState::Empty {
                searching: !search.is_empty(),
            }
        } else {
            ScreenState::Populated(shown)
        }
    }

    /// Lines shown in place of the list.
    pub fn placeholder_lines(&self) -> &'static [&'static str] {
        match self {
            ScreenState::Loading => &[LOADING_TEXT],
            ScreenState::Empty { searching: true } => &[NO_MATCH_TEXT],
            ScreenState::Empty { searching: false } => &[EMPTY_TITLE, EMPTY_HINT],
            ScreenState::Populated(_) => &[],
        }
    }

    pub fn visible_todos(&self) -> &[Todo] {
        match self {
            ScreenState::Populated(todos) => todos,
            _ => &[],
        }
    }
}
