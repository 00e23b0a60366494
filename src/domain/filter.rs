//! Filtering and search over the in-memory todo list.
//!
//! Everything here is pure: the screen recomputes the visible subset from
//! `(list, search, filter)` on every render.

use crate::models::{StatusFilter, Todo};

/// Derive the visible subset of `todos`, preserving input order.
///
/// The search is a case-folded substring match; an empty search matches
/// every todo.
pub fn visible(todos: &[Todo], search: &str, filter: StatusFilter) -> Vec<Todo> {
    let needle = search.to_lowercase();
    todos
        .iter()
        .filter(|todo| passes(todo, &needle, filter))
        .cloned()
        .collect()
}

/// Number of todos not yet completed, over the full unfiltered list.
pub fn items_left(todos: &[Todo]) -> usize {
    todos.iter().filter(|todo| !todo.completed).count()
}

/// `needle` is already lowercased.
fn passes(todo: &Todo, needle: &str, filter: StatusFilter) -> bool {
    filter.matches(todo.completed) && (needle.is_empty() || todo.text.to_lowercase().contains(needle))
}
