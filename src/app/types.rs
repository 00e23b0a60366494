//! Type definitions for the application state.

/// Which input receives keystrokes.
///
/// Tab cycles forward in declaration order, Shift-Tab backward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    NewTodo,
    Search,
    List,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::NewTodo => Focus::Search,
            Focus::Search => Focus::List,
            Focus::List => Focus::NewTodo,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Focus::NewTodo => Focus::List,
            Focus::Search => Focus::NewTodo,
            Focus::List => Focus::Search,
        }
    }
}
