//! Data model shared by the client, the gateway and the backend store.

mod todo;

pub use todo::{StatusFilter, Todo, TodoId};
