//! Domain logic with no I/O.
//!
//! - [`filter`] - visible-subset derivation for search and status filter
//! - [`input`] - single-line editable buffer
//! - [`edit`] - text normalization and the inline edit session

pub mod edit;
pub mod filter;
pub mod input;

pub use edit::{normalize_text, EditSession};
pub use filter::{items_left, visible};
pub use input::InputBuffer;
