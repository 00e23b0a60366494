//! Mouse interaction.
//!
//! Components register hit areas while rendering; the event loop resolves a
//! click to the topmost area's [`ClickAction`].

mod hit_area;

pub use hit_area::{ClickAction, HitArea, HitAreaRegistry};
