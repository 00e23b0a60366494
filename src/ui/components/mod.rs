//! Reusable UI Components
//!
//! Components are render functions over explicit inputs. Interactive ones
//! register their clickable regions in the frame's
//! [`HitAreaRegistry`](crate::ui::interaction::HitAreaRegistry).
//!
//! ## Components
//!
//! - `card` - Rounded card block shared by every panel
//! - `InputField` - Single-line text input with placeholder and cursor
//! - `AddTodo` - New-todo card
//! - `SearchBar` - Search card
//! - `FilterTabs` - Filters, items-left counter and "Clear Completed"
//! - `TodoItem` - One list row, read-only or editing
//! - `ThemeToggle` - Moon/sun glyph
//! - `DialogFrame` - Centered overlay frame, used for alerts

mod add_todo;
mod alert;
mod card;
mod dialog_frame;
mod filter_tabs;
mod input_field;
mod search_bar;
mod theme_toggle;
mod todo_item;

pub use add_todo::{render_add_todo, ADD_PLACEHOLDER};
pub use alert::{render_alert, ALERT_TITLE};
pub use card::card_block;
pub use dialog_frame::{render_dialog_frame, DialogFrameConfig};
pub use filter_tabs::{
    filter_tabs_height, items_left_label, render_filter_tabs, FilterTabsConfig, CLEAR_COMPLETED_LABEL,
};
pub use input_field::{render_input_field, InputFieldConfig};
pub use search_bar::{render_search_bar, SEARCH_PLACEHOLDER};
pub use theme_toggle::render_theme_toggle;
pub use todo_item::{render_todo_item, TodoItemConfig, CHECKED, DELETE_GLYPH, SAVE_LABEL, UNCHECKED};
