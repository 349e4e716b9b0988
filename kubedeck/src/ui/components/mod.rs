//! Reusable UI components shared across views.

pub mod actions_menu;
pub mod column_selector;
pub mod header;
pub mod help_bar;
pub mod namespace_selector;

pub use header::draw_header;
pub use help_bar::{actions_hints, draw_help_bar, search_hints, selector_hints, table_hints};
