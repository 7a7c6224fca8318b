//! Table components for the users list.
//!
//! - `columns`: column definitions
//! - `header`: header row with the sortable columns
//! - `row`: one row per user
//! - `cells`: cell frames and cell renderers

mod cells;
pub mod columns;
pub mod header;
pub mod row;

pub use cells::DELETE_LABEL;
