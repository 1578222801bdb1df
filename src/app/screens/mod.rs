//! TUI screen components
//!
//! Contains the list view and the modal add form.

pub mod add;
pub mod list;

pub use add::AddScreen;
pub use list::ListScreen;
