//! Data models module
//!
//! Contains the todo record and its sample seed data.

pub mod todo;

// Re-export commonly used types
pub use todo::{sample_todos, TodoItem};
