//! Todo item model
//!
//! The record shown on the list screen and the fixed sample set used to
//! seed the store at startup.

use serde::{Deserialize, Serialize};

/// A single todo record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    /// Store-assigned identifier, unique within the collection
    pub id: u64,
    /// Short title, never empty
    pub title: String,
    /// Longer description, never empty
    pub description: String,
    /// Completion flag. Nothing toggles it.
    pub done: bool,
}

impl TodoItem {
    /// Create a new, not yet completed item
    pub fn new(id: u64, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            done: false,
        }
    }

    /// One-line summary used by the simple frontend
    pub fn summary(&self) -> String {
        format!("#{} {} - {}", self.id, self.title, self.description)
    }
}

/// The fixed set of items the store is seeded with
pub fn sample_todos() -> Vec<TodoItem> {
    (1..=3)
        .map(|n| TodoItem::new(n, format!("todo {}", n), format!("description {}", n)))
        .collect()
}
