//! In-memory todo store
//!
//! Owns the ordered item collection, assigns ids, and performs the
//! non-empty validation for new items.

use std::fmt;

use tracing::{debug, info};

use crate::models::{sample_todos, TodoItem};

/// Required field that was left empty on an add
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingField {
    Title,
    Description,
}

impl fmt::Display for MissingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MissingField::Title => write!(f, "title is required"),
            MissingField::Description => write!(f, "description is required"),
        }
    }
}

/// Ordered in-memory collection of todo items
#[derive(Debug, Default)]
pub struct TodoStore {
    items: Vec<TodoItem>,
    ready: bool,
}

impl TodoStore {
    /// Create an empty store that has not been seeded yet
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with the sample items and mark it ready.
    ///
    /// Seeding happens once; later calls return `false` and change nothing.
    pub fn load_initial(&mut self) -> bool {
        if self.ready {
            return false;
        }
        self.items = sample_todos();
        self.ready = true;
        info!(count = self.items.len(), "seeded todo store");
        true
    }

    /// Whether initial seeding has completed
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Id the next added item will receive
    pub fn next_id(&self) -> u64 {
        self.items.iter().map(|t| t.id).max().map_or(1, |id| id + 1)
    }

    /// Append a new item.
    ///
    /// Inputs are checked for emptiness only; whitespace is kept as typed.
    pub fn add_item(&mut self, title: &str, description: &str) -> Result<TodoItem, MissingField> {
        if title.is_empty() {
            debug!("rejected add: empty title");
            return Err(MissingField::Title);
        }
        if description.is_empty() {
            debug!("rejected add: empty description");
            return Err(MissingField::Description);
        }

        let item = TodoItem::new(self.next_id(), title, description);
        info!(id = item.id, "added todo");
        self.items.push(item.clone());
        Ok(item)
    }

    /// Remove the item with the given id, if present
    pub fn delete_item(&mut self, id: u64) -> Option<TodoItem> {
        match self.items.iter().position(|t| t.id == id) {
            Some(index) => {
                info!(id, "deleted todo");
                Some(self.items.remove(index))
            }
            None => {
                debug!(id, "delete ignored: no such todo");
                None
            }
        }
    }

    /// Items in insertion order
    pub fn list_items(&self) -> &[TodoItem] {
        &self.items
    }

    /// Look up an item by id
    pub fn get(&self, id: u64) -> Option<&TodoItem> {
        self.items.iter().find(|t| t.id == id)
    }

    /// Number of items in the store
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the store holds no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(store: &TodoStore) -> Vec<u64> {
        store.list_items().iter().map(|t| t.id).collect()
    }

    #[test]
    fn test_new_store_is_empty_and_not_ready() {
        let store = TodoStore::new();
        assert!(store.is_empty());
        assert!(!store.is_ready());
        assert_eq!(store.next_id(), 1);
    }

    #[test]
    fn test_load_initial_seeds_once() {
        let mut store = TodoStore::new();
        assert!(store.load_initial());
        assert!(store.is_ready());
        assert_eq!(store.list_items(), sample_todos().as_slice());

        store.delete_item(1);
        assert!(!store.load_initial());
        assert_eq!(ids(&store), vec![2, 3]);
    }

    #[test]
    fn test_add_assigns_sequential_ids() {
        let mut store = TodoStore::new();
        let first = store.add_item("A", "B").unwrap();
        assert_eq!(first.id, 1);
        assert!(!first.done);
        let second = store.add_item("C", "D").unwrap();
        assert_eq!(second.id, 2);
        assert_eq!(ids(&store), vec![1, 2]);
    }

    #[test]
    fn test_add_rejects_empty_fields() {
        let mut store = TodoStore::new();
        store.load_initial();

        assert_eq!(store.add_item("", "B"), Err(MissingField::Title));
        assert_eq!(store.add_item("A", ""), Err(MissingField::Description));
        assert_eq!(store.add_item("", ""), Err(MissingField::Title));
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_add_does_not_trim() {
        let mut store = TodoStore::new();
        let item = store.add_item(" ", " ").unwrap();
        assert_eq!(item.title, " ");
    }

    #[test]
    fn test_delete_absent_is_noop() {
        let mut store = TodoStore::new();
        store.load_initial();
        assert!(store.delete_item(42).is_none());
        assert_eq!(ids(&store), vec![1, 2, 3]);
    }

    #[test]
    fn test_id_follows_max_after_gap() {
        let mut store = TodoStore::new();
        store.load_initial();
        let removed = store.delete_item(2).unwrap();
        assert_eq!(removed.title, "todo 2");
        assert_eq!(ids(&store), vec![1, 3]);

        let added = store.add_item("x", "y").unwrap();
        assert_eq!(added.id, 4);
        assert_eq!(ids(&store), vec![1, 3, 4]);
        assert_eq!(store.get(4).map(|t| t.title.as_str()), Some("x"));
    }

    #[test]
    fn test_id_reused_after_tail_delete() {
        let mut store = TodoStore::new();
        store.load_initial();
        store.delete_item(3);
        assert_eq!(store.next_id(), 3);

        let added = store.add_item("x", "y").unwrap();
        assert_eq!(added.id, 3);
        assert_eq!(ids(&store), vec![1, 2, 3]);
    }

    #[test]
    fn test_id_restarts_after_clearing() {
        let mut store = TodoStore::new();
        store.load_initial();
        for id in [1, 2, 3] {
            store.delete_item(id);
        }
        assert!(store.is_empty());

        let added = store.add_item("x", "y").unwrap();
        assert_eq!(added.id, 1);
        assert_eq!(ids(&store), vec![1]);
    }

    #[test]
    fn test_missing_field_display() {
        assert_eq!(MissingField::Title.to_string(), "title is required");
        assert_eq!(
            MissingField::Description.to_string(),
            "description is required"
        );
    }
}
