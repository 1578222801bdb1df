//! Change notifications
//!
//! Subscribers are called in registration order after every effective
//! mutation of the screen state.

use std::{cell::RefCell, rc::Rc};

use crate::app::mode::ViewMode;
use crate::models::TodoItem;

pub type Callback = Rc<RefCell<dyn FnMut(&Change)>>;

/// What changed in the screen state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change {
    Loaded,
    ModeChanged(ViewMode),
    DraftEdited,
    ItemAdded(TodoItem),
    ItemDeleted(TodoItem),
}

#[derive(Default)]
pub struct Dispatcher {
    subscribers: Vec<Callback>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a subscriber; it is called after those already registered
    pub fn register(&mut self, callback: Callback) {
        self.subscribers.push(callback);
    }

    /// Call every subscriber with `change`, in registration order
    pub fn dispatch(&self, change: &Change) {
        for sub in &self.subscribers {
            (sub.borrow_mut())(change);
        }
    }
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
