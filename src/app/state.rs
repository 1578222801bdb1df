//! Screen state management
//!
//! Owns the todo store and the view-mode controller, routes every mutation
//! through controlled methods, and notifies subscribers after each change.
//! Also maps keyboard events to navigation actions for the current mode.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

use crate::app::dispatcher::{Callback, Change, Dispatcher};
use crate::app::mode::{Draft, ModeController, SubmitOutcome, ViewMode};
use crate::models::TodoItem;
use crate::store::TodoStore;

/// Actions that can be triggered by keyboard input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationAction {
    /// Move selection up (arrow up, k)
    Up,
    /// Move selection down (arrow down, j)
    Down,
    /// Open the add form (+, a)
    Open,
    /// Delete the selected item (d, Delete)
    Delete,
    /// Press "Add" on the form (Enter)
    Submit,
    /// Press "Cancel" on the form (Esc)
    Back,
    /// Switch form field (Tab, Shift+Tab, arrows)
    NextField,
    /// Type a character into the focused field
    Input(char),
    /// Erase the last character of the focused field (Backspace)
    Erase,
    /// Quit application (q, Esc on the list, Ctrl+C anywhere)
    Quit,
    /// No action
    None,
}

/// Single owner of all screen state
#[derive(Debug, Default)]
pub struct ScreenState {
    store: TodoStore,
    controller: ModeController,
    dispatcher: Dispatcher,
}

impl ScreenState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback invoked after every change
    pub fn subscribe(&mut self, callback: Callback) {
        self.dispatcher.register(callback);
    }

    /// Current view mode
    pub fn mode(&self) -> ViewMode {
        self.controller.mode()
    }

    /// Current form draft
    pub fn draft(&self) -> &Draft {
        self.controller.draft()
    }

    /// Todo items in display order
    pub fn items(&self) -> &[TodoItem] {
        self.store.list_items()
    }

    pub fn is_ready(&self) -> bool {
        self.store.is_ready()
    }

    /// Seed the store with the sample items
    pub fn load_initial(&mut self) -> bool {
        let loaded = self.store.load_initial();
        if loaded {
            self.notify(Change::Loaded);
        }
        loaded
    }

    /// The "+" button
    pub fn press_plus(&mut self) -> bool {
        let changed = self.controller.open_add();
        if changed {
            self.notify(Change::ModeChanged(ViewMode::Add));
        }
        changed
    }

    /// The "Cancel" button on the form
    pub fn press_cancel(&mut self) -> bool {
        let changed = self.controller.cancel();
        if changed {
            self.notify(Change::ModeChanged(ViewMode::List));
        }
        changed
    }

    /// The "Add" button on the form
    pub fn press_add(&mut self) -> SubmitOutcome {
        let outcome = self.controller.submit(&mut self.store);
        match &outcome {
            SubmitOutcome::Added(item) => {
                self.notify(Change::ItemAdded(item.clone()));
                self.notify(Change::ModeChanged(ViewMode::List));
            }
            SubmitOutcome::Rejected(missing) => debug!(%missing, "form kept open"),
            SubmitOutcome::Ignored => {}
        }
        outcome
    }

    /// The "Delete" action on a list row
    pub fn press_delete(&mut self, id: u64) -> Option<TodoItem> {
        let removed = self.store.delete_item(id);
        if let Some(item) = &removed {
            self.notify(Change::ItemDeleted(item.clone()));
        }
        removed
    }

    /// Edit the title field while the form is open
    pub fn set_draft_title(&mut self, title: impl Into<String>) -> bool {
        let changed = self.controller.set_title(title);
        self.notify_draft(changed)
    }

    /// Edit the description field while the form is open
    pub fn set_draft_description(&mut self, description: impl Into<String>) -> bool {
        let changed = self.controller.set_description(description);
        self.notify_draft(changed)
    }

    /// Type into the focused field
    pub fn type_char(&mut self, c: char) -> bool {
        let changed = self.controller.push_char(c);
        self.notify_draft(changed)
    }

    pub fn backspace(&mut self) -> bool {
        let changed = self.controller.pop_char();
        self.notify_draft(changed)
    }

    pub fn focus_next_field(&mut self) -> bool {
        let changed = self.controller.focus_next();
        self.notify_draft(changed)
    }

    fn notify_draft(&self, changed: bool) -> bool {
        if changed {
            self.notify(Change::DraftEdited);
        }
        changed
    }

    fn notify(&self, change: Change) {
        self.dispatcher.dispatch(&change);
    }

    /// Convert keyboard event to navigation action for the given mode
    pub fn key_to_navigation(mode: ViewMode, key: KeyEvent) -> NavigationAction {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return NavigationAction::Quit;
        }

        match mode {
            ViewMode::List => match key.code {
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => NavigationAction::Quit,
                KeyCode::Char('+') | KeyCode::Char('a') => NavigationAction::Open,
                KeyCode::Up | KeyCode::Char('k') => NavigationAction::Up,
                KeyCode::Down | KeyCode::Char('j') => NavigationAction::Down,
                KeyCode::Char('d') | KeyCode::Delete => NavigationAction::Delete,
                _ => NavigationAction::None,
            },
            ViewMode::Add => match key.code {
                KeyCode::Esc => NavigationAction::Back,
                KeyCode::Enter => NavigationAction::Submit,
                KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                    NavigationAction::NextField
                }
                KeyCode::Backspace => NavigationAction::Erase,
                KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                    NavigationAction::Input(c)
                }
                _ => NavigationAction::None,
            },
        }
    }
}
