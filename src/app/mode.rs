//! View-mode controller
//!
//! Two states, `List` and `Add`, plus the draft text bound to the add form.
//! Drafts only live while the form is open.

use crate::models::TodoItem;
use crate::store::{MissingField, TodoStore};

/// Which view is visible
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// Item list, the resting state
    #[default]
    List,
    /// Modal add form
    Add,
}

impl ViewMode {
    pub fn label(&self) -> &'static str {
        match self {
            ViewMode::List => "list",
            ViewMode::Add => "add",
        }
    }
}

/// Form field receiving typed input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DraftField {
    #[default]
    Title,
    Description,
}

impl DraftField {
    fn next(self) -> Self {
        match self {
            DraftField::Title => DraftField::Description,
            DraftField::Description => DraftField::Title,
        }
    }
}

/// Unsaved form input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub title: String,
    pub description: String,
    pub focus: DraftField,
}

impl Draft {
    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.description.is_empty()
    }

    fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            DraftField::Title => &mut self.title,
            DraftField::Description => &mut self.description,
        }
    }
}

/// Result of pressing "Add" on the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Item committed and the list is showing again
    Added(TodoItem),
    /// A field was empty; the form stays open
    Rejected(MissingField),
    /// Not in add mode
    Ignored,
}

/// Two-state view controller
#[derive(Debug, Default)]
pub struct ModeController {
    mode: ViewMode,
    draft: Draft,
}

impl ModeController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently displayed view
    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    /// Pending form input
    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    /// `List -> Add`. Returns whether the mode changed.
    pub fn open_add(&mut self) -> bool {
        if self.mode == ViewMode::Add {
            return false;
        }
        self.mode = ViewMode::Add;
        true
    }

    /// `Add -> List`, discarding the draft. Returns whether the mode changed.
    pub fn cancel(&mut self) -> bool {
        if self.mode != ViewMode::Add {
            return false;
        }
        self.enter_list();
        true
    }

    /// Commit the draft to `store` and return to the list
    pub fn submit(&mut self, store: &mut TodoStore) -> SubmitOutcome {
        if self.mode != ViewMode::Add {
            return SubmitOutcome::Ignored;
        }
        match store.add_item(&self.draft.title, &self.draft.description) {
            Ok(item) => {
                self.enter_list();
                SubmitOutcome::Added(item)
            }
            Err(missing) => SubmitOutcome::Rejected(missing),
        }
    }

    /// Replace the draft title; ignored outside the form
    pub fn set_title(&mut self, title: impl Into<String>) -> bool {
        self.edit(|draft| draft.title = title.into())
    }

    /// Replace the draft description; ignored outside the form
    pub fn set_description(&mut self, description: impl Into<String>) -> bool {
        self.edit(|draft| draft.description = description.into())
    }

    /// Move input focus to the other field
    pub fn focus_next(&mut self) -> bool {
        self.edit(|draft| draft.focus = draft.focus.next())
    }

    /// Append a character to the focused field
    pub fn push_char(&mut self, c: char) -> bool {
        self.edit(|draft| draft.focused_mut().push(c))
    }

    /// Remove the last character of the focused field
    pub fn pop_char(&mut self) -> bool {
        if self.mode != ViewMode::Add {
            return false;
        }
        self.draft.focused_mut().pop().is_some()
    }

    fn edit(&mut self, f: impl FnOnce(&mut Draft)) -> bool {
        if self.mode != ViewMode::Add {
            return false;
        }
        f(&mut self.draft);
        true
    }

    fn enter_list(&mut self) {
        self.mode = ViewMode::List;
        self.draft = Draft::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let controller = ModeController::new();
        assert_eq!(controller.mode(), ViewMode::List);
        assert!(controller.draft().is_empty());
    }

    #[test]
    fn test_open_and_cancel_clears_draft() {
        let mut controller = ModeController::new();
        assert!(controller.open_add());
        assert!(!controller.open_add());

        controller.set_title("half typed");
        controller.push_char('!');
        assert_eq!(controller.draft().title, "half typed!");

        assert!(controller.cancel());
        assert_eq!(controller.mode(), ViewMode::List);
        assert!(controller.draft().is_empty());

        controller.open_add();
        assert_eq!(controller.draft(), &Draft::default());
    }

    #[test]
    fn test_cancel_in_list_is_noop() {
        let mut controller = ModeController::new();
        assert!(!controller.cancel());
        assert_eq!(controller.mode(), ViewMode::List);
    }

    #[test]
    fn test_draft_edits_ignored_in_list() {
        let mut controller = ModeController::new();
        assert!(!controller.set_title("x"));
        assert!(!controller.push_char('y'));
        assert!(!controller.pop_char());
        assert!(!controller.focus_next());
        assert!(controller.draft().is_empty());
    }

    #[test]
    fn test_typing_follows_focus() {
        let mut controller = ModeController::new();
        controller.open_add();
        controller.push_char('a');
        controller.focus_next();
        assert_eq!(controller.draft().focus, DraftField::Description);
        controller.push_char('b');
        controller.push_char('c');
        assert!(controller.pop_char());
        assert_eq!(controller.draft().title, "a");
        assert_eq!(controller.draft().description, "b");

        controller.focus_next();
        assert_eq!(controller.draft().focus, DraftField::Title);
    }

    #[test]
    fn test_submit_valid_returns_to_list() {
        let mut store = TodoStore::new();
        let mut controller = ModeController::new();
        controller.open_add();
        controller.set_title("A");
        controller.set_description("B");

        let outcome = controller.submit(&mut store);
        assert_eq!(outcome, SubmitOutcome::Added(TodoItem::new(1, "A", "B")));
        assert_eq!(controller.mode(), ViewMode::List);
        assert!(controller.draft().is_empty());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_submit_invalid_keeps_form_open() {
        let mut store = TodoStore::new();
        let mut controller = ModeController::new();
        controller.open_add();
        controller.set_description("B");

        let outcome = controller.submit(&mut store);
        assert_eq!(outcome, SubmitOutcome::Rejected(MissingField::Title));
        assert_eq!(controller.mode(), ViewMode::Add);
        assert_eq!(controller.draft().description, "B");
        assert!(store.is_empty());

        controller.set_title("A");
        controller.set_description("");
        assert_eq!(
            controller.submit(&mut store),
            SubmitOutcome::Rejected(MissingField::Description)
        );
        assert_eq!(controller.mode(), ViewMode::Add);
    }

    #[test]
    fn test_submit_in_list_is_ignored() {
        let mut store = TodoStore::new();
        let mut controller = ModeController::new();
        assert_eq!(controller.submit(&mut store), SubmitOutcome::Ignored);
        assert!(store.is_empty());
    }
}
