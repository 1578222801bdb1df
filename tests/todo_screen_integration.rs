//! Integration tests for the todo store and view-mode flow

use std::{cell::RefCell, rc::Rc};

use tuido::app::{Change, ScreenState, SubmitOutcome, ViewMode};
use tuido::models::sample_todos;
use tuido::store::{MissingField, TodoStore};

fn ids(state: &ScreenState) -> Vec<u64> {
    state.items().iter().map(|t| t.id).collect()
}

#[test]
fn test_seeding_yields_samples_in_order() {
    let mut store = TodoStore::new();
    store.load_initial();
    assert_eq!(store.list_items(), sample_todos().as_slice());
}

#[test]
fn test_add_on_empty_store() {
    let mut store = TodoStore::new();
    assert_eq!(store.add_item("A", "B").unwrap().id, 1);
    assert_eq!(store.add_item("A", "B").unwrap().id, 2);
}

#[test]
fn test_invalid_add_keeps_form_open() {
    let mut state = ScreenState::new();
    state.load_initial();
    state.press_plus();

    state.set_draft_description("B");
    assert_eq!(state.press_add(), SubmitOutcome::Rejected(MissingField::Title));

    state.set_draft_title("A");
    state.set_draft_description("");
    assert_eq!(
        state.press_add(),
        SubmitOutcome::Rejected(MissingField::Description)
    );

    assert_eq!(state.mode(), ViewMode::Add);
    assert_eq!(ids(&state), vec![1, 2, 3]);
}

#[test]
fn test_cancel_clears_draft() {
    let mut state = ScreenState::new();
    state.press_plus();
    state.set_draft_title("partial");
    state.set_draft_description("text");
    state.press_cancel();
    assert_eq!(state.mode(), ViewMode::List);

    state.press_plus();
    assert!(state.draft().title.is_empty());
    assert!(state.draft().description.is_empty());
}

#[test]
fn test_end_to_end() {
    let changes = Rc::new(RefCell::new(Vec::new()));
    let mut state = ScreenState::new();
    let sink = changes.clone();
    state.subscribe(Rc::new(RefCell::new(move |change: &Change| {
        sink.borrow_mut().push(change.clone());
    })));

    state.load_initial();
    assert_eq!(ids(&state), vec![1, 2, 3]);

    state.press_delete(2);
    assert_eq!(ids(&state), vec![1, 3]);

    state.press_plus();
    state.set_draft_title("x");
    state.set_draft_description("y");
    match state.press_add() {
        SubmitOutcome::Added(item) => assert_eq!(item.id, 4),
        other => panic!("unexpected outcome: {:?}", other),
    }
    assert_eq!(ids(&state), vec![1, 3, 4]);
    assert_eq!(state.mode(), ViewMode::List);

    // absent delete changes nothing and notifies nobody
    let before = changes.borrow().len();
    assert!(state.press_delete(2).is_none());
    assert_eq!(changes.borrow().len(), before);
    assert_eq!(changes.borrow()[0], Change::Loaded);
}
