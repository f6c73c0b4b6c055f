use std::cell::RefCell;
use std::rc::Rc;

use super::*;

// =============================================================
// Writes
// =============================================================

#[test]
fn new_cell_has_no_pending_render() {
    let cell = SyncCell::new(1);
    assert_eq!(*cell.get(), 1);
    assert_eq!(cell.version(), 0);
    assert!(!cell.is_render_pending());
}

#[test]
fn set_replaces_value_and_schedules_render() {
    let mut cell = SyncCell::new(1);
    cell.set(2);
    assert_eq!(*cell.get(), 2);
    assert_eq!(cell.version(), 1);
    assert!(cell.is_render_pending());
}

#[test]
fn mark_rendered_clears_pending_render() {
    let mut cell = SyncCell::new(1);
    cell.set(2);
    assert!(cell.mark_rendered());
    assert!(!cell.is_render_pending());
    assert!(!cell.mark_rendered());
}

// =============================================================
// Settled callbacks
// =============================================================

#[test]
fn once_settled_fires_after_render_with_latest_value() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let mut cell = SyncCell::new(0);
    cell.set(5);

    let sink = Rc::clone(&seen);
    cell.once_settled(move |value| sink.borrow_mut().push(*value));
    assert!(seen.borrow().is_empty());

    cell.mark_rendered();
    assert_eq!(*seen.borrow(), vec![5]);
}

#[test]
fn once_settled_fires_only_once() {
    let count = Rc::new(RefCell::new(0));
    let mut cell = SyncCell::new(0);

    let sink = Rc::clone(&count);
    cell.once_settled(move |_| *sink.borrow_mut() += 1);
    cell.set(1);
    cell.mark_rendered();
    cell.set(2);
    cell.mark_rendered();

    assert_eq!(*count.borrow(), 1);
}

#[test]
fn once_settled_waits_for_a_write() {
    let count = Rc::new(RefCell::new(0));
    let mut cell = SyncCell::new(0);

    let sink = Rc::clone(&count);
    cell.once_settled(move |_| *sink.borrow_mut() += 1);
    assert!(!cell.mark_rendered());
    assert_eq!(*count.borrow(), 0);
    assert_eq!(cell.pending_callbacks(), 1);

    cell.set(1);
    assert!(cell.mark_rendered());
    assert_eq!(*count.borrow(), 1);
    assert_eq!(cell.pending_callbacks(), 0);
}

#[test]
fn batched_writes_settle_together() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let mut cell = SyncCell::new(0);

    cell.set(1);
    let first = Rc::clone(&seen);
    cell.once_settled(move |value| first.borrow_mut().push(("first", *value)));
    cell.set(2);
    let second = Rc::clone(&seen);
    cell.once_settled(move |value| second.borrow_mut().push(("second", *value)));

    cell.mark_rendered();
    assert_eq!(*seen.borrow(), vec![("first", 2), ("second", 2)]);
}

#[test]
fn debug_output_reports_queue_length() {
    let mut cell = SyncCell::new(7);
    cell.once_settled(|_| {});
    let text = format!("{cell:?}");
    assert!(text.contains("value: 7"));
    assert!(text.contains("settled: 1"));
}
