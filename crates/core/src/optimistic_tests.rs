// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::todo::Todo;
use chrono::{TimeZone, Utc};

fn todo(title: &str) -> Todo {
    let now = Utc.with_ymd_and_hms(2026, 5, 1, 0, 0, 0).unwrap();
    Todo::new("todo-1".into(), title.into(), 0, "client-a", now)
}

#[test]
fn stored_snapshot_is_pending_until_resolved() {
    let mut state = OptimisticState::new();
    let op = OperationId::new();

    state.store_previous_state(op, todo("before"));
    assert!(state.is_pending(op));
    assert_eq!(state.pending_operation_ids(), vec![op]);

    assert!(state.confirm_operation(op));
    assert!(!state.is_pending(op));
    assert!(state.is_empty());
}

#[test]
fn rollback_returns_snapshot_once() {
    let mut state = OptimisticState::new();
    let op = OperationId::new();
    state.store_previous_state(op, todo("before"));

    let restored = state.rollback(op).unwrap();
    assert_eq!(restored.title, "before");
    assert!(state.rollback(op).is_none());
    assert!(!state.confirm_operation(op));
}

#[test]
fn snapshot_is_isolated_from_live_entity() {
    let mut state = OptimisticState::new();
    let op = OperationId::new();
    let mut live = todo("before");

    state.store_previous_state(op, live.clone());
    live.title = "after".into();
    live.completed = true;

    let restored = state.rollback(op).unwrap();
    assert_eq!(restored.title, "before");
    assert!(!restored.completed);
}

#[test]
fn unknown_operation_resolves_to_nothing() {
    let mut state: OptimisticState<Todo> = OptimisticState::new();
    let op = OperationId::new();
    assert!(!state.is_pending(op));
    assert!(!state.confirm_operation(op));
    assert!(state.rollback(op).is_none());
}

#[test]
fn independent_operations_resolve_independently() {
    let mut state = OptimisticState::new();
    let first = OperationId::new();
    let second = OperationId::new();
    state.store_previous_state(first, todo("one"));
    state.store_previous_state(second, todo("two"));
    assert_eq!(state.len(), 2);

    assert!(state.confirm_operation(first));
    assert!(state.is_pending(second));
    assert_eq!(state.rollback(second).unwrap().title, "two");
}

#[test]
fn operation_ids_are_unique() {
    let a = OperationId::new();
    let b = OperationId::new();
    assert_ne!(a, b);
    assert_eq!(a.to_string().len(), 36);
}
