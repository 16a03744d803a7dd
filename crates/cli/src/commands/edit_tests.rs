// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::*;
use crate::commands::testing::TestContext;

#[test]
fn test_update_title_by_prefix() {
    let mut ctx = TestContext::new();
    let id = ctx.add_todo("Original");

    let todo = run_impl(&mut ctx.replica, &id[..8], Some("Updated".into()), None).unwrap();
    assert_eq!(todo.title, "Updated");
    assert_eq!(todo.vector_clock.get("tester"), 2);

    ctx.reopen();
    assert_eq!(ctx.todo(&id).title, "Updated");
}

#[test]
fn test_update_completed() {
    let mut ctx = TestContext::new();
    let id = ctx.add_todo("Task");

    run_impl(&mut ctx.replica, &id, None, Some(true)).unwrap();
    assert!(ctx.todo(&id).completed);
    run_impl(&mut ctx.replica, &id, None, Some(false)).unwrap();
    assert!(!ctx.todo(&id).completed);
}

#[test]
fn test_edit_requires_a_change() {
    let mut ctx = TestContext::new();
    let id = ctx.add_todo("Task");
    assert!(matches!(run_impl(&mut ctx.replica, &id, None, None), Err(Error::NothingToChange)));
    assert!(matches!(
        run_impl(&mut ctx.replica, &id, Some(" ".into()), None),
        Err(Error::FieldEmpty { .. })
    ));
}

#[test]
fn test_edit_deleted_todo_fails() {
    let mut ctx = TestContext::new();
    let id = ctx.add_todo("Task");
    crate::commands::rm::run_impl(&mut ctx.replica, &id).unwrap();

    let result = run_impl(&mut ctx.replica, &id, Some("Revived".into()), None);
    assert!(matches!(result, Err(Error::TodoDeleted(_))));
    assert_eq!(ctx.todo(&id).title, "Task");
}

#[test]
fn test_edit_nonexistent_todo_fails() {
    let mut ctx = TestContext::new();
    let result = run_impl(&mut ctx.replica, "nonexistent", Some("x".into()), None);
    assert!(matches!(result, Err(Error::TodoNotFound(_))));
}
