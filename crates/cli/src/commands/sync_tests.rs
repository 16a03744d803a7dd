// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::*;
use crate::commands::testing::TestContext;
use chrono::{Duration, Utc};

#[test]
fn test_apply_inserts_and_advances_watermark() {
    let mut ctx = TestContext::new();
    ctx.add_todo("mine");
    assert!(ctx.replica.sync().create_sync_request().is_full());

    let stamp = Utc::now();
    let remote = Todo::new("remote-1".into(), "theirs".into(), 1, "phone", stamp);
    let summary = apply_impl(&mut ctx.replica, SyncResponse::new(vec![remote], stamp)).unwrap();

    assert_eq!(summary.changed, ["remote-1"]);
    assert_eq!(summary.conflicts, 0);
    assert_eq!(summary.savings.total, 2);
    assert_eq!(summary.savings.sent, 1);

    ctx.reopen();
    assert_eq!(ctx.titles(), ["mine", "theirs"]);
    assert_eq!(ctx.replica.sync().create_sync_request().last_sync_timestamp, Some(stamp));
}

#[test]
fn test_apply_resolves_concurrent_edit_by_last_write() {
    let mut ctx = TestContext::new();
    let id = ctx.add_todo("shared");
    let base = ctx.todo(&id);
    crate::commands::edit::run_impl(&mut ctx.replica, &id, Some("mine".into()), None).unwrap();

    let mut theirs = base.clone();
    theirs.title = "theirs".into();
    theirs.vector_clock = theirs.vector_clock.increment("phone");
    theirs.updated_by = "phone".into();
    theirs.updated_at = Utc::now() + Duration::hours(1);

    let summary = apply_impl(&mut ctx.replica, SyncResponse::new(vec![theirs], Utc::now())).unwrap();
    assert_eq!(summary.conflicts, 1);
    assert_eq!(summary.changed, [id.clone()]);
    assert_eq!(ctx.todo(&id).title, "theirs");
}

#[test]
fn test_apply_keeps_causally_newer_local() {
    let mut ctx = TestContext::new();
    let id = ctx.add_todo("v1");
    let stale = ctx.todo(&id);
    crate::commands::edit::run_impl(&mut ctx.replica, &id, Some("v2".into()), None).unwrap();

    let summary = apply_impl(&mut ctx.replica, SyncResponse::new(vec![stale], Utc::now())).unwrap();
    assert!(summary.changed.is_empty());
    assert_eq!(summary.conflicts, 0);
    assert_eq!(ctx.todo(&id).title, "v2");
}
