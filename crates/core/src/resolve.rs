// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Deterministic conflict resolution between two versions of a todo.
//!
//! Resolution rules:
//! - One version causally dominates: it wins
//! - Concurrent versions: last write wins on `updated_at`, then the
//!   lexicographically smaller `updated_by`
//! - Equal clocks: identical payloads by construction; divergent payloads
//!   fall back to the concurrent rules and are logged
//!
//! The result never depends on argument order or on which replica evaluates
//! it, so every replica converges without coordination.

use std::cmp::Ordering;

use crate::todo::Todo;
use crate::vclock::ClockOrdering;

/// Picks the surviving version of two copies of the same todo.
pub fn resolve_conflict<'a>(t1: &'a Todo, t2: &'a Todo) -> &'a Todo {
    match t1.vector_clock.compare(&t2.vector_clock) {
        ClockOrdering::Before => t2,
        ClockOrdering::After => t1,
        ClockOrdering::Equal => {
            if t1 != t2 {
                tracing::warn!(
                    todo_id = %t1.id,
                    clock = %t1.vector_clock,
                    "equal vector clocks carry divergent payloads"
                );
            }
            last_write_wins(t1, t2)
        }
        ClockOrdering::Concurrent => last_write_wins(t1, t2),
    }
}

/// Last-write-wins tiebreak for causally concurrent versions.
///
/// Strictly later `updated_at` wins. On an exact tie the smaller `updated_by`
/// wins. If both match, a total order over the remaining content decides.
pub fn last_write_wins<'a>(t1: &'a Todo, t2: &'a Todo) -> &'a Todo {
    let ordering = t1
        .updated_at
        .cmp(&t2.updated_at)
        // Smaller author wins, so reverse the string comparison.
        .then_with(|| t2.updated_by.cmp(&t1.updated_by))
        .then_with(|| content_order(t1, t2));

    match ordering {
        Ordering::Less => t2,
        Ordering::Greater | Ordering::Equal => t1,
    }
}

/// Orders two versions by content so identical stamps still pick one winner.
fn content_order(t1: &Todo, t2: &Todo) -> Ordering {
    t1.deleted_at
        .cmp(&t2.deleted_at)
        .then_with(|| t1.completed.cmp(&t2.completed))
        .then_with(|| t1.title.cmp(&t2.title))
        .then_with(|| t1.position.cmp(&t2.position))
        .then_with(|| t1.id.cmp(&t2.id))
}

#[cfg(test)]
#[path = "resolve_tests.rs"]
mod tests;
