// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The replicated todo entity.
//!
//! Todos are never physically removed: deleting sets `deleted_at`, which keeps
//! the row around to reconcile against remote edits and remote deletes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::vclock::VectorClock;

/// One item in the shared ordered list.
///
/// Field names follow the wire shape (`camelCase`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    /// Client-generated v4 UUID.
    pub id: String,
    pub title: String,
    pub completed: bool,
    /// Render order among active todos.
    pub position: usize,
    pub vector_clock: VectorClock,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by: String,
    pub updated_by: String,
    /// Soft-delete marker; `None` means active.
    #[serde(default)]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Todo {
    /// Builds a fresh todo authored by `client_id` at `now`.
    pub fn new(
        id: String,
        title: String,
        position: usize,
        client_id: &str,
        now: DateTime<Utc>,
    ) -> Self {
        Todo {
            id,
            title,
            completed: false,
            position,
            vector_clock: VectorClock::new(client_id),
            created_at: now,
            updated_at: now,
            created_by: client_id.to_string(),
            updated_by: client_id.to_string(),
            deleted_at: None,
        }
    }

    /// Returns true if the todo has been soft-deleted.
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Returns true if the todo is visible in the list.
    pub fn is_active(&self) -> bool {
        !self.is_deleted()
    }

    /// Records a local write: bumps the client's counter and the update stamp.
    pub(crate) fn touch(&mut self, client_id: &str, now: DateTime<Utc>) {
        self.vector_clock = self.vector_clock.increment(client_id);
        self.updated_by = client_id.to_string();
        // updated_at never goes below created_at, even if the wall clock steps back.
        self.updated_at = now.max(self.created_at);
    }
}

/// A partial update to a todo's user-editable fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoChanges {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<usize>,
}

impl TodoChanges {
    /// Changes only the title.
    pub fn title(title: impl Into<String>) -> Self {
        TodoChanges { title: Some(title.into()), ..Default::default() }
    }

    /// Changes only the completion flag.
    pub fn completed(completed: bool) -> Self {
        TodoChanges { completed: Some(completed), ..Default::default() }
    }

    /// Returns true if no field is set.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.completed.is_none() && self.position.is_none()
    }

    /// Writes every set field onto `todo`.
    pub fn apply_to(&self, todo: &mut Todo) {
        if let Some(title) = &self.title {
            todo.title = title.clone();
        }
        if let Some(completed) = self.completed {
            todo.completed = completed;
        }
        if let Some(position) = self.position {
            todo.position = position;
        }
    }
}

/// Orders todos for display: by position, then creation time, then ID.
///
/// Positions can collide after concurrent creates on different replicas; the
/// secondary keys keep every replica's rendering identical.
pub fn display_order(a: &Todo, b: &Todo) -> std::cmp::Ordering {
    a.position
        .cmp(&b.position)
        .then_with(|| a.created_at.cmp(&b.created_at))
        .then_with(|| a.id.cmp(&b.id))
}

#[cfg(test)]
#[path = "todo_tests.rs"]
mod tests;
