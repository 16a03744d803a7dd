// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Incremental reconciliation between local and server state.
//!
//! Merge rules, per todo ID:
//! - Only on the server: insert it
//! - On both sides: keep `resolve_conflict(local, server)`
//! - Only local: untouched (its operations are still queued for replay)
//!
//! The sync watermark only advances after a response has been merged, so a
//! retried request re-asks for the same window.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::protocol::{SyncRequest, SyncResponse};
use crate::resolve::resolve_conflict;
use crate::todo::Todo;
use crate::vclock::ClockOrdering;

/// A todo edited concurrently on both sides. Diagnostic only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conflict {
    pub todo_id: String,
    pub local: Todo,
    pub server: Todo,
}

/// How much an incremental sync saved over a full snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncSavings {
    pub total: usize,
    pub sent: usize,
    /// Todos not transmitted.
    pub saved: usize,
    /// `saved` as a percentage of `total`; zero when there is nothing to send.
    pub saved_percent: f64,
}

/// Tracks the sync watermark and merges server responses.
#[derive(Debug, Clone, Default)]
pub struct SyncManager {
    last_sync_timestamp: Option<DateTime<Utc>>,
}

impl SyncManager {
    pub fn new() -> Self {
        SyncManager { last_sync_timestamp: None }
    }

    /// Resumes from a previously persisted watermark.
    pub fn with_last_sync(last_sync_timestamp: Option<DateTime<Utc>>) -> Self {
        SyncManager { last_sync_timestamp }
    }

    /// Returns the timestamp of the last applied response.
    pub fn last_sync_timestamp(&self) -> Option<DateTime<Utc>> {
        self.last_sync_timestamp
    }

    /// Builds the next request: full snapshot on first sync, delta after.
    pub fn create_sync_request(&self) -> SyncRequest {
        SyncRequest { last_sync_timestamp: self.last_sync_timestamp }
    }

    /// Returns todos updated strictly after `since`; everything if `None`.
    ///
    /// Equality is excluded so a client never gets back what it just sent.
    pub fn filter_todos_since_timestamp(todos: &[Todo], since: Option<DateTime<Utc>>) -> Vec<Todo> {
        match since {
            None => todos.to_vec(),
            Some(since) => todos.iter().filter(|t| t.updated_at > since).cloned().collect(),
        }
    }

    /// Folds server todos into the local map.
    ///
    /// Returns the IDs whose local value changed, in server order.
    pub fn merge_todos(local: &mut HashMap<String, Todo>, server: Vec<Todo>) -> Vec<String> {
        let mut changed = Vec::new();

        for incoming in server {
            match local.get(&incoming.id) {
                None => {
                    changed.push(incoming.id.clone());
                    local.insert(incoming.id.clone(), incoming);
                }
                Some(existing) => {
                    if resolve_conflict(existing, &incoming) == existing {
                        continue;
                    }
                    changed.push(incoming.id.clone());
                    local.insert(incoming.id.clone(), incoming);
                }
            }
        }

        changed
    }

    /// Lists todos present on both sides whose clocks are concurrent.
    ///
    /// Purely informational; merging resolves them regardless.
    pub fn detect_conflicts(local: &[Todo], server: &[Todo]) -> Vec<Conflict> {
        let by_id: HashMap<&str, &Todo> = local.iter().map(|t| (t.id.as_str(), t)).collect();

        server
            .iter()
            .filter_map(|remote| {
                let mine = by_id.get(remote.id.as_str())?;
                (mine.vector_clock.compare(&remote.vector_clock) == ClockOrdering::Concurrent)
                    .then(|| Conflict {
                        todo_id: remote.id.clone(),
                        local: (*mine).clone(),
                        server: remote.clone(),
                    })
            })
            .collect()
    }

    /// Applies an authoritative server state; same rules as `merge_todos`.
    pub fn apply_server_state(local: &mut HashMap<String, Todo>, server: Vec<Todo>) -> Vec<String> {
        Self::merge_todos(local, server)
    }

    /// Merges a response, then advances the watermark.
    pub fn apply_sync_response(
        &mut self,
        local: &mut HashMap<String, Todo>,
        response: SyncResponse,
    ) -> Vec<String> {
        let received = response.todos.len();
        let changed = Self::merge_todos(local, response.todos);
        self.last_sync_timestamp = Some(response.sync_timestamp);

        tracing::info!(
            received,
            changed = changed.len(),
            sync_timestamp = %response.sync_timestamp,
            "applied sync response"
        );
        changed
    }

    /// Reports how many todos an incremental sync avoided sending.
    pub fn calculate_sync_savings(total: usize, sent: usize) -> SyncSavings {
        let sent = sent.min(total);
        let saved = total - sent;
        let saved_percent = if total == 0 { 0.0 } else { saved as f64 * 100.0 / total as f64 };
        SyncSavings { total, sent, saved, saved_percent }
    }
}

#[cfg(test)]
#[path = "sync_tests.rs"]
mod tests;
