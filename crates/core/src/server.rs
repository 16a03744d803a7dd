// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Reference authority: the server side of replay and incremental sync.
//!
//! Replayed operations are folded in by sequence number. Each todo an
//! operation carries is resolved against the server's copy with the same
//! conflict rules clients use, so replaying an operation twice, or out of
//! band with a sync, converges on the same state.

use std::collections::HashMap;

use crate::clock::{ClockSource, SystemClock};
use crate::op::OfflineOperation;
use crate::protocol::{SyncRequest, SyncResponse};
use crate::resolve::resolve_conflict;
use crate::sync::SyncManager;
use crate::todo::{display_order, Todo};

/// Authoritative todo state shared by every client.
pub struct ServerState<C: ClockSource = SystemClock> {
    clock: C,
    todos: HashMap<String, Todo>,
    /// Highest replayed sequence number per user.
    acknowledged: HashMap<String, u64>,
}

impl ServerState<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for ServerState<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: ClockSource> ServerState<C> {
    pub fn with_clock(clock: C) -> Self {
        ServerState { clock, todos: HashMap::new(), acknowledged: HashMap::new() }
    }

    /// Resolves one incoming todo against the stored copy.
    ///
    /// Returns true if the stored copy changed.
    pub fn upsert(&mut self, incoming: Todo) -> bool {
        if let Some(existing) = self.todos.get(&incoming.id) {
            if resolve_conflict(existing, &incoming) == existing {
                return false;
            }
        }
        self.todos.insert(incoming.id.clone(), incoming);
        true
    }

    /// Replays a client's queued operations in sequence order.
    ///
    /// Operations at or below the user's acknowledged sequence are skipped,
    /// so a retried upload is harmless. Returns the IDs that changed.
    pub fn apply_operations(&mut self, mut ops: Vec<OfflineOperation>) -> Vec<String> {
        ops.sort();
        let mut changed = Vec::new();

        for op in ops {
            let acked = self.acknowledged.entry(op.user_id.clone()).or_insert(0);
            if op.sequence_number <= *acked {
                tracing::debug!(user = %op.user_id, sequence = op.sequence_number, "skipping replayed operation");
                continue;
            }
            *acked = op.sequence_number;

            for todo in op.payload.todos() {
                if self.upsert(todo.clone()) && !changed.contains(&todo.id) {
                    changed.push(todo.id.clone());
                }
            }
        }

        tracing::info!(changed = changed.len(), "applied replayed operations");
        changed
    }

    /// Returns the highest sequence number replayed for `user_id`.
    pub fn acknowledged(&self, user_id: &str) -> u64 {
        self.acknowledged.get(user_id).copied().unwrap_or(0)
    }

    /// Answers a sync request with every todo updated after its watermark.
    pub fn handle_sync(&self, request: &SyncRequest) -> SyncResponse {
        let mut todos = SyncManager::filter_todos_since_timestamp(
            &self.todos.values().cloned().collect::<Vec<_>>(),
            request.last_sync_timestamp,
        );
        todos.sort_by(display_order);
        SyncResponse::new(todos, self.clock.now())
    }

    pub fn get_todo(&self, id: &str) -> Option<&Todo> {
        self.todos.get(id)
    }

    /// Returns every stored todo in display order.
    pub fn todos(&self) -> Vec<&Todo> {
        let mut all: Vec<&Todo> = self.todos.values().collect();
        all.sort_by(|a, b| display_order(a, b));
        all
    }
}

#[cfg(test)]
#[path = "server_tests.rs"]
mod tests;
