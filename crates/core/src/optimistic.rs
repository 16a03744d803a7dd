// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rollback bookkeeping for optimistic local mutations.
//!
//! Before a mutation is applied, the caller stores an owned copy of the
//! prior state under a fresh operation ID. The ID is then resolved exactly
//! once: `confirm` discards the copy, `rollback` hands it back. Resolving an
//! ID a second time is a no-op.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque identifier for one optimistic mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OperationId(Uuid);

impl OperationId {
    /// Mints a new random (v4) operation ID.
    pub fn new() -> Self {
        OperationId(Uuid::new_v4())
    }
}

impl Default for OperationId {
    fn default() -> Self {
        OperationId::new()
    }
}

impl fmt::Display for OperationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Pending snapshots keyed by operation ID.
#[derive(Debug, Clone)]
pub struct OptimisticState<T> {
    snapshots: HashMap<OperationId, T>,
}

impl<T> OptimisticState<T> {
    pub fn new() -> Self {
        OptimisticState { snapshots: HashMap::new() }
    }

    /// Stores the pre-mutation state and marks the operation pending.
    ///
    /// Takes the value by ownership: later edits to the live entity can't
    /// reach the snapshot.
    pub fn store_previous_state(&mut self, operation_id: OperationId, previous: T) {
        self.snapshots.insert(operation_id, previous);
    }

    /// Returns true if the operation has been neither confirmed nor rolled back.
    pub fn is_pending(&self, operation_id: OperationId) -> bool {
        self.snapshots.contains_key(&operation_id)
    }

    /// Returns the IDs of every unresolved operation.
    pub fn pending_operation_ids(&self) -> Vec<OperationId> {
        let mut ids: Vec<OperationId> = self.snapshots.keys().copied().collect();
        ids.sort();
        ids
    }

    /// Discards the snapshot: the mutation is now authoritative.
    ///
    /// Returns false if the operation was unknown or already resolved.
    pub fn confirm_operation(&mut self, operation_id: OperationId) -> bool {
        self.snapshots.remove(&operation_id).is_some()
    }

    /// Removes and returns the snapshot for the caller to restore.
    ///
    /// Returns `None` if the operation was unknown or already resolved.
    pub fn rollback(&mut self, operation_id: OperationId) -> Option<T> {
        self.snapshots.remove(&operation_id)
    }

    /// Returns the number of unresolved operations.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Returns true if nothing is pending.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}

impl<T> Default for OptimisticState<T> {
    fn default() -> Self {
        OptimisticState::new()
    }
}

#[cfg(test)]
#[path = "optimistic_tests.rs"]
mod tests;
