// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Offline operation queue: a durable, strictly ordered log of local
//! mutations waiting to be replayed to the server.
//!
//! Sequence numbers increase by exactly one per enqueue and are never
//! reassigned, even after synced entries are pruned. Replay order is the
//! sequence order.
//!
//! Persistence is a JSONL journal. Each line is one record:
//!
//! ```text
//! {"record":"checkpoint","lastAssigned":7,"lastSynced":5}
//! {"record":"op","sequenceNumber":6,...}
//! {"record":"synced","sequence":6}
//! {"record":"removed","sequence":7}
//! ```
//!
//! Compaction rewrites the file as a checkpoint followed by the surviving
//! operations, so the counters outlive the entries they describe.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::jsonl;
use crate::op::{OfflineOperation, OperationPayload};

/// One line of the persisted queue journal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "record", rename_all = "snake_case", rename_all_fields = "camelCase")]
enum QueueRecord {
    Checkpoint { last_assigned: u64, last_synced: u64 },
    Op(OfflineOperation),
    Synced { sequence: u64 },
    Removed { sequence: u64 },
}

/// Durable, sequence-numbered queue of offline operations.
#[derive(Debug)]
pub struct OperationQueue {
    /// Journal file; `None` keeps the queue in memory only.
    path: Option<PathBuf>,
    entries: BTreeMap<u64, OfflineOperation>,
    last_assigned: u64,
    last_synced: u64,
}

impl OperationQueue {
    /// Creates a queue that is never written to disk.
    pub fn in_memory() -> Self {
        OperationQueue { path: None, entries: BTreeMap::new(), last_assigned: 0, last_synced: 0 }
    }

    /// Opens or creates a queue journal at the given path.
    ///
    /// Replays every record so counters and pending entries survive restarts.
    /// A record torn by a crash is settled first so later appends stay on
    /// their own lines.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let mut queue = OperationQueue::in_memory();

        jsonl::repair_tail(&path)?;

        for record in jsonl::read_all::<QueueRecord>(&path)? {
            queue.replay_record(record);
        }
        queue.path = Some(path);

        tracing::debug!(
            entries = queue.entries.len(),
            last_assigned = queue.last_assigned,
            last_synced = queue.last_synced,
            "opened operation queue"
        );
        Ok(queue)
    }

    fn replay_record(&mut self, record: QueueRecord) {
        match record {
            QueueRecord::Checkpoint { last_assigned, last_synced } => {
                self.last_assigned = self.last_assigned.max(last_assigned);
                self.last_synced = self.last_synced.max(last_synced);
            }
            QueueRecord::Op(op) => {
                self.last_assigned = self.last_assigned.max(op.sequence_number);
                self.entries.insert(op.sequence_number, op);
            }
            QueueRecord::Synced { sequence } => {
                self.last_synced = self.last_synced.max(sequence);
            }
            QueueRecord::Removed { sequence } => {
                self.entries.remove(&sequence);
            }
        }
    }

    fn persist(&self, record: &QueueRecord) -> Result<()> {
        match &self.path {
            Some(path) => jsonl::append(path, record),
            None => Ok(()),
        }
    }

    fn rewrite(&self) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let mut records = Vec::with_capacity(self.entries.len() + 1);
        records.push(QueueRecord::Checkpoint {
            last_assigned: self.last_assigned,
            last_synced: self.last_synced,
        });
        records.extend(self.entries.values().cloned().map(QueueRecord::Op));
        jsonl::write_all(path, &records)
    }

    /// Appends an operation, assigning it the next sequence number.
    ///
    /// The operation is on disk before the counter advances.
    pub fn enqueue(
        &mut self,
        todo_id: &str,
        payload: OperationPayload,
        user_id: &str,
        timestamp: DateTime<Utc>,
    ) -> Result<OfflineOperation> {
        let sequence = self.last_assigned + 1;
        let op = OfflineOperation::new(
            sequence,
            todo_id.to_string(),
            payload,
            timestamp,
            user_id.to_string(),
        );

        self.persist(&QueueRecord::Op(op.clone()))?;
        self.last_assigned = sequence;
        self.entries.insert(sequence, op.clone());

        tracing::debug!(sequence, todo_id, op_type = %op.operation_type, "enqueued operation");
        Ok(op)
    }

    /// Returns operations not yet synced, in ascending sequence order.
    pub fn pending_operations(&self) -> Vec<OfflineOperation> {
        self.entries.range(self.last_synced + 1..).map(|(_, op)| op.clone()).collect()
    }

    /// Returns the operations to replay against the server, in order.
    ///
    /// Replay is strictly by sequence number, never by timestamp.
    pub fn replay(&self) -> Vec<OfflineOperation> {
        self.pending_operations()
    }

    /// Records that everything up to `sequence` reached the server.
    ///
    /// The watermark only moves forward and never past the last assigned
    /// sequence, so future operations can't be marked synced in advance.
    pub fn mark_synced(&mut self, sequence: u64) -> Result<()> {
        let target = sequence.min(self.last_assigned);
        if target <= self.last_synced {
            return Ok(());
        }
        self.persist(&QueueRecord::Synced { sequence: target })?;
        self.last_synced = target;
        tracing::debug!(sequence = target, "marked operations synced");
        Ok(())
    }

    /// Drops synced entries from the log without touching the counters.
    ///
    /// Returns the number of entries dropped.
    pub fn prune_synced_operations(&mut self) -> Result<usize> {
        let pending = self.entries.split_off(&(self.last_synced + 1));
        let pruned = std::mem::replace(&mut self.entries, pending);
        if pruned.is_empty() {
            return Ok(0);
        }
        if let Err(e) = self.rewrite() {
            // Keep memory consistent with what is still on disk.
            self.entries.extend(pruned);
            return Err(e);
        }
        tracing::debug!(count = pruned.len(), "pruned synced operations");
        Ok(pruned.len())
    }

    /// Removes a single operation so it is never replayed.
    pub fn remove_operation(&mut self, sequence: u64) -> Result<Option<OfflineOperation>> {
        if !self.entries.contains_key(&sequence) {
            return Ok(None);
        }
        self.persist(&QueueRecord::Removed { sequence })?;
        Ok(self.entries.remove(&sequence))
    }

    /// Returns the operation with the given sequence number, if still held.
    pub fn get_operation(&self, sequence: u64) -> Option<&OfflineOperation> {
        self.entries.get(&sequence)
    }

    /// Drops every entry. The assignment counter is kept, so sequence
    /// numbers stay unique for the life of the queue.
    pub fn clear(&mut self) -> Result<()> {
        let entries = std::mem::take(&mut self.entries);
        let last_synced = self.last_synced;
        self.last_synced = self.last_assigned;
        if let Err(e) = self.rewrite() {
            self.entries = entries;
            self.last_synced = last_synced;
            return Err(e);
        }
        Ok(())
    }

    /// Returns the highest sequence number ever assigned.
    pub fn last_assigned_sequence(&self) -> u64 {
        self.last_assigned
    }

    /// Returns the highest sequence number known to be synced.
    pub fn last_synced_sequence(&self) -> u64 {
        self.last_synced
    }

    /// Returns the number of operations held (synced or not).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no operations are held.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of operations still waiting to be replayed.
    pub fn pending_count(&self) -> usize {
        self.entries.range(self.last_synced + 1..).count()
    }

    /// Returns the journal path, if the queue is persisted.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

impl Default for OperationQueue {
    fn default() -> Self {
        OperationQueue::in_memory()
    }
}

#[cfg(test)]
#[path = "queue_tests.rs"]
mod tests;
