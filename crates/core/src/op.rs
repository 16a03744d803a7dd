// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Offline operations: local mutations waiting to be replayed to the server.
//!
//! Each operation carries the todo state it produced, vector clock included,
//! so the server can fold it in with the same conflict rules every replica
//! uses. Operations are ordered by their queue sequence number, never by
//! their wall-clock timestamp.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::todo::{Todo, TodoChanges};

/// The kind of mutation an operation records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationType {
    Create,
    Update,
    Delete,
    Reorder,
}

impl OperationType {
    /// Returns the string representation used on the wire and in display.
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationType::Create => "create",
            OperationType::Update => "update",
            OperationType::Delete => "delete",
            OperationType::Reorder => "reorder",
        }
    }
}

impl fmt::Display for OperationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for OperationType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "create" => Ok(OperationType::Create),
            "update" => Ok(OperationType::Update),
            "delete" => Ok(OperationType::Delete),
            "reorder" => Ok(OperationType::Reorder),
            _ => Err(Error::CorruptedData(format!("unknown operation type '{s}'"))),
        }
    }
}

/// Payload describing the mutation and the state it produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum OperationPayload {
    /// A new todo.
    Create { todo: Todo },

    /// Field edits, with the resulting todo.
    Update { changes: TodoChanges, todo: Todo },

    /// Soft delete, with the resulting (tombstoned) todo.
    Delete { todo: Todo },

    /// A move, with every todo whose position changed.
    Reorder {
        from_index: usize,
        to_index: usize,
        todos: Vec<Todo>,
    },
}

impl OperationPayload {
    /// Returns the operation type this payload belongs to.
    pub fn operation_type(&self) -> OperationType {
        match self {
            OperationPayload::Create { .. } => OperationType::Create,
            OperationPayload::Update { .. } => OperationType::Update,
            OperationPayload::Delete { .. } => OperationType::Delete,
            OperationPayload::Reorder { .. } => OperationType::Reorder,
        }
    }

    /// Returns every todo state this operation produced.
    pub fn todos(&self) -> Vec<&Todo> {
        match self {
            OperationPayload::Create { todo }
            | OperationPayload::Update { todo, .. }
            | OperationPayload::Delete { todo } => vec![todo],
            OperationPayload::Reorder { todos, .. } => todos.iter().collect(),
        }
    }
}

/// A queued local mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfflineOperation {
    /// Position in the owning queue's log; starts at 1, never reused.
    pub sequence_number: u64,
    pub operation_type: OperationType,
    /// The todo the operation targets (the moved todo for reorders).
    pub todo_id: String,
    pub payload: OperationPayload,
    /// Wall time of the local mutation. Informational only.
    pub timestamp: DateTime<Utc>,
    pub user_id: String,
}

impl OfflineOperation {
    /// Creates an operation; the type is taken from the payload.
    pub fn new(
        sequence_number: u64,
        todo_id: String,
        payload: OperationPayload,
        timestamp: DateTime<Utc>,
        user_id: String,
    ) -> Self {
        OfflineOperation {
            sequence_number,
            operation_type: payload.operation_type(),
            todo_id,
            payload,
            timestamp,
            user_id,
        }
    }
}

impl PartialOrd for OfflineOperation {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OfflineOperation {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.sequence_number.cmp(&other.sequence_number)
    }
}

#[cfg(test)]
#[path = "op_tests.rs"]
mod tests;
