// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Sync messages exchanged with the authoritative server.
//!
//! The transport that carries them lives outside this crate. The exchange is:
//! - Client replays pending `OfflineOperation`s in sequence order
//! - Client sends a `SyncRequest`; a null timestamp asks for everything
//! - Server answers with a `SyncResponse` holding every todo updated after
//!   that timestamp, plus the timestamp to ask from next time

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::todo::Todo;

/// Request for server state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncRequest {
    /// `None` requests a full snapshot; otherwise only todos updated after it.
    pub last_sync_timestamp: Option<DateTime<Utc>>,
}

impl SyncRequest {
    /// Creates a request for a full snapshot.
    pub fn full() -> Self {
        SyncRequest { last_sync_timestamp: None }
    }

    /// Creates a request for changes after `since`.
    pub fn since(since: DateTime<Utc>) -> Self {
        SyncRequest { last_sync_timestamp: Some(since) }
    }

    /// Returns true if this asks for the full snapshot.
    pub fn is_full(&self) -> bool {
        self.last_sync_timestamp.is_none()
    }

    /// Serializes the message to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserializes the message from JSON.
    pub fn from_json(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }
}

/// Server answer to a `SyncRequest`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncResponse {
    pub todos: Vec<Todo>,
    /// Server time the response reflects; the next request asks from here.
    pub sync_timestamp: DateTime<Utc>,
}

impl SyncResponse {
    pub fn new(todos: Vec<Todo>, sync_timestamp: DateTime<Utc>) -> Self {
        SyncResponse { todos, sync_timestamp }
    }

    /// Serializes the message to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserializes the message from JSON.
    pub fn from_json(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }
}

#[cfg(test)]
#[path = "protocol_tests.rs"]
mod tests;
