// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for dl-core operations.
//!
//! Local validation failures (editing a deleted todo, reordering out of
//! range, rolling back an unknown operation) are not errors: they surface as
//! `None`, empty results, or `false`. This enum covers the genuinely
//! exceptional cases: storage and runtime failures.

use thiserror::Error;

/// All possible errors that can occur in dl-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("corrupted data: {0}")]
    CorruptedData(String),

    #[error("no async runtime available\n  hint: reconnect timers must be scheduled from inside a tokio runtime")]
    NoRuntime,
}

/// A specialized Result type for dl-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
