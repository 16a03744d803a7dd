// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// All possible errors that can occur in the driftlist CLI.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    #[error("not initialized: run 'dl init' first")]
    NotInitialized,

    #[error("already initialized at {0}")]
    AlreadyInitialized(String),

    #[error("todo not found: {0}")]
    TodoNotFound(String),

    #[error("ambiguous todo ID '{prefix}' matches: {}", matches.join(", "))]
    AmbiguousId { prefix: String, matches: Vec<String> },

    #[error("todo {0} is deleted\n  hint: deleted todos can't be changed")]
    TodoDeleted(String),

    #[error("nothing to change\n  hint: pass --title and/or --completed")]
    NothingToChange,

    #[error("position {to} is out of range (list has {len} active todos)")]
    PositionOutOfRange { to: usize, len: usize },

    #[error("invalid client ID '{0}'\n  hint: client IDs must be non-empty and contain no whitespace")]
    InvalidClientId(String),

    #[error("{field} cannot be empty")]
    FieldEmpty { field: &'static str },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(String),

    #[error(transparent)]
    Core(#[from] dl_core::Error),
}

/// A specialized Result type for driftlist operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
