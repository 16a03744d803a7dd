// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use dl_core::{OfflineOperation, Todo};

/// Number of ID characters shown in text output.
pub const SHORT_ID_LEN: usize = 8;

/// Returns the leading characters of an ID for display.
pub fn short_id(id: &str) -> &str {
    id.get(..SHORT_ID_LEN).unwrap_or(id)
}

/// Formats a todo as a single list line.
///
/// `- [x] 1a2b3c4d  Buy milk`, with a `(deleted)` suffix for soft-deleted todos.
pub fn format_todo_line(todo: &Todo) -> String {
    let check = if todo.completed { 'x' } else { ' ' };
    let mut line = format!("- [{}] {}  {}", check, short_id(&todo.id), todo.title);
    if todo.is_deleted() {
        line.push_str(" (deleted)");
    }
    line
}

/// Formats a queued operation for human-readable output.
pub fn format_operation_line(op: &OfflineOperation) -> String {
    format!(
        "#{} {} {} by {} at {}",
        op.sequence_number,
        op.operation_type,
        short_id(&op.todo_id),
        op.user_id,
        op.timestamp.to_rfc3339()
    )
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
