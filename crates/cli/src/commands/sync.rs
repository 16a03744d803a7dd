// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Sync commands: emit the next request, merge a response.

use std::io::Read;

use dl_core::{SyncManager, SyncResponse, SyncSavings, Todo};

use crate::error::Result;
use crate::replica::Replica;

pub fn request() -> Result<()> {
    let replica = Replica::open_current()?;
    println!("{}", replica.sync().create_sync_request().to_json()?);
    Ok(())
}

pub fn apply(file: &str) -> Result<()> {
    let content = if file == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(file)?
    };
    let response = SyncResponse::from_json(&content)?;

    let mut replica = Replica::open_current()?;
    let summary = apply_impl(&mut replica, response)?;
    println!(
        "Applied sync: {} changed, {} concurrent edits resolved",
        summary.changed.len(),
        summary.conflicts
    );
    println!(
        "Received {} of {} todos ({:.0}% not resent)",
        summary.savings.sent, summary.savings.total, summary.savings.saved_percent
    );
    Ok(())
}

#[derive(Debug, Clone)]
pub(crate) struct ApplySummary {
    pub changed: Vec<String>,
    pub conflicts: usize,
    pub savings: SyncSavings,
}

pub(crate) fn apply_impl(replica: &mut Replica, response: SyncResponse) -> Result<ApplySummary> {
    let local: Vec<Todo> = replica.store().snapshot_todos();
    let conflicts = SyncManager::detect_conflicts(&local, &response.todos);
    for conflict in &conflicts {
        tracing::info!(
            todo_id = %conflict.todo_id,
            local = %conflict.local.vector_clock,
            server = %conflict.server.vector_clock,
            "resolving concurrent edit"
        );
    }

    let sent = response.todos.len();
    let changed = replica.apply_sync_response(response)?;
    let total = replica.store().get_all_todos().len();

    Ok(ApplySummary {
        changed,
        conflicts: conflicts.len(),
        savings: SyncManager::calculate_sync_savings(total, sent),
    })
}

#[cfg(test)]
#[path = "sync_tests.rs"]
mod tests;
