// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Offline queue commands: list operations awaiting replay, and acknowledge
//! the ones the server accepted.

use dl_core::OfflineOperation;

use crate::cli::OutputFormat;
use crate::display::format_operation_line;
use crate::error::Result;
use crate::replica::Replica;

pub fn pending(output: OutputFormat) -> Result<()> {
    let replica = Replica::open_current()?;
    for op in pending_impl(&replica) {
        match output {
            OutputFormat::Json => println!("{}", serde_json::to_string(&op)?),
            OutputFormat::Text => println!("{}", format_operation_line(&op)),
        }
    }
    Ok(())
}

/// Operations to replay, in sequence order.
pub(crate) fn pending_impl(replica: &Replica) -> Vec<OfflineOperation> {
    replica.store().queue().replay()
}

pub fn ack(sequence: u64) -> Result<()> {
    let mut replica = Replica::open_current()?;
    let outcome = ack_impl(&mut replica, sequence)?;
    println!(
        "Acknowledged through #{}: pruned {}, {} pending",
        outcome.synced_through, outcome.pruned, outcome.pending
    );
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct AckOutcome {
    pub synced_through: u64,
    pub pruned: usize,
    pub pending: usize,
}

/// Marks operations through `sequence` synced and prunes them.
pub(crate) fn ack_impl(replica: &mut Replica, sequence: u64) -> Result<AckOutcome> {
    let queue = replica.store_mut().queue_mut();
    queue.mark_synced(sequence)?;
    let pruned = queue.prune_synced_operations()?;
    Ok(AckOutcome {
        synced_through: queue.last_synced_sequence(),
        pruned,
        pending: queue.pending_count(),
    })
}

#[cfg(test)]
#[path = "queue_tests.rs"]
mod tests;
