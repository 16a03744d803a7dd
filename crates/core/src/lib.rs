// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! dl-core: offline replication engine for the driftlist shared todo list
//!
//! This crate provides the vector clocks, conflict resolution, offline
//! operation queue, optimistic store and sync primitives used by the `dl`
//! CLI. It never opens network connections: transports feed it
//! [`SyncResponse`]s and drain its queue.

pub mod clock;
pub mod error;
pub mod id;
pub mod jsonl;
pub mod op;
pub mod optimistic;
pub mod protocol;
pub mod queue;
pub mod reconnect;
pub mod resolve;
pub mod server;
pub mod store;
pub mod sync;
pub mod todo;
pub mod vclock;

#[cfg(test)]
mod test_support;

pub use clock::{ClockSource, SystemClock};
pub use error::{Error, Result};
pub use id::{generate_uuid, is_v4_uuid};
pub use op::{OfflineOperation, OperationPayload, OperationType};
pub use optimistic::{OperationId, OptimisticState};
pub use protocol::{SyncRequest, SyncResponse};
pub use queue::OperationQueue;
pub use reconnect::{JitterSource, ReconnectConfig, ReconnectionManager, ThreadRngJitter};
pub use resolve::{last_write_wins, resolve_conflict};
pub use server::ServerState;
pub use store::{Change, ChangeKind, Mutation, SubscriptionId, TodoStore};
pub use sync::{Conflict, SyncManager, SyncSavings};
pub use todo::{display_order, Todo, TodoChanges};
pub use vclock::{ClockOrdering, VectorClock};
