// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The todo store: one local client's replica of the shared list.
//!
//! Every public mutator runs to completion synchronously and is bracketed by
//! `begin`/`commit`, so subscribers hear about each logical operation exactly
//! once no matter how many todos or fields it touched.
//!
//! Mutations are optimistic. Each returns an [`OperationId`] the caller must
//! resolve exactly once with `confirm_optimistic_update` or
//! `rollback_optimistic_update`. While offline, each mutation is also
//! appended to the store's [`OperationQueue`] for later replay.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::clock::{ClockSource, SystemClock};
use crate::error::Result;
use crate::id::generate_uuid;
use crate::op::OperationPayload;
use crate::optimistic::{OperationId, OptimisticState};
use crate::protocol::SyncResponse;
use crate::queue::OperationQueue;
use crate::sync::SyncManager;
use crate::todo::{display_order, Todo, TodoChanges};

/// The kind of logical operation a notification reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Create,
    Update,
    Delete,
    Reorder,
    Rollback,
    Sync,
}

/// One notification: a committed logical operation and the todos it touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Change {
    pub kind: ChangeKind,
    pub todo_ids: Vec<String>,
}

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Result of an optimistic mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mutation<T> {
    pub value: T,
    pub operation_id: OperationId,
}

/// Pre-mutation state held for rollback.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Snapshot {
    /// Prior versions to put back.
    restore: Vec<Todo>,
    /// IDs that did not exist before the mutation.
    discard: Vec<String>,
    /// Queue entry to withdraw, if the mutation was queued.
    queued: Option<u64>,
}

type Listener = Box<dyn FnMut(&Change)>;

/// One client's replica of the shared todo list.
pub struct TodoStore<C: ClockSource = SystemClock> {
    client_id: String,
    clock: C,
    todos: HashMap<String, Todo>,
    optimistic: OptimisticState<Snapshot>,
    queue: OperationQueue,
    online: bool,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
    /// Todos touched by the operation in progress, between begin and commit.
    batch: Option<Vec<String>>,
}

impl TodoStore<SystemClock> {
    /// Creates an empty, offline store for `client_id` with an in-memory queue.
    pub fn new(client_id: impl Into<String>) -> Self {
        Self::with_clock(client_id, SystemClock)
    }
}

impl<C: ClockSource> TodoStore<C> {
    /// Creates an empty, offline store with a custom clock source.
    pub fn with_clock(client_id: impl Into<String>, clock: C) -> Self {
        TodoStore {
            client_id: client_id.into(),
            clock,
            todos: HashMap::new(),
            optimistic: OptimisticState::new(),
            queue: OperationQueue::in_memory(),
            online: false,
            listeners: Vec::new(),
            next_subscription: 0,
            batch: None,
        }
    }

    /// Replaces the operation queue (e.g. with one opened from disk).
    pub fn with_queue(mut self, queue: OperationQueue) -> Self {
        self.queue = queue;
        self
    }

    /// Loads previously persisted todos. Does not notify.
    pub fn restore(mut self, todos: impl IntoIterator<Item = Todo>) -> Self {
        self.todos = todos.into_iter().map(|t| (t.id.clone(), t)).collect();
        self
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// Returns true if mutations go straight to the transport.
    pub fn is_online(&self) -> bool {
        self.online
    }

    /// Switches connectivity. While offline, mutations are queued.
    pub fn set_online(&mut self, online: bool) {
        self.online = online;
    }

    pub fn queue(&self) -> &OperationQueue {
        &self.queue
    }

    pub fn queue_mut(&mut self) -> &mut OperationQueue {
        &mut self.queue
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Observers
    // ─────────────────────────────────────────────────────────────────────────

    /// Registers a listener called once per committed logical operation.
    pub fn subscribe(&mut self, listener: impl FnMut(&Change) + 'static) -> SubscriptionId {
        self.next_subscription += 1;
        let id = SubscriptionId(self.next_subscription);
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a listener. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sub, _)| *sub != id);
        self.listeners.len() != before
    }

    fn begin(&mut self) {
        self.batch = Some(Vec::new());
    }

    fn stage(&mut self, todo: Todo) {
        if let Some(batch) = &mut self.batch {
            if !batch.contains(&todo.id) {
                batch.push(todo.id.clone());
            }
        }
        self.todos.insert(todo.id.clone(), todo);
    }

    fn commit(&mut self, kind: ChangeKind) {
        let todo_ids = self.batch.take().unwrap_or_default();
        let change = Change { kind, todo_ids };
        for (_, listener) in &mut self.listeners {
            listener(&change);
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────────────────────

    pub fn get_todo(&self, id: &str) -> Option<&Todo> {
        self.todos.get(id)
    }

    /// Returns active todos in display order.
    pub fn get_active_todos(&self) -> Vec<&Todo> {
        let mut active: Vec<&Todo> = self.todos.values().filter(|t| t.is_active()).collect();
        active.sort_by(|a, b| display_order(a, b));
        active
    }

    /// Returns every todo, deleted ones included, in display order.
    pub fn get_all_todos(&self) -> Vec<&Todo> {
        let mut all: Vec<&Todo> = self.todos.values().collect();
        all.sort_by(|a, b| display_order(a, b));
        all
    }

    /// Returns owned copies of every todo, for persistence.
    pub fn snapshot_todos(&self) -> Vec<Todo> {
        self.get_all_todos().into_iter().cloned().collect()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    fn enqueue(&mut self, todo_id: &str, payload: OperationPayload, now: DateTime<Utc>) -> Result<Option<u64>> {
        if self.online {
            return Ok(None);
        }
        let client_id = self.client_id.clone();
        let op = self.queue.enqueue(todo_id, payload, &client_id, now)?;
        Ok(Some(op.sequence_number))
    }

    /// Creates a todo at the end of the active list. Always succeeds locally
    /// unless the offline queue can't be written.
    pub fn create_todo(&mut self, title: impl Into<String>) -> Result<Mutation<Todo>> {
        let now = self.clock.now();
        let position = self.todos.values().filter(|t| t.is_active()).count();
        let todo = Todo::new(generate_uuid(), title.into(), position, &self.client_id, now);

        let queued = self.enqueue(&todo.id, OperationPayload::Create { todo: todo.clone() }, now)?;
        let operation_id = OperationId::new();
        self.optimistic.store_previous_state(
            operation_id,
            Snapshot { restore: Vec::new(), discard: vec![todo.id.clone()], queued },
        );

        self.begin();
        self.stage(todo.clone());
        self.commit(ChangeKind::Create);

        tracing::debug!(todo_id = %todo.id, position, "created todo");
        Ok(Mutation { value: todo, operation_id })
    }

    /// Applies field changes. Returns `None` if the todo is unknown or deleted.
    pub fn update_todo(&mut self, id: &str, changes: TodoChanges) -> Result<Option<Mutation<Todo>>> {
        self.write_todo(id, ChangeKind::Update, |todo, _| {
            changes.apply_to(todo);
            OperationPayload::Update { changes: changes.clone(), todo: todo.clone() }
        })
    }

    /// Soft-deletes a todo. Returns `None` if it is unknown or already deleted.
    pub fn delete_todo(&mut self, id: &str) -> Result<Option<Mutation<Todo>>> {
        self.write_todo(id, ChangeKind::Delete, |todo, now| {
            todo.deleted_at = Some(now);
            OperationPayload::Delete { todo: todo.clone() }
        })
    }

    fn write_todo<F>(&mut self, id: &str, kind: ChangeKind, mutate: F) -> Result<Option<Mutation<Todo>>>
    where
        F: FnOnce(&mut Todo, DateTime<Utc>) -> OperationPayload,
    {
        let previous = match self.todos.get(id) {
            Some(todo) if todo.is_active() => todo.clone(),
            Some(_) => {
                tracing::debug!(todo_id = id, "ignoring write to deleted todo");
                return Ok(None);
            }
            None => return Ok(None),
        };

        let now = self.clock.now();
        let mut next = previous.clone();
        next.touch(&self.client_id, now);
        let payload = mutate(&mut next, now);

        let queued = self.enqueue(id, payload, now)?;
        let operation_id = OperationId::new();
        self.optimistic.store_previous_state(
            operation_id,
            Snapshot { restore: vec![previous], discard: Vec::new(), queued },
        );

        self.begin();
        self.stage(next.clone());
        self.commit(kind);

        tracing::debug!(todo_id = id, ?kind, clock = %next.vector_clock, "wrote todo");
        Ok(Some(Mutation { value: next, operation_id }))
    }

    /// Moves a todo from `from_index` to `to_index` in the active order.
    ///
    /// Every active todo between the two indexes (inclusive) gets a new
    /// position, and each one whose position actually changed gets a clock
    /// and timestamp bump. Returns `None` (a no-op) when the indexes match,
    /// the todo is deleted or unknown, or the indexes don't fit the list.
    pub fn reorder_todo(
        &mut self,
        id: &str,
        from_index: usize,
        to_index: usize,
    ) -> Result<Option<Mutation<Vec<Todo>>>> {
        if from_index == to_index {
            return Ok(None);
        }

        let mut order: Vec<Todo> = self.get_active_todos().into_iter().cloned().collect();
        if from_index >= order.len() || to_index >= order.len() || order[from_index].id != id {
            tracing::debug!(todo_id = id, from_index, to_index, "ignoring reorder that doesn't match the list");
            return Ok(None);
        }

        let moved = order.remove(from_index);
        order.insert(to_index, moved);

        let now = self.clock.now();
        let (low, high) = (from_index.min(to_index), from_index.max(to_index));
        let mut previous = Vec::new();
        let mut affected = Vec::new();
        for (index, todo) in order.iter_mut().enumerate().take(high + 1).skip(low) {
            if todo.position == index {
                continue;
            }
            previous.push(todo.clone());
            todo.position = index;
            todo.touch(&self.client_id, now);
            affected.push(todo.clone());
        }

        if affected.is_empty() {
            return Ok(None);
        }

        let payload = OperationPayload::Reorder { from_index, to_index, todos: affected.clone() };
        let queued = self.enqueue(id, payload, now)?;
        let operation_id = OperationId::new();
        self.optimistic.store_previous_state(
            operation_id,
            Snapshot { restore: previous, discard: Vec::new(), queued },
        );

        self.begin();
        for todo in &affected {
            self.stage(todo.clone());
        }
        self.commit(ChangeKind::Reorder);

        tracing::debug!(todo_id = id, from_index, to_index, affected = affected.len(), "reordered todos");
        Ok(Some(Mutation { value: affected, operation_id }))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Optimistic resolution
    // ─────────────────────────────────────────────────────────────────────────

    /// Marks a mutation authoritative. Returns false if already resolved.
    pub fn confirm_optimistic_update(&mut self, operation_id: OperationId) -> bool {
        self.optimistic.confirm_operation(operation_id)
    }

    /// Restores the state from before a mutation, as one atomic replacement
    /// with exactly one notification. Also withdraws the mutation from the
    /// offline queue if it was queued.
    ///
    /// Returns false (and does nothing) if the operation is unknown or was
    /// already confirmed or rolled back.
    pub fn rollback_optimistic_update(&mut self, operation_id: OperationId) -> Result<bool> {
        let Some(snapshot) = self.optimistic.rollback(operation_id) else {
            return Ok(false);
        };

        if let Some(sequence) = snapshot.queued {
            // Keep the operation pending if the queue can't withdraw it.
            if let Err(e) = self.queue.remove_operation(sequence) {
                self.optimistic.store_previous_state(operation_id, snapshot);
                return Err(e);
            }
        }

        self.begin();
        for id in &snapshot.discard {
            self.todos.remove(id);
            if let Some(batch) = &mut self.batch {
                batch.push(id.clone());
            }
        }
        for todo in snapshot.restore {
            self.stage(todo);
        }
        self.commit(ChangeKind::Rollback);

        tracing::debug!(%operation_id, "rolled back optimistic update");
        Ok(true)
    }

    /// Returns true if the mutation is still awaiting confirm or rollback.
    pub fn is_pending(&self, operation_id: OperationId) -> bool {
        self.optimistic.is_pending(operation_id)
    }

    /// Returns every unresolved operation ID.
    pub fn pending_operation_ids(&self) -> Vec<OperationId> {
        self.optimistic.pending_operation_ids()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Sync
    // ─────────────────────────────────────────────────────────────────────────

    /// Merges a server response and advances the sync watermark.
    ///
    /// Notifies once if anything changed. Returns the changed IDs.
    pub fn apply_sync_response(&mut self, sync: &mut SyncManager, response: SyncResponse) -> Vec<String> {
        let changed = sync.apply_sync_response(&mut self.todos, response);
        if !changed.is_empty() {
            self.batch = Some(changed.clone());
            self.commit(ChangeKind::Sync);
        }
        changed
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
