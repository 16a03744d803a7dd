// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The on-disk replica behind every command.
//!
//! A replica is one `.driftlist/` directory:
//! - `config.toml`: client identity and reconnect settings
//! - `todos.jsonl`: every todo, deleted ones included
//! - `queue.jsonl`: the offline operation journal
//! - `sync.json`: the last sync watermark
//!
//! Each command opens the replica, makes one optimistic mutation, and
//! commits it: the todo file is rewritten and the mutation confirmed, or the
//! mutation is rolled back if the write fails.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use dl_core::{jsonl, Mutation, OperationQueue, SyncManager, SyncResponse, Todo, TodoStore};

use crate::config::{find_work_dir, queue_path, sync_path, todos_path, Config};
use crate::error::{Error, Result};

/// Shortest prefix accepted when resolving a todo ID.
pub const MIN_PREFIX_LEN: usize = 4;

/// Persisted sync watermark.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SyncState {
    last_sync_timestamp: Option<DateTime<Utc>>,
}

/// A loaded replica: config, store and sync watermark.
pub struct Replica {
    work_dir: PathBuf,
    config: Config,
    store: TodoStore,
    sync: SyncManager,
}

impl Replica {
    /// Opens the replica found by walking up from the current directory.
    pub fn open_current() -> Result<Self> {
        let work_dir = find_work_dir()?;
        Self::open(&work_dir)
    }

    /// Opens the replica stored in `work_dir`.
    pub fn open(work_dir: &Path) -> Result<Self> {
        let config = Config::load(work_dir)?;
        let todos: Vec<Todo> = jsonl::read_all(&todos_path(work_dir))?;
        let queue = OperationQueue::open(queue_path(work_dir))?;
        let sync_state = load_sync_state(&sync_path(work_dir))?;

        tracing::debug!(
            work_dir = %work_dir.display(),
            todos = todos.len(),
            pending = queue.pending_count(),
            "opened replica"
        );

        let store = TodoStore::new(config.client_id.clone()).with_queue(queue).restore(todos);
        Ok(Replica {
            work_dir: work_dir.to_path_buf(),
            config,
            store,
            sync: SyncManager::with_last_sync(sync_state.last_sync_timestamp),
        })
    }

    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn store(&self) -> &TodoStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut TodoStore {
        &mut self.store
    }

    pub fn sync(&self) -> &SyncManager {
        &self.sync
    }

    /// Resolves a full ID or a unique prefix of at least [`MIN_PREFIX_LEN`]
    /// characters. Deleted todos are included so `list --all` IDs resolve.
    pub fn resolve_id(&self, partial_id: &str) -> Result<String> {
        if self.store.get_todo(partial_id).is_some() {
            return Ok(partial_id.to_string());
        }
        if partial_id.len() < MIN_PREFIX_LEN {
            return Err(Error::TodoNotFound(partial_id.to_string()));
        }

        let mut matches: Vec<String> = self
            .store
            .get_all_todos()
            .into_iter()
            .filter(|t| t.id.starts_with(partial_id))
            .map(|t| t.id.clone())
            .collect();

        match matches.len() {
            0 => Err(Error::TodoNotFound(partial_id.to_string())),
            1 => Ok(matches.remove(0)),
            _ => {
                matches.sort();
                Err(Error::AmbiguousId { prefix: partial_id.to_string(), matches })
            }
        }
    }

    /// Persists the store and confirms the mutation, or rolls it back.
    pub fn commit<T>(&mut self, mutation: Mutation<T>) -> Result<T> {
        if let Err(e) = self.save() {
            tracing::warn!(operation_id = %mutation.operation_id, error = %e, "rolling back unsaved mutation");
            self.store.rollback_optimistic_update(mutation.operation_id)?;
            return Err(e);
        }
        self.store.confirm_optimistic_update(mutation.operation_id);
        Ok(mutation.value)
    }

    /// Merges a server response and persists the result.
    pub fn apply_sync_response(&mut self, response: SyncResponse) -> Result<Vec<String>> {
        let changed = self.store.apply_sync_response(&mut self.sync, response);
        self.save()?;
        Ok(changed)
    }

    /// Rewrites the todo file and the sync watermark.
    pub fn save(&self) -> Result<()> {
        jsonl::write_all(&todos_path(&self.work_dir), &self.store.snapshot_todos())?;
        let state = SyncState { last_sync_timestamp: self.sync.last_sync_timestamp() };
        write_replacing(&sync_path(&self.work_dir), &serde_json::to_string_pretty(&state)?)?;
        Ok(())
    }
}

/// Writes a sibling temp file, syncs it and renames it over `path`.
fn write_replacing(path: &Path, content: &str) -> Result<()> {
    let tmp_path = path.with_extension("json.tmp");
    {
        let mut file = fs::File::create(&tmp_path)?;
        file.write_all(content.as_bytes())?;
        file.sync_all()?;
    }
    fs::rename(&tmp_path, path)?;
    Ok(())
}

fn load_sync_state(path: &Path) -> Result<SyncState> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(serde_json::from_str(&content)?),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(SyncState::default()),
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
#[path = "replica_tests.rs"]
mod tests;
