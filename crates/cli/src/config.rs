// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Replica configuration management.
//!
//! Configuration is stored in `.driftlist/config.toml` and includes:
//! - `client_id`: This replica's identity in vector clocks and `updatedBy`
//! - `reconnect`: Optional backoff overrides for reconnect scheduling

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use dl_core::ReconnectConfig;

use crate::error::{Error, Result};

pub const WORK_DIR_NAME: &str = ".driftlist";
const CONFIG_FILE_NAME: &str = "config.toml";
const TODOS_FILE_NAME: &str = "todos.jsonl";
const QUEUE_FILE_NAME: &str = "queue.jsonl";
const SYNC_FILE_NAME: &str = "sync.json";

/// Replica configuration stored in `.driftlist/config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Identity of this replica. Minted as a v4 UUID unless given at init.
    pub client_id: String,
    /// Reconnect backoff (optional; defaults apply when absent).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reconnect: Option<ReconnectConfig>,
}

impl Config {
    /// Creates a config for the given client, validating the ID.
    pub fn new(client_id: String) -> Result<Self> {
        if !validate_client_id(&client_id) {
            return Err(Error::InvalidClientId(client_id));
        }
        Ok(Config { client_id, reconnect: None })
    }

    /// Loads configuration from the given `.driftlist/` directory.
    pub fn load(work_dir: &Path) -> Result<Self> {
        let config_path = work_dir.join(CONFIG_FILE_NAME);
        let content = fs::read_to_string(&config_path)
            .map_err(|e| Error::Config(format!("failed to read config: {}", e)))?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;
        if !validate_client_id(&config.client_id) {
            return Err(Error::InvalidClientId(config.client_id));
        }
        Ok(config)
    }

    /// Saves configuration to the given `.driftlist/` directory.
    pub fn save(&self, work_dir: &Path) -> Result<()> {
        let config_path = work_dir.join(CONFIG_FILE_NAME);
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("failed to serialize config: {}", e)))?;
        fs::write(&config_path, content)?;
        Ok(())
    }

    /// Returns the reconnect settings, falling back to defaults.
    pub fn reconnect_config(&self) -> ReconnectConfig {
        self.reconnect.clone().unwrap_or_default()
    }
}

/// Client IDs end up in vector clocks and output; keep them printable.
pub fn validate_client_id(client_id: &str) -> bool {
    !client_id.is_empty() && !client_id.chars().any(|c| c.is_whitespace() || c.is_control())
}

/// Find the .driftlist directory by walking up from the current directory
pub fn find_work_dir() -> Result<PathBuf> {
    find_work_dir_from(&std::env::current_dir()?)
}

/// Find the .driftlist directory by walking up from `start`
pub fn find_work_dir_from(start: &Path) -> Result<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        let work_dir = current.join(WORK_DIR_NAME);
        if work_dir.is_dir() {
            return Ok(work_dir);
        }
        if !current.pop() {
            return Err(Error::NotInitialized);
        }
    }
}

/// Initialize a new .driftlist directory
pub fn init_work_dir(path: &Path, client_id: &str) -> Result<PathBuf> {
    let work_dir = path.join(WORK_DIR_NAME);

    if work_dir.exists() {
        return Err(Error::AlreadyInitialized(work_dir.display().to_string()));
    }

    let config = Config::new(client_id.to_string())?;
    fs::create_dir_all(&work_dir)?;
    config.save(&work_dir)?;

    Ok(work_dir)
}

pub fn todos_path(work_dir: &Path) -> PathBuf {
    work_dir.join(TODOS_FILE_NAME)
}

pub fn queue_path(work_dir: &Path) -> PathBuf {
    work_dir.join(QUEUE_FILE_NAME)
}

pub fn sync_path(work_dir: &Path) -> PathBuf {
    work_dir.join(SYNC_FILE_NAME)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
