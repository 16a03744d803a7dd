// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::{Path, PathBuf};

use dl_core::generate_uuid;

use crate::config::init_work_dir;
use crate::error::Result;
use crate::replica::Replica;

pub fn run(client_id: Option<String>) -> Result<()> {
    let client_id = client_id.or_else(crate::env::client_id);
    let target_path = std::env::current_dir()?;
    let work_dir = run_impl(&target_path, client_id)?;
    let replica = Replica::open(&work_dir)?;

    println!("Initialized driftlist replica at {}", work_dir.display());
    println!("Client: {}", replica.config().client_id);
    Ok(())
}

/// Creates `.driftlist/` under `path` with empty todo and sync files.
pub(crate) fn run_impl(path: &Path, client_id: Option<String>) -> Result<PathBuf> {
    let client_id = client_id.unwrap_or_else(generate_uuid);
    let work_dir = init_work_dir(path, &client_id)?;
    Replica::open(&work_dir)?.save()?;
    Ok(work_dir)
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
