// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! driftlist - one local replica of an offline-first shared todo list.
//!
//! This crate provides the command layer for the `dl` CLI tool. Replication
//! logic (vector clocks, conflict resolution, the offline queue) lives in
//! `dl-core`; this crate persists one replica under `.driftlist/` and exposes
//! it as shell commands.
//!
//! # Main Components
//!
//! - [`Replica`] - Loads, mutates and persists a `.driftlist/` directory
//! - [`Config`] - Replica configuration (client ID, reconnect backoff)
//! - [`Error`] - Error types for all operations
//!
//! ```rust,ignore
//! use driftlist::{init_work_dir, Replica};
//!
//! let work_dir = init_work_dir(Path::new("."), "laptop")?;
//! let mut replica = Replica::open(&work_dir)?;
//! let mutation = replica.store_mut().create_todo("Buy milk")?;
//! let todo = replica.commit(mutation)?;
//! ```

mod cli;
mod commands;
mod display;

pub mod config;
pub mod env;
pub mod error;
pub mod replica;

pub use cli::{Cli, Command, OutputFormat};
pub use config::{find_work_dir, init_work_dir, Config};
pub use error::{Error, Result};
pub use replica::Replica;

/// Execute a CLI command. This is the main entry point for library users
/// and provides a testable way to run commands without process execution.
pub fn run(command: Command) -> Result<()> {
    match command {
        Command::Init { client_id } => commands::init::run(client_id),
        Command::Add { title } => commands::add::run(&title),
        Command::Edit { id, title, completed } => commands::edit::run(&id, title, completed),
        Command::Rm { id } => commands::rm::run(&id),
        Command::Mv { id, to } => commands::mv::run(&id, to),
        Command::List { all, output } => commands::list::run(all, output),
        Command::Pending { output } => commands::queue::pending(output),
        Command::Ack { seq } => commands::queue::ack(seq),
        Command::Request => commands::sync::request(),
        Command::Apply { file } => commands::sync::apply(&file),
        Command::Backoff { attempts, jitter } => commands::backoff::run(attempts, jitter),
    }
}
