// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use clap::{Parser, Subcommand, ValueEnum};

/// Parse a string that must not be empty or whitespace-only.
fn non_empty_string(s: &str) -> Result<String, String> {
    if s.trim().is_empty() {
        Err("cannot be empty".to_string())
    } else {
        Ok(s.to_string())
    }
}

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "dl")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "An offline-first shared todo list replica")]
#[command(
    long_about = "An offline-first shared todo list replica.\n\n\
    Edits are applied locally and queued; queued operations are replayed to a server \
    and server snapshots are merged back with vector-clock conflict resolution.\n\n\
    Set DL_LOG (e.g. DL_LOG=debug) to see engine logs on stderr."
)]
pub struct Cli {
    /// Run as if dl was started in <path>
    #[arg(short = 'C', long = "directory", global = true, value_name = "path")]
    pub directory: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    // ─────────────────────────────────────────────────────────────────────────
    // Setup
    // ─────────────────────────────────────────────────────────────────────────
    /// Initialize a replica in the current directory
    #[command(after_help = "\
Examples:
  dl init                        Mint a random client ID
  dl init --client-id laptop     Use a fixed client ID")]
    Init {
        /// Client ID recorded in vector clocks (default: random v4 UUID)
        #[arg(long, value_parser = non_empty_string)]
        client_id: Option<String>,
    },

    // ─────────────────────────────────────────────────────────────────────────
    // Todos
    // ─────────────────────────────────────────────────────────────────────────
    /// Add a todo to the end of the list
    Add {
        /// Todo title
        #[arg(value_parser = non_empty_string)]
        title: String,
    },

    /// Change a todo's title or completion
    #[command(after_help = "\
Examples:
  dl edit 1a2b --title \"Buy oat milk\"
  dl edit 1a2b --completed true")]
    Edit {
        /// Todo ID (or unique prefix)
        id: String,

        /// New title
        #[arg(long, value_parser = non_empty_string)]
        title: Option<String>,

        /// Mark completed (true) or open (false)
        #[arg(long, value_name = "bool")]
        completed: Option<bool>,
    },

    /// Delete a todo (kept as a tombstone for sync)
    #[command(alias = "delete")]
    Rm {
        /// Todo ID (or unique prefix)
        id: String,
    },

    /// Move a todo to a new position in the active list
    Mv {
        /// Todo ID (or unique prefix)
        id: String,

        /// Zero-based target position
        to: usize,
    },

    /// List todos in display order
    #[command(alias = "ls")]
    List {
        /// Include deleted todos
        #[arg(long, short = 'a')]
        all: bool,

        /// Output format
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    // ─────────────────────────────────────────────────────────────────────────
    // Sync
    // ─────────────────────────────────────────────────────────────────────────
    /// Print operations waiting for replay, one JSON object per line
    Pending {
        /// Output format
        #[arg(long = "output", short = 'o', value_enum, default_value = "json")]
        output: OutputFormat,
    },

    /// Mark operations up to <seq> as replayed and prune them
    Ack {
        /// Highest sequence number the server accepted
        seq: u64,
    },

    /// Print the next sync request as JSON
    Request,

    /// Merge a sync response (JSON file, or - for stdin)
    Apply {
        /// Path to the response JSON
        file: String,
    },

    /// Print the reconnect backoff schedule
    Backoff {
        /// Number of attempts to show
        #[arg(long, default_value_t = 7)]
        attempts: u32,

        /// Apply random jitter to each delay
        #[arg(long)]
        jitter: bool,
    },
}

#[cfg(test)]
#[path = "../cli_tests/mod.rs"]
mod tests;
