// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use clap::Parser;
use driftlist::Cli;
use tracing_subscriber::EnvFilter;

fn main() {
    setup_logging();

    let cli = Cli::parse();
    if let Some(dir) = &cli.directory {
        if let Err(e) = std::env::set_current_dir(dir) {
            eprintln!("error: cannot change to directory '{}': {}", dir, e);
            std::process::exit(1);
        }
    }

    if let Err(e) = driftlist::run(cli.command) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr so stdout stays parseable.
fn setup_logging() {
    let filter = driftlist::env::log_filter()
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
