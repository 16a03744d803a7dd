// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.
//!
//! All runtime environment variables used by the CLI are defined here
//! with typed accessor functions. The variable name constants are generated
//! by `build.rs` and live in the [`vars`] submodule.

/// Generated environment variable name constants.
pub mod vars {
    include!(concat!(env!("OUT_DIR"), "/env_vars.rs"));
}

/// Returns the log filter from `DL_LOG`, if set and non-empty.
pub fn log_filter() -> Option<String> {
    std::env::var(vars::DL_LOG).ok().filter(|v| !v.trim().is_empty())
}

/// Returns the default client ID for `dl init` from `DL_CLIENT_ID`, if set
/// and non-empty.
pub fn client_id() -> Option<String> {
    std::env::var(vars::DL_CLIENT_ID).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
