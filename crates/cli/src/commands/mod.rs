// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod add;
pub mod backoff;
pub mod edit;
pub mod init;
pub mod list;
pub mod mv;
pub mod queue;
pub mod rm;
pub mod sync;
#[cfg(test)]
#[path = "mod_tests.rs"]
pub mod testing;
