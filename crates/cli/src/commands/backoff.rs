// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::time::Duration;

use dl_core::{JitterSource, ReconnectConfig, ReconnectionManager};

use crate::config::{find_work_dir, Config};
use crate::error::{Error, Result};

pub fn run(attempts: u32, jitter: bool) -> Result<()> {
    // Outside a replica the default backoff applies.
    let config = match find_work_dir() {
        Ok(work_dir) => Config::load(&work_dir)?.reconnect_config(),
        Err(Error::NotInitialized) => ReconnectConfig::default(),
        Err(e) => return Err(e),
    };

    let manager = ReconnectionManager::with_config(config);
    for (attempt, delay) in schedule(manager, attempts, jitter).iter().enumerate() {
        println!("attempt {}: {}ms", attempt, delay.as_millis());
    }
    Ok(())
}

/// Delays for the next `attempts` reconnects, each recorded as failed.
pub(crate) fn schedule<J: JitterSource>(
    mut manager: ReconnectionManager<J>,
    attempts: u32,
    jitter: bool,
) -> Vec<Duration> {
    (0..attempts)
        .map(|_| {
            let delay = manager.get_next_delay(jitter);
            manager.record_attempt();
            delay
        })
        .collect()
}

#[cfg(test)]
#[path = "backoff_tests.rs"]
mod tests;
