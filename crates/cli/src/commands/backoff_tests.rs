// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::*;

struct Fixed(f64);

impl JitterSource for Fixed {
    fn sample(&self) -> f64 {
        self.0
    }
}

fn millis(delays: Vec<Duration>) -> Vec<u128> {
    delays.iter().map(Duration::as_millis).collect()
}

#[test]
fn test_default_schedule() {
    let delays = schedule(ReconnectionManager::new(), 7, false);
    assert_eq!(millis(delays), [1000, 2000, 4000, 8000, 16000, 30000, 30000]);
}

#[test]
fn test_configured_schedule() {
    let config = ReconnectConfig { base_delay_ms: 100, max_delay_ms: 500, jitter_ratio: 0.2 };
    let delays = schedule(ReconnectionManager::with_config(config), 5, false);
    assert_eq!(millis(delays), [100, 200, 400, 500, 500]);
}

#[test]
fn test_jittered_schedule_uses_source() {
    let manager = ReconnectionManager::with_jitter(ReconnectConfig::default(), Fixed(1.0));
    assert_eq!(millis(schedule(manager, 2, true)), [1200, 2400]);
}

#[test]
fn test_zero_attempts() {
    assert!(schedule(ReconnectionManager::new(), 0, true).is_empty());
}
