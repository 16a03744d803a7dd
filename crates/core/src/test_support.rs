// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared fixtures for unit tests.

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::clock::ClockSource;

/// Fixed epoch used across tests.
pub(crate) fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 7, 1, 12, 0, 0).single().unwrap_or_default()
}

/// Mock clock for testing with controllable time, in milliseconds past `t0`.
pub(crate) struct MockClock {
    offset_ms: AtomicI64,
}

impl MockClock {
    pub(crate) fn new() -> Self {
        MockClock { offset_ms: AtomicI64::new(0) }
    }

    pub(crate) fn advance(&self, ms: i64) {
        self.offset_ms.fetch_add(ms, Ordering::SeqCst);
    }

    pub(crate) fn set(&self, ms: i64) {
        self.offset_ms.store(ms, Ordering::SeqCst);
    }
}

impl ClockSource for MockClock {
    fn now(&self) -> DateTime<Utc> {
        t0() + Duration::milliseconds(self.offset_ms.load(Ordering::SeqCst))
    }
}
