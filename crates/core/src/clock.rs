// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Wall-clock access for timestamps.
//!
//! Wall time is only ever used for `createdAt`/`updatedAt` and the
//! last-write-wins tiebreak. Causal order comes from vector clocks, and
//! replay order from queue sequence numbers.

use chrono::{DateTime, Utc};

/// Trait for getting the current wall clock time.
///
/// This allows injecting a mock clock for testing.
pub trait ClockSource {
    /// Returns the current time.
    fn now(&self) -> DateTime<Utc>;
}

/// System clock implementation backed by `chrono::Utc::now`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl ClockSource for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

impl<C: ClockSource> ClockSource for &C {
    fn now(&self) -> DateTime<Utc> {
        (*self).now()
    }
}

impl<C: ClockSource> ClockSource for std::rc::Rc<C> {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}
