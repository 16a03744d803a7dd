// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Vector clocks for per-entity causal ordering.
//!
//! A vector clock maps a client ID to the number of writes that client has
//! made to one entity. Missing entries count as zero. A client's counter
//! starts at 1 on its first write and never decreases.
//!
//! Comparison rules over the union of keys:
//! 1. Every `a[k] <= b[k]`, at least one strictly less: `a` is before `b`
//! 2. The mirror image: `a` is after `b`
//! 3. Every counter equal: equal
//! 4. Anything else: concurrent

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Causal relationship between two vector clocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClockOrdering {
    /// The left clock happened before the right one.
    Before,
    /// The left clock happened after the right one.
    After,
    /// Both clocks carry identical counters.
    Equal,
    /// Neither clock dominates the other.
    Concurrent,
}

impl ClockOrdering {
    /// Returns the ordering seen from the other side of the comparison.
    pub fn reverse(self) -> Self {
        match self {
            ClockOrdering::Before => ClockOrdering::After,
            ClockOrdering::After => ClockOrdering::Before,
            other => other,
        }
    }

    /// Returns the string representation used in logs and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            ClockOrdering::Before => "before",
            ClockOrdering::After => "after",
            ClockOrdering::Equal => "equal",
            ClockOrdering::Concurrent => "concurrent",
        }
    }
}

impl fmt::Display for ClockOrdering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A vector clock keyed by client ID.
///
/// Serializes as a plain JSON object (`{"client-a": 2, "client-b": 1}`).
/// All operations are pure: they return a new clock and leave `self` alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VectorClock(BTreeMap<String, u64>);

impl VectorClock {
    /// Creates the clock for a client's first write: `{client_id: 1}`.
    pub fn new(client_id: &str) -> Self {
        let mut counters = BTreeMap::new();
        counters.insert(client_id.to_string(), 1);
        VectorClock(counters)
    }

    /// Creates an empty clock (every counter zero).
    pub fn empty() -> Self {
        VectorClock(BTreeMap::new())
    }

    /// Returns the counter for a client, zero if it never wrote.
    pub fn get(&self, client_id: &str) -> u64 {
        self.0.get(client_id).copied().unwrap_or(0)
    }

    /// Returns a copy with `client_id`'s counter advanced by one.
    pub fn increment(&self, client_id: &str) -> Self {
        let mut counters = self.0.clone();
        *counters.entry(client_id.to_string()).or_insert(0) += 1;
        VectorClock(counters)
    }

    /// Returns the pointwise maximum of both clocks.
    ///
    /// Commutative and idempotent; the result dominates (or equals) both inputs.
    pub fn merge(&self, other: &VectorClock) -> Self {
        let mut counters = self.0.clone();
        for (client, &count) in &other.0 {
            let entry = counters.entry(client.clone()).or_insert(0);
            if count > *entry {
                *entry = count;
            }
        }
        VectorClock(counters)
    }

    /// Compares two clocks. Exactly one ordering holds for any pair.
    pub fn compare(&self, other: &VectorClock) -> ClockOrdering {
        let mut less = false;
        let mut greater = false;

        for client in self.0.keys().chain(other.0.keys()) {
            let a = self.get(client);
            let b = other.get(client);
            if a < b {
                less = true;
            } else if a > b {
                greater = true;
            }
            if less && greater {
                return ClockOrdering::Concurrent;
            }
        }

        match (less, greater) {
            (true, false) => ClockOrdering::Before,
            (false, true) => ClockOrdering::After,
            (false, false) => ClockOrdering::Equal,
            (true, true) => ClockOrdering::Concurrent,
        }
    }

    /// Returns true if every counter in `self` is at least the one in `other`.
    pub fn dominates(&self, other: &VectorClock) -> bool {
        matches!(self.compare(other), ClockOrdering::After | ClockOrdering::Equal)
    }

    /// Iterates over `(client_id, counter)` pairs in client order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Returns the number of clients that have written.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no client has written.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for VectorClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (client, count)) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{client}:{count}")?;
        }
        write!(f, "}}")
    }
}

impl<K: Into<String>> FromIterator<(K, u64)> for VectorClock {
    fn from_iter<I: IntoIterator<Item = (K, u64)>>(iter: I) -> Self {
        VectorClock(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

#[cfg(test)]
#[path = "vclock_tests.rs"]
mod tests;
