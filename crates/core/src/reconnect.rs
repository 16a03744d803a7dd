// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Reconnection scheduling with exponential backoff and jitter.
//!
//! Delay for attempt `n` is `min(base * 2^n, max)`, optionally spread over
//! `[(1 - ratio) * d, (1 + ratio) * d]` so clients that lost the same server
//! don't all come back in the same instant.
//!
//! The manager computes delays and owns one cancellable timer. It never
//! touches the network itself: the scheduled callback does the reconnecting.

use std::time::Duration;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tokio::task::JoinHandle;

use crate::error::{Error, Result};

/// Backoff parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReconnectConfig {
    /// Delay before the first retry (milliseconds).
    #[serde(default = "default_base_delay_ms")]
    pub base_delay_ms: u64,
    /// Upper bound on the un-jittered delay (milliseconds).
    #[serde(default = "default_max_delay_ms")]
    pub max_delay_ms: u64,
    /// Symmetric jitter as a fraction of the delay.
    #[serde(default = "default_jitter_ratio")]
    pub jitter_ratio: f64,
}

fn default_base_delay_ms() -> u64 {
    1_000
}

fn default_max_delay_ms() -> u64 {
    30_000
}

fn default_jitter_ratio() -> f64 {
    0.2
}

impl Default for ReconnectConfig {
    fn default() -> Self {
        ReconnectConfig {
            base_delay_ms: default_base_delay_ms(),
            max_delay_ms: default_max_delay_ms(),
            jitter_ratio: default_jitter_ratio(),
        }
    }
}

/// Source of uniform samples in `[0, 1]` for jitter.
///
/// This allows injecting a fixed sample for testing.
pub trait JitterSource {
    fn sample(&self) -> f64;
}

/// Jitter drawn from the thread-local RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRngJitter;

impl JitterSource for ThreadRngJitter {
    fn sample(&self) -> f64 {
        rand::thread_rng().gen_range(0.0..=1.0)
    }
}

/// Backoff bookkeeping plus the armed reconnect timer, if any.
pub struct ReconnectionManager<J: JitterSource = ThreadRngJitter> {
    config: ReconnectConfig,
    jitter: J,
    attempt: u32,
    timer: Option<JoinHandle<()>>,
    reconnecting: bool,
}

impl ReconnectionManager<ThreadRngJitter> {
    /// Creates a manager with the default backoff and random jitter.
    pub fn new() -> Self {
        Self::with_jitter(ReconnectConfig::default(), ThreadRngJitter)
    }

    /// Creates a manager with custom backoff and random jitter.
    pub fn with_config(config: ReconnectConfig) -> Self {
        Self::with_jitter(config, ThreadRngJitter)
    }
}

impl Default for ReconnectionManager<ThreadRngJitter> {
    fn default() -> Self {
        Self::new()
    }
}

impl<J: JitterSource> ReconnectionManager<J> {
    /// Creates a manager with a custom jitter source.
    pub fn with_jitter(config: ReconnectConfig, jitter: J) -> Self {
        ReconnectionManager { config, jitter, attempt: 0, timer: None, reconnecting: false }
    }

    /// Returns the number of attempts recorded since the last reset.
    pub fn attempt(&self) -> u32 {
        self.attempt
    }

    /// Returns true while a reconnect is scheduled and not stopped.
    pub fn is_reconnecting(&self) -> bool {
        self.reconnecting
    }

    /// Returns the delay before the next attempt.
    pub fn get_next_delay(&self, with_jitter: bool) -> Duration {
        let factor = 2u64.checked_pow(self.attempt).unwrap_or(u64::MAX);
        let base = self.config.base_delay_ms.saturating_mul(factor).min(self.config.max_delay_ms);

        if !with_jitter {
            return Duration::from_millis(base);
        }

        let ratio = self.config.jitter_ratio.clamp(0.0, 1.0);
        let sample = self.jitter.sample().clamp(0.0, 1.0);
        let scale = 1.0 - ratio + 2.0 * ratio * sample;
        Duration::from_millis((base as f64 * scale).round() as u64)
    }

    /// Counts one more failed attempt.
    pub fn record_attempt(&mut self) {
        self.attempt = self.attempt.saturating_add(1);
    }

    /// Arms a timer that runs `callback` after the next jittered delay.
    ///
    /// Replaces any timer already armed, then records the attempt so the
    /// following schedule backs off further. Returns the chosen delay.
    /// Must be called from inside a tokio runtime.
    pub fn schedule_reconnect<F>(&mut self, callback: F) -> Result<Duration>
    where
        F: FnOnce() + Send + 'static,
    {
        let handle = tokio::runtime::Handle::try_current().map_err(|_| Error::NoRuntime)?;
        self.cancel_timer();

        let delay = self.get_next_delay(true);
        self.timer = Some(handle.spawn(async move {
            tokio::time::sleep(delay).await;
            callback();
        }));
        self.reconnecting = true;
        self.record_attempt();

        tracing::debug!(attempt = self.attempt, delay_ms = delay.as_millis() as u64, "scheduled reconnect");
        Ok(delay)
    }

    /// Cancels any armed timer. Safe to call repeatedly.
    pub fn stop(&mut self) {
        self.cancel_timer();
        self.reconnecting = false;
    }

    /// Clears the backoff after a successful reconnect.
    pub fn reset(&mut self) {
        self.stop();
        self.attempt = 0;
    }

    fn cancel_timer(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }
}

impl<J: JitterSource> Drop for ReconnectionManager<J> {
    fn drop(&mut self) {
        self.cancel_timer();
    }
}

#[cfg(test)]
#[path = "reconnect_tests.rs"]
mod tests;
