//! Retry configuration.

use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::thread;
use std::time::Duration;

/// Retries performed after the first failed call
pub const DEFAULT_RETRY_ATTEMPTS: i64 = 3;

/// Pause between attempts, in milliseconds
pub const DEFAULT_RETRY_SLEEP_MS: u64 = 100;

/// How often and how patiently a failing call is retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryPolicy {
    /// Retries after the first call. Negative means retry until success.
    pub attempts: i64,
    /// Pause between attempts in milliseconds.
    pub sleep_ms: u64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            attempts: DEFAULT_RETRY_ATTEMPTS,
            sleep_ms: DEFAULT_RETRY_SLEEP_MS,
        }
    }
}

impl RetryPolicy {
    /// Creates a policy. Sub-millisecond precision of `sleep` is dropped.
    pub fn new(attempts: i64, sleep: Duration) -> Self {
        Self {
            attempts,
            sleep_ms: u64::try_from(sleep.as_millis()).unwrap_or(u64::MAX),
        }
    }

    /// Retries until success, pausing `sleep` between attempts.
    pub fn unlimited(sleep: Duration) -> Self {
        Self::new(-1, sleep)
    }

    /// Pause between attempts.
    pub fn sleep(&self) -> Duration {
        Duration::from_millis(self.sleep_ms)
    }

    /// True when the policy retries until success.
    pub fn is_unlimited(&self) -> bool {
        self.attempts < 0
    }

    /// Runs `f` until it succeeds or the attempts are exhausted, returning
    /// the last error in the latter case.
    pub fn retry<T, E, F>(&self, f: F) -> Result<T, E>
    where
        F: FnMut() -> Result<T, E>,
        E: Display,
    {
        self.retry_with(f, |_, _| {})
    }

    /// Like [`RetryPolicy::retry`], calling `on_retry` with the error and
    /// the 1-based retry number before each pause.
    pub fn retry_with<T, E, F, R>(&self, mut f: F, mut on_retry: R) -> Result<T, E>
    where
        F: FnMut() -> Result<T, E>,
        R: FnMut(&E, i64),
        E: Display,
    {
        let mut retries: i64 = 0;
        loop {
            match f() {
                Ok(value) => return Ok(value),
                Err(e) if !self.is_unlimited() && retries >= self.attempts => return Err(e),
                Err(e) => {
                    retries = retries.saturating_add(1);
                    log::debug!(
                        "Attempt {} failed: {}. Retrying in {}ms",
                        retries,
                        e,
                        self.sleep_ms
                    );
                    on_retry(&e, retries);
                    thread::sleep(self.sleep());
                }
            }
        }
    }
}
