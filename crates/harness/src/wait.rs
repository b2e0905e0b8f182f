// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Bounded polling with exponential backoff.
//!
//! The node commits pushed actions asynchronously, so a query issued right
//! after a push can observe stale state. Instead of a fixed sleep, callers
//! poll until the state they expect shows up or the attempts run out.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::command::CommandResult;
use crate::error::HarnessError;

/// Default number of polls before giving up.
pub const DEFAULT_ATTEMPTS: u32 = 10;
/// Default delay before the first retry.
pub const DEFAULT_INITIAL_BACKOFF_MS: u64 = 100;
/// Default upper bound on a single delay.
pub const DEFAULT_MAX_BACKOFF_MS: u64 = 2000;

/// How long and how often to poll
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WaitPolicy {
    /// Total polls, including the first; zero is treated as one.
    pub attempts: u32,
    pub initial_backoff_ms: u64,
    pub max_backoff_ms: u64,
}

impl Default for WaitPolicy {
    fn default() -> Self {
        Self {
            attempts: DEFAULT_ATTEMPTS,
            initial_backoff_ms: DEFAULT_INITIAL_BACKOFF_MS,
            max_backoff_ms: DEFAULT_MAX_BACKOFF_MS,
        }
    }
}

impl WaitPolicy {
    /// Poll immediately, with no delay between attempts.
    pub fn immediate(attempts: u32) -> Self {
        Self {
            attempts,
            initial_backoff_ms: 0,
            max_backoff_ms: 0,
        }
    }

    pub fn with_attempts(mut self, attempts: u32) -> Self {
        self.attempts = attempts;
        self
    }

    /// Delay after the `retry`-th failed poll (zero-based), doubling each time.
    pub fn backoff(&self, retry: u32) -> Duration {
        let factor = 1u64.checked_shl(retry).unwrap_or(u64::MAX);
        let ms = self
            .initial_backoff_ms
            .saturating_mul(factor)
            .min(self.max_backoff_ms);
        Duration::from_millis(ms)
    }
}

/// Outcome of a single poll.
#[derive(Debug)]
pub enum Probe<T> {
    Ready(T),
    /// Not there yet; keeps the result for the timeout report.
    Pending(CommandResult),
}

/// Poll `probe` until it is ready or `policy.attempts` polls have been made.
///
/// Errors from `probe` abort the wait immediately.
pub fn wait_until<T, F>(policy: &WaitPolicy, mut probe: F) -> Result<T, HarnessError>
where
    F: FnMut() -> Result<Probe<T>, HarnessError>,
{
    let attempts = policy.attempts.max(1);
    let mut last = CommandResult::default();

    for attempt in 0..attempts {
        if attempt > 0 {
            std::thread::sleep(policy.backoff(attempt - 1));
        }
        match probe()? {
            Probe::Ready(value) => return Ok(value),
            Probe::Pending(result) => {
                tracing::debug!(attempt, status = result.status, "condition not met yet");
                last = result;
            }
        }
    }

    tracing::warn!(attempts, "wait gave up");
    Err(HarnessError::WaitTimeout {
        attempts,
        last: Box::new(last),
    })
}

#[cfg(test)]
#[path = "wait_tests.rs"]
mod tests;
