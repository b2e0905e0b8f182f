// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Captured invocation data types.

use serde::{Deserialize, Serialize};
use std::time::SystemTime;

/// One recorded external invocation
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CapturedInvocation {
    /// Id of the log that wrote this record
    #[serde(default)]
    pub run: String,

    /// Sequence number within the run
    pub seq: u64,

    /// Wall-clock timestamp
    pub timestamp: SystemTime,

    /// Milliseconds since the log was created
    pub elapsed_ms: u64,

    /// Shell command line as executed
    pub command_line: String,

    /// What the process produced
    pub outcome: CapturedOutcome,
}

impl CapturedInvocation {
    /// Exit status, if the process ran at all.
    pub fn status(&self) -> Option<i32> {
        match self.outcome {
            CapturedOutcome::Completed { status, .. } => Some(status),
            CapturedOutcome::SpawnFailed { .. } => None,
        }
    }

    /// True when the process ran and exited zero.
    pub fn succeeded(&self) -> bool {
        self.status() == Some(0)
    }
}

/// Captured outcome of an invocation
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CapturedOutcome {
    /// The process ran to completion.
    Completed {
        stdout: String,
        stderr: String,
        status: i32,
    },
    /// The process could not be started.
    SpawnFailed { error: String },
}

#[cfg(test)]
#[path = "invocation_tests.rs"]
mod tests;
