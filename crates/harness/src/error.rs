// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Harness error type.
//!
//! Business failures reported by the contract never show up here: they come
//! back as a [`CommandResult`] with a non-zero status and stderr text.

use std::path::PathBuf;
use thiserror::Error;

use crate::command::CommandResult;

/// Errors raised by the harness itself
#[derive(Debug, Error)]
pub enum HarnessError {
    /// The shell could not be started, so no process ran.
    #[error("failed to spawn `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Output was not the JSON shape the caller asked for.
    #[error("invalid JSON output: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration file could not be read or parsed.
    #[error("invalid config {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A wait-for-confirmation poll ran out of attempts.
    #[error("condition not met after {attempts} attempts (last status {})", .last.status)]
    WaitTimeout {
        attempts: u32,
        last: Box<CommandResult>,
    },
}
