// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.
//!
//! All environment variables read by the harness are defined here.
//! Use these accessors instead of calling `std::env::var()` directly.

/// Generated env var name constants.
mod names {
    include!(concat!(env!("OUT_DIR"), "/env_names.rs"));
}

// Re-export name constants for callers that need the raw name string.
pub use names::*;

use std::path::PathBuf;

/// `CLEOS_BIN`: External client executable (default `cleos`).
pub fn cleos_bin() -> Option<String> {
    std::env::var(names::CLEOS_BIN).ok()
}

/// `CONTRACT_NAME`: Account the contract under test is deployed to.
pub fn contract_name() -> Option<String> {
    std::env::var(names::CONTRACT_NAME).ok()
}

/// `CONTRACT_USER`: Default acting identity for pushed actions.
pub fn contract_user() -> Option<String> {
    std::env::var(names::CONTRACT_USER).ok()
}

/// `BOND_HARNESS_CONFIG`: Optional TOML configuration file.
pub fn config_file() -> Option<PathBuf> {
    std::env::var(names::BOND_HARNESS_CONFIG)
        .ok()
        .map(PathBuf::from)
}

/// `BOND_HARNESS_CAPTURE`: JSONL file that receives every invocation.
pub fn capture_file() -> Option<PathBuf> {
    std::env::var(names::BOND_HARNESS_CAPTURE)
        .ok()
        .map(PathBuf::from)
}

/// `BOND_HARNESS_WAIT_ATTEMPTS`: Polls before a wait gives up.
pub fn wait_attempts() -> Option<u32> {
    std::env::var(names::BOND_HARNESS_WAIT_ATTEMPTS)
        .ok()
        .and_then(|v| v.parse().ok())
}

/// `BOND_HARNESS_WAIT_BACKOFF_MS`: Delay before the first retry.
pub fn wait_backoff_ms() -> Option<u64> {
    var_u64(names::BOND_HARNESS_WAIT_BACKOFF_MS)
}

/// `BOND_HARNESS_WAIT_MAX_BACKOFF_MS`: Upper bound on a single retry delay.
pub fn wait_max_backoff_ms() -> Option<u64> {
    var_u64(names::BOND_HARNESS_WAIT_MAX_BACKOFF_MS)
}

fn var_u64(name: &str) -> Option<u64> {
    std::env::var(name).ok().and_then(|v| v.parse().ok())
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
