// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Bond contract test harness.
//!
//! Drives the external `cleos` client as a black box: each call builds one
//! command line, runs it to completion, and returns the captured stdout,
//! stderr and exit status for the test to assert on.
//!
//! ```no_run
//! use bond_harness::{BondAction, Cleos, HarnessConfig};
//!
//! let cleos = Cleos::new(HarnessConfig::default());
//! let result = cleos.push(BondAction::create("foo", "0.12 FOO").by("test"))?;
//! assert!(result.stderr.contains("maximum supply must be a whole number"));
//! # Ok::<(), bond_harness::HarnessError>(())
//! ```

pub mod action;
pub mod cli;
pub mod command;
pub mod config;
pub mod env;
pub mod error;
pub mod harness;
pub mod table;
pub mod wait;

/// Re-exported capture types from bond-harness-capture crate.
pub mod capture {
    pub use bond_harness_capture::{CaptureLog, CapturedInvocation, CapturedOutcome};
}

pub use action::{ActionRequest, BondAction};
pub use command::{command, shell_quote, CommandLine, CommandResult, CommandRunner, ShellRunner};
pub use config::HarnessConfig;
pub use error::HarnessError;
pub use harness::Cleos;
pub use table::{AccountRow, StatRow, TableQuery, TableRows};
pub use wait::{wait_until, Probe, WaitPolicy};
