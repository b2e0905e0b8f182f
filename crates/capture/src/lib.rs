// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Invocation capture for the bond contract test harness.
//!
//! Every external `cleos` invocation a harness makes can be recorded here,
//! in memory and optionally as JSONL on disk, so a failing test run leaves
//! behind the exact command lines and output channels it observed.

mod invocation;
mod log;

pub use invocation::{CapturedInvocation, CapturedOutcome};
pub use log::CaptureLog;
