// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Capture log implementation.

use crate::invocation::{CapturedInvocation, CapturedOutcome};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, OnceLock};
use std::time::{Instant, SystemTime, UNIX_EPOCH};

/// Process-wide logs opened through [`CaptureLog::shared`], keyed by path.
static SHARED: OnceLock<Mutex<HashMap<PathBuf, CaptureLog>>> = OnceLock::new();

/// Logs created so far in this process.
static LOGS_CREATED: AtomicU64 = AtomicU64::new(0);

/// Shared, append-only record of external invocations.
///
/// Clones share the same underlying log, so a harness and the test that
/// owns it observe the same history. Every log carries a run id
/// (`<pid>-<start millis>-<n>`) and a sequence counter that never goes backwards,
/// so `(run, seq)` identifies a record even when several logs append to one
/// file.
pub struct CaptureLog {
    start: Instant,
    run: Arc<str>,
    next_seq: Arc<AtomicU64>,
    invocations: Arc<Mutex<Vec<CapturedInvocation>>>,
    file_writer: Option<Arc<Mutex<File>>>,
}

impl CaptureLog {
    /// Create a new in-memory capture log
    pub fn new() -> Self {
        Self::build(None)
    }

    /// Create a capture log that also appends JSONL records to `path`.
    ///
    /// The file is opened in append mode so several test binaries can share
    /// one capture file across a run; their records differ by `run`.
    pub fn with_file(path: &Path) -> std::io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self::build(Some(file)))
    }

    /// Process-wide log for `path`.
    ///
    /// The first call opens the file; later calls with the same path return a
    /// clone of that log, so one process writes one run with dense sequence
    /// numbers.
    pub fn shared(path: &Path) -> std::io::Result<Self> {
        let registry = SHARED.get_or_init(|| Mutex::new(HashMap::new()));
        let mut logs = registry.lock();
        if let Some(log) = logs.get(path) {
            return Ok(log.clone());
        }
        let log = Self::with_file(path)?;
        logs.insert(path.to_path_buf(), log.clone());
        Ok(log)
    }

    fn build(file: Option<File>) -> Self {
        let started_ms = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or_default();
        Self {
            start: Instant::now(),
            run: format!(
                "{}-{}-{}",
                std::process::id(),
                started_ms,
                LOGS_CREATED.fetch_add(1, Ordering::Relaxed)
            )
            .into(),
            next_seq: Arc::new(AtomicU64::new(0)),
            invocations: Arc::new(Mutex::new(Vec::new())),
            file_writer: file.map(|f| Arc::new(Mutex::new(f))),
        }
    }

    /// Run id stamped on every record of this log and its clones.
    pub fn run(&self) -> &str {
        &self.run
    }

    /// Record an invocation
    pub fn record(&self, command_line: impl Into<String>, outcome: CapturedOutcome) {
        let mut invocations = self.invocations.lock();
        let invocation = CapturedInvocation {
            run: self.run.to_string(),
            seq: self.next_seq.fetch_add(1, Ordering::Relaxed),
            timestamp: SystemTime::now(),
            elapsed_ms: u64::try_from(self.start.elapsed().as_millis()).unwrap_or(u64::MAX),
            command_line: command_line.into(),
            outcome,
        };

        if let Some(ref writer) = self.file_writer {
            Self::append(writer, &invocation);
        }

        invocations.push(invocation);
    }

    /// Write one JSONL line with a single `write_all` so concurrent appenders
    /// never interleave within a record.
    fn append(writer: &Mutex<File>, invocation: &CapturedInvocation) {
        let mut line = match serde_json::to_string(invocation) {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!(seq = invocation.seq, error = %e, "cannot serialize capture record");
                return;
            }
        };
        line.push('\n');

        let mut file = writer.lock();
        if let Err(e) = file.write_all(line.as_bytes()).and_then(|()| file.flush()) {
            tracing::warn!(seq = invocation.seq, error = %e, "capture record lost");
        }
    }

    /// Get all captured invocations
    pub fn invocations(&self) -> Vec<CapturedInvocation> {
        self.invocations.lock().clone()
    }

    /// Get the last N invocations, oldest first
    pub fn last(&self, n: usize) -> Vec<CapturedInvocation> {
        let all = self.invocations.lock();
        all.iter().rev().take(n).rev().cloned().collect()
    }

    /// Count invocations matching a predicate
    pub fn count<F: Fn(&CapturedInvocation) -> bool>(&self, pred: F) -> usize {
        self.invocations.lock().iter().filter(|i| pred(i)).count()
    }

    /// Find invocations whose command line contains `pattern`
    pub fn find_by_command(&self, pattern: &str) -> Vec<CapturedInvocation> {
        self.invocations
            .lock()
            .iter()
            .filter(|i| i.command_line.contains(pattern))
            .cloned()
            .collect()
    }

    /// Find invocations that did not exit zero, including spawn failures
    pub fn failures(&self) -> Vec<CapturedInvocation> {
        self.invocations
            .lock()
            .iter()
            .filter(|i| !i.succeeded())
            .cloned()
            .collect()
    }

    /// Get the total number of invocations
    pub fn len(&self) -> usize {
        self.invocations.lock().len()
    }

    /// Check if the log is empty
    pub fn is_empty(&self) -> bool {
        self.invocations.lock().is_empty()
    }

    /// Clear all recorded invocations.
    ///
    /// The JSONL file is left untouched and sequence numbers keep counting.
    pub fn clear(&self) {
        self.invocations.lock().clear();
    }
}

impl Default for CaptureLog {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for CaptureLog {
    fn clone(&self) -> Self {
        Self {
            start: self.start,
            run: Arc::clone(&self.run),
            next_seq: Arc::clone(&self.next_seq),
            invocations: Arc::clone(&self.invocations),
            file_writer: self.file_writer.as_ref().map(Arc::clone),
        }
    }
}

impl std::fmt::Debug for CaptureLog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CaptureLog")
            .field("run", &self.run)
            .field("len", &self.len())
            .field("file", &self.file_writer.is_some())
            .finish()
    }
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
