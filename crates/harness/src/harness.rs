// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The `cleos` test harness.
//!
//! [`Cleos`] builds client command lines, runs them one at a time, and hands
//! back a [`CommandResult`] per call. It never interprets or retries what
//! the client reports; the one exception is [`Cleos::wait_for_table`], which
//! polls explicitly under a bounded [`WaitPolicy`].

use std::sync::Arc;

use bond_harness_capture::{CaptureLog, CapturedOutcome};
use serde_json::Value;

use crate::action::ActionRequest;
use crate::command::{CommandLine, CommandResult, CommandRunner, ShellRunner};
use crate::config::HarnessConfig;
use crate::error::HarnessError;
use crate::table::{TableQuery, TableRows};
use crate::wait::{wait_until, Probe, WaitPolicy};

/// Harness that drives the external client
#[derive(Clone)]
pub struct Cleos {
    config: HarnessConfig,
    runner: Arc<dyn CommandRunner>,
    capture: Option<CaptureLog>,
}

impl Cleos {
    /// Harness using the shell runner and no capture log.
    pub fn new(config: HarnessConfig) -> Self {
        Self {
            config,
            runner: Arc::new(ShellRunner::new()),
            capture: None,
        }
    }

    /// Harness configured from the environment.
    ///
    /// Uses the process-wide capture log for the configured file, so every
    /// harness built this way in one test binary writes a single run.
    pub fn from_env() -> Result<Self, HarnessError> {
        let config = HarnessConfig::load()?;
        let capture = config
            .capture_file
            .as_deref()
            .map(CaptureLog::shared)
            .transpose()?;
        let mut cleos = Self::new(config);
        cleos.capture = capture;
        Ok(cleos)
    }

    /// Replace the process runner.
    pub fn with_runner(mut self, runner: impl CommandRunner + 'static) -> Self {
        self.runner = Arc::new(runner);
        self
    }

    /// Record every invocation into `log`.
    pub fn with_capture(mut self, log: CaptureLog) -> Self {
        self.capture = Some(log);
        self
    }

    pub fn config(&self) -> &HarnessConfig {
        &self.config
    }

    pub fn capture(&self) -> Option<&CaptureLog> {
        self.capture.as_ref()
    }

    /// Run an arbitrary command line.
    pub fn command(&self, cmd: impl Into<CommandLine>) -> Result<CommandResult, HarnessError> {
        let line = cmd.into().render();
        tracing::debug!(command = %line, "running");

        match self.runner.run(&line) {
            Ok(result) => {
                tracing::debug!(status = result.status, "exited");
                if let Some(ref log) = self.capture {
                    log.record(line, CapturedOutcome::from(&result));
                }
                Ok(result)
            }
            Err(e) => {
                tracing::warn!(command = %line, error = %e, "spawn failed");
                if let Some(ref log) = self.capture {
                    log.record(
                        line,
                        CapturedOutcome::SpawnFailed {
                            error: e.to_string(),
                        },
                    );
                }
                Err(e)
            }
        }
    }

    /// Run a client subcommand: the configured executable is prefixed.
    pub fn cleos_command(
        &self,
        cmd: impl Into<CommandLine>,
    ) -> Result<CommandResult, HarnessError> {
        self.command(cmd.into().with_program(&self.config.executable))
    }

    /// Push `action` to the configured contract.
    ///
    /// `params` become a JSON array; `user` defaults to the configured
    /// identity.
    pub fn push_action<P, V>(
        &self,
        action: &str,
        params: P,
        user: Option<&str>,
    ) -> Result<CommandResult, HarnessError>
    where
        P: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let mut request = ActionRequest::new(action, params);
        request.actor = user.map(String::from);
        self.push(request)
    }

    /// Push a prepared request, such as a [`BondAction`](crate::action::BondAction).
    pub fn push(&self, request: impl Into<ActionRequest>) -> Result<CommandResult, HarnessError> {
        let request = request.into();
        self.cleos_command(
            request.to_tokens(&self.config.contract_name, &self.config.contract_user),
        )
    }

    /// Query `table` of `contract_name` under `scope`.
    pub fn get_table(
        &self,
        contract_name: &str,
        scope: &str,
        table: &str,
    ) -> Result<CommandResult, HarnessError> {
        self.query(&TableQuery::new(contract_name, scope, table))
    }

    pub fn query(&self, query: &TableQuery) -> Result<CommandResult, HarnessError> {
        self.cleos_command(query.to_tokens())
    }

    /// Poll `query` with the configured policy until `ready` accepts the rows.
    pub fn wait_for_table<F>(
        &self,
        query: &TableQuery,
        ready: F,
    ) -> Result<TableRows, HarnessError>
    where
        F: Fn(&TableRows) -> bool,
    {
        self.wait_for_table_with(&self.config.wait, query, ready)
    }

    /// Like [`Cleos::wait_for_table`] with an explicit policy.
    ///
    /// Failed queries and unparsable output count as "not yet".
    pub fn wait_for_table_with<F>(
        &self,
        policy: &WaitPolicy,
        query: &TableQuery,
        ready: F,
    ) -> Result<TableRows, HarnessError>
    where
        F: Fn(&TableRows) -> bool,
    {
        wait_until(policy, || {
            let result = self.query(query)?;
            if !result.success() {
                return Ok(Probe::Pending(result));
            }
            match result.table_rows() {
                Ok(rows) if ready(&rows) => Ok(Probe::Ready(rows)),
                _ => Ok(Probe::Pending(result)),
            }
        })
    }
}

impl std::fmt::Debug for Cleos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cleos")
            .field("config", &self.config)
            .field("capture", &self.capture)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "harness_tests.rs"]
mod tests;
