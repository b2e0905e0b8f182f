// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Harness configuration.
//!
//! Values are layered: built-in defaults, then an optional TOML file named
//! by `BOND_HARNESS_CONFIG`, then individual environment variables, then
//! whatever the caller sets with the `with_*` builders.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::env;
use crate::error::HarnessError;
use crate::wait::WaitPolicy;

/// Default external client executable
pub const DEFAULT_EXECUTABLE: &str = "cleos";
/// Default account the contract under test is deployed to
pub const DEFAULT_CONTRACT_NAME: &str = "test";
/// Default acting identity for pushed actions
pub const DEFAULT_CONTRACT_USER: &str = "eosio";

/// Resolved harness configuration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HarnessConfig {
    /// Executable prefixed to every client command line
    pub executable: String,
    /// Contract account that actions are pushed to
    pub contract_name: String,
    /// Identity used when a push names no actor
    pub contract_user: String,
    /// Polling policy for wait-for-confirmation
    pub wait: WaitPolicy,
    /// JSONL file that receives every invocation
    pub capture_file: Option<PathBuf>,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            executable: DEFAULT_EXECUTABLE.to_string(),
            contract_name: DEFAULT_CONTRACT_NAME.to_string(),
            contract_user: DEFAULT_CONTRACT_USER.to_string(),
            wait: WaitPolicy::default(),
            capture_file: None,
        }
    }
}

/// On-disk shape; every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    executable: Option<String>,
    contract_name: Option<String>,
    contract_user: Option<String>,
    capture_file: Option<PathBuf>,
    wait: Option<WaitPolicy>,
}

impl HarnessConfig {
    /// Defaults, overlaid with the config file and environment.
    pub fn load() -> Result<Self, HarnessError> {
        let config = match env::config_file() {
            Some(path) => Self::default().overlay_file(&path)?,
            None => Self::default(),
        };
        Ok(config.overlay_env())
    }

    /// Overlay values from a TOML file.
    pub fn overlay_file(self, path: &Path) -> Result<Self, HarnessError> {
        let text = std::fs::read_to_string(path).map_err(|e| HarnessError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        self.overlay_toml(&text).map_err(|e| HarnessError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Overlay values from TOML text.
    pub fn overlay_toml(mut self, text: &str) -> Result<Self, toml::de::Error> {
        let file: ConfigFile = toml::from_str(text)?;
        if let Some(executable) = file.executable {
            self.executable = executable;
        }
        if let Some(contract_name) = file.contract_name {
            self.contract_name = contract_name;
        }
        if let Some(contract_user) = file.contract_user {
            self.contract_user = contract_user;
        }
        if let Some(capture_file) = file.capture_file {
            self.capture_file = Some(capture_file);
        }
        if let Some(wait) = file.wait {
            self.wait = wait;
        }
        Ok(self)
    }

    /// Overlay values from environment variables that are set.
    pub fn overlay_env(mut self) -> Self {
        if let Some(executable) = env::cleos_bin() {
            self.executable = executable;
        }
        if let Some(contract_name) = env::contract_name() {
            self.contract_name = contract_name;
        }
        if let Some(contract_user) = env::contract_user() {
            self.contract_user = contract_user;
        }
        if let Some(capture_file) = env::capture_file() {
            self.capture_file = Some(capture_file);
        }
        if let Some(attempts) = env::wait_attempts() {
            self.wait.attempts = attempts;
        }
        if let Some(ms) = env::wait_backoff_ms() {
            self.wait.initial_backoff_ms = ms;
        }
        if let Some(ms) = env::wait_max_backoff_ms() {
            self.wait.max_backoff_ms = ms;
        }
        self
    }

    pub fn with_executable(mut self, executable: impl Into<String>) -> Self {
        self.executable = executable.into();
        self
    }

    pub fn with_contract(mut self, contract_name: impl Into<String>) -> Self {
        self.contract_name = contract_name.into();
        self
    }

    pub fn with_user(mut self, contract_user: impl Into<String>) -> Self {
        self.contract_user = contract_user.into();
        self
    }

    pub fn with_wait(mut self, wait: WaitPolicy) -> Self {
        self.wait = wait;
        self
    }

    pub fn with_capture_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.capture_file = Some(path.into());
        self
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
