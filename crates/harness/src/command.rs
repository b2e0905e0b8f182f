// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! External process execution.
//!
//! A command line is handed to `sh -c` exactly as built, run to completion,
//! and its three output channels are returned as a [`CommandResult`].
//! Nothing here interprets the output: a non-zero status is data, not an
//! error.

use std::fmt;
use std::path::PathBuf;
use std::process::{Command, ExitStatus, Output, Stdio};

use bond_harness_capture::CapturedOutcome;
use regex::Regex;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::HarnessError;
use crate::table::TableRows;

/// A shell command line, either pre-joined or as ordered tokens.
///
/// Tokens are joined with single spaces and are not quoted, so a token that
/// needs quoting must already carry it (see [`shell_quote`]).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CommandLine {
    Line(String),
    Tokens(Vec<String>),
}

impl CommandLine {
    /// The exact text passed to the shell.
    pub fn render(&self) -> String {
        match self {
            CommandLine::Line(line) => line.clone(),
            CommandLine::Tokens(tokens) => tokens.join(" "),
        }
    }

    /// Prefix the line with a program name.
    pub fn with_program(self, program: &str) -> Self {
        match self {
            CommandLine::Tokens(mut tokens) => {
                tokens.insert(0, program.to_string());
                CommandLine::Tokens(tokens)
            }
            CommandLine::Line(line) => CommandLine::Line(format!("{} {}", program, line)),
        }
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl From<&str> for CommandLine {
    fn from(line: &str) -> Self {
        CommandLine::Line(line.to_string())
    }
}

impl From<String> for CommandLine {
    fn from(line: String) -> Self {
        CommandLine::Line(line)
    }
}

impl From<Vec<String>> for CommandLine {
    fn from(tokens: Vec<String>) -> Self {
        CommandLine::Tokens(tokens)
    }
}

impl From<Vec<&str>> for CommandLine {
    fn from(tokens: Vec<&str>) -> Self {
        CommandLine::Tokens(tokens.into_iter().map(String::from).collect())
    }
}

impl From<&[&str]> for CommandLine {
    fn from(tokens: &[&str]) -> Self {
        CommandLine::Tokens(tokens.iter().map(|t| t.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for CommandLine {
    fn from(tokens: [&str; N]) -> Self {
        CommandLine::Tokens(tokens.iter().map(|t| t.to_string()).collect())
    }
}

/// Captured outcome of one external process
///
/// Both channels are kept byte-for-byte when the client writes UTF-8, which
/// `cleos` always does. Any invalid sequence is replaced with U+FFFD rather
/// than failing the invocation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandResult {
    pub stdout: String,
    pub stderr: String,
    pub status: i32,
}

impl CommandResult {
    pub fn new(stdout: impl Into<String>, stderr: impl Into<String>, status: i32) -> Self {
        Self {
            stdout: stdout.into(),
            stderr: stderr.into(),
            status,
        }
    }

    fn from_output(output: Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            status: exit_code(output.status),
        }
    }

    /// True when the process exited zero.
    pub fn success(&self) -> bool {
        self.status == 0
    }

    /// True when `pattern` matches anywhere in stderr.
    pub fn stderr_matches(&self, pattern: &Regex) -> bool {
        pattern.is_match(&self.stderr)
    }

    /// Parse stdout as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, HarnessError> {
        Ok(serde_json::from_str(&self.stdout)?)
    }

    /// Parse stdout as `get table` output.
    pub fn table_rows(&self) -> Result<TableRows, HarnessError> {
        TableRows::parse(&self.stdout)
    }
}

impl From<&CommandResult> for CapturedOutcome {
    fn from(result: &CommandResult) -> Self {
        CapturedOutcome::Completed {
            stdout: result.stdout.clone(),
            stderr: result.stderr.clone(),
            status: result.status,
        }
    }
}

/// Map an exit status to a concrete integer.
///
/// Signal termination follows the shell convention of `128 + signal`.
fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }
    -1
}

/// Executes a rendered command line.
pub trait CommandRunner: Send + Sync {
    fn run(&self, command_line: &str) -> Result<CommandResult, HarnessError>;
}

/// Runs command lines through a POSIX shell, blocking until exit.
///
/// No timeout is applied: a hung child hangs the caller.
#[derive(Clone, Debug)]
pub struct ShellRunner {
    shell: PathBuf,
}

impl ShellRunner {
    pub fn new() -> Self {
        Self {
            shell: PathBuf::from("sh"),
        }
    }

    /// Use a different shell binary.
    pub fn with_shell(mut self, shell: impl Into<PathBuf>) -> Self {
        self.shell = shell.into();
        self
    }
}

impl Default for ShellRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner for ShellRunner {
    fn run(&self, command_line: &str) -> Result<CommandResult, HarnessError> {
        let output = Command::new(&self.shell)
            .arg("-c")
            .arg(command_line)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| HarnessError::Spawn {
                command: command_line.to_string(),
                source,
            })?;
        Ok(CommandResult::from_output(output))
    }
}

/// Run a command line with the default shell.
pub fn command(cmd: impl Into<CommandLine>) -> Result<CommandResult, HarnessError> {
    ShellRunner::new().run(&cmd.into().render())
}

/// Quote `text` as a single shell word.
///
/// Wraps in single quotes; embedded single quotes become `'\''`.
pub fn shell_quote(text: &str) -> String {
    format!("'{}'", text.replace('\'', r"'\''"))
}

#[cfg(test)]
#[path = "command_tests.rs"]
mod tests;
