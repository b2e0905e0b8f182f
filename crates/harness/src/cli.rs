// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Command-line front end for driving `cleos` by hand.

use std::path::PathBuf;

use anyhow::{bail, Context};
use bond_harness_capture::CaptureLog;
use clap::{Parser, Subcommand};
use serde_json::Value;

use crate::command::CommandResult;
use crate::config::HarnessConfig;
use crate::error::HarnessError;
use crate::harness::Cleos;
use crate::table::TableQuery;

/// Bond contract test harness
#[derive(Parser, Debug)]
#[command(name = "bond-harness", version, about = "Drive cleos against the bond contract")]
pub struct Cli {
    /// External client executable
    #[arg(long, global = true, value_name = "PATH")]
    pub cleos: Option<String>,

    /// Contract account actions are pushed to
    #[arg(long, global = true, value_name = "NAME")]
    pub contract: Option<String>,

    /// Append every invocation to this JSONL file
    #[arg(long, global = true, value_name = "FILE")]
    pub capture: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Push an action to the contract
    Push {
        /// Action name, passed verbatim
        action: String,
        /// Parameters as a JSON array
        params: String,
        /// Acting identity
        #[arg(short = 'p', long = "permission", value_name = "USER")]
        user: Option<String>,
    },
    /// Print rows of a contract table
    Table {
        contract: String,
        scope: String,
        table: String,
    },
    /// Poll a table until it has at least --min-rows rows
    WaitTable {
        contract: String,
        scope: String,
        table: String,
        #[arg(long, default_value_t = 1)]
        min_rows: usize,
        /// Override the configured number of polls
        #[arg(long)]
        attempts: Option<u32>,
    },
}

impl Cli {
    /// Loaded configuration with flag overrides applied.
    pub fn config(&self) -> Result<HarnessConfig, HarnessError> {
        let mut config = HarnessConfig::load()?;
        if let Some(ref cleos) = self.cleos {
            config = config.with_executable(cleos);
        }
        if let Some(ref contract) = self.contract {
            config = config.with_contract(contract);
        }
        if let Some(ref capture) = self.capture {
            config = config.with_capture_file(capture);
        }
        Ok(config)
    }
}

/// Execute the parsed command line, returning the process exit code.
pub fn run(cli: &Cli) -> anyhow::Result<i32> {
    let config = cli.config()?;
    let mut cleos = Cleos::new(config.clone());
    if let Some(ref path) = config.capture_file {
        let log = CaptureLog::with_file(path)
            .with_context(|| format!("cannot open capture file {}", path.display()))?;
        cleos = cleos.with_capture(log);
    }

    match &cli.command {
        Commands::Push {
            action,
            params,
            user,
        } => {
            let params = parse_params(params)?;
            let result = cleos.push_action(action, params, user.as_deref())?;
            Ok(forward(&result))
        }
        Commands::Table {
            contract,
            scope,
            table,
        } => {
            let result = cleos.get_table(contract, scope, table)?;
            Ok(forward(&result))
        }
        Commands::WaitTable {
            contract,
            scope,
            table,
            min_rows,
            attempts,
        } => {
            let mut policy = config.wait;
            if let Some(attempts) = attempts {
                policy.attempts = *attempts;
            }
            let query = TableQuery::new(contract, scope, table);
            match cleos.wait_for_table_with(&policy, &query, |rows| rows.len() >= *min_rows) {
                Ok(rows) => {
                    println!("{}", serde_json::to_string_pretty(&rows)?);
                    Ok(0)
                }
                Err(HarnessError::WaitTimeout { attempts, last }) => {
                    forward(&last);
                    eprintln!(
                        "bond-harness: {} {} {} has fewer than {} rows after {} attempts",
                        contract, scope, table, min_rows, attempts
                    );
                    Ok(1)
                }
                Err(e) => Err(e.into()),
            }
        }
    }
}

/// Parse the PARAMS argument, which must be a JSON array.
pub fn parse_params(text: &str) -> anyhow::Result<Vec<Value>> {
    let value: Value = serde_json::from_str(text).context("PARAMS is not valid JSON")?;
    match value {
        Value::Array(items) => Ok(items),
        other => bail!("PARAMS must be a JSON array, got {}", other),
    }
}

fn forward(result: &CommandResult) -> i32 {
    print!("{}", result.stdout);
    eprint!("{}", result.stderr);
    result.status
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
