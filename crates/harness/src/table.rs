// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `get table` queries and their parsed output.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::HarnessError;

/// Read-only query for a contract table under a scope.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableQuery {
    pub contract: String,
    pub scope: String,
    pub table: String,
}

impl TableQuery {
    pub fn new(
        contract: impl Into<String>,
        scope: impl Into<String>,
        table: impl Into<String>,
    ) -> Self {
        Self {
            contract: contract.into(),
            scope: scope.into(),
            table: table.into(),
        }
    }

    /// `get table <contract> <scope> <table>` tokens.
    pub fn to_tokens(&self) -> Vec<String> {
        vec![
            "get".to_string(),
            "table".to_string(),
            self.contract.clone(),
            self.scope.clone(),
            self.table.clone(),
        ]
    }
}

/// Parsed `get table` output.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TableRows<R = Value> {
    pub rows: Vec<R>,
    pub more: bool,
}

impl<R: DeserializeOwned> TableRows<R> {
    pub fn parse(stdout: &str) -> Result<Self, HarnessError> {
        Ok(serde_json::from_str(stdout)?)
    }
}

impl<R> TableRows<R> {
    pub fn first(&self) -> Option<&R> {
        self.rows.first()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl TableRows<Value> {
    /// Decode every row into a typed record.
    pub fn decode<R: DeserializeOwned>(&self) -> Result<TableRows<R>, HarnessError> {
        let rows = self
            .rows
            .iter()
            .map(|row| serde_json::from_value(row.clone()))
            .collect::<Result<Vec<R>, _>>()?;
        Ok(TableRows {
            rows,
            more: self.more,
        })
    }

    /// True when some row carries every field of `expected` with an equal value.
    ///
    /// `expected` must be a JSON object; extra fields on the row are ignored.
    pub fn contains_row(&self, expected: &Value) -> bool {
        let Some(expected) = expected.as_object() else {
            return false;
        };
        self.rows
            .iter()
            .filter_map(Value::as_object)
            .any(|row| row_includes(row, expected))
    }
}

fn row_includes(row: &Map<String, Value>, expected: &Map<String, Value>) -> bool {
    expected
        .iter()
        .all(|(key, value)| row.get(key) == Some(value))
}

/// Row of the `stat` table, scoped by token symbol.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StatRow {
    pub supply: String,
    pub max_supply: String,
    pub issuer: String,
    #[serde(default)]
    pub project: Value,
    /// Fields added by later contract revisions.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Row of the `accounts` table, scoped by owner.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AccountRow {
    pub balance: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
#[path = "table_tests.rs"]
mod tests;
