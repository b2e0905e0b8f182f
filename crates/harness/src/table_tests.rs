// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
use super::*;
use serde_json::json;

const STAT_OUTPUT: &str = r#"{
  "rows": [{
      "supply": "0 FOO",
      "max_supply": "1000 FOO",
      "issuer": "foo",
      "project": "",
      "token_price": "0 FOO",
      "start": 0
    }
  ],
  "more": false
}"#;

#[test]
fn test_query_tokens() {
    let query = TableQuery::new("test", "FOO", "stat");
    assert_eq!(query.to_tokens(), vec!["get", "table", "test", "FOO", "stat"]);
}

#[test]
fn test_parse_rows_and_more() {
    let rows: TableRows = TableRows::parse(STAT_OUTPUT).unwrap();
    assert_eq!(rows.len(), 1);
    assert!(!rows.more);
    assert_eq!(rows.first().unwrap()["issuer"], "foo");
}

#[test]
fn test_parse_empty_table() {
    let rows: TableRows = TableRows::parse(r#"{"rows":[],"more":false}"#).unwrap();
    assert!(rows.is_empty());
    assert_eq!(rows.first(), None);
}

#[test]
fn test_parse_rejects_missing_more() {
    let result: Result<TableRows, _> = TableRows::parse(r#"{"rows":[]}"#);
    assert!(matches!(result, Err(HarnessError::Json(_))));
}

#[test]
fn test_parse_rejects_error_text() {
    let result: Result<TableRows, _> =
        TableRows::parse("Error 3060003: Contract Table Query Exception");
    assert!(result.is_err());
}

#[test]
fn test_decode_stat_rows() {
    let rows: TableRows = TableRows::parse(STAT_OUTPUT).unwrap();
    let stats = rows.decode::<StatRow>().unwrap();
    let stat = stats.first().unwrap();

    assert_eq!(stat.supply, "0 FOO");
    assert_eq!(stat.max_supply, "1000 FOO");
    assert_eq!(stat.issuer, "foo");
    assert_eq!(stat.project, json!(""));
    assert_eq!(stat.extra.get("token_price"), Some(&json!("0 FOO")));
    assert_eq!(stat.extra.get("start"), Some(&json!(0)));
}

#[test]
fn test_decode_stat_without_project() {
    let rows: TableRows<StatRow> = TableRows::parse(
        r#"{"rows":[{"supply":"5 BAR","max_supply":"10 BAR","issuer":"bar"}],"more":true}"#,
    )
    .unwrap();
    assert!(rows.more);
    assert_eq!(rows.rows[0].project, Value::Null);
}

#[test]
fn test_decode_account_rows() {
    let rows: TableRows<AccountRow> =
        TableRows::parse(r#"{"rows":[{"balance":"1 FOO"}],"more":false}"#).unwrap();
    assert_eq!(rows.rows[0].balance, "1 FOO");
}

#[test]
fn test_decode_reports_shape_mismatch() {
    let rows: TableRows = TableRows::parse(r#"{"rows":[{"balance":"1 FOO"}],"more":false}"#).unwrap();
    assert!(rows.decode::<StatRow>().is_err());
}

#[test]
fn test_contains_row_matches_subset() {
    let rows: TableRows = TableRows::parse(STAT_OUTPUT).unwrap();
    assert!(rows.contains_row(&json!({
        "supply": "0 FOO",
        "max_supply": "1000 FOO",
        "issuer": "foo",
    })));
    assert!(!rows.contains_row(&json!({ "issuer": "bar" })));
    assert!(!rows.contains_row(&json!({ "unknown": 1 })));
}

#[test]
fn test_contains_row_requires_object() {
    let rows: TableRows = TableRows::parse(STAT_OUTPUT).unwrap();
    assert!(!rows.contains_row(&json!(["foo"])));
}
