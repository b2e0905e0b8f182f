// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(deprecated)] // Command::cargo_bin is deprecated but still functional

//! End-to-end tests for the `bond-harness` binary against a fake `cleos`.

mod common;

use assert_cmd::Command;
use common::{FakeCleos, LAGGING_NODE};
use predicates::prelude::*;

fn bond_harness(fake: &FakeCleos) -> Command {
    let mut cmd = Command::cargo_bin("bond-harness").unwrap();
    cmd.env_remove("BOND_HARNESS_CONFIG")
        .env_remove("BOND_HARNESS_CAPTURE")
        .env_remove("CONTRACT_NAME")
        .env_remove("CONTRACT_USER")
        .env_remove("BOND_HARNESS_WAIT_ATTEMPTS")
        .env_remove("BOND_HARNESS_WAIT_MAX_BACKOFF_MS")
        .env("CLEOS_BIN", fake.executable())
        .env("BOND_HARNESS_WAIT_BACKOFF_MS", "0");
    cmd
}

#[test]
fn test_push_forwards_client_failure() {
    let fake = FakeCleos::bond_node();

    bond_harness(&fake)
        .args(["push", "create", r#"["foo","0.12 FOO"]"#, "-p", "test"])
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains(
            "maximum supply must be a whole number",
        ));
}

#[test]
fn test_push_success_is_silent() {
    let fake = FakeCleos::bond_node();

    bond_harness(&fake)
        .args(["push", "create", r#"["foo","1000.00 FOO"]"#, "-p", "test"])
        .assert()
        .success()
        .stdout("")
        .stderr("");

    assert_eq!(
        fake.calls(),
        vec![r#"push action test create ["foo","1000.00 FOO"] -p test"#]
    );
}

#[test]
fn test_push_uses_default_identity() {
    let fake = FakeCleos::new(r#"printf '%s' "$7""#);

    bond_harness(&fake)
        .args(["push", "issue", "[]"])
        .assert()
        .success()
        .stdout("eosio");
}

#[test]
fn test_contract_flag_overrides_env() {
    let fake = FakeCleos::new(r#"printf '%s' "$3""#);

    bond_harness(&fake)
        .env("CONTRACT_NAME", "fromenv")
        .args(["--contract", "bond", "push", "issue", "[]"])
        .assert()
        .success()
        .stdout("bond");
}

#[test]
fn test_push_rejects_non_array_params() {
    let fake = FakeCleos::bond_node();

    bond_harness(&fake)
        .args(["push", "create", r#"{"issuer":"foo"}"#])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must be a JSON array"));

    assert!(fake.calls().is_empty());
}

#[test]
fn test_table_prints_rows() {
    let fake = FakeCleos::bond_node();
    bond_harness(&fake)
        .args(["push", "create", r#"["foo","1000.00 FOO"]"#, "-p", "test"])
        .assert()
        .success();

    bond_harness(&fake)
        .args(["table", "test", "FOO", "stat"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""max_supply":"1000 FOO""#));
}

#[test]
fn test_wait_table_polls_until_rows() {
    let fake = FakeCleos::new(LAGGING_NODE);

    bond_harness(&fake)
        .args(["wait-table", "test", "FOO", "stat", "--attempts", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"issuer\": \"foo\""));

    assert_eq!(fake.calls().len(), 3);
}

#[test]
fn test_wait_table_reports_timeout() {
    let fake = FakeCleos::new(LAGGING_NODE);

    bond_harness(&fake)
        .args(["wait-table", "test", "FOO", "stat", "--attempts", "2"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("after 2 attempts"));
}

#[test]
fn test_wait_table_attempts_come_from_env() {
    let fake = FakeCleos::new(LAGGING_NODE);

    bond_harness(&fake)
        .env("BOND_HARNESS_WAIT_ATTEMPTS", "2")
        .args(["wait-table", "test", "FOO", "stat"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("after 2 attempts"));

    assert_eq!(fake.calls().len(), 2);
}

#[test]
fn test_capture_flag_writes_jsonl() {
    let fake = FakeCleos::bond_node();
    let capture = fake.dir().join("run.jsonl");

    bond_harness(&fake)
        .arg("--capture")
        .arg(&capture)
        .args(["table", "test", "FOO", "stat"])
        .assert()
        .success();

    let content = std::fs::read_to_string(&capture).unwrap();
    assert_eq!(content.lines().count(), 1);
    assert!(content.contains("get table test FOO stat"));
}
