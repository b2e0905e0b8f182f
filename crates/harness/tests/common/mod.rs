// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

//! Shared helpers for harness integration tests.
//!
//! Tests run against a fake `cleos`: a shell script in a temp directory that
//! logs its arguments and answers a fixed set of command lines the way a node
//! running the bond contract does.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use bond_harness::{shell_quote, Cleos, HarnessConfig, WaitPolicy};
use tempfile::TempDir;

/// Script prologue: argument log plus an assertion-failure helper.
const PROLOGUE: &str = r#"#!/bin/sh
dir="$(dirname "$0")"
printf '%s\n' "$*" >> "$dir/calls.log"
fail() {
    printf 'Error 3050003: eosio_assert_message assertion failure\nError Details:\nassertion failure with message: %s\n' "$1" >&2
    exit 1
}
"#;

/// Canned replies for the bond contract scenarios.
///
/// `create` of FOO flips a marker file so the stat table and the duplicate
/// symbol check observe it.
pub const BOND_NODE: &str = r##"
case "$*" in
'push action test create ["foo","0.12 FOO"] -p test'|'push action test create ["foo","1000.12 FOO"] -p test')
    fail "maximum supply must be a whole number" ;;
'push action test create ["foo","1000.00 FOO"] -p test'|'push action test create ["foo","1.00 FOO"] -p test')
    [ -f "$dir/foo.created" ] && fail "token with symbol already exists"
    : > "$dir/foo.created"
    exit 0 ;;
'push action test issue ["bar","1.10 FOO","foo_token","issued 1 FOO"] -p foo')
    fail "quantity must be a whole number" ;;
'push action test issue ["bar","1.00 FOOBAR","test","issued 1 FOOBAR"] -p foo')
    fail "token with symbol does not exist. create token before issue" ;;
'push action test transfer ["foo","foo","1 FOO","self"] -p foo')
    fail "cannot transfer to self" ;;
'get table test FOO stat')
    if [ -f "$dir/foo.created" ]; then
        printf '%s\n' '{"rows":[{"supply":"0 FOO","max_supply":"1000 FOO","issuer":"foo","project":"","token_price":"0 FOO","token_budget":"0 FOO","tokens_in_bond":"0 FOO","start":0,"fundraising_end":0}],"more":false}'
    else
        printf '%s\n' '{"rows":[],"more":false}'
    fi
    exit 0 ;;
'get table '*' '*' '*)
    printf 'Error 3060003: Contract Table Query Exception\n' >&2
    exit 1 ;;
*)
    printf 'ERROR: RequiredError: unrecognized arguments: %s\n' "$*" >&2
    exit 109 ;;
esac
"##;

/// A stat table that only shows the row from the third query on.
pub const LAGGING_NODE: &str = r#"
polls=$(cat "$dir/polls" 2>/dev/null || echo 0)
polls=$((polls + 1))
echo "$polls" > "$dir/polls"
if [ "$polls" -lt 3 ]; then
    printf '%s\n' '{"rows":[],"more":false}'
else
    printf '%s\n' '{"rows":[{"supply":"0 FOO","max_supply":"1000 FOO","issuer":"foo"}],"more":false}'
fi
"#;

/// Fake client living in its own temp directory.
pub struct FakeCleos {
    dir: TempDir,
    script: PathBuf,
}

impl FakeCleos {
    pub fn new(body: &str) -> Self {
        let dir = TempDir::new().unwrap();
        let script = dir.path().join("cleos");
        std::fs::write(&script, format!("{PROLOGUE}{body}")).unwrap();
        Self { dir, script }
    }

    pub fn bond_node() -> Self {
        Self::new(BOND_NODE)
    }

    pub fn dir(&self) -> &Path {
        self.dir.path()
    }

    /// Executable string to configure; runs the script through `sh` so it
    /// never needs the exec bit.
    pub fn executable(&self) -> String {
        format!("sh {}", shell_quote(&self.script.display().to_string()))
    }

    pub fn harness(&self) -> Cleos {
        Cleos::new(
            HarnessConfig::default()
                .with_executable(self.executable())
                .with_wait(WaitPolicy::immediate(5)),
        )
    }

    /// Argument lists the fake received, one per invocation.
    pub fn calls(&self) -> Vec<String> {
        std::fs::read_to_string(self.dir.path().join("calls.log"))
            .map(|log| log.lines().map(String::from).collect())
            .unwrap_or_default()
    }
}
