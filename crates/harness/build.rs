// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Build scripts are expected to panic on failure.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::io::Write;

fn main() {
    let out_dir = std::env::var("OUT_DIR").unwrap();
    let path = std::path::Path::new(&out_dir).join("env_names.rs");
    let mut f = std::fs::File::create(path).unwrap();

    let vars = [
        "CLEOS_BIN",
        "CONTRACT_NAME",
        "CONTRACT_USER",
        "BOND_HARNESS_CONFIG",
        "BOND_HARNESS_CAPTURE",
        "BOND_HARNESS_WAIT_ATTEMPTS",
        "BOND_HARNESS_WAIT_BACKOFF_MS",
        "BOND_HARNESS_WAIT_MAX_BACKOFF_MS",
    ];

    for name in vars {
        writeln!(f, "pub const {name}: &str = \"{name}\";").unwrap();
    }

    println!("cargo:rerun-if-changed=build.rs");
}
