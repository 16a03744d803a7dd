// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

pub fn dl() -> Command {
    let mut cmd = cargo_bin_cmd!("dl");
    cmd.env_remove("DL_LOG").env_remove("DL_CLIENT_ID");
    cmd
}

/// Helper to create an initialized temp directory with the given client ID
pub fn init_client(client_id: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    dl().arg("init")
        .arg("--client-id")
        .arg(client_id)
        .current_dir(temp.path())
        .assert()
        .success();
    temp
}

/// Helper to create an initialized temp directory
pub fn init_temp() -> TempDir {
    init_client("tester")
}

/// Helper to create a todo and return its short ID
pub fn create_todo(temp: &TempDir, title: &str) -> String {
    let output = dl().arg("add").arg(title).current_dir(temp.path()).output().unwrap();
    assert!(output.status.success(), "add failed: {}", String::from_utf8_lossy(&output.stderr));

    String::from_utf8_lossy(&output.stdout)
        .split_whitespace()
        .nth(1)
        .unwrap()
        .trim_end_matches(':')
        .to_string()
}

/// Runs a command in `temp` and returns its stdout.
pub fn stdout_of(temp: &TempDir, args: &[&str]) -> String {
    let output = dl().args(args).current_dir(temp.path()).output().unwrap();
    assert!(output.status.success(), "{:?} failed: {}", args, String::from_utf8_lossy(&output.stderr));
    String::from_utf8(output.stdout).unwrap()
}

/// Parses `dl list -o json` (with `--all` if requested).
pub fn list_json(temp: &TempDir, all: bool) -> Vec<serde_json::Value> {
    let mut args = vec!["list", "-o", "json"];
    if all {
        args.push("--all");
    }
    serde_json::from_str(&stdout_of(temp, &args)).unwrap()
}

/// Active titles in display order.
pub fn titles(temp: &TempDir) -> Vec<String> {
    list_json(temp, false).iter().map(|t| t["title"].as_str().unwrap().to_string()).collect()
}
