// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

mod common;
use common::*;

#[test]
fn creates_work_dir() {
    let temp = TempDir::new().unwrap();

    dl().arg("init")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized driftlist replica"));

    assert!(temp.path().join(".driftlist/config.toml").exists());
    assert!(temp.path().join(".driftlist/todos.jsonl").exists());
    assert!(temp.path().join(".driftlist/sync.json").exists());
}

#[test]
fn uses_given_client_id() {
    let temp = init_client("laptop");
    let config = std::fs::read_to_string(temp.path().join(".driftlist/config.toml")).unwrap();
    assert!(config.contains("client_id = \"laptop\""));
}

#[test]
fn client_id_falls_back_to_env() {
    let temp = TempDir::new().unwrap();
    dl().arg("init")
        .env("DL_CLIENT_ID", "desk")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Client: desk"));
}

#[test]
fn fails_if_already_initialized() {
    let temp = init_temp();

    dl().arg("init")
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("already initialized"));
}

#[test]
fn commands_fail_outside_replica() {
    let temp = TempDir::new().unwrap();

    dl().arg("list")
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("not initialized"));
}

#[test]
fn directory_flag_finds_replica() {
    let temp = init_temp();
    let nested = temp.path().join("a/b");
    std::fs::create_dir_all(&nested).unwrap();
    create_todo(&temp, "From root");

    dl().arg("-C")
        .arg(&nested)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("From root"));
}
