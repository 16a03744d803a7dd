// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::*;
use tempfile::TempDir;
use yare::parameterized;

#[test]
fn test_init_and_load_config() {
    let temp = TempDir::new().unwrap();
    let work_dir = init_work_dir(temp.path(), "laptop").unwrap();

    assert_eq!(work_dir, temp.path().join(".driftlist"));
    let config = Config::load(&work_dir).unwrap();
    assert_eq!(config.client_id, "laptop");
    assert!(config.reconnect.is_none());
    assert_eq!(config.reconnect_config(), ReconnectConfig::default());
}

#[test]
fn test_already_initialized() {
    let temp = TempDir::new().unwrap();
    init_work_dir(temp.path(), "laptop").unwrap();

    let err = init_work_dir(temp.path(), "laptop").unwrap_err();
    assert!(err.to_string().contains("already initialized"));
}

#[test]
fn test_invalid_client_id_leaves_no_directory() {
    let temp = TempDir::new().unwrap();
    assert!(matches!(init_work_dir(temp.path(), "has space"), Err(Error::InvalidClientId(_))));
    assert!(!temp.path().join(".driftlist").exists());
}

#[parameterized(
    uuid = { "0d1c2b3a-4f5e-4a6b-8c7d-9e0f1a2b3c4d", true },
    word = { "phone", true },
    empty = { "", false },
    space = { "a b", false },
    tab = { "a\tb", false },
)]
fn test_validate_client_id(id: &str, valid: bool) {
    assert_eq!(validate_client_id(id), valid);
}

#[test]
fn test_reconnect_table_is_optional_per_field() {
    let temp = TempDir::new().unwrap();
    let work_dir = init_work_dir(temp.path(), "laptop").unwrap();
    fs::write(
        work_dir.join("config.toml"),
        "client_id = \"laptop\"\n\n[reconnect]\nmax_delay_ms = 5000\n",
    )
    .unwrap();

    let config = Config::load(&work_dir).unwrap();
    let reconnect = config.reconnect_config();
    assert_eq!(reconnect.base_delay_ms, 1000);
    assert_eq!(reconnect.max_delay_ms, 5000);
}

#[test]
fn test_save_round_trips_reconnect() {
    let temp = TempDir::new().unwrap();
    let work_dir = init_work_dir(temp.path(), "laptop").unwrap();

    let mut config = Config::load(&work_dir).unwrap();
    config.reconnect = Some(ReconnectConfig { base_delay_ms: 250, ..Default::default() });
    config.save(&work_dir).unwrap();

    assert_eq!(Config::load(&work_dir).unwrap(), config);
}

#[test]
fn test_malformed_config_is_config_error() {
    let temp = TempDir::new().unwrap();
    let work_dir = init_work_dir(temp.path(), "laptop").unwrap();
    fs::write(work_dir.join("config.toml"), "client_id = [").unwrap();

    assert!(matches!(Config::load(&work_dir), Err(Error::Config(_))));
}

#[test]
fn test_find_work_dir_walks_up() {
    let temp = TempDir::new().unwrap();
    let work_dir = init_work_dir(temp.path(), "laptop").unwrap();
    let nested = temp.path().join("a").join("b");
    fs::create_dir_all(&nested).unwrap();

    assert_eq!(find_work_dir_from(&nested).unwrap(), work_dir);
}

#[test]
fn test_find_work_dir_not_initialized() {
    let temp = TempDir::new().unwrap();
    // A temp dir's ancestors should not contain a .driftlist directory.
    assert!(matches!(find_work_dir_from(temp.path()), Err(Error::NotInitialized)));
}
