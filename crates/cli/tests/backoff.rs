// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

mod common;
use common::*;

#[test]
fn default_schedule_outside_replica() {
    let temp = TempDir::new().unwrap();
    let out = dl().arg("backoff").current_dir(temp.path()).output().unwrap();
    assert!(out.status.success());

    let delays: Vec<String> = String::from_utf8(out.stdout).unwrap().lines().map(String::from).collect();
    assert_eq!(
        delays,
        [
            "attempt 0: 1000ms",
            "attempt 1: 2000ms",
            "attempt 2: 4000ms",
            "attempt 3: 8000ms",
            "attempt 4: 16000ms",
            "attempt 5: 30000ms",
            "attempt 6: 30000ms",
        ]
    );
}

#[test]
fn replica_config_overrides_backoff() {
    let temp = init_temp();
    let config_path = temp.path().join(".driftlist/config.toml");
    let mut config = std::fs::read_to_string(&config_path).unwrap();
    config.push_str("\n[reconnect]\nbase_delay_ms = 100\nmax_delay_ms = 250\n");
    std::fs::write(&config_path, config).unwrap();

    dl().args(["backoff", "--attempts", "3"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout("attempt 0: 100ms\nattempt 1: 200ms\nattempt 2: 250ms\n");
}

#[test]
fn jittered_delays_stay_within_twenty_percent() {
    let temp = TempDir::new().unwrap();
    let out = dl().args(["backoff", "--jitter"]).current_dir(temp.path()).output().unwrap();
    let bases = [1000u64, 2000, 4000, 8000, 16000, 30000, 30000];

    for (line, base) in String::from_utf8(out.stdout).unwrap().lines().zip(bases) {
        let ms: u64 = line.rsplit(' ').next().unwrap().trim_end_matches("ms").parse().unwrap();
        assert!(ms * 10 >= base * 8 && ms * 10 <= base * 12, "{line} outside jitter band");
    }
}
