// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::*;

#[test]
fn test_error_not_initialized_display() {
    let err = Error::NotInitialized;
    assert!(err.to_string().contains("not initialized"));
    assert!(err.to_string().contains("dl init"));
}

#[test]
fn test_error_already_initialized_display() {
    let err = Error::AlreadyInitialized("/path/to/.driftlist".to_string());
    assert!(err.to_string().contains("already initialized"));
    assert!(err.to_string().contains("/path/to/.driftlist"));
}

#[test]
fn test_error_ambiguous_id_lists_matches() {
    let err = Error::AmbiguousId {
        prefix: "ab".to_string(),
        matches: vec!["abc1".to_string(), "abd2".to_string()],
    };
    let msg = err.to_string();
    assert!(msg.contains("'ab'"));
    assert!(msg.contains("abc1, abd2"));
}

#[test]
fn test_error_position_out_of_range_display() {
    let err = Error::PositionOutOfRange { to: 7, len: 3 };
    assert_eq!(err.to_string(), "position 7 is out of range (list has 3 active todos)");
}

#[test]
fn test_core_errors_pass_through() {
    let err: Error = dl_core::Error::TodoNotFound("t1".to_string()).into();
    assert_eq!(err.to_string(), dl_core::Error::TodoNotFound("t1".to_string()).to_string());
}

#[test]
fn test_io_error_converts() {
    let err: Error = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
    assert!(err.to_string().starts_with("io error"));
}
