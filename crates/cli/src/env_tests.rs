// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;

#[test]
fn test_vars_constants() {
    assert_eq!(vars::DL_LOG, "DL_LOG");
    assert_eq!(vars::DL_CLIENT_ID, "DL_CLIENT_ID");
}

#[test]
fn test_log_filter_set_and_blank() {
    std::env::set_var("DL_LOG", "debug");
    assert_eq!(log_filter().as_deref(), Some("debug"));
    std::env::set_var("DL_LOG", "  ");
    assert_eq!(log_filter(), None);
    std::env::remove_var("DL_LOG");
    assert_eq!(log_filter(), None);
}

#[test]
fn test_client_id_set_and_unset() {
    std::env::set_var("DL_CLIENT_ID", "desk");
    assert_eq!(client_id().as_deref(), Some("desk"));
    std::env::remove_var("DL_CLIENT_ID");
    assert_eq!(client_id(), None);
}
