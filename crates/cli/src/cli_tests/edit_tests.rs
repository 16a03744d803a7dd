// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::*;
use clap::Parser;
use yare::parameterized;

#[test]
fn parse_add_title() {
    let cli = Cli::try_parse_from(["dl", "add", "Buy milk"]).unwrap();
    match cli.command {
        Command::Add { title } => assert_eq!(title, "Buy milk"),
        other => panic!("unexpected command: {:?}", other),
    }
}

#[test]
fn parse_add_rejects_empty_title() {
    assert!(Cli::try_parse_from(["dl", "add", ""]).is_err());
}

#[parameterized(
    title_only = { &["dl", "edit", "1a2b", "--title", "New"], Some("New"), None },
    completed_only = { &["dl", "edit", "1a2b", "--completed", "true"], None, Some(true) },
    both = { &["dl", "edit", "1a2b", "--title", "New", "--completed", "false"], Some("New"), Some(false) },
    neither = { &["dl", "edit", "1a2b"], None, None },
)]
fn parse_edit(args: &[&str], title: Option<&str>, completed: Option<bool>) {
    let cli = Cli::try_parse_from(args).unwrap();
    match cli.command {
        Command::Edit { id, title: t, completed: c } => {
            assert_eq!(id, "1a2b");
            assert_eq!(t.as_deref(), title);
            assert_eq!(c, completed);
        }
        other => panic!("unexpected command: {:?}", other),
    }
}

#[test]
fn parse_edit_rejects_non_bool_completed() {
    assert!(Cli::try_parse_from(["dl", "edit", "1a2b", "--completed", "yes"]).is_err());
}

#[parameterized(
    rm = { "rm" },
    delete_alias = { "delete" },
)]
fn parse_rm(name: &str) {
    let cli = Cli::try_parse_from(["dl", name, "1a2b"]).unwrap();
    assert!(matches!(cli.command, Command::Rm { id } if id == "1a2b"));
}

#[test]
fn parse_mv() {
    let cli = Cli::try_parse_from(["dl", "mv", "1a2b", "3"]).unwrap();
    assert!(matches!(cli.command, Command::Mv { ref id, to: 3 } if id == "1a2b"));
}

#[test]
fn parse_mv_rejects_negative_position() {
    assert!(Cli::try_parse_from(["dl", "mv", "1a2b", "-1"]).is_err());
}
