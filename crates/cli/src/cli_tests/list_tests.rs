// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::*;
use clap::Parser;
use yare::parameterized;

#[parameterized(
    default = { &["dl", "list"], false, OutputFormat::Text },
    all_long = { &["dl", "list", "--all"], true, OutputFormat::Text },
    all_short_json = { &["dl", "list", "-a", "-o", "json"], true, OutputFormat::Json },
    ls_alias = { &["dl", "ls", "--output", "json"], false, OutputFormat::Json },
)]
fn parse_list(args: &[&str], all: bool, output: OutputFormat) {
    let cli = Cli::try_parse_from(args).unwrap();
    match cli.command {
        Command::List { all: a, output: o } => {
            assert_eq!(a, all);
            assert_eq!(o, output);
        }
        other => panic!("unexpected command: {:?}", other),
    }
}

#[test]
fn parse_list_rejects_unknown_format() {
    assert!(Cli::try_parse_from(["dl", "list", "-o", "yaml"]).is_err());
}
