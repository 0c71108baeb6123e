//! Tests for the remaining subcommands.

use super::parse;
use crate::cli::CliCommand;
use clap::Parser;
use clap_complete::Shell;

#[test]
fn cli_parse_clear_cache() {
    assert!(matches!(
        parse(&["jcp", "clear-cache"]),
        CliCommand::ClearCache
    ));
}

#[test]
fn cli_parse_completions() {
    match parse(&["jcp", "completions", "bash"]) {
        CliCommand::Completions { shell } => assert_eq!(shell, Shell::Bash),
        _ => panic!("expected Completions"),
    }
}

#[test]
fn cli_parse_rejects_unknown_subcommand() {
    assert!(crate::cli::Cli::try_parse_from(["jcp", "frobnicate"]).is_err());
}
