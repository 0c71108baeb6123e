//! Tests for the resolve subcommand.

use super::parse;
use crate::cli::CliCommand;
use clap::Parser;

#[test]
fn cli_parse_resolve() {
    match parse(&["jcp", "resolve", "com.foo:bar:1.2.3"]) {
        CliCommand::Resolve {
            locators,
            repos,
            quiet,
        } => {
            assert_eq!(locators, vec!["com.foo:bar:1.2.3"]);
            assert!(repos.is_empty());
            assert!(!quiet);
        }
        _ => panic!("expected Resolve"),
    }
}

#[test]
fn cli_parse_resolve_multiple_locators_keep_order() {
    match parse(&["jcp", "resolve", "com.foo:bar:1.0", "com.foo:baz:2.0"]) {
        CliCommand::Resolve { locators, .. } => {
            assert_eq!(locators, vec!["com.foo:bar:1.0", "com.foo:baz:2.0"]);
        }
        _ => panic!("expected Resolve"),
    }
}

#[test]
fn cli_parse_resolve_repos_repeatable() {
    match parse(&[
        "jcp",
        "resolve",
        "com.foo:bar:1.0",
        "--repo",
        "mavenCentral",
        "--repo",
        "corp=https://repo.corp.example/m2",
    ]) {
        CliCommand::Resolve { repos, .. } => {
            assert_eq!(repos, vec!["mavenCentral", "corp=https://repo.corp.example/m2"]);
        }
        _ => panic!("expected Resolve with --repo"),
    }
}

#[test]
fn cli_parse_resolve_quiet() {
    match parse(&["jcp", "resolve", "com.foo:bar:1.0", "--quiet"]) {
        CliCommand::Resolve { quiet, .. } => assert!(quiet),
        _ => panic!("expected Resolve with --quiet"),
    }
}

#[test]
fn cli_parse_resolve_requires_a_locator() {
    assert!(crate::cli::Cli::try_parse_from(["jcp", "resolve"]).is_err());
}
