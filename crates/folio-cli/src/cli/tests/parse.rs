//! Parse tests for every subcommand.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;

#[test]
fn cli_parse_categories() {
    match parse(&["folio", "categories"]) {
        CliCommand::Categories => {}
        _ => panic!("expected Categories"),
    }
}

#[test]
fn cli_parse_list_defaults() {
    match parse(&["folio", "list"]) {
        CliCommand::List { search, category } => {
            assert!(search.is_empty());
            assert_eq!(category, "all");
        }
        _ => panic!("expected List"),
    }
}

#[test]
fn cli_parse_list_search_and_category() {
    match parse(&["folio", "list", "--search", "react", "-c", "Web"]) {
        CliCommand::List { search, category } => {
            assert_eq!(search, "react");
            assert_eq!(category, "Web");
        }
        _ => panic!("expected List"),
    }
}

#[test]
fn cli_parse_featured() {
    match parse(&["folio", "featured"]) {
        CliCommand::Featured { limit } => assert!(limit.is_none()),
        _ => panic!("expected Featured"),
    }
    match parse(&["folio", "featured", "--limit", "5"]) {
        CliCommand::Featured { limit } => assert_eq!(limit, Some(5)),
        _ => panic!("expected Featured with limit"),
    }
}

#[test]
fn cli_parse_show() {
    match parse(&["folio", "show", "task-manager", "--related", "0"]) {
        CliCommand::Show { slug, related } => {
            assert_eq!(slug, "task-manager");
            assert_eq!(related, Some(0));
        }
        _ => panic!("expected Show"),
    }
}

#[test]
fn cli_parse_meta() {
    match parse(&["folio", "meta", "weather-dashboard"]) {
        CliCommand::Meta { slug } => assert_eq!(slug, "weather-dashboard"),
        _ => panic!("expected Meta"),
    }
}

#[test]
fn cli_parse_completions() {
    match parse(&["folio", "completions", "bash"]) {
        CliCommand::Completions { shell } => assert_eq!(shell, clap_complete::Shell::Bash),
        _ => panic!("expected Completions"),
    }
}

#[test]
fn cli_parse_global_catalog() {
    let cli = Cli::try_parse_from(["folio", "list", "--catalog", "/tmp/p.json"]).unwrap();
    assert_eq!(
        cli.catalog.as_deref(),
        Some(std::path::Path::new("/tmp/p.json"))
    );
    assert!(matches!(cli.command, CliCommand::List { .. }));
}

#[test]
fn cli_rejects_negative_limit() {
    assert!(Cli::try_parse_from(["folio", "featured", "--limit", "-1"]).is_err());
}

#[test]
fn cli_show_requires_slug() {
    assert!(Cli::try_parse_from(["folio", "show"]).is_err());
}
