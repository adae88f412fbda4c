//! Integration tests for the srtd command-line driver.

use clap::Parser;
use srt_foundation::{BudgetProvider, HeapProvider};
use srtd::{run, Cli, Command, Driver};

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("srtd").chain(args.iter().copied())).unwrap()
}

#[test]
fn parses_global_options_after_the_subcommand() {
    let cli = parse(&["substr", "hello", "-1", "3", "--budget", "64"]);
    assert_eq!(cli.budget, Some(64));
    assert_eq!(cli.command, Command::Substr { text: "hello".into(), start: -1, end: 3 });
}

#[test]
fn format_command_joins_arguments() {
    let cli = parse(&["format", "assert failed: ", "x", "y"]);
    assert_eq!(run(&cli).unwrap(), "assert failed: xy");
}

#[test]
fn replace_command_respects_count() {
    let cli = parse(&["replace", "aaa", "a", "b", "2"]);
    assert_eq!(run(&cli).unwrap(), "bba");
}

#[test]
fn substr_reports_declared_status() {
    let driver = Driver::new(HeapProvider);
    assert_eq!(driver.substr("hello world", 0, 5).unwrap(), "hello");

    let err = driver.substr("hello world", 5, 5).unwrap_err();
    assert_eq!(err.to_string(), "get_substr failed with status 1");
    assert_eq!(err.root_cause().to_string(), "IndexOutOfBoundsError: substring range 5..5 is empty");
}

#[test]
fn push_reports_shape() {
    let driver = Driver::new(HeapProvider);
    assert_eq!(driver.push(20).unwrap(), "len=20 capacity=32 last=19");
    assert_eq!(driver.push(0).unwrap(), "len=0 capacity=16 last=none");
    assert!(driver.push(-1).is_err());
}

#[test]
fn budget_refusals_surface_as_errors() {
    let driver = Driver::new(BudgetProvider::new(64));
    // 16 slots of 8 bytes do not fit
    let err = driver.push(1).unwrap_err();
    assert_eq!(err.to_string(), "allocating vector");

    // prefix, argument and argument array fit; the 4-byte result does not
    let cli = parse(&["--budget", "21", "format", "ab", "cd"]);
    let err = run(&cli).unwrap_err();
    assert!(err.to_string().contains("format failed with status 3"));
}

#[test]
fn scenarios_all_pass() {
    let report = Driver::new(HeapProvider).scenarios().unwrap();
    assert!(report.ends_with("5/5 scenarios passed"), "{report}");
    assert!(!report.contains("FAIL"));
}

#[test]
fn negative_push_count_reaches_the_driver() {
    let cli = parse(&["push", "-1"]);
    assert_eq!(cli.command, Command::Push { count: -1 });
    let err = run(&cli).unwrap_err();
    assert_eq!(err.to_string(), "count must not be negative, got -1");
}
