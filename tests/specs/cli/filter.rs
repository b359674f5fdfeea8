// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for the `layover filter` command.

#![allow(clippy::unwrap_used)]

mod common;

use assert_cmd::Command;
use common::*;
use predicates::prelude::*;
use yare::parameterized;

fn filter(fx: &Fixture, args: &[&str]) -> Command {
    let mut cmd = fx.layover();
    cmd.arg("filter").arg("--data").arg(fx.data()).args(args);
    cmd
}

fn matched(fx: &Fixture, args: &[&str]) -> Vec<String> {
    let output = filter(fx, args).output().unwrap();
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    stdout_lines(&output)
}

fn lines(indices: &[usize]) -> Vec<String> {
    indices.iter().map(|&i| LINES[i].to_string()).collect()
}

// =============================================================================
// Expressions
// =============================================================================

#[parameterized(
    departed = { &["departure < now"], &[2] },
    departed_words = { &["dep lt now"], &[2] },
    future = { &["departure > now"], &[0, 1, 3] },
    long_idle = { &["idle > 2h"], &[1] },
    short_idle = { &["layover <= 1h"], &[0] },
    arrival_date = { &["arrival >= 2099-01-01T13:00"], &[0, 1] },
    arrival_exact = { &["arrival = 2099-01-01T13:00:00Z"], &[0] },
    arrival_epoch = { &["arrival < 1577880000"], &[2] },
    combined = { &["departure > now", "idle >= 1h"], &[0, 1] },
)]
fn filter_expressions(args: &[&str], expected: &[usize]) {
    let fx = Fixture::new();
    assert_eq!(matched(&fx, args), lines(expected));
}

#[test]
fn filter_exclude_invalid() {
    let fx = Fixture::new();
    assert_eq!(matched(&fx, &["--exclude-invalid"]), lines(&[0, 1, 2]));
}

#[test]
fn filter_exclude_invalid_with_expression() {
    let fx = Fixture::new();
    assert_eq!(
        matched(&fx, &["departure > now", "--exclude-invalid"]),
        lines(&[0, 1])
    );
}

#[test]
fn filter_parallel_matches_sequential() {
    let fx = Fixture::new();
    let args = ["departure > now", "idle >= 1h", "--exclude-invalid"];
    let sequential = matched(&fx, &args);
    let mut parallel_args = args.to_vec();
    parallel_args.push("--parallel");
    assert_eq!(matched(&fx, &parallel_args), sequential);
}

#[test]
fn filter_json_output() {
    let fx = Fixture::new();
    let output = filter(&fx, &["idle > 2h", "-o", "json"]).output().unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["count"], 1);
    assert_eq!(value["filters_applied"], serde_json::json!(["idle > 2h"]));
    assert_eq!(
        value["flights"][0]["segments"][1]["departure"],
        "2099-01-01T13:00:00Z"
    );
}

#[test]
fn filter_debug_logging_goes_to_stderr() {
    let fx = Fixture::new();
    filter(&fx, &["idle > 2h"])
        .env("LAYOVER_LOG", "debug")
        .assert()
        .success()
        .stdout(predicate::str::contains("2099-01-01T13:00"))
        .stderr(predicate::str::contains("filtering 4 flights"));
}

// =============================================================================
// Errors
// =============================================================================

#[parameterized(
    nothing = { &[], "nothing to filter" },
    unknown_field = { &["price > 3"], "unknown filter field: 'price'" },
    bad_operator = { &["idle != 2h"], "invalid filter operator '!='" },
    bad_duration = { &["idle > soon"], "invalid duration" },
    bad_timestamp = { &["arrival > tomorrow"], "invalid filter value for arrival" },
    empty = { &[" "], "empty filter expression" },
)]
fn filter_rejects(args: &[&str], message: &str) {
    let fx = Fixture::new();
    filter(&fx, args)
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::starts_with("error:"))
        .stderr(predicate::str::contains(message));
}

// =============================================================================
// Configuration
// =============================================================================

const PRESETS: &str = r#"
[presets.long]
filters = ["idle > 2h"]

[presets.clean]
filters = ["departure > now"]
exclude_invalid = true
"#;

#[test]
fn filter_preset_from_config_flag() {
    let fx = Fixture::new();
    let config = fx.write("presets.toml", PRESETS);
    let output = filter(&fx, &["--preset", "long", "--config"])
        .arg(config)
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), lines(&[1]));
}

#[test]
fn filter_preset_exclude_invalid_and_extra_expression() {
    let fx = Fixture::new();
    let config = fx.write("presets.toml", PRESETS);
    let output = filter(&fx, &["idle < 2h", "-p", "clean", "-c"])
        .arg(config)
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), lines(&[0]));
}

#[test]
fn filter_preset_from_env_config() {
    let fx = Fixture::new();
    let config = fx.write("presets.toml", PRESETS);
    let output = filter(&fx, &["--preset", "long"])
        .env("LAYOVER_CONFIG", config)
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), lines(&[1]));
}

#[test]
fn filter_preset_from_default_config() {
    let fx = Fixture::new();
    fx.write("config/layover/config.toml", PRESETS);
    let output = filter(&fx, &["--preset", "clean"]).output().unwrap();
    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), lines(&[0, 1]));
}

#[test]
fn filter_unknown_preset() {
    let fx = Fixture::new();
    let config = fx.write("presets.toml", PRESETS);
    filter(&fx, &["--preset", "late", "--config"])
        .arg(config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown preset 'late'"))
        .stderr(predicate::str::contains("clean, long"));
}

#[test]
fn filter_missing_explicit_config() {
    let fx = Fixture::new();
    filter(&fx, &["idle > 2h", "--config"])
        .arg(fx.temp.path().join("absent.toml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("config file not found"));
}

#[test]
fn filter_invalid_config() {
    let fx = Fixture::new();
    let config = fx.write("broken.toml", "parallel = maybe");
    filter(&fx, &["idle > 2h", "--config"])
        .arg(config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("config error"));
}

#[test]
fn filter_parallel_from_config() {
    let fx = Fixture::new();
    let config = fx.write("parallel.toml", "parallel = true\n");
    let output = filter(&fx, &["departure > now", "--config"])
        .arg(config)
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), lines(&[0, 1, 3]));
}
