// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for the `layover list` command.

#![allow(clippy::unwrap_used)]

mod common;

use common::*;
use predicates::prelude::*;

#[test]
fn list_prints_every_flight_in_order() {
    let fx = Fixture::new();
    let output = fx.layover().arg("list").arg("--data").arg(fx.data()).output().unwrap();
    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), LINES);
}

#[test]
fn list_json_has_count() {
    let fx = Fixture::new();
    let output = fx
        .layover()
        .args(["list", "-o", "json", "-d"])
        .arg(fx.data())
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["count"], 4);
    assert_eq!(
        value["flights"][2]["segments"][0]["departure"],
        "2020-01-01T08:00:00Z"
    );
}

#[test]
fn list_sample_has_six_flights() {
    let fx = Fixture::new();
    let output = fx.layover().arg("list").output().unwrap();
    assert!(output.status.success());
    assert_eq!(stdout_lines(&output).len(), 6);
}

#[test]
fn list_quiet_on_stderr_by_default() {
    let fx = Fixture::new();
    fx.layover()
        .arg("list")
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn list_missing_dataset_fails() {
    let fx = Fixture::new();
    fx.layover()
        .args(["list", "--data"])
        .arg(fx.temp.path().join("absent.json"))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::starts_with("error:"));
}

#[test]
fn list_malformed_dataset_fails() {
    let fx = Fixture::new();
    let path = fx.write("bad.json", r#"{"segments": []}"#);
    fx.layover()
        .args(["list", "--data"])
        .arg(path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid dataset"))
        .stderr(predicate::str::contains("bad.json"));
}

#[test]
fn list_empty_dataset_prints_nothing() {
    let fx = Fixture::new();
    let path = fx.write("empty.json", "[]");
    fx.layover()
        .args(["list", "--data"])
        .arg(path)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}
