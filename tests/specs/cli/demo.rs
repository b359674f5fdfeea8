// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for the `layover demo` command.

#![allow(clippy::unwrap_used)]

mod common;

use common::*;
use predicates::prelude::*;

#[test]
fn demo_with_dataset_prints_four_reports() {
    let fx = Fixture::new();
    let output = fx.layover().arg("demo").arg("--data").arg(fx.data()).output().unwrap();
    assert!(output.status.success());

    let out = stdout_lines(&output);
    assert!(out[0].starts_with("Current time: "));

    let expected = vec![
        "── All flights ──",
        LINES[0],
        LINES[1],
        LINES[2],
        LINES[3],
        "── Departed before now ──",
        LINES[2],
        "── Without segments landing before takeoff ──",
        LINES[0],
        LINES[1],
        LINES[2],
        "── More than two hours on the ground ──",
        LINES[1],
    ];
    let body: Vec<&str> = out[1..]
        .iter()
        .map(String::as_str)
        .filter(|l| !l.is_empty())
        .collect();
    assert_eq!(body, expected);
}

#[test]
fn demo_with_sample() {
    let fx = Fixture::new();
    let output = fx.layover().arg("demo").output().unwrap();
    assert!(output.status.success());
    let flights = stdout_lines(&output)
        .iter()
        .filter(|l| l.starts_with('['))
        .count();
    // 6 listed, 1 departed, 5 valid, 1 long layover
    assert_eq!(flights, 13);
}

#[test]
fn demo_reports_bad_dataset() {
    let fx = Fixture::new();
    fx.layover()
        .args(["demo", "--data"])
        .arg(fx.temp.path().join("absent.json"))
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("error:"));
}
