// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared helpers for the `layover` CLI specs.

#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

/// Four itineraries with fixed times:
///
/// 0. two future legs, 1h on the ground
/// 1. two future legs, 3h on the ground
/// 2. a single leg that departed in 2020
/// 3. a single future leg that lands before it takes off
pub const DATASET: &str = r#"[
  {"segments": [
    {"departure": "2099-01-01T08:00:00Z", "arrival": "2099-01-01T10:00:00Z"},
    {"departure": "2099-01-01T11:00:00Z", "arrival": "2099-01-01T13:00:00Z"}
  ]},
  {"segments": [
    {"departure": "2099-01-01T08:00:00Z", "arrival": "2099-01-01T10:00:00Z"},
    {"departure": "2099-01-01T13:00:00Z", "arrival": "2099-01-01T14:00:00Z"}
  ]},
  {"segments": [
    {"departure": "2020-01-01T08:00:00Z", "arrival": "2020-01-01T10:00:00Z"}
  ]},
  {"segments": [
    {"departure": "2099-01-01T10:00:00Z", "arrival": "2099-01-01T08:00:00Z"}
  ]}
]"#;

pub const LINES: [&str; 4] = [
    "[2099-01-01T08:00|2099-01-01T10:00] [2099-01-01T11:00|2099-01-01T13:00]",
    "[2099-01-01T08:00|2099-01-01T10:00] [2099-01-01T13:00|2099-01-01T14:00]",
    "[2020-01-01T08:00|2020-01-01T10:00]",
    "[2099-01-01T10:00|2099-01-01T08:00]",
];

/// A temporary directory holding the dataset and an isolated config home.
pub struct Fixture {
    pub temp: TempDir,
}

impl Fixture {
    pub fn new() -> Self {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("flights.json"), DATASET).unwrap();
        Fixture { temp }
    }

    pub fn data(&self) -> PathBuf {
        self.temp.path().join("flights.json")
    }

    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.temp.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, content).unwrap();
        path
    }

    pub fn config_home(&self) -> PathBuf {
        self.temp.path().join("config")
    }

    /// A `layover` command isolated from the user's environment.
    pub fn layover(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("layover");
        cmd.env_remove("LAYOVER_CONFIG")
            .env_remove("LAYOVER_LOG")
            .env("XDG_CONFIG_HOME", self.config_home())
            .env("HOME", self.temp.path());
        cmd
    }
}

/// Lines of stdout, trimmed of the trailing newline.
pub fn stdout_lines(output: &std::process::Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(String::from)
        .collect()
}
