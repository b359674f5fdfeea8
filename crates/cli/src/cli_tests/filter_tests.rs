// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;

#[test]
fn test_filter_default() {
    let cli = parse(&["layover", "filter"]).unwrap();
    match cli.command {
        Command::Filter {
            exprs,
            preset,
            exclude_invalid,
            parallel,
            config,
            data,
            output,
        } => {
            assert!(exprs.is_empty());
            assert!(preset.is_none());
            assert!(!exclude_invalid);
            assert!(!parallel);
            assert!(config.is_none());
            assert!(data.data.is_none());
            assert_eq!(output.output, OutputFormat::Text);
        }
        _ => panic!("Expected Filter command"),
    }
}

#[test]
fn test_filter_multiple_expressions() {
    let cli = parse(&["layover", "filter", "departure < now", "idle > 2h"]).unwrap();
    match cli.command {
        Command::Filter { exprs, .. } => {
            assert_eq!(exprs, vec!["departure < now", "idle > 2h"]);
        }
        _ => panic!("Expected Filter command"),
    }
}

#[test]
fn test_filter_all_flags() {
    let cli = parse(&[
        "layover",
        "filter",
        "idle > 2h",
        "--preset",
        "long",
        "--exclude-invalid",
        "--parallel",
        "--config",
        "c.toml",
        "--data",
        "f.json",
        "-o",
        "json",
    ])
    .unwrap();
    match cli.command {
        Command::Filter {
            exprs,
            preset,
            exclude_invalid,
            parallel,
            config,
            data,
            output,
        } => {
            assert_eq!(exprs, vec!["idle > 2h"]);
            assert_eq!(preset.as_deref(), Some("long"));
            assert!(exclude_invalid);
            assert!(parallel);
            assert_eq!(config, Some(PathBuf::from("c.toml")));
            assert_eq!(data.data, Some(PathBuf::from("f.json")));
            assert_eq!(output.output, OutputFormat::Json);
        }
        _ => panic!("Expected Filter command"),
    }
}

#[test]
fn test_filter_short_flags() {
    let cli = parse(&["layover", "filter", "-p", "long", "-c", "c.toml"]).unwrap();
    match cli.command {
        Command::Filter { preset, config, .. } => {
            assert_eq!(preset.as_deref(), Some("long"));
            assert_eq!(config, Some(PathBuf::from("c.toml")));
        }
        _ => panic!("Expected Filter command"),
    }
}
