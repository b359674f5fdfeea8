// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// This module contains split test files for CLI parsing tests.
// Each file focuses on a specific command.

use super::*;

mod filter_tests;

// Helper to parse CLI args
fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
    Cli::try_parse_from(args)
}
