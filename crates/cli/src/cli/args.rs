// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared argument structs for CLI commands.
//!
//! These structs are used with `#[command(flatten)]` to reduce duplication
//! across commands that read a dataset or print flights.

use clap::Args;
use std::path::PathBuf;

use super::OutputFormat;

/// Dataset selection.
#[derive(Args, Clone, Debug, Default)]
pub struct DataArgs {
    /// Read flights from a JSON file instead of the built-in sample
    #[arg(long, short = 'd', value_name = "file")]
    pub data: Option<PathBuf>,
}

/// Output format selection.
#[derive(Args, Clone, Debug, Default)]
pub struct OutputArgs {
    /// Output format
    #[arg(long, short = 'o', value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,
}
