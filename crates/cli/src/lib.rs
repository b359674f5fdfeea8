// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! layover - command-line front end for itinerary filtering.
//!
//! This crate wires [`layover_core`] to a `clap` command line: it loads a
//! dataset, turns filter expressions into a
//! [`FilterSpec`](layover_core::FilterSpec), runs the engine and prints the
//! result.
//!
//! # Main Components
//!
//! - [`filter`] - Expression parser (`idle > 2h`, `departure < now`)
//! - [`config`] - TOML settings and named presets
//! - [`dataset`] - JSON datasets and the built-in sample
//! - [`Error`] - Error types for all operations

mod cli;
mod commands;
mod display;
mod logging;

pub mod config;
pub mod dataset;
pub mod env;
pub mod error;
pub mod filter;

pub use cli::{Cli, Command, DataArgs, OutputArgs, OutputFormat};
pub use commands::filter::FilterRequest;
pub use config::{Config, ConfigLocation, Preset};
pub use error::{Error, Result};
pub use logging::setup_logging;

/// Execute a parsed command.
pub fn run(command: Command) -> Result<()> {
    match command {
        Command::List { data, output } => commands::list::run(data, output),
        Command::Filter {
            exprs,
            preset,
            exclude_invalid,
            parallel,
            config,
            data,
            output,
        } => commands::filter::run(
            FilterRequest {
                exprs,
                preset,
                exclude_invalid,
                parallel,
            },
            config.as_deref(),
            data,
            output,
        ),
        Command::Demo { data } => commands::demo::run(data),
    }
}
