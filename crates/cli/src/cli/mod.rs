// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod args;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

pub use args::{DataArgs, OutputArgs};

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "layover")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Filter multi-segment flight itineraries by time conditions")]
#[command(
    long_about = "Filter multi-segment flight itineraries by arrival, departure and \
    time-on-the-ground conditions.\n\n\
    Without --data the built-in sample itineraries, anchored at the current time, are used."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print every flight in the dataset
    List {
        #[command(flatten)]
        data: DataArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Print the flights matching filter expressions
    #[command(after_help = "\
Expressions:
  field op value
  fields:     arrival (arr, lands), departure (dep, departs), idle (ground, layover)
  operators:  =  >  >=  <  <=   (or: eq gt gte lt lte)
  timestamps: now, epoch seconds, 2024-06-01, 2024-06-01T14:30, RFC3339
  durations:  seconds, or 30m, 2h, 1d, 1w

Examples:
  layover filter \"departure < now\"            Flights with a leg already departed
  layover filter \"idle > 2h\"                  More than two hours on the ground
  layover filter --exclude-invalid            Drop legs that land before takeoff
  layover filter \"dep > now\" \"idle <= 90m\"    Future legs with short layovers
  layover filter --preset long -o json        Use a preset from config.toml")]
    Filter {
        /// Filter expressions (e.g. "idle > 2h")
        #[arg(value_name = "expr")]
        exprs: Vec<String>,

        /// Apply a named preset from the config file
        #[arg(long, short = 'p', value_name = "name")]
        preset: Option<String>,

        /// Remove itineraries whose segments all land before they take off
        #[arg(long)]
        exclude_invalid: bool,

        /// Evaluate flights on a thread pool
        #[arg(long)]
        parallel: bool,

        /// Read settings from this file instead of the default location
        #[arg(long, short = 'c', value_name = "file")]
        config: Option<PathBuf>,

        #[command(flatten)]
        data: DataArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Print the four reference reports
    Demo {
        #[command(flatten)]
        data: DataArgs,
    },
}

#[cfg(test)]
#[path = "../cli_tests/mod.rs"]
mod tests;
