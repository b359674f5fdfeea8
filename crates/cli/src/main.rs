// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use clap::Parser;
use layover::Cli;

fn main() {
    let cli = Cli::parse();
    layover::setup_logging();
    if let Err(e) = layover::run(cli.command) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
