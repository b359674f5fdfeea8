// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostic logging to stderr.

use is_terminal::IsTerminal;
use tracing_subscriber::EnvFilter;

use crate::env;

const DEFAULT_FILTER: &str = "warn";

/// Build the log filter from `LAYOVER_LOG`, falling back to `warn`.
///
/// An unparsable directive falls back to the default as well.
pub fn env_filter(directive: Option<&str>) -> EnvFilter {
    directive
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber. Safe to call more than once.
pub fn setup_logging() {
    let filter = env_filter(env::log_filter().as_deref());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
