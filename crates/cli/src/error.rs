// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use thiserror::Error;

/// All possible errors that can occur in the layover CLI.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] layover_core::Error),

    #[error("empty filter expression")]
    FilterEmpty,

    #[error("unknown filter field: '{field}'\n  hint: valid fields are: {valid}")]
    FilterUnknownField { field: String, valid: &'static str },

    #[error("invalid filter operator '{op}'\n  hint: valid operators are: {valid}")]
    FilterInvalidOperator { op: String, valid: &'static str },

    #[error("invalid filter value for {field}: {reason}")]
    FilterInvalidValue { field: String, reason: String },

    #[error("invalid duration: {reason}")]
    InvalidDuration { reason: String },

    #[error("unknown preset '{name}'\n  hint: presets defined in config: {available}")]
    UnknownPreset { name: String, available: String },

    #[error("nothing to filter\n  hint: pass a filter expression, --preset or --exclude-invalid")]
    NoFilters,

    #[error("config file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    #[error("config error: {0}")]
    Config(String),

    #[error("invalid dataset {}: {source}", path.display())]
    Dataset {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for layover CLI operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::Config(e.to_string())
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
