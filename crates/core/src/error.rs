// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for layover-core operations.
//!
//! Every variant is raised while configuring a filter. Evaluation itself
//! never fails.

use thiserror::Error;

/// All possible errors that can occur in layover-core operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("no filter category selected\n  hint: call arrival(), departure() or idle() before setting a threshold")]
    NoCategorySelected,

    #[error("filter has no conditions and allows invalid flights\n  hint: add a condition or call exclude_invalid()")]
    EmptySpecification,

    #[error("invalid operator: '{0}'\n  hint: valid operators are: =, >, >=, <, <=")]
    InvalidOperator(String),

    #[error("invalid category: '{0}'\n  hint: valid categories are: arrival, departure, idle")]
    InvalidCategory(String),
}

impl Error {
    /// Returns true for errors caused by an out-of-order builder call chain.
    pub fn is_configuration_state(&self) -> bool {
        matches!(self, Error::NoCategorySelected | Error::EmptySpecification)
    }
}

/// A specialized Result type for layover-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
