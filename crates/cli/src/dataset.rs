// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Flight datasets for the command line.
//!
//! Without `--data` the built-in sample itineraries are used, anchored at
//! the current time. With `--data` a JSON file is read:
//!
//! ```json
//! [
//!   {"segments": [{"departure": "2024-06-01T08:00:00Z", "arrival": "2024-06-01T10:00:00Z"}]}
//! ]
//! ```

use chrono::{DateTime, Utc};
use layover_core::{sample, Flight, InMemorySource};
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Read a JSON dataset from `path`.
pub fn load_file(path: &Path) -> Result<InMemorySource> {
    let content = fs::read_to_string(path)?;
    let flights: Vec<Flight> = serde_json::from_str(&content).map_err(|source| Error::Dataset {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), flights = flights.len(), "loaded dataset");
    Ok(InMemorySource::new(flights))
}

/// Open the dataset named on the command line, or the sample set anchored
/// at `now`.
pub fn open(data: Option<&Path>, now: DateTime<Utc>) -> Result<InMemorySource> {
    match data {
        Some(path) => load_file(path),
        None => Ok(InMemorySource::new(sample::sample_flights(now))),
    }
}

#[cfg(test)]
#[path = "dataset_tests.rs"]
mod tests;
