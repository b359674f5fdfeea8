// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Flight data providers.

use crate::flight::Flight;

/// Read-only access to a snapshot of flights.
///
/// `all` takes no arguments, has no side effects, and returns the whole
/// dataset every time it is called.
pub trait FlightSource {
    fn all(&self) -> &[Flight];
}

/// A provider backed by an owned list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemorySource {
    flights: Vec<Flight>,
}

impl InMemorySource {
    pub fn new(flights: Vec<Flight>) -> Self {
        InMemorySource { flights }
    }

    pub fn len(&self) -> usize {
        self.flights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flights.is_empty()
    }
}

impl FlightSource for InMemorySource {
    fn all(&self) -> &[Flight] {
        &self.flights
    }
}

impl From<Vec<Flight>> for InMemorySource {
    fn from(flights: Vec<Flight>) -> Self {
        InMemorySource::new(flights)
    }
}

#[cfg(test)]
#[path = "source_tests.rs"]
mod tests;
