// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Structural validity of segments and flights.
//!
//! A segment is valid when it lands strictly after it takes off. A flight is
//! valid when at least one of its segments is valid; a flight without
//! segments is never valid.
//!
//! During one [`FilterEngine::filter`](crate::FilterEngine::filter) call the
//! check is applied through a [`ValidityGate`], which only enforces validity
//! when the filter excludes invalid flights, and only until the first
//! predicate stage has run. Later stages of the same call, including the
//! final removal pass, treat every segment as valid. This at-most-once
//! behavior is intentional and covered by tests; it is surprising when an
//! arrival condition is combined with `exclude_invalid()`, because the
//! removal pass then keeps every flight the arrival stage let through.

use crate::builder::FilterSpec;
use crate::flight::{Flight, Segment};

/// Returns true if the segment lands strictly after it departs.
pub fn is_valid_segment(segment: &Segment) -> bool {
    segment.arrival_epoch() > segment.departure_epoch()
}

/// Returns true if any segment of the flight is valid.
pub fn is_valid_flight(flight: &Flight) -> bool {
    flight.segments().iter().any(is_valid_segment)
}

/// Per-call validity state threaded through the stages of one filter run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidityGate {
    enforcing: bool,
}

impl ValidityGate {
    /// A gate that enforces validity iff invalid flights are not allowed.
    pub fn new(allow_invalid_flights: bool) -> Self {
        ValidityGate {
            enforcing: !allow_invalid_flights,
        }
    }

    pub fn for_spec(spec: &FilterSpec) -> Self {
        ValidityGate::new(spec.allows_invalid_flights())
    }

    /// True while validity still gates predicates.
    pub fn is_enforcing(&self) -> bool {
        self.enforcing
    }

    /// Record that a validity pass has run; the gate stops enforcing.
    pub fn consume(&mut self) {
        self.enforcing = false;
    }

    /// Whether the segment may take part in predicate matching.
    pub fn admits_segment(&self, segment: &Segment) -> bool {
        !self.enforcing || is_valid_segment(segment)
    }

    /// Whether the flight counts as valid (any admitted segment).
    pub fn admits_flight(&self, flight: &Flight) -> bool {
        flight.segments().iter().any(|s| self.admits_segment(s))
    }

    /// Whether the strict removal pass drops the flight: every segment
    /// (vacuously, for an empty flight) fails the gate.
    pub fn rejects_all_segments(&self, flight: &Flight) -> bool {
        flight.segments().iter().all(|s| !self.admits_segment(s))
    }
}

#[cfg(test)]
#[path = "validity_tests.rs"]
mod tests;
