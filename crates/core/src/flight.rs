// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Itinerary types: a [`Flight`] is an ordered list of [`Segment`] legs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Timestamp format used when displaying segments.
const DISPLAY_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// One flight leg, from takeoff to landing.
///
/// A segment is not required to be well-formed: data sources may deliver
/// legs that land before they take off. See [`crate::validity`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Segment {
    departure: DateTime<Utc>,
    arrival: DateTime<Utc>,
}

impl Segment {
    pub fn new(departure: DateTime<Utc>, arrival: DateTime<Utc>) -> Self {
        Segment { departure, arrival }
    }

    pub fn departure(&self) -> DateTime<Utc> {
        self.departure
    }

    pub fn arrival(&self) -> DateTime<Utc> {
        self.arrival
    }

    /// Departure as seconds since the Unix epoch.
    pub fn departure_epoch(&self) -> i64 {
        self.departure.timestamp()
    }

    /// Arrival as seconds since the Unix epoch.
    pub fn arrival_epoch(&self) -> i64 {
        self.arrival.timestamp()
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}|{}]",
            self.departure.format(DISPLAY_FORMAT),
            self.arrival.format(DISPLAY_FORMAT)
        )
    }
}

/// A full itinerary: consecutive segments in travel order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Flight {
    segments: Vec<Segment>,
}

impl Flight {
    pub fn new(segments: Vec<Segment>) -> Self {
        Flight { segments }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }
}

impl FromIterator<Segment> for Flight {
    fn from_iter<I: IntoIterator<Item = Segment>>(iter: I) -> Self {
        Flight::new(iter.into_iter().collect())
    }
}

impl fmt::Display for Flight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "flight_tests.rs"]
mod tests;
