// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Reference dataset of six two-segment itineraries.
//!
//! All times are relative to an anchor (usually "now"). With
//! `T = anchor + 3 days`:
//!
//! | # | segments                              | ground time |
//! |---|---------------------------------------|-------------|
//! | 0 | `T-2h -> T`, `T+1h -> T+3h`           | 1h          |
//! | 1 | `T-2h -> T`, `T+1h30 -> T+4h`         | 1h30        |
//! | 2 | departs in the past (anchor - 3 days) | 1h          |
//! | 3 | both legs land before they take off   | 1h          |
//! | 4 | `T-2h -> T`, `T+2h -> T+3h`           | 2h          |
//! | 5 | `T-2h -> T`, `T+3h -> T+4h`           | 3h          |

use chrono::{DateTime, Duration, Utc};

use crate::flight::{Flight, Segment};

/// Offset between the anchor and the shared first-leg arrival `T`.
pub const ARRIVAL_OFFSET_DAYS: i64 = 3;

/// The shared first-leg arrival time of flights 0, 1, 4 and 5.
pub fn reference_arrival(anchor: DateTime<Utc>) -> DateTime<Utc> {
    anchor + Duration::days(ARRIVAL_OFFSET_DAYS)
}

/// Build the reference dataset around `anchor`.
pub fn sample_flights(anchor: DateTime<Utc>) -> Vec<Flight> {
    let t = reference_arrival(anchor);
    let past = anchor - Duration::days(ARRIVAL_OFFSET_DAYS);
    let h = Duration::hours;
    let m = Duration::minutes;

    vec![
        flight(&[(t - h(2), t), (t + h(1), t + h(3))]),
        flight(&[(t - h(2), t), (t + m(90), t + h(4))]),
        flight(&[(past, past + h(2)), (past + h(3), past + h(5))]),
        flight(&[(t - h(2), t - h(6)), (t - h(5), t - h(7))]),
        flight(&[(t - h(2), t), (t + h(2), t + h(3))]),
        flight(&[(t - h(2), t), (t + h(3), t + h(4))]),
    ]
}

fn flight(legs: &[(DateTime<Utc>, DateTime<Utc>)]) -> Flight {
    legs.iter()
        .map(|(departure, arrival)| Segment::new(*departure, *arrival))
        .collect()
}

#[cfg(test)]
#[path = "sample_tests.rs"]
mod tests;
