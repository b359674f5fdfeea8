// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Predicate categories and their accumulated thresholds.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::op::Operator;

/// The timestamp or duration a condition set is compared against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Landing time of each segment.
    Arrival,
    /// Takeoff time of each segment.
    Departure,
    /// Time on the ground between consecutive segments.
    Idle,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Arrival => "arrival",
            Category::Departure => "departure",
            Category::Idle => "idle",
        }
    }

    /// Returns valid category names for error messages.
    pub fn valid_names() -> &'static str {
        "arrival, departure, idle"
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "arrival" => Ok(Category::Arrival),
            "departure" => Ok(Category::Departure),
            "idle" => Ok(Category::Idle),
            _ => Err(Error::InvalidCategory(s.to_string())),
        }
    }
}

/// Thresholds for one category, keyed by operator.
///
/// Each operator holds at most one threshold; setting it again replaces the
/// previous value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionSet {
    conditions: BTreeMap<Operator, i64>,
}

impl ConditionSet {
    pub fn new() -> Self {
        ConditionSet::default()
    }

    /// Set the threshold for `op`, returning the value it replaced.
    pub fn set(&mut self, op: Operator, threshold: i64) -> Option<i64> {
        self.conditions.insert(op, threshold)
    }

    pub fn get(&self, op: Operator) -> Option<i64> {
        self.conditions.get(&op).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    /// Iterate `(operator, threshold)` entries.
    pub fn iter(&self) -> impl Iterator<Item = (Operator, i64)> + '_ {
        self.conditions.iter().map(|(op, threshold)| (*op, *threshold))
    }
}

impl FromIterator<(Operator, i64)> for ConditionSet {
    fn from_iter<I: IntoIterator<Item = (Operator, i64)>>(iter: I) -> Self {
        ConditionSet {
            conditions: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
#[path = "condition_tests.rs"]
mod tests;
