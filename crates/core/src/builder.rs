// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Filter specifications and the builder that assembles them.
//!
//! The builder keeps one "active" category. Selecting a category never
//! fails; setting a threshold writes into whichever category is active and
//! fails if none has been selected yet:
//!
//! ```
//! use layover_core::FilterSpecBuilder;
//!
//! # fn main() -> layover_core::Result<()> {
//! let spec = FilterSpecBuilder::new()
//!     .arrival()
//!     .greater(1_700_000_000)?
//!     .less(1_700_086_400)?
//!     .idle()
//!     .greater_or_equal(7200)?
//!     .build()?;
//! assert_eq!(spec.arrival().len(), 2);
//! # Ok(())
//! # }
//! ```

use serde::Serialize;

use crate::condition::{Category, ConditionSet};
use crate::error::{Error, Result};
use crate::op::Operator;

/// An immutable, validated set of predicates plus the invalid-flight policy.
///
/// Obtain one from [`FilterSpecBuilder::build`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterSpec {
    arrival: ConditionSet,
    departure: ConditionSet,
    idle: ConditionSet,
    allow_invalid_flights: bool,
}

impl FilterSpec {
    pub fn arrival(&self) -> &ConditionSet {
        &self.arrival
    }

    pub fn departure(&self) -> &ConditionSet {
        &self.departure
    }

    pub fn idle(&self) -> &ConditionSet {
        &self.idle
    }

    /// Conditions for a given category.
    pub fn conditions(&self, category: Category) -> &ConditionSet {
        match category {
            Category::Arrival => &self.arrival,
            Category::Departure => &self.departure,
            Category::Idle => &self.idle,
        }
    }

    pub fn allows_invalid_flights(&self) -> bool {
        self.allow_invalid_flights
    }

    /// True when none of the three categories carries a condition.
    pub fn has_no_conditions(&self) -> bool {
        self.arrival.is_empty() && self.departure.is_empty() && self.idle.is_empty()
    }
}

/// Fluent assembler for [`FilterSpec`].
#[derive(Debug, Clone)]
pub struct FilterSpecBuilder {
    arrival: ConditionSet,
    departure: ConditionSet,
    idle: ConditionSet,
    active: Option<Category>,
    allow_invalid_flights: bool,
}

impl Default for FilterSpecBuilder {
    fn default() -> Self {
        FilterSpecBuilder {
            arrival: ConditionSet::new(),
            departure: ConditionSet::new(),
            idle: ConditionSet::new(),
            active: None,
            allow_invalid_flights: true,
        }
    }
}

impl FilterSpecBuilder {
    pub fn new() -> Self {
        FilterSpecBuilder::default()
    }

    /// The category subsequent thresholds are written to, if any.
    pub fn active(&self) -> Option<Category> {
        self.active
    }

    /// Make `category` the active target.
    pub fn select(mut self, category: Category) -> Self {
        self.active = Some(category);
        self
    }

    /// Select segment arrival times.
    pub fn arrival(self) -> Self {
        self.select(Category::Arrival)
    }

    /// Select segment departure times.
    pub fn departure(self) -> Self {
        self.select(Category::Departure)
    }

    /// Select ground time between consecutive segments (seconds).
    pub fn idle(self) -> Self {
        self.select(Category::Idle)
    }

    /// Write `value` under `op` into the active category.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoCategorySelected`] if no category has been selected.
    pub fn threshold(mut self, op: Operator, value: i64) -> Result<Self> {
        let target = match self.active {
            Some(Category::Arrival) => &mut self.arrival,
            Some(Category::Departure) => &mut self.departure,
            Some(Category::Idle) => &mut self.idle,
            None => return Err(Error::NoCategorySelected),
        };
        target.set(op, value);
        Ok(self)
    }

    pub fn equal(self, value: i64) -> Result<Self> {
        self.threshold(Operator::Equal, value)
    }

    pub fn greater(self, value: i64) -> Result<Self> {
        self.threshold(Operator::Greater, value)
    }

    pub fn greater_or_equal(self, value: i64) -> Result<Self> {
        self.threshold(Operator::GreaterOrEqual, value)
    }

    pub fn less(self, value: i64) -> Result<Self> {
        self.threshold(Operator::Less, value)
    }

    pub fn less_or_equal(self, value: i64) -> Result<Self> {
        self.threshold(Operator::LessOrEqual, value)
    }

    /// Drop flights that have no well-formed segment.
    pub fn exclude_invalid(mut self) -> Self {
        self.allow_invalid_flights = false;
        self
    }

    /// Finish the specification.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptySpecification`] when no condition was set and
    /// invalid flights are still allowed: such a filter would pass
    /// everything through.
    pub fn build(self) -> Result<FilterSpec> {
        let spec = FilterSpec {
            arrival: self.arrival,
            departure: self.departure,
            idle: self.idle,
            allow_invalid_flights: self.allow_invalid_flights,
        };
        if spec.allow_invalid_flights && spec.has_no_conditions() {
            return Err(Error::EmptySpecification);
        }
        Ok(spec)
    }
}

#[cfg(test)]
#[path = "builder_tests.rs"]
mod tests;
