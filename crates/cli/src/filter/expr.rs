// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Filter expression types.

use chrono::{DateTime, Duration, Utc};
use layover_core::{Category, FilterSpec, FilterSpecBuilder, Operator};
use std::fmt;

use crate::error::Result;

/// A parsed filter expression such as `idle > 2h`.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterExpr {
    /// The category the condition applies to.
    pub field: Category,
    /// The comparison operator.
    pub op: Operator,
    /// The value to compare against.
    pub value: FilterValue,
}

/// Values that can be compared against in filter expressions.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    /// The moment the command runs.
    Now,
    /// An absolute point in time.
    Instant(DateTime<Utc>),
    /// A length of time on the ground.
    Duration(Duration),
}

impl FilterExpr {
    /// Resolve the value to the epoch-seconds threshold used by the engine.
    ///
    /// `now` is passed in so one command evaluates every expression against
    /// the same instant.
    pub fn threshold(&self, now: DateTime<Utc>) -> i64 {
        match &self.value {
            FilterValue::Now => now.timestamp(),
            FilterValue::Instant(t) => t.timestamp(),
            FilterValue::Duration(d) => d.num_seconds(),
        }
    }

    /// Add this condition to `builder` under its own category.
    pub fn apply(
        &self,
        builder: FilterSpecBuilder,
        now: DateTime<Utc>,
    ) -> Result<FilterSpecBuilder> {
        Ok(builder
            .select(self.field)
            .threshold(self.op, self.threshold(now))?)
    }
}

impl fmt::Display for FilterExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ", self.field, self.op)?;
        match &self.value {
            FilterValue::Now => write!(f, "now"),
            FilterValue::Instant(t) => write!(f, "{}", t.to_rfc3339()),
            FilterValue::Duration(d) => write!(f, "{}s", d.num_seconds()),
        }
    }
}

/// Build a specification from parsed expressions.
///
/// Expressions on the same field and operator overwrite each other, last
/// one wins.
pub fn build_spec(
    exprs: &[FilterExpr],
    exclude_invalid: bool,
    now: DateTime<Utc>,
) -> Result<FilterSpec> {
    let mut builder = FilterSpecBuilder::new();
    for expr in exprs {
        builder = expr.apply(builder, now)?;
    }
    if exclude_invalid {
        builder = builder.exclude_invalid();
    }
    Ok(builder.build()?)
}

#[cfg(test)]
#[path = "expr_tests.rs"]
mod tests;
