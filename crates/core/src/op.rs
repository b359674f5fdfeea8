// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Comparison operators shared by every predicate category.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Relational operator applied as `actual <op> threshold`.
///
/// Every predicate category (arrival, departure, idle) uses the same closed
/// set of operators. Variants carry no ordering relation of their own; the
/// derived `Ord` only fixes the iteration order of a
/// [`ConditionSet`](crate::ConditionSet).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    /// Equal (`=`).
    Equal,
    /// Greater than (`>`).
    Greater,
    /// Greater than or equal (`>=`).
    GreaterOrEqual,
    /// Less than (`<`).
    Less,
    /// Less than or equal (`<=`).
    LessOrEqual,
}

impl Operator {
    /// All operators, in condition-set iteration order.
    pub const ALL: [Operator; 5] = [
        Operator::Equal,
        Operator::Greater,
        Operator::GreaterOrEqual,
        Operator::Less,
        Operator::LessOrEqual,
    ];

    /// Evaluate `actual <op> threshold`.
    pub fn compare(self, actual: i64, threshold: i64) -> bool {
        match self {
            Operator::Equal => actual == threshold,
            Operator::Greater => actual > threshold,
            Operator::GreaterOrEqual => actual >= threshold,
            Operator::Less => actual < threshold,
            Operator::LessOrEqual => actual <= threshold,
        }
    }

    /// Returns the symbol used in filter expressions and display.
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Equal => "=",
            Operator::Greater => ">",
            Operator::GreaterOrEqual => ">=",
            Operator::Less => "<",
            Operator::LessOrEqual => "<=",
        }
    }

    /// Returns the word form (`eq`, `gt`, ...).
    pub fn as_str(self) -> &'static str {
        match self {
            Operator::Equal => "eq",
            Operator::Greater => "gt",
            Operator::GreaterOrEqual => "gte",
            Operator::Less => "lt",
            Operator::LessOrEqual => "lte",
        }
    }

    /// Returns valid operator spellings for error messages.
    pub fn valid_symbols() -> &'static str {
        "=, >, >=, <, <= (or: eq, gt, gte, lt, lte)"
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Operator {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "=" | "eq" => Ok(Operator::Equal),
            ">" | "gt" => Ok(Operator::Greater),
            ">=" | "gte" | "ge" => Ok(Operator::GreaterOrEqual),
            "<" | "lt" => Ok(Operator::Less),
            "<=" | "lte" | "le" => Ok(Operator::LessOrEqual),
            _ => Err(Error::InvalidOperator(s.to_string())),
        }
    }
}

#[cfg(test)]
#[path = "op_tests.rs"]
mod tests;
