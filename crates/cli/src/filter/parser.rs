// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Parser for filter expressions.
//!
//! Parses expressions like `idle > 2h` or `departure < now` into structured
//! [`FilterExpr`] values.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, Utc};
use layover_core::{Category, Operator};

use crate::error::{Error, Result};

use super::expr::{FilterExpr, FilterValue};

const VALID_FIELDS: &str =
    "arrival (arr, lands), departure (dep, departs), idle (ground, layover)";

/// Parse a filter expression from a string.
///
/// # Examples
///
/// ```ignore
/// let expr = parse_filter("idle > 2h")?;
/// let expr = parse_filter("departure lt now")?;
/// let expr = parse_filter("arrival >= 2024-06-01T14:30")?;
/// ```
///
/// # Errors
///
/// Returns an error with a helpful message if the expression is invalid.
pub fn parse_filter(input: &str) -> Result<FilterExpr> {
    let input = input.trim();

    if input.is_empty() {
        return Err(Error::FilterEmpty);
    }

    let (field_str, rest) = split_field(input)?;
    let field = parse_field(field_str)?;

    let rest = rest.trim_start();
    let (op, rest) = parse_operator(rest)?;

    let value_str = rest.trim();
    if value_str.is_empty() {
        return Err(Error::FilterInvalidValue {
            field: field.to_string(),
            reason: format!("missing value in \"{input}\""),
        });
    }
    let value = parse_value(field, value_str)?;

    Ok(FilterExpr { field, op, value })
}

/// Split input into field name and rest.
fn split_field(input: &str) -> Result<(&str, &str)> {
    let end = input
        .find(|c: char| c.is_whitespace() || matches!(c, '<' | '>' | '=' | '!'))
        .unwrap_or(input.len());

    if end == 0 {
        return Err(Error::FilterUnknownField {
            field: String::new(),
            valid: VALID_FIELDS,
        });
    }

    Ok((&input[..end], &input[end..]))
}

fn parse_field(s: &str) -> Result<Category> {
    match s.to_lowercase().as_str() {
        "arrival" | "arr" | "lands" => Ok(Category::Arrival),
        "departure" | "dep" | "departs" => Ok(Category::Departure),
        "idle" | "ground" | "layover" => Ok(Category::Idle),
        _ => Err(Error::FilterUnknownField {
            field: s.to_string(),
            valid: VALID_FIELDS,
        }),
    }
}

fn invalid_operator(op: &str) -> Error {
    Error::FilterInvalidOperator {
        op: op.to_string(),
        valid: Operator::valid_symbols(),
    }
}

/// Parse an operator from the start of the string.
///
/// Word operators (`gt`, `lte`, ...) must be followed by whitespace.
fn parse_operator(s: &str) -> Result<(Operator, &str)> {
    if s.starts_with(|c: char| c.is_ascii_alphabetic()) {
        let end = s.find(char::is_whitespace).unwrap_or(s.len());
        let word = &s[..end];
        let op = word.parse::<Operator>().map_err(|_| invalid_operator(word))?;
        return Ok((op, &s[end..]));
    }

    if let Some(pair) = s.get(..2) {
        match pair {
            "<=" => return Ok((Operator::LessOrEqual, &s[2..])),
            ">=" => return Ok((Operator::GreaterOrEqual, &s[2..])),
            "!=" | "<<" | ">>" | "==" | "=>" | "=<" | "<>" => {
                return Err(invalid_operator(pair));
            }
            _ => {}
        }
    }

    match s.chars().next() {
        Some('<') => return Ok((Operator::Less, &s[1..])),
        Some('>') => return Ok((Operator::Greater, &s[1..])),
        Some('=') => return Ok((Operator::Equal, &s[1..])),
        _ => {}
    }

    let op_end = s
        .find(|c: char| c.is_whitespace() || c.is_alphanumeric())
        .unwrap_or(s.len());
    let bad_op = if op_end > 0 { &s[..op_end] } else { "(none)" };
    Err(invalid_operator(bad_op))
}

/// Parse a value according to the kind the field compares.
fn parse_value(field: Category, s: &str) -> Result<FilterValue> {
    match field {
        Category::Idle => parse_duration(s).map(FilterValue::Duration),
        Category::Arrival | Category::Departure => {
            if s.eq_ignore_ascii_case("now") {
                return Ok(FilterValue::Now);
            }
            parse_timestamp(s)
                .map(FilterValue::Instant)
                .ok_or_else(|| Error::FilterInvalidValue {
                    field: field.to_string(),
                    reason: format!(
                        "'{s}' is not a timestamp (use now, epoch seconds, \
                         YYYY-MM-DD, YYYY-MM-DDTHH:MM[:SS] or RFC3339)"
                    ),
                })
        }
    }
}

/// Parse an absolute timestamp. Zone-less forms are read as UTC.
fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(secs) = s.parse::<i64>() {
        return DateTime::from_timestamp(secs, 0);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Parse a duration string like "90m", "2h", or plain seconds "7200".
pub fn parse_duration(s: &str) -> Result<Duration> {
    if s.is_empty() {
        return Err(Error::InvalidDuration {
            reason: "empty duration".to_string(),
        });
    }

    let (num_str, unit) = split_number_unit(s)?;

    let num: i64 = num_str.parse().map_err(|_| Error::InvalidDuration {
        reason: format!("invalid number '{num_str}'"),
    })?;

    if num < 0 {
        return Err(Error::InvalidDuration {
            reason: "negative durations are not allowed".to_string(),
        });
    }

    let duration = match unit {
        "" | "s" => Duration::try_seconds(num),
        "m" => Duration::try_minutes(num),
        "h" => Duration::try_hours(num),
        "d" => Duration::try_days(num),
        "w" => Duration::try_weeks(num),
        _ => {
            return Err(Error::InvalidDuration {
                reason: format!("unknown unit '{unit}' (valid units: s, m, h, d, w)"),
            })
        }
    };
    duration.ok_or_else(|| Error::InvalidDuration {
        reason: format!("'{s}' is out of range"),
    })
}

/// Split a duration string into number and unit parts.
fn split_number_unit(s: &str) -> Result<(&str, &str)> {
    let num_end = s
        .find(|c: char| !c.is_ascii_digit() && c != '-')
        .unwrap_or(s.len());

    if num_end == 0 {
        return Err(Error::InvalidDuration {
            reason: format!("'{s}' must start with a number"),
        });
    }

    Ok((&s[..num_end], &s[num_end..]))
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
