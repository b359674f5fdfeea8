// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Filter expressions for command-line flight filtering.
//!
//! Expressions take the form:
//!
//! ```text
//! field op value
//! ```
//!
//! # Fields
//!
//! - `arrival` / `arr` / `lands` - Landing time of any segment
//! - `departure` / `dep` / `departs` - Takeoff time of any segment
//! - `idle` / `ground` / `layover` - Time on the ground between segments
//!
//! # Operators
//!
//! - `=`, `>`, `>=`, `<`, `<=` (or `eq`, `gt`, `gte`, `lt`, `lte`)
//!
//! # Values
//!
//! - Timestamps (arrival, departure): `now`, epoch seconds `1717000000`,
//!   `2024-06-01`, `2024-06-01T14:30`, or RFC3339
//! - Durations (idle): seconds `7200`, or `30m`, `2h`, `1d`, `1w`
//!
//! # Examples
//!
//! ```text
//! departure < now          # Already departed
//! arrival >= 2024-06-01    # Lands on or after June 1st (UTC)
//! idle > 2h                # More than two hours between legs
//! ```

mod expr;
mod parser;

pub use expr::{build_spec, FilterExpr, FilterValue};
pub use parser::{parse_duration, parse_filter};
