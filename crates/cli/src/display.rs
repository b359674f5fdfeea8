// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use layover_core::Flight;
use serde::Serialize;
use std::io::Write;

use crate::cli::OutputFormat;
use crate::error::Result;

/// JSON output structure for flight listings.
#[derive(Serialize)]
struct FlightsOutputJson<'a> {
    flights: &'a [Flight],
    count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    filters_applied: Option<&'a [String]>,
}

/// Format a flight as a single line: `[dep|arr] [dep|arr]`.
pub fn format_flight_line(flight: &Flight) -> String {
    flight.to_string()
}

/// Format a section heading for multi-report output.
pub fn format_heading(title: &str) -> String {
    format!("── {title} ──")
}

/// Write flights in the requested format.
///
/// `filters` is echoed in JSON output when non-empty.
pub fn write_flights<W: Write + ?Sized>(
    out: &mut W,
    flights: &[Flight],
    format: OutputFormat,
    filters: &[String],
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for flight in flights {
                writeln!(out, "{}", format_flight_line(flight))?;
            }
        }
        OutputFormat::Json => {
            let output = FlightsOutputJson {
                flights,
                count: flights.len(),
                filters_applied: (!filters.is_empty()).then_some(filters),
            };
            writeln!(out, "{}", serde_json::to_string_pretty(&output)?)?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
