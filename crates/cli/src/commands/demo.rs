// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The four reference reports: every flight, flights with a leg already
//! departed, flights without invalid segments, and flights spending more
//! than two hours on the ground.

use chrono::{DateTime, Duration, Utc};
use layover_core::{FilterEngine, FilterSpecBuilder, Flight, FlightSource};
use std::io::Write;

use crate::cli::{DataArgs, OutputFormat};
use crate::dataset;
use crate::display::{format_heading, write_flights};
use crate::error::Result;

use super::with_stdout;

pub fn run(data: DataArgs) -> Result<()> {
    let now = Utc::now();
    let source = dataset::open(data.data.as_deref(), now)?;
    with_stdout(|out| run_impl(&source, now, out))
}

/// Internal implementation that accepts source and clock for testing.
pub(crate) fn run_impl<S, W>(source: &S, now: DateTime<Utc>, out: &mut W) -> Result<()>
where
    S: FlightSource + ?Sized,
    W: Write + ?Sized,
{
    let flights = source.all();

    let departed = FilterSpecBuilder::new()
        .departure()
        .less(now.timestamp())?
        .build()?;
    let valid_only = FilterSpecBuilder::new().exclude_invalid().build()?;
    let long_idle = FilterSpecBuilder::new()
        .idle()
        .greater(Duration::hours(2).num_seconds())?
        .build()?;

    writeln!(out, "Current time: {}", now.format("%Y-%m-%dT%H:%M:%S"))?;
    report(out, "All flights", flights)?;
    report(out, "Departed before now", &FilterEngine::new(departed).filter(flights))?;
    report(
        out,
        "Without segments landing before takeoff",
        &FilterEngine::new(valid_only).filter(flights),
    )?;
    report(
        out,
        "More than two hours on the ground",
        &FilterEngine::new(long_idle).filter(flights),
    )?;
    Ok(())
}

fn report<W: Write + ?Sized>(out: &mut W, title: &str, flights: &[Flight]) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", format_heading(title))?;
    write_flights(out, flights, OutputFormat::Text, &[])
}

#[cfg(test)]
#[path = "demo_tests.rs"]
mod tests;
