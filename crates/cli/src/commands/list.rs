// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use chrono::Utc;
use layover_core::FlightSource;
use std::io::Write;

use crate::cli::{DataArgs, OutputArgs};
use crate::dataset;
use crate::display::write_flights;
use crate::error::Result;

use super::with_stdout;

pub fn run(data: DataArgs, output: OutputArgs) -> Result<()> {
    let source = dataset::open(data.data.as_deref(), Utc::now())?;
    with_stdout(|out| run_impl(&source, output, out))
}

/// Internal implementation that accepts a source for testing.
pub(crate) fn run_impl<S, W>(source: &S, output: OutputArgs, out: &mut W) -> Result<()>
where
    S: FlightSource + ?Sized,
    W: Write + ?Sized,
{
    write_flights(out, source.all(), output.output, &[])
}

#[cfg(test)]
#[path = "list_tests.rs"]
mod tests;
