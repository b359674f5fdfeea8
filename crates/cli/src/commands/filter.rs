// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use chrono::{DateTime, Utc};
use layover_core::{ExecutionMode, FilterEngine, FlightSource};
use std::io::Write;
use std::path::Path;

use crate::cli::{DataArgs, OutputArgs};
use crate::config::{Config, ConfigLocation};
use crate::dataset;
use crate::display::write_flights;
use crate::error::{Error, Result};
use crate::filter::{build_spec, parse_filter, FilterExpr};

use super::with_stdout;

/// What the user asked to filter by.
#[derive(Debug, Clone, Default)]
pub struct FilterRequest {
    pub exprs: Vec<String>,
    pub preset: Option<String>,
    pub exclude_invalid: bool,
    pub parallel: bool,
}

impl FilterRequest {
    /// Merge the request with its preset, if any.
    ///
    /// Preset expressions come first, followed by the command-line ones.
    /// `exclude_invalid` is set if either side sets it.
    fn resolve(&self, config: &Config) -> Result<(Vec<String>, bool)> {
        let mut exprs = Vec::new();
        let mut exclude_invalid = self.exclude_invalid;
        if let Some(name) = &self.preset {
            let preset = config.preset(name)?;
            exprs.extend(preset.filters.iter().cloned());
            exclude_invalid |= preset.exclude_invalid;
        }
        exprs.extend(self.exprs.iter().cloned());
        Ok((exprs, exclude_invalid))
    }

    fn mode(&self, config: &Config) -> ExecutionMode {
        if self.parallel || config.parallel {
            ExecutionMode::Parallel
        } else {
            ExecutionMode::Sequential
        }
    }
}

pub fn run(
    request: FilterRequest,
    config_path: Option<&Path>,
    data: DataArgs,
    output: OutputArgs,
) -> Result<()> {
    let config = Config::load(&ConfigLocation::from_env(config_path))?;
    let now = Utc::now();
    let source = dataset::open(data.data.as_deref(), now)?;
    with_stdout(|out| run_impl(&source, &config, &request, now, output, out))
}

/// Internal implementation that accepts source, config and clock for testing.
pub(crate) fn run_impl<S, W>(
    source: &S,
    config: &Config,
    request: &FilterRequest,
    now: DateTime<Utc>,
    output: OutputArgs,
    out: &mut W,
) -> Result<()>
where
    S: FlightSource + ?Sized,
    W: Write + ?Sized,
{
    let (raw, exclude_invalid) = request.resolve(config)?;
    if raw.is_empty() && !exclude_invalid {
        return Err(Error::NoFilters);
    }

    let exprs: Vec<FilterExpr> = raw.iter().map(|e| parse_filter(e)).collect::<Result<_>>()?;
    let spec = build_spec(&exprs, exclude_invalid, now)?;
    let engine = FilterEngine::new(spec).with_mode(request.mode(config));

    let flights = engine.filter(source.all());
    tracing::debug!(
        "{} of {} flights matched {} expressions",
        flights.len(),
        source.all().len(),
        exprs.len()
    );

    write_flights(out, &flights, output.output, &raw)
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
