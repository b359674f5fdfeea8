// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Evaluation of a [`FilterSpec`] against a list of flights.
//!
//! Stages run in a fixed order, each narrowing the output of the previous
//! one:
//!
//! 1. arrival conditions, one pass per entry
//! 2. departure conditions, one pass per entry
//! 3. idle conditions, one pass per entry
//! 4. the strict removal of flights without a valid segment, when the
//!    filter has no conditions or excludes invalid flights
//!
//! Arrival and departure entries keep a flight if any admitted segment
//! matches. Idle entries keep a flight if it is valid and any pair of
//! consecutive segments has a matching ground time. Entries of one category
//! are AND'ed, but each may be satisfied by a different segment.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::builder::FilterSpec;
use crate::condition::Category;
use crate::flight::{Flight, Segment};
use crate::op::Operator;
use crate::validity::ValidityGate;

/// Scheduling of per-flight predicate checks inside one stage.
///
/// Both modes return the same flights in the same order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecutionMode {
    #[default]
    Sequential,
    /// Fan out across the rayon thread pool.
    Parallel,
}

/// Seconds on the ground between each pair of consecutive segments.
///
/// Negative when the next leg departs before the previous one lands.
pub fn ground_times(flight: &Flight) -> impl Iterator<Item = i64> + '_ {
    flight
        .segments()
        .windows(2)
        .map(|pair| pair[1].departure_epoch() - pair[0].arrival_epoch())
}

/// Applies a [`FilterSpec`] to flight lists.
///
/// The engine holds no per-call state, so one instance can be reused and
/// shared between threads.
#[derive(Debug, Clone)]
pub struct FilterEngine {
    spec: FilterSpec,
    mode: ExecutionMode,
}

impl From<FilterSpec> for FilterEngine {
    fn from(spec: FilterSpec) -> Self {
        FilterEngine::new(spec)
    }
}

impl FilterEngine {
    pub fn new(spec: FilterSpec) -> Self {
        FilterEngine {
            spec,
            mode: ExecutionMode::default(),
        }
    }

    pub fn with_mode(mut self, mode: ExecutionMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn parallel(self) -> Self {
        self.with_mode(ExecutionMode::Parallel)
    }

    pub fn sequential(self) -> Self {
        self.with_mode(ExecutionMode::Sequential)
    }

    pub fn mode(&self) -> ExecutionMode {
        self.mode
    }

    pub fn spec(&self) -> &FilterSpec {
        &self.spec
    }

    /// Return the flights that pass every stage, in input order.
    pub fn filter(&self, flights: &[Flight]) -> Vec<Flight> {
        let mut gate = ValidityGate::for_spec(&self.spec);
        let mut current: Vec<&Flight> = flights.iter().collect();
        tracing::debug!(
            "filtering {} flights ({:?}, enforce validity: {})",
            current.len(),
            self.mode,
            gate.is_enforcing()
        );

        if !self.spec.arrival().is_empty() {
            current = self.segment_stage(
                current,
                Category::Arrival,
                Segment::arrival_epoch,
                &mut gate,
            );
        }
        if !self.spec.departure().is_empty() {
            current = self.segment_stage(
                current,
                Category::Departure,
                Segment::departure_epoch,
                &mut gate,
            );
        }
        if !self.spec.idle().is_empty() {
            current = self.idle_stage(current, &mut gate);
        }
        if self.spec.has_no_conditions() || !self.spec.allows_invalid_flights() {
            current = self.removal_stage(current, &mut gate);
        }

        current.into_iter().cloned().collect()
    }

    fn segment_stage<'a>(
        &self,
        mut flights: Vec<&'a Flight>,
        category: Category,
        instant: fn(&Segment) -> i64,
        gate: &mut ValidityGate,
    ) -> Vec<&'a Flight> {
        let admitted = *gate;

        for (op, threshold) in self.spec.conditions(category).iter() {
            let before = flights.len();
            flights = self.retain(flights, |flight| {
                flight
                    .segments()
                    .iter()
                    .any(|s| admitted.admits_segment(s) && op.compare(instant(s), threshold))
            });
            log_entry(category, op, threshold, before, flights.len());
        }

        gate.consume();
        flights
    }

    fn idle_stage<'a>(
        &self,
        mut flights: Vec<&'a Flight>,
        gate: &mut ValidityGate,
    ) -> Vec<&'a Flight> {
        let admitted = *gate;

        for (op, threshold) in self.spec.idle().iter() {
            let before = flights.len();
            flights = self.retain(flights, |flight| {
                ground_times(flight).any(|idle| op.compare(idle, threshold))
                    && admitted.admits_flight(flight)
            });
            log_entry(Category::Idle, op, threshold, before, flights.len());
        }

        gate.consume();
        flights
    }

    fn removal_stage<'a>(
        &self,
        flights: Vec<&'a Flight>,
        gate: &mut ValidityGate,
    ) -> Vec<&'a Flight> {
        if !gate.is_enforcing() {
            tracing::trace!("validity already applied, removal pass only drops empty flights");
        }
        let admitted = *gate;
        let before = flights.len();
        let flights = self.retain(flights, |flight| !admitted.rejects_all_segments(flight));
        tracing::debug!("invalid flight removal: {} -> {}", before, flights.len());

        gate.consume();
        flights
    }

    /// Keep the flights matching `predicate`, preserving order.
    fn retain<'a, P>(&self, flights: Vec<&'a Flight>, predicate: P) -> Vec<&'a Flight>
    where
        P: Fn(&Flight) -> bool + Sync,
    {
        match self.mode {
            ExecutionMode::Sequential => flights.into_iter().filter(|f| predicate(*f)).collect(),
            ExecutionMode::Parallel => flights
                .into_par_iter()
                .filter(|f| predicate(*f))
                .collect(),
        }
    }
}

fn log_entry(category: Category, op: Operator, threshold: i64, before: usize, after: usize) {
    tracing::debug!(
        "{} {} {}: {} -> {} flights",
        category,
        op,
        threshold,
        before,
        after
    );
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
