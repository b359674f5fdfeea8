// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! layover-core: Filtering of multi-segment flight itineraries
//!
//! This crate provides the itinerary types, the [`FilterSpecBuilder`] used to
//! assemble arrival, departure and ground-time conditions, and the
//! [`FilterEngine`] that applies them.
//!
//! ```
//! use chrono::Utc;
//! use layover_core::{sample, FilterEngine, FilterSpecBuilder};
//!
//! # fn main() -> layover_core::Result<()> {
//! let flights = sample::sample_flights(Utc::now());
//! let spec = FilterSpecBuilder::new()
//!     .idle()
//!     .greater(2 * 3600)?
//!     .build()?;
//! let long_layovers = FilterEngine::new(spec).filter(&flights);
//! assert_eq!(long_layovers.len(), 1);
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod condition;
pub mod engine;
pub mod error;
pub mod flight;
pub mod op;
pub mod sample;
pub mod source;
pub mod validity;

pub use builder::{FilterSpec, FilterSpecBuilder};
pub use condition::{Category, ConditionSet};
pub use engine::{ground_times, ExecutionMode, FilterEngine};
pub use error::{Error, Result};
pub use flight::{Flight, Segment};
pub use op::Operator;
pub use source::{FlightSource, InMemorySource};
pub use validity::{is_valid_flight, is_valid_segment, ValidityGate};
