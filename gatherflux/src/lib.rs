// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
//! # Gatherflux
//!
//! Stateful, composable operators over ordinary iterators: windowing, deduplication,
//! sampling, statistics, ordering checks, grouping and time-based throttling.
//!
//! ## Overview
//!
//! Each operator is a validated, immutable configuration. A traversal creates fresh
//! per-run state, feeds every element through it, and gives the operator one final
//! chance to flush buffered output when the input ends. Operators compose with
//! [`OperatorExt::then`] into a single operator, and any operator can stop the
//! traversal early without the source being pulled any further.
//!
//! Every output element is a [`Result`]; the first error ends the traversal.
//!
//! ## Quick Start
//!
//! ```rust
//! use gatherflux::prelude::*;
//!
//! # fn main() -> gatherflux::Result<()> {
//! let windows: Vec<Vec<u32>> = (1..=7).windows_fixed(3)?.collect::<Result<_>>()?;
//! assert_eq!(windows, vec![vec![1, 2, 3], vec![4, 5, 6]]);
//!
//! let firsts = Pipeline::new(vec![3, 3, 1, 4, 4, 1])
//!     .then(gatherflux::ops::dedupe_consecutive())
//!     .then(gatherflux::ops::take_until(|n: &i32| *n == 4))
//!     .collect_vec()?;
//! assert_eq!(firsts, vec![3, 1, 4]);
//! # Ok(())
//! # }
//! ```

mod dedupe;
mod grouping;
mod indexing;
mod ordering;
mod sampling;
mod slicing;
mod statistics;
mod time;
mod windowing;

pub use gatherflux_exec as exec;
pub use gatherflux_ops as ops;
pub use gatherflux_time as clock;

pub use gatherflux_core::buffer::Statistics;
pub use gatherflux_core::{Disposition, Downstream, Entropy, EntropySource, GatherError, Operator, Order, Result};
pub use gatherflux_exec::{gather_partitioned, Chain, Gather, GatherExt, OperatorExt, Pipeline};
#[cfg(feature = "stream")]
pub use gatherflux_exec::{GatherStream, GatherStreamExt};
pub use gatherflux_ops::{EveryNthMode, Extreme, FrequencyOrder, OnViolation, ReservoirConfig, WindowConfig, WithCount};
pub use gatherflux_time::{Clock, ManualClock, RateLimitConfig, SystemClock, ThrottleConfig};

pub use dedupe::DedupeExt;
pub use grouping::GroupingExt;
pub use indexing::IndexingExt;
pub use ordering::OrderingExt;
pub use sampling::SamplingExt;
pub use slicing::SlicingExt;
pub use statistics::StatisticsExt;
pub use time::TimeExt;
pub use windowing::WindowingExt;

/// Seeded and OS-seeded generators for the sampling operators.
pub use gatherflux_core::entropy;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        DedupeExt, GroupingExt, IndexingExt, OrderingExt, SamplingExt, SlicingExt, StatisticsExt,
        TimeExt, WindowingExt,
    };
    pub use gatherflux_core::buffer::Statistics;
    pub use gatherflux_core::{GatherError, Order, Result};
    pub use gatherflux_exec::{GatherExt, OperatorExt, Pipeline};
    pub use gatherflux_ops::OnViolation;
}
