// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
//! Composition driver for gatherflux operators.
//!
//! - [`OperatorExt::then`] / [`Chain`] - sequential composition
//! - [`GatherExt::gather`] / [`Gather`] - lazy iteration over any iterator
//! - [`Pipeline`] - fluent builder with collecting, folding and short-circuiting terminals
//! - [`gather_partitioned`] - split execution for mergeable operators
//! - `GatherStream` - the same over `futures` streams (feature `stream`)
//!
//! Elements are propagated depth first: one source element travels through the whole
//! chain before the next one is pulled.

#[macro_use]
mod logging;

pub mod chain;
pub mod gather;
pub mod identity;
pub mod partitioned;
pub mod pipeline;
#[cfg(feature = "stream")]
pub mod stream;

// Re-export commonly used types
pub use chain::{Chain, OperatorExt};
pub use gather::{Gather, GatherExt};
pub use identity::{identity, Identity};
pub use partitioned::gather_partitioned;
pub use pipeline::Pipeline;
#[cfg(feature = "stream")]
pub use stream::{GatherStream, GatherStreamExt};
