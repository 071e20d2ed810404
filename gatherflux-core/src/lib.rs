// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
//! Core contract and building blocks for gatherflux operators.
//!
//! - [`Operator`] / [`Downstream`] / [`Disposition`] - the stage contract
//! - [`GatherError`] - the error shared by every crate of the workspace
//! - [`Entropy`] - injectable randomness for sampling operators
//! - [`config`] - construction-time validation helpers
//! - [`buffer`] - bounded FIFO buffer, reservoir and running aggregate

#[macro_use]
mod logging;

pub mod buffer;
pub mod config;
pub mod entropy;
pub mod error;
pub mod operator;
pub mod order;

pub use self::entropy::{Entropy, EntropySource};
pub use self::error::{GatherError, IntoGatherError, Result};
pub use self::operator::{Disposition, Downstream, Operator};
pub use self::order::Order;
