// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
//! Time-based gatherflux operators.
//!
//! Every operator reads arrival times from an injected [`Clock`]: [`SystemClock`] in
//! production, [`ManualClock`] for deterministic tests. Both operators drop elements
//! and never block.

#[macro_use]
mod logging;

pub mod clock;
pub mod rate_limit;
pub mod throttle;

// Re-export commonly used types
pub use clock::{Clock, ManualClock, ManualInstant, SystemClock};
pub use rate_limit::{rate_limit, RateLimit, RateLimitConfig};
pub use throttle::{throttle, Throttle, ThrottleConfig};
