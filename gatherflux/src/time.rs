// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::time::Duration;
use gatherflux_core::Result;
use gatherflux_exec::GatherExt;
use gatherflux_time::{rate_limit, throttle, Clock, RateLimit, RateLimitConfig, Throttle, ThrottleConfig};

/// Arrival-time based dropping on any iterator.
///
/// Time is read when an element is pulled through the operator. The `_with` variants
/// take an explicit [`Clock`], such as a [`ManualClock`](gatherflux_time::ManualClock)
/// in tests.
pub trait TimeExt: Iterator + Sized {
    /// Drops elements arriving less than `min_spacing` after the last emitted one.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when `min_spacing` is zero.
    fn throttle(self, min_spacing: Duration) -> Result<impl Iterator<Item = Result<Self::Item>>> {
        Ok(self.gather(throttle(min_spacing)?))
    }

    /// # Errors
    ///
    /// Returns a configuration error when the minimum spacing is zero.
    fn throttle_with<C: Clock>(
        self,
        config: ThrottleConfig,
        clock: C,
    ) -> Result<impl Iterator<Item = Result<Self::Item>>> {
        Ok(self.gather(Throttle::with_clock(config, clock)?))
    }

    /// At most `allowed` elements per `period`; the excess is dropped.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when `allowed` or `period` is zero.
    fn rate_limit(self, allowed: usize, period: Duration) -> Result<impl Iterator<Item = Result<Self::Item>>> {
        Ok(self.gather(rate_limit(allowed, period)?))
    }

    /// # Errors
    ///
    /// Returns a configuration error when the allowance or the period is zero.
    fn rate_limit_with<C: Clock>(
        self,
        config: RateLimitConfig,
        clock: C,
    ) -> Result<impl Iterator<Item = Result<Self::Item>>> {
        Ok(self.gather(RateLimit::with_clock(config, clock)?))
    }
}

impl<I: Iterator> TimeExt for I {}
