// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Minimum-spacing throttle.

use crate::clock::{Clock, SystemClock};
use core::marker::PhantomData;
use core::time::Duration;
use gatherflux_core::config::positive;
use gatherflux_core::{Disposition, Downstream, Operator, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ThrottleConfig {
    /// Minimum time between two emitted elements
    pub min_spacing: Duration,
}

impl ThrottleConfig {
    #[must_use]
    pub const fn new(min_spacing: Duration) -> Self {
        Self { min_spacing }
    }
}

/// Leading-edge throttle: emits an element only if at least `min_spacing` has passed
/// since the last *emitted* element, and drops it otherwise.
///
/// # Behavior
///
/// - The first element is always emitted
/// - Arrival time is read from the clock when the element is integrated
/// - With a spacing of 100ms, elements arriving at `0, 50, 150, 160, 300` ms are
///   emitted at `0, 150, 300`
///
/// Sequential-only: spacing depends on the arrival order of every element.
#[derive(Debug, Clone)]
pub struct Throttle<T, C = SystemClock> {
    min_spacing: Duration,
    clock: C,
    _marker: PhantomData<fn(T) -> T>,
}

impl<T> Throttle<T, SystemClock> {
    /// Throttle measured with the wall clock.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when `min_spacing` is zero.
    pub fn new(config: ThrottleConfig) -> Result<Self> {
        Self::with_clock(config, SystemClock)
    }
}

impl<T, C: Clock> Throttle<T, C> {
    /// Throttle measured with `clock`.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when `min_spacing` is zero.
    pub fn with_clock(config: ThrottleConfig, clock: C) -> Result<Self> {
        Ok(Self {
            min_spacing: positive("throttle", "minimum spacing", config.min_spacing)?,
            clock,
            _marker: PhantomData,
        })
    }
}

/// # Errors
///
/// Returns a configuration error when `min_spacing` is zero.
pub fn throttle<T>(min_spacing: Duration) -> Result<Throttle<T>> {
    Throttle::new(ThrottleConfig::new(min_spacing))
}

impl<T, C: Clock> Operator for Throttle<T, C> {
    type Input = T;
    type Output = T;
    type State = Option<C::Instant>;

    fn name(&self) -> &'static str {
        "throttle"
    }

    fn initialize(&self) -> Option<C::Instant> {
        None
    }

    fn integrate<D>(&self, last_emitted: &mut Option<C::Instant>, element: T, downstream: &mut D) -> Result<Disposition>
    where
        D: Downstream<T>,
    {
        let now = self.clock.now();
        if let Some(last) = *last_emitted {
            let spacing = now - last;
            if spacing < self.min_spacing {
                trace!("throttle: dropping element {spacing:?} after the last emission");
                return Ok(Disposition::Continue);
            }
        }
        *last_emitted = Some(now);
        downstream.push(element)
    }
}
