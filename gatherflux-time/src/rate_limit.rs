// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Fixed-window rate limiting.

use crate::clock::{Clock, SystemClock};
use core::marker::PhantomData;
use core::num::NonZeroUsize;
use core::time::Duration;
use gatherflux_core::config::{non_zero, positive};
use gatherflux_core::{Disposition, Downstream, Operator, Result};

/// At most `allowed` elements per `period`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RateLimitConfig {
    pub allowed: usize,
    pub period: Duration,
}

impl RateLimitConfig {
    #[must_use]
    pub const fn new(allowed: usize, period: Duration) -> Self {
        Self { allowed, period }
    }
}

/// Emits at most `allowed` elements per period and drops the excess.
///
/// A period opens with the first element that arrives after the previous period ended
/// and lasts `period` from that arrival. Periods are measured as elapsed time since
/// they opened, so any `period` up to `Duration::MAX` is valid. Elements beyond the allowance of the open
/// period are dropped, never delayed.
///
/// Sequential-only.
#[derive(Debug, Clone)]
pub struct RateLimit<T, C = SystemClock> {
    allowed: NonZeroUsize,
    period: Duration,
    clock: C,
    _marker: PhantomData<fn(T) -> T>,
}

impl<T> RateLimit<T, SystemClock> {
    /// # Errors
    ///
    /// Returns a configuration error when `allowed` or `period` is zero.
    pub fn new(config: RateLimitConfig) -> Result<Self> {
        Self::with_clock(config, SystemClock)
    }
}

impl<T, C: Clock> RateLimit<T, C> {
    /// # Errors
    ///
    /// Returns a configuration error when `allowed` or `period` is zero.
    pub fn with_clock(config: RateLimitConfig, clock: C) -> Result<Self> {
        Ok(Self {
            allowed: non_zero("rate_limit", "allowed count", config.allowed)?,
            period: positive("rate_limit", "period", config.period)?,
            clock,
            _marker: PhantomData,
        })
    }
}

/// # Errors
///
/// Returns a configuration error when `allowed` or `period` is zero.
pub fn rate_limit<T>(allowed: usize, period: Duration) -> Result<RateLimit<T>> {
    RateLimit::new(RateLimitConfig::new(allowed, period))
}

#[derive(Debug, Clone, Copy)]
pub struct Period<I> {
    opened_at: I,
    remaining: usize,
}

impl<T, C: Clock> Operator for RateLimit<T, C> {
    type Input = T;
    type Output = T;
    type State = Option<Period<C::Instant>>;

    fn name(&self) -> &'static str {
        "rate_limit"
    }

    fn initialize(&self) -> Self::State {
        None
    }

    fn integrate<D>(&self, period: &mut Self::State, element: T, downstream: &mut D) -> Result<Disposition>
    where
        D: Downstream<T>,
    {
        let now = self.clock.now();
        let mut current = match *period {
            Some(open) if now - open.opened_at < self.period => open,
            _ => Period {
                opened_at: now,
                remaining: self.allowed.get(),
            },
        };
        let admitted = current.remaining > 0;
        current.remaining = current.remaining.saturating_sub(1);
        *period = Some(current);
        if !admitted {
            trace!("rate_limit: allowance exhausted, dropping element");
            return Ok(Disposition::Continue);
        }
        downstream.push(element)
    }
}
