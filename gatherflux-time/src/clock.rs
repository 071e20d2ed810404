// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Injectable time sources.

use core::fmt::Debug;
use core::ops::{Add, Sub};
use core::time::Duration;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Source of monotonic instants for time-based operators.
///
/// Operators only measure the time elapsed between two instants and never add a
/// duration to one, so a configured period can never overflow the instant type.
/// `later - earlier` must saturate to zero rather than panic when the clock goes back.
pub trait Clock: Clone + Debug {
    type Instant: Copy + Debug + Ord + Sub<Self::Instant, Output = Duration>;

    fn now(&self) -> Self::Instant;
}

/// The monotonic wall clock.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemClock;

impl Clock for SystemClock {
    type Instant = Instant;

    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Point in time of a [`ManualClock`], measured from the clock's origin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ManualInstant(Duration);

impl ManualInstant {
    #[must_use]
    pub const fn since_origin(self) -> Duration {
        self.0
    }
}

impl Add<Duration> for ManualInstant {
    type Output = Self;

    fn add(self, rhs: Duration) -> Self {
        Self(self.0.saturating_add(rhs))
    }
}

impl Sub for ManualInstant {
    type Output = Duration;

    fn sub(self, rhs: Self) -> Duration {
        self.0.saturating_sub(rhs.0)
    }
}

/// A clock that only moves when told to.
///
/// Clones share the same time, so a test can keep one handle and give a clone to an
/// operator. Time is stored with nanosecond resolution and never overflows: setting a
/// time beyond `u64::MAX` nanoseconds saturates.
///
/// ```rust
/// use gatherflux_time::{Clock, ManualClock};
/// use std::time::Duration;
///
/// let clock = ManualClock::new();
/// let handle = clock.clone();
/// handle.advance(Duration::from_millis(150));
/// assert_eq!(clock.now().since_origin(), Duration::from_millis(150));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    nanos: Arc<AtomicU64>,
}

impl ManualClock {
    /// A clock standing at its origin.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves the clock to `since_origin`, forwards or backwards.
    pub fn set(&self, since_origin: Duration) {
        self.nanos.store(to_nanos(since_origin), Ordering::SeqCst);
    }

    pub fn set_millis(&self, millis: u64) {
        self.set(Duration::from_millis(millis));
    }

    /// Moves the clock forwards by `delta`.
    pub fn advance(&self, delta: Duration) {
        let delta = to_nanos(delta);
        let _ = self
            .nanos
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |nanos| {
                Some(nanos.saturating_add(delta))
            });
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        Duration::from_nanos(self.nanos.load(Ordering::SeqCst))
    }
}

impl Clock for ManualClock {
    type Instant = ManualInstant;

    fn now(&self) -> ManualInstant {
        ManualInstant(self.elapsed())
    }
}

fn to_nanos(duration: Duration) -> u64 {
    u64::try_from(duration.as_nanos()).unwrap_or(u64::MAX)
}
