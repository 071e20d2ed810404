// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Uniform fixed-size sampling.

use core::marker::PhantomData;
use core::num::NonZeroUsize;
use gatherflux_core::buffer::Reservoir;
use gatherflux_core::config::non_zero;
use gatherflux_core::entropy::{self, EntropySource, OsEntropy};
use gatherflux_core::{Disposition, Downstream, Operator, Result};

/// Reservoir sizing and emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReservoirConfig {
    pub size: usize,
    pub preserve_arrival_order: bool,
}

impl ReservoirConfig {
    #[must_use]
    pub const fn new(size: usize) -> Self {
        Self {
            size,
            preserve_arrival_order: false,
        }
    }

    /// Emit the sample in the order its elements arrived.
    #[must_use]
    pub const fn with_arrival_order(mut self, preserve: bool) -> Self {
        self.preserve_arrival_order = preserve;
        self
    }
}

/// Keeps a uniform random sample of at most `size` elements and emits it at end of input.
///
/// # Behavior
///
/// - Nothing is emitted while elements are flowing
/// - With fewer than `size` input elements, every element is emitted
/// - Emission order is unspecified unless arrival order was requested
/// - Randomness comes only from the configured [`EntropySource`]: a seeded generator
///   gives the same sample on every traversal, while the default [`OsEntropy`] draws a
///   new sample each time
///
/// Sequential-only: merging two reservoirs uniformly needs the partition sizes to
/// weight the draw, which is not supported.
#[derive(Debug, Clone)]
pub struct ReservoirSample<T, R = OsEntropy> {
    size: NonZeroUsize,
    preserve_arrival_order: bool,
    entropy: R,
    _marker: PhantomData<fn(T) -> T>,
}

impl<T> ReservoirSample<T, OsEntropy> {
    /// Builds the operator with a freshly OS-seeded generator per traversal.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when `size` is zero.
    pub fn new(config: ReservoirConfig) -> Result<Self> {
        Self::with_entropy(config, OsEntropy)
    }
}

impl<T, R: EntropySource> ReservoirSample<T, R> {
    /// Builds the operator drawing from `entropy`.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when `size` is zero.
    pub fn with_entropy(config: ReservoirConfig, entropy: R) -> Result<Self> {
        Ok(Self {
            size: non_zero("reservoir_sample", "sample size", config.size)?,
            preserve_arrival_order: config.preserve_arrival_order,
            entropy,
            _marker: PhantomData,
        })
    }
}

/// Uniform sample of `size` elements.
///
/// # Errors
///
/// Returns a configuration error when `size` is zero.
pub fn sample_reservoir<T>(size: usize) -> Result<ReservoirSample<T>> {
    ReservoirSample::new(ReservoirConfig::new(size))
}

/// Uniform sample of `size` elements from a generator seeded with `seed`.
///
/// # Errors
///
/// Returns a configuration error when `size` is zero.
pub fn sample_reservoir_seeded<T>(size: usize, seed: u64) -> Result<ReservoirSample<T, fastrand::Rng>> {
    ReservoirSample::with_entropy(ReservoirConfig::new(size), entropy::seeded(seed))
}

#[derive(Debug, Clone)]
pub struct ReservoirState<T, R> {
    reservoir: Reservoir<T>,
    entropy: R,
}

impl<T, R: EntropySource> Operator for ReservoirSample<T, R> {
    type Input = T;
    type Output = T;
    type State = ReservoirState<T, R::Entropy>;

    fn name(&self) -> &'static str {
        "reservoir_sample"
    }

    fn initialize(&self) -> Self::State {
        ReservoirState {
            reservoir: Reservoir::new(self.size),
            entropy: self.entropy.fork(),
        }
    }

    fn integrate<D>(&self, state: &mut Self::State, element: T, _downstream: &mut D) -> Result<Disposition>
    where
        D: Downstream<T>,
    {
        state.reservoir.offer(element, &mut state.entropy);
        Ok(Disposition::Continue)
    }

    fn finish<D>(&self, state: Self::State, downstream: &mut D) -> Result<()>
    where
        D: Downstream<T>,
    {
        trace!(
            "reservoir_sample: emitting {} of {} elements",
            state.reservoir.len(),
            state.reservoir.seen()
        );
        let sample = if self.preserve_arrival_order {
            state.reservoir.into_arrival_order()
        } else {
            state.reservoir.into_samples()
        };
        let _ = downstream.push_all(sample)?;
        Ok(())
    }
}
