// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use gatherflux_core::{EntropySource, Result};
use gatherflux_exec::GatherExt;
use gatherflux_ops::{sample_ratio, sample_reservoir, ReservoirConfig, ReservoirSample, SampleRatio};

/// Random sampling on any iterator.
///
/// The plain methods draw from an OS-seeded generator. The `_with` variants take any
/// [`EntropySource`]; pass a seeded `fastrand::Rng` for reproducible samples.
pub trait SamplingExt: Iterator + Sized {
    /// Uniform sample of at most `size` elements, emitted once the input is exhausted.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when `size` is zero.
    fn sample_reservoir(self, size: usize) -> Result<impl Iterator<Item = Result<Self::Item>>> {
        Ok(self.gather(sample_reservoir(size)?))
    }

    /// # Errors
    ///
    /// Returns a configuration error when the configured size is zero.
    fn sample_reservoir_with<R>(
        self,
        config: ReservoirConfig,
        entropy: R,
    ) -> Result<impl Iterator<Item = Result<Self::Item>>>
    where
        R: EntropySource,
    {
        Ok(self.gather(ReservoirSample::with_entropy(config, entropy)?))
    }

    /// Keeps each element independently with probability `probability`.
    ///
    /// # Errors
    ///
    /// Returns a configuration error unless `probability` lies in `[0.0, 1.0]`.
    fn sample_ratio(self, probability: f64) -> Result<impl Iterator<Item = Result<Self::Item>>> {
        Ok(self.gather(sample_ratio(probability)?))
    }

    /// # Errors
    ///
    /// Returns a configuration error unless `probability` lies in `[0.0, 1.0]`.
    fn sample_ratio_with<R>(self, probability: f64, entropy: R) -> Result<impl Iterator<Item = Result<Self::Item>>>
    where
        R: EntropySource,
    {
        Ok(self.gather(SampleRatio::with_entropy(probability, entropy)?))
    }
}

impl<I: Iterator> SamplingExt for I {}
