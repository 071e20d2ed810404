// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Probabilistic sampling.

use core::marker::PhantomData;
use gatherflux_core::config::probability;
use gatherflux_core::entropy::{Entropy, EntropySource, OsEntropy};
use gatherflux_core::{Disposition, Downstream, Operator, Result};

/// Keeps each element independently with a fixed probability.
///
/// A probability of `0.0` drops everything and `1.0` keeps everything. Each traversal
/// draws from the generator its entropy source forks; with the default [`OsEntropy`]
/// two traversals keep different elements.
#[derive(Debug, Clone)]
pub struct SampleRatio<T, R = OsEntropy> {
    probability: f64,
    entropy: R,
    _marker: PhantomData<fn(T) -> T>,
}

impl<T> SampleRatio<T, OsEntropy> {
    /// # Errors
    ///
    /// Returns a configuration error unless `probability` lies in `[0.0, 1.0]`.
    pub fn new(probability: f64) -> Result<Self> {
        Self::with_entropy(probability, OsEntropy)
    }
}

impl<T, R: EntropySource> SampleRatio<T, R> {
    /// # Errors
    ///
    /// Returns a configuration error unless `probability` lies in `[0.0, 1.0]`.
    pub fn with_entropy(probability_value: f64, entropy: R) -> Result<Self> {
        Ok(Self {
            probability: probability("sample_ratio", probability_value)?,
            entropy,
            _marker: PhantomData,
        })
    }

    #[must_use]
    pub const fn probability(&self) -> f64 {
        self.probability
    }
}

/// Keeps each element with probability `probability`.
///
/// # Errors
///
/// Returns a configuration error unless `probability` lies in `[0.0, 1.0]`.
pub fn sample_ratio<T>(probability: f64) -> Result<SampleRatio<T>> {
    SampleRatio::new(probability)
}

impl<T, R: EntropySource> Operator for SampleRatio<T, R> {
    type Input = T;
    type Output = T;
    type State = R::Entropy;

    fn name(&self) -> &'static str {
        "sample_ratio"
    }

    fn initialize(&self) -> R::Entropy {
        self.entropy.fork()
    }

    fn integrate<D>(&self, entropy: &mut R::Entropy, element: T, downstream: &mut D) -> Result<Disposition>
    where
        D: Downstream<T>,
    {
        if entropy.next_f64() < self.probability {
            downstream.push(element)
        } else {
            Ok(Disposition::Continue)
        }
    }
}
