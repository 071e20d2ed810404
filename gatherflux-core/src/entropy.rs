// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Injectable randomness for sampling operators.

/// Source of uniform random numbers.
///
/// Randomized operators never reach for a global generator; they draw from the
/// generator their [`EntropySource`] forks for the traversal.
pub trait Entropy {
    /// Uniform value in `[0, 1)`.
    fn next_f64(&mut self) -> f64;

    /// Uniform value in `[0, bound)`. `bound` is always greater than zero.
    fn next_below(&mut self, bound: u64) -> u64;
}

impl Entropy for fastrand::Rng {
    fn next_f64(&mut self) -> f64 {
        self.f64()
    }

    fn next_below(&mut self, bound: u64) -> u64 {
        self.u64(0..bound)
    }
}

impl<E: Entropy + ?Sized> Entropy for &mut E {
    fn next_f64(&mut self) -> f64 {
        (**self).next_f64()
    }

    fn next_below(&mut self, bound: u64) -> u64 {
        (**self).next_below(bound)
    }
}

/// Hands each traversal of a randomized operator its own generator.
///
/// Every cloneable [`Entropy`] is a source that forks by cloning, so a seeded
/// [`fastrand::Rng`] replays the same draws on every traversal. [`OsEntropy`] forks a
/// freshly seeded generator instead.
pub trait EntropySource {
    type Entropy: Entropy;

    fn fork(&self) -> Self::Entropy;
}

impl<E: Entropy + Clone> EntropySource for E {
    type Entropy = E;

    fn fork(&self) -> E {
        self.clone()
    }
}

/// Seeds a new generator from the operating system for every traversal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    type Entropy = fastrand::Rng;

    fn fork(&self) -> fastrand::Rng {
        from_os()
    }
}

/// A generator seeded from the operating system.
#[must_use]
pub fn from_os() -> fastrand::Rng {
    fastrand::Rng::new()
}

/// A deterministic generator for reproducible runs.
#[must_use]
pub fn seeded(seed: u64) -> fastrand::Rng {
    fastrand::Rng::with_seed(seed)
}
