// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Deterministic decimation.

use core::marker::PhantomData;
use gatherflux_core::config::reject;
use gatherflux_core::{Disposition, Downstream, Operator, Result};

/// What happens to the elements at positions `0, n, 2n, ...`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EveryNthMode {
    /// Keep only those elements
    Take,
    /// Keep everything but those elements
    Drop,
}

/// Keeps or drops every `n`-th element, counting from the first one.
///
/// `[0, 1, 2, 3, 4, 5, 6]` with `n = 3` gives `[0, 3, 6]` when taking and
/// `[1, 2, 4, 5]` when dropping.
#[derive(Debug, Clone, Copy)]
pub struct EveryNth<T> {
    n: u64,
    mode: EveryNthMode,
    _marker: PhantomData<fn(T) -> T>,
}

impl<T> EveryNth<T> {
    /// # Errors
    ///
    /// Returns a configuration error when `n` is less than 2.
    pub fn new(n: u64, mode: EveryNthMode) -> Result<Self> {
        if n < 2 {
            return Err(reject("every_nth", format!("n must be at least 2, got {n}")));
        }
        Ok(Self {
            n,
            mode,
            _marker: PhantomData,
        })
    }
}

/// Keeps elements `0, n, 2n, ...`.
///
/// # Errors
///
/// Returns a configuration error when `n` is less than 2.
pub fn take_every_nth<T>(n: u64) -> Result<EveryNth<T>> {
    EveryNth::new(n, EveryNthMode::Take)
}

/// Drops elements `0, n, 2n, ...`.
///
/// # Errors
///
/// Returns a configuration error when `n` is less than 2.
pub fn drop_every_nth<T>(n: u64) -> Result<EveryNth<T>> {
    EveryNth::new(n, EveryNthMode::Drop)
}

impl<T> Operator for EveryNth<T> {
    type Input = T;
    type Output = T;
    type State = u64;

    fn name(&self) -> &'static str {
        "every_nth"
    }

    fn initialize(&self) -> u64 {
        0
    }

    fn integrate<D>(&self, position: &mut u64, element: T, downstream: &mut D) -> Result<Disposition>
    where
        D: Downstream<T>,
    {
        let hit = *position % self.n == 0;
        *position = position.wrapping_add(1);
        let keep = match self.mode {
            EveryNthMode::Take => hit,
            EveryNthMode::Drop => !hit,
        };
        if keep {
            downstream.push(element)
        } else {
            Ok(Disposition::Continue)
        }
    }
}
