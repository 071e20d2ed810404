// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Consecutive-duplicate suppression.

use crate::key::{lift, lift_fallible};
use core::marker::PhantomData;
use gatherflux_core::{Disposition, Downstream, Operator, Result};

/// Emits an element only when its key differs from the key of the previously emitted
/// element.
///
/// # Behavior
///
/// - The first element is always emitted
/// - Later elements are compared with the last *emitted* element only
/// - Non-adjacent repeats are emitted again (`1, 1, 2, 1` -> `1, 2, 1`)
/// - Applying the operator twice gives the same result as applying it once
///
/// # Error Handling
///
/// An error returned by a fallible key function aborts the pipeline unchanged.
pub struct DedupeConsecutive<T, K, F> {
    key: F,
    _marker: PhantomData<fn(T) -> K>,
}

impl<T, K, F> DedupeConsecutive<T, K, F>
where
    F: Fn(&T) -> Result<K>,
{
    pub const fn new(key: F) -> Self {
        Self {
            key,
            _marker: PhantomData,
        }
    }
}

/// Suppresses elements equal to the previous emitted element.
pub fn dedupe_consecutive<T>() -> DedupeConsecutive<T, T, impl Fn(&T) -> Result<T>>
where
    T: Clone + PartialEq,
{
    DedupeConsecutive::new(lift(T::clone))
}

/// Suppresses elements whose key equals the key of the previous emitted element.
pub fn dedupe_consecutive_by<T, K>(
    key: impl Fn(&T) -> K,
) -> DedupeConsecutive<T, K, impl Fn(&T) -> Result<K>>
where
    K: PartialEq,
{
    DedupeConsecutive::new(lift(key))
}

/// Like [`dedupe_consecutive_by`] with a key function that can fail.
pub fn try_dedupe_consecutive_by<T, K, E>(
    key: impl Fn(&T) -> core::result::Result<K, E>,
) -> DedupeConsecutive<T, K, impl Fn(&T) -> Result<K>>
where
    K: PartialEq,
    E: std::error::Error + Send + Sync + 'static,
{
    DedupeConsecutive::new(lift_fallible(key))
}

impl<T, K, F> Operator for DedupeConsecutive<T, K, F>
where
    K: PartialEq,
    F: Fn(&T) -> Result<K>,
{
    type Input = T;
    type Output = T;
    type State = Option<K>;

    fn name(&self) -> &'static str {
        "dedupe_consecutive"
    }

    fn initialize(&self) -> Option<K> {
        None
    }

    fn integrate<D>(&self, last: &mut Option<K>, element: T, downstream: &mut D) -> Result<Disposition>
    where
        D: Downstream<T>,
    {
        let key = (self.key)(&element)?;
        if last.as_ref() == Some(&key) {
            return Ok(Disposition::Continue);
        }
        *last = Some(key);
        downstream.push(element)
    }
}
