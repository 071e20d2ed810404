// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Global deduplication.

use crate::key::{lift, lift_fallible};
use core::hash::Hash;
use core::marker::PhantomData;
use gatherflux_core::{Disposition, Downstream, Operator, Result};
use std::collections::HashSet;

/// Emits only the first element seen for each key.
///
/// # Memory
///
/// Every distinct key is remembered until the traversal ends, so memory grows with the
/// number of distinct keys and is unbounded for unbounded inputs.
///
/// Sequential-only: a later partition cannot know which keys an earlier one emitted.
pub struct Distinct<T, K, F> {
    key: F,
    _marker: PhantomData<fn(T) -> K>,
}

impl<T, K, F> Distinct<T, K, F>
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

/// Drops every element equal to one seen before.
pub fn distinct<T>() -> Distinct<T, T, impl Fn(&T) -> Result<T>>
where
    T: Clone + Eq + Hash,
{
    Distinct::new(lift(T::clone))
}

/// Drops every element whose key was seen before.
pub fn distinct_by<T, K>(key: impl Fn(&T) -> K) -> Distinct<T, K, impl Fn(&T) -> Result<K>>
where
    K: Eq + Hash,
{
    Distinct::new(lift(key))
}

/// Like [`distinct_by`] with a key function that can fail.
pub fn try_distinct_by<T, K, E>(
    key: impl Fn(&T) -> core::result::Result<K, E>,
) -> Distinct<T, K, impl Fn(&T) -> Result<K>>
where
    K: Eq + Hash,
    E: std::error::Error + Send + Sync + 'static,
{
    Distinct::new(lift_fallible(key))
}

impl<T, K, F> Operator for Distinct<T, K, F>
where
    K: Eq + Hash,
    F: Fn(&T) -> Result<K>,
{
    type Input = T;
    type Output = T;
    type State = HashSet<K>;

    fn name(&self) -> &'static str {
        "distinct"
    }

    fn initialize(&self) -> HashSet<K> {
        HashSet::new()
    }

    fn integrate<D>(&self, seen: &mut HashSet<K>, element: T, downstream: &mut D) -> Result<Disposition>
    where
        D: Downstream<T>,
    {
        if seen.insert((self.key)(&element)?) {
            downstream.push(element)
        } else {
            Ok(Disposition::Continue)
        }
    }
}
