// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Consecutive grouping by key.

use crate::key::{lift, lift_fallible};
use core::marker::PhantomData;
use gatherflux_core::{Disposition, Downstream, Operator, Result};

/// Collects runs of adjacent elements sharing a key.
///
/// # Behavior
///
/// - A run is emitted as soon as an element with a different key arrives
/// - The open run is emitted at end of input
/// - Non-adjacent elements with equal keys land in different runs
///   (`a1, a2, b1, a3` -> `[a1, a2], [b1], [a3]`)
///
/// Use [`PartitionBy`](crate::PartitionBy) to collect every element of a key into
/// one group regardless of adjacency.
pub struct GroupBy<T, K, F> {
    key: F,
    _marker: PhantomData<fn(T) -> K>,
}

impl<T, K, F> GroupBy<T, K, F>
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

/// Runs of equal elements.
pub fn group_consecutive<T>() -> GroupBy<T, T, impl Fn(&T) -> Result<T>>
where
    T: Clone + PartialEq,
{
    GroupBy::new(lift(T::clone))
}

/// Runs of elements with equal keys.
pub fn group_by<T, K>(key: impl Fn(&T) -> K) -> GroupBy<T, K, impl Fn(&T) -> Result<K>>
where
    K: PartialEq,
{
    GroupBy::new(lift(key))
}

/// Like [`group_by`] with a key function that can fail.
pub fn try_group_by<T, K, E>(
    key: impl Fn(&T) -> core::result::Result<K, E>,
) -> GroupBy<T, K, impl Fn(&T) -> Result<K>>
where
    K: PartialEq,
    E: std::error::Error + Send + Sync + 'static,
{
    GroupBy::new(lift_fallible(key))
}

#[derive(Debug, Clone)]
pub struct GroupRun<T, K> {
    key: Option<K>,
    run: Vec<T>,
}

impl<T, K, F> Operator for GroupBy<T, K, F>
where
    K: PartialEq,
    F: Fn(&T) -> Result<K>,
{
    type Input = T;
    type Output = Vec<T>;
    type State = GroupRun<T, K>;

    fn name(&self) -> &'static str {
        "group_by"
    }

    fn initialize(&self) -> Self::State {
        GroupRun {
            key: None,
            run: Vec::new(),
        }
    }

    fn integrate<D>(&self, state: &mut Self::State, element: T, downstream: &mut D) -> Result<Disposition>
    where
        D: Downstream<Vec<T>>,
    {
        let key = (self.key)(&element)?;
        let mut disposition = Disposition::Continue;
        if state.key.as_ref() != Some(&key) {
            if !state.run.is_empty() {
                disposition = downstream.push(core::mem::take(&mut state.run))?;
            }
            state.key = Some(key);
        }
        state.run.push(element);
        Ok(disposition)
    }

    fn finish<D>(&self, state: Self::State, downstream: &mut D) -> Result<()>
    where
        D: Downstream<Vec<T>>,
    {
        if !state.run.is_empty() {
            let _ = downstream.push(state.run)?;
        }
        Ok(())
    }
}
