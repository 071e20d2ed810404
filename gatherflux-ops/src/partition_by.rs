// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Key-to-group partitioning.

use crate::key::{lift, lift_fallible};
use core::hash::Hash;
use core::marker::PhantomData;
use gatherflux_core::{Disposition, Downstream, Operator, Result};
use std::collections::HashMap;

/// Collects every element into the group of its key and emits `(key, group)` pairs at
/// end of input.
///
/// Groups are emitted in the order their keys were first seen, and elements keep their
/// input order inside a group.
///
/// Mergeable: the groups of a later partition are appended to those of an earlier one.
pub struct PartitionBy<T, K, F> {
    key: F,
    _marker: PhantomData<fn(T) -> K>,
}

impl<T, K, F> PartitionBy<T, K, F>
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

pub fn partition_by<T, K>(key: impl Fn(&T) -> K) -> PartitionBy<T, K, impl Fn(&T) -> Result<K>>
where
    K: Eq + Hash + Clone,
{
    PartitionBy::new(lift(key))
}

pub fn try_partition_by<T, K, E>(
    key: impl Fn(&T) -> core::result::Result<K, E>,
) -> PartitionBy<T, K, impl Fn(&T) -> Result<K>>
where
    K: Eq + Hash + Clone,
    E: std::error::Error + Send + Sync + 'static,
{
    PartitionBy::new(lift_fallible(key))
}

/// Groups in first-seen key order.
#[derive(Debug, Clone)]
pub struct Partitions<K, T> {
    groups: Vec<(K, Vec<T>)>,
    positions: HashMap<K, usize>,
}

impl<K: Eq + Hash + Clone, T> Partitions<K, T> {
    fn new() -> Self {
        Self {
            groups: Vec::new(),
            positions: HashMap::new(),
        }
    }

    fn group_mut(&mut self, key: K) -> &mut Vec<T> {
        let index = match self.positions.get(&key) {
            Some(&index) => index,
            None => {
                let index = self.groups.len();
                self.positions.insert(key.clone(), index);
                self.groups.push((key, Vec::new()));
                index
            }
        };
        &mut self.groups[index].1
    }
}

impl<T, K, F> Operator for PartitionBy<T, K, F>
where
    K: Eq + Hash + Clone,
    F: Fn(&T) -> Result<K>,
{
    type Input = T;
    type Output = (K, Vec<T>);
    type State = Partitions<K, T>;

    fn name(&self) -> &'static str {
        "partition_by"
    }

    fn initialize(&self) -> Self::State {
        Partitions::new()
    }

    fn integrate<D>(&self, state: &mut Self::State, element: T, _downstream: &mut D) -> Result<Disposition>
    where
        D: Downstream<(K, Vec<T>)>,
    {
        let key = (self.key)(&element)?;
        state.group_mut(key).push(element);
        Ok(Disposition::Continue)
    }

    fn finish<D>(&self, state: Self::State, downstream: &mut D) -> Result<()>
    where
        D: Downstream<(K, Vec<T>)>,
    {
        let _ = downstream.push_all(state.groups)?;
        Ok(())
    }

    fn is_mergeable(&self) -> bool {
        true
    }

    fn merge(&self, mut left: Self::State, right: Self::State) -> Result<Self::State> {
        for (key, elements) in right.groups {
            left.group_mut(key).extend(elements);
        }
        Ok(left)
    }
}
