// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Occurrence counting.

use core::hash::Hash;
use core::marker::PhantomData;
use gatherflux_core::{Disposition, Downstream, Operator, Result};
use std::collections::HashMap;

/// Sort direction of the emitted counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FrequencyOrder {
    /// Rarest first
    Ascending,
    /// Most frequent first
    #[default]
    Descending,
}

/// A distinct element and the number of times it occurred.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WithCount<T> {
    pub value: T,
    pub count: u64,
}

/// Counts every distinct element and emits the counts at end of input, sorted by count.
///
/// Equal counts keep the order in which their elements were first seen. Memory grows
/// with the number of distinct elements.
///
/// Mergeable: counts of two partitions are summed.
#[derive(Debug, Clone, Copy)]
pub struct Frequency<T> {
    order: FrequencyOrder,
    _marker: PhantomData<fn(T) -> T>,
}

impl<T: Eq + Hash + Clone> Frequency<T> {
    #[must_use]
    pub const fn new(order: FrequencyOrder) -> Self {
        Self {
            order,
            _marker: PhantomData,
        }
    }
}

#[must_use]
pub const fn frequency<T: Eq + Hash + Clone>(order: FrequencyOrder) -> Frequency<T> {
    Frequency::new(order)
}

/// Occurrence counts in first-seen order.
#[derive(Debug, Clone)]
pub struct Counts<T> {
    counts: Vec<WithCount<T>>,
    positions: HashMap<T, usize>,
}

impl<T> Default for Counts<T> {
    fn default() -> Self {
        Self {
            counts: Vec::new(),
            positions: HashMap::new(),
        }
    }
}

impl<T: Eq + Hash + Clone> Counts<T> {
    pub(crate) fn add(&mut self, value: T, count: u64) {
        match self.positions.get(&value) {
            Some(&index) => self.counts[index].count += count,
            None => {
                self.positions.insert(value.clone(), self.counts.len());
                self.counts.push(WithCount { value, count });
            }
        }
    }

    /// Adds the counts of `other`; its new elements follow the ones already seen.
    pub(crate) fn absorb(mut self, other: Self) -> Self {
        for WithCount { value, count } in other.counts {
            self.add(value, count);
        }
        self
    }

    pub(crate) fn into_entries(self) -> Vec<WithCount<T>> {
        self.counts
    }
}

impl<T: Eq + Hash + Clone> Operator for Frequency<T> {
    type Input = T;
    type Output = WithCount<T>;
    type State = Counts<T>;

    fn name(&self) -> &'static str {
        "frequency"
    }

    fn initialize(&self) -> Counts<T> {
        Counts::default()
    }

    fn integrate<D>(&self, state: &mut Counts<T>, element: T, _downstream: &mut D) -> Result<Disposition>
    where
        D: Downstream<WithCount<T>>,
    {
        state.add(element, 1);
        Ok(Disposition::Continue)
    }

    fn finish<D>(&self, state: Counts<T>, downstream: &mut D) -> Result<()>
    where
        D: Downstream<WithCount<T>>,
    {
        let mut counts = state.into_entries();
        match self.order {
            FrequencyOrder::Ascending => counts.sort_by_key(|entry| entry.count),
            FrequencyOrder::Descending => counts.sort_by_key(|entry| core::cmp::Reverse(entry.count)),
        }
        let _ = downstream.push_all(counts)?;
        Ok(())
    }

    fn is_mergeable(&self) -> bool {
        true
    }

    fn merge(&self, left: Counts<T>, right: Counts<T>) -> Result<Counts<T>> {
        Ok(left.absorb(right))
    }
}
