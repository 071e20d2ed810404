// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Elements that occur exactly once.

use crate::frequency::Counts;
use core::hash::Hash;
use core::marker::PhantomData;
use gatherflux_core::{Disposition, Downstream, Operator, Result};

/// Emits, at end of input, every element that occurred exactly once, in the order the
/// elements arrived.
///
/// Nothing can be emitted earlier: any element may still repeat. Memory grows with the
/// number of distinct elements.
///
/// Mergeable: occurrence counts of two partitions are summed.
#[derive(Debug, Clone, Copy)]
pub struct UniquelyOccurring<T> {
    _marker: PhantomData<fn(T) -> T>,
}

impl<T: Eq + Hash + Clone> UniquelyOccurring<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T: Eq + Hash + Clone> Default for UniquelyOccurring<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[must_use]
pub const fn uniquely_occurring<T: Eq + Hash + Clone>() -> UniquelyOccurring<T> {
    UniquelyOccurring::new()
}

impl<T: Eq + Hash + Clone> Operator for UniquelyOccurring<T> {
    type Input = T;
    type Output = T;
    type State = Counts<T>;

    fn name(&self) -> &'static str {
        "uniquely_occurring"
    }

    fn initialize(&self) -> Counts<T> {
        Counts::default()
    }

    fn integrate<D>(&self, counts: &mut Counts<T>, element: T, _downstream: &mut D) -> Result<Disposition>
    where
        D: Downstream<T>,
    {
        counts.add(element, 1);
        Ok(Disposition::Continue)
    }

    fn finish<D>(&self, counts: Counts<T>, downstream: &mut D) -> Result<()>
    where
        D: Downstream<T>,
    {
        let singles = counts
            .into_entries()
            .into_iter()
            .filter(|entry| entry.count == 1)
            .map(|entry| entry.value);
        let _ = downstream.push_all(singles)?;
        Ok(())
    }

    fn is_mergeable(&self) -> bool {
        true
    }

    fn merge(&self, left: Counts<T>, right: Counts<T>) -> Result<Counts<T>> {
        Ok(left.absorb(right))
    }
}
