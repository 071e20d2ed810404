// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Smallest or largest element by a comparator.

use core::cmp::Ordering;
use core::marker::PhantomData;
use gatherflux_core::{Disposition, Downstream, Operator, Result};

/// Which end of the order [`MinMax`] keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Extreme {
    Min,
    Max,
}

/// Emits the smallest or largest element at end of input; nothing for an empty input.
///
/// Among equal elements the first one seen wins, for both ends.
///
/// Mergeable: the better of the two partition results is kept, preferring the left
/// partition on ties, which matches a sequential traversal.
#[derive(Debug, Clone)]
pub struct MinMax<T, F> {
    extreme: Extreme,
    compare: F,
    _marker: PhantomData<fn(T) -> T>,
}

impl<T, F> MinMax<T, F>
where
    F: Fn(&T, &T) -> Ordering,
{
    pub const fn new(extreme: Extreme, compare: F) -> Self {
        Self {
            extreme,
            compare,
            _marker: PhantomData,
        }
    }

    #[must_use]
    pub const fn extreme(&self) -> Extreme {
        self.extreme
    }

    fn replaces(&self, candidate: &T, best: &T) -> bool {
        match self.extreme {
            Extreme::Min => (self.compare)(candidate, best) == Ordering::Less,
            Extreme::Max => (self.compare)(candidate, best) == Ordering::Greater,
        }
    }
}

#[must_use]
pub fn maximum<T: Ord>() -> MinMax<T, impl Fn(&T, &T) -> Ordering> {
    MinMax::new(Extreme::Max, |a: &T, b: &T| a.cmp(b))
}

#[must_use]
pub fn minimum<T: Ord>() -> MinMax<T, impl Fn(&T, &T) -> Ordering> {
    MinMax::new(Extreme::Min, |a: &T, b: &T| a.cmp(b))
}

pub fn max_by<T>(compare: impl Fn(&T, &T) -> Ordering) -> MinMax<T, impl Fn(&T, &T) -> Ordering> {
    MinMax::new(Extreme::Max, compare)
}

pub fn min_by<T>(compare: impl Fn(&T, &T) -> Ordering) -> MinMax<T, impl Fn(&T, &T) -> Ordering> {
    MinMax::new(Extreme::Min, compare)
}

/// Largest element by the value `key` extracts.
pub fn max_by_key<T, K: Ord>(key: impl Fn(&T) -> K) -> MinMax<T, impl Fn(&T, &T) -> Ordering> {
    MinMax::new(Extreme::Max, move |a: &T, b: &T| key(a).cmp(&key(b)))
}

/// Smallest element by the value `key` extracts.
pub fn min_by_key<T, K: Ord>(key: impl Fn(&T) -> K) -> MinMax<T, impl Fn(&T, &T) -> Ordering> {
    MinMax::new(Extreme::Min, move |a: &T, b: &T| key(a).cmp(&key(b)))
}

impl<T, F> Operator for MinMax<T, F>
where
    F: Fn(&T, &T) -> Ordering,
{
    type Input = T;
    type Output = T;
    type State = Option<T>;

    fn name(&self) -> &'static str {
        match self.extreme {
            Extreme::Min => "min",
            Extreme::Max => "max",
        }
    }

    fn initialize(&self) -> Option<T> {
        None
    }

    fn integrate<D>(&self, best: &mut Option<T>, element: T, _downstream: &mut D) -> Result<Disposition>
    where
        D: Downstream<T>,
    {
        let keep = best.as_ref().map_or(true, |current| self.replaces(&element, current));
        if keep {
            *best = Some(element);
        }
        Ok(Disposition::Continue)
    }

    fn finish<D>(&self, best: Option<T>, downstream: &mut D) -> Result<()>
    where
        D: Downstream<T>,
    {
        if let Some(best) = best {
            let _ = downstream.push(best)?;
        }
        Ok(())
    }

    fn is_mergeable(&self) -> bool {
        true
    }

    fn merge(&self, left: Option<T>, right: Option<T>) -> Result<Option<T>> {
        Ok(match (left, right) {
            (Some(left), Some(right)) if self.replaces(&right, &left) => Some(right),
            (Some(left), _) => Some(left),
            (None, right) => right,
        })
    }
}
