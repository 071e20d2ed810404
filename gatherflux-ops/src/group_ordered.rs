// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Split input into maximal ordered runs.

use core::cmp::Ordering;
use core::marker::PhantomData;
use gatherflux_core::{Disposition, Downstream, Operator, Order, Result};

/// Groups consecutive elements into runs that respect an [`Order`].
///
/// A new run starts whenever an element does not respect the order relative to its
/// predecessor; the open run is emitted at end of input.
///
/// `[1, 2, 2, 1, 5]` with [`Order::NonDecreasing`] gives `[[1, 2, 2], [1, 5]]`.
pub struct GroupOrdered<T, C> {
    order: Order,
    compare: C,
    _marker: PhantomData<fn(T) -> T>,
}

impl<T, C> GroupOrdered<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    pub const fn new(order: Order, compare: C) -> Self {
        Self {
            order,
            compare,
            _marker: PhantomData,
        }
    }
}

pub fn group_ordered<T: Ord>(order: Order) -> GroupOrdered<T, impl Fn(&T, &T) -> Ordering> {
    GroupOrdered::new(order, T::cmp)
}

pub fn group_ordered_by<T>(
    order: Order,
    compare: impl Fn(&T, &T) -> Ordering,
) -> GroupOrdered<T, impl Fn(&T, &T) -> Ordering> {
    GroupOrdered::new(order, compare)
}

impl<T, C> Operator for GroupOrdered<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    type Input = T;
    type Output = Vec<T>;
    type State = Vec<T>;

    fn name(&self) -> &'static str {
        "group_ordered"
    }

    fn initialize(&self) -> Vec<T> {
        Vec::new()
    }

    fn integrate<D>(&self, run: &mut Vec<T>, element: T, downstream: &mut D) -> Result<Disposition>
    where
        D: Downstream<Vec<T>>,
    {
        let breaks = run
            .last()
            .is_some_and(|last| !self.order.allows((self.compare)(&element, last)));
        let disposition = if breaks {
            downstream.push(core::mem::take(run))?
        } else {
            Disposition::Continue
        };
        run.push(element);
        Ok(disposition)
    }

    fn finish<D>(&self, run: Vec<T>, downstream: &mut D) -> Result<()>
    where
        D: Downstream<Vec<T>>,
    {
        if !run.is_empty() {
            let _ = downstream.push(run)?;
        }
        Ok(())
    }
}
