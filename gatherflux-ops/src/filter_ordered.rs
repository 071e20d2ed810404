// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Drop elements that would break an order.

use core::cmp::Ordering;
use core::marker::PhantomData;
use gatherflux_core::{Disposition, Downstream, Operator, Order, Result};

/// Emits only the elements that respect an [`Order`] relative to the last *emitted*
/// element, so the output is always ordered.
///
/// `[1, 3, 2, 4, 4, 5]` with [`Order::Increasing`] gives `[1, 3, 4, 5]`.
pub struct FilterOrdered<T, C> {
    order: Order,
    compare: C,
    _marker: PhantomData<fn(T) -> T>,
}

impl<T, C> FilterOrdered<T, C>
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

pub fn filter_ordered<T: Ord + Clone>(order: Order) -> FilterOrdered<T, impl Fn(&T, &T) -> Ordering> {
    FilterOrdered::new(order, T::cmp)
}

pub fn filter_ordered_by<T: Clone>(
    order: Order,
    compare: impl Fn(&T, &T) -> Ordering,
) -> FilterOrdered<T, impl Fn(&T, &T) -> Ordering> {
    FilterOrdered::new(order, compare)
}

impl<T, C> Operator for FilterOrdered<T, C>
where
    T: Clone,
    C: Fn(&T, &T) -> Ordering,
{
    type Input = T;
    type Output = T;
    type State = Option<T>;

    fn name(&self) -> &'static str {
        "filter_ordered"
    }

    fn initialize(&self) -> Option<T> {
        None
    }

    fn integrate<D>(&self, last: &mut Option<T>, element: T, downstream: &mut D) -> Result<Disposition>
    where
        D: Downstream<T>,
    {
        let keep = last
            .as_ref()
            .map_or(true, |last| self.order.allows((self.compare)(&element, last)));
        if !keep {
            return Ok(Disposition::Continue);
        }
        *last = Some(element.clone());
        downstream.push(element)
    }
}
