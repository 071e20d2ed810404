// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Monotonicity check.

use core::cmp::Ordering;
use core::marker::PhantomData;
use gatherflux_core::{Disposition, Downstream, GatherError, Operator, Order, Result};

/// Reaction to an element that breaks the expected order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OnViolation {
    /// Abort with [`GatherError::OrderViolation`]
    #[default]
    Fail,
    /// End the output quietly before the offending element
    Stop,
}

/// Passes elements through while they respect an [`Order`].
///
/// # Behavior
///
/// - The first element always passes
/// - Each later element is compared with its predecessor
/// - `[1, 2, 2, 3]` passes unchanged under [`Order::NonDecreasing`]
/// - `[1, 3, 2]` emits `1, 3`, then reports the violation at index 2
///
/// # Error Handling
///
/// With [`OnViolation::Fail`] (the default) the violation is an
/// [`GatherError::OrderViolation`] carrying the zero-based index of the offending
/// element. With [`OnViolation::Stop`] the pipeline stops without an error.
pub struct EnsureOrdered<T, C> {
    order: Order,
    compare: C,
    on_violation: OnViolation,
    _marker: PhantomData<fn(T) -> T>,
}

impl<T, C> EnsureOrdered<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    pub const fn new(order: Order, compare: C) -> Self {
        Self {
            order,
            compare,
            on_violation: OnViolation::Fail,
            _marker: PhantomData,
        }
    }

    #[must_use]
    pub const fn on_violation(mut self, on_violation: OnViolation) -> Self {
        self.on_violation = on_violation;
        self
    }
}

/// Checks the natural order of the elements.
pub fn ensure_ordered<T: Ord + Clone>(order: Order) -> EnsureOrdered<T, impl Fn(&T, &T) -> Ordering> {
    EnsureOrdered::new(order, T::cmp)
}

/// Checks the order defined by `compare`.
pub fn ensure_ordered_by<T: Clone>(
    order: Order,
    compare: impl Fn(&T, &T) -> Ordering,
) -> EnsureOrdered<T, impl Fn(&T, &T) -> Ordering> {
    EnsureOrdered::new(order, compare)
}

/// Checks the natural order of the keys extracted by `key`.
pub fn ensure_ordered_by_key<T: Clone, K: Ord>(
    order: Order,
    key: impl Fn(&T) -> K,
) -> EnsureOrdered<T, impl Fn(&T, &T) -> Ordering> {
    EnsureOrdered::new(order, move |a: &T, b: &T| key(a).cmp(&key(b)))
}

#[derive(Debug, Clone)]
pub struct EnsureOrderedState<T> {
    previous: Option<T>,
    index: u64,
}

impl<T, C> Operator for EnsureOrdered<T, C>
where
    T: Clone,
    C: Fn(&T, &T) -> Ordering,
{
    type Input = T;
    type Output = T;
    type State = EnsureOrderedState<T>;

    fn name(&self) -> &'static str {
        "ensure_ordered"
    }

    fn initialize(&self) -> Self::State {
        EnsureOrderedState {
            previous: None,
            index: 0,
        }
    }

    fn integrate<D>(&self, state: &mut Self::State, element: T, downstream: &mut D) -> Result<Disposition>
    where
        D: Downstream<T>,
    {
        let index = state.index;
        state.index += 1;
        if let Some(previous) = &state.previous {
            if !self.order.allows((self.compare)(&element, previous)) {
                return match self.on_violation {
                    OnViolation::Fail => Err(GatherError::order_violation(
                        index,
                        format!("expected {} input", self.order),
                    )),
                    OnViolation::Stop => {
                        debug!("ensure_ordered: stopping at index {index}, input not {}", self.order);
                        Ok(Disposition::Stop)
                    }
                };
            }
        }
        state.previous = Some(element.clone());
        downstream.push(element)
    }
}
