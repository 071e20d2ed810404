// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::cmp::Ordering;
use gatherflux_core::{Order, Result};
use gatherflux_exec::GatherExt;
use gatherflux_ops::{
    ensure_ordered, ensure_ordered_by, filter_ordered, filter_ordered_by, group_ordered,
    group_ordered_by, reverse, OnViolation,
};

/// Order checks and order-driven transforms on any iterator.
pub trait OrderingExt: Iterator + Sized {
    /// Passes elements through while they follow `order`.
    ///
    /// The first out-of-order element fails the traversal with
    /// [`GatherError::OrderViolation`](gatherflux_core::GatherError::OrderViolation)
    /// carrying its zero-based index.
    fn ensure_ordered(self, order: Order) -> impl Iterator<Item = Result<Self::Item>>
    where
        Self::Item: Ord + Clone,
    {
        self.gather(ensure_ordered(order))
    }

    /// Like [`ensure_ordered`](Self::ensure_ordered), with an explicit comparator and
    /// violation policy.
    fn ensure_ordered_by<C>(
        self,
        order: Order,
        compare: C,
        on_violation: OnViolation,
    ) -> impl Iterator<Item = Result<Self::Item>>
    where
        Self::Item: Clone,
        C: Fn(&Self::Item, &Self::Item) -> Ordering,
    {
        self.gather(ensure_ordered_by(order, compare).on_violation(on_violation))
    }

    /// Silently drops elements that break `order` relative to the last kept element.
    fn filter_ordered(self, order: Order) -> impl Iterator<Item = Result<Self::Item>>
    where
        Self::Item: Ord + Clone,
    {
        self.gather(filter_ordered(order))
    }

    fn filter_ordered_by<C>(self, order: Order, compare: C) -> impl Iterator<Item = Result<Self::Item>>
    where
        Self::Item: Clone,
        C: Fn(&Self::Item, &Self::Item) -> Ordering,
    {
        self.gather(filter_ordered_by(order, compare))
    }

    /// Splits the input into maximal runs that follow `order`.
    fn group_ordered(self, order: Order) -> impl Iterator<Item = Result<Vec<Self::Item>>>
    where
        Self::Item: Ord,
    {
        self.gather(group_ordered(order))
    }

    fn group_ordered_by<C>(self, order: Order, compare: C) -> impl Iterator<Item = Result<Vec<Self::Item>>>
    where
        C: Fn(&Self::Item, &Self::Item) -> Ordering,
    {
        self.gather(group_ordered_by(order, compare))
    }

    /// Buffers the whole input and emits it back to front.
    fn reversed(self) -> impl Iterator<Item = Result<Self::Item>> {
        self.gather(reverse())
    }
}

impl<I: Iterator> OrderingExt for I {}
