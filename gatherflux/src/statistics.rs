// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::cmp::Ordering;
use core::hash::Hash;
use gatherflux_core::buffer::Statistics;
use gatherflux_core::Result;
use gatherflux_exec::GatherExt;
use gatherflux_ops::{
    frequency, max_by, max_by_key, min_by, min_by_key, running_statistics, running_statistics_by,
    running_sum, summarize, summarize_by, FrequencyOrder, WithCount,
};

/// Aggregations on any iterator.
pub trait StatisticsExt: Iterator + Sized {
    /// Statistics of every prefix, one snapshot per element.
    fn running_statistics(self) -> impl Iterator<Item = Result<Statistics>>
    where
        Self::Item: Copy + Into<f64>,
    {
        self.gather(running_statistics())
    }

    fn running_statistics_by<F>(self, value: F) -> impl Iterator<Item = Result<Statistics>>
    where
        F: Fn(&Self::Item) -> f64,
    {
        self.gather(running_statistics_by(value))
    }

    /// Statistics of the whole input as a single element, [`Statistics::EMPTY`] when the
    /// input is empty.
    ///
    /// # Errors
    ///
    /// Returns a numeric error when an element is not finite.
    fn summarize(self) -> Result<Statistics>
    where
        Self::Item: Copy + Into<f64>,
    {
        single(self.gather(summarize()))
    }

    /// # Errors
    ///
    /// Returns a numeric error when an extracted value is not finite.
    fn summarize_by<F>(self, value: F) -> Result<Statistics>
    where
        F: Fn(&Self::Item) -> f64,
    {
        single(self.gather(summarize_by(value)))
    }

    /// Checked running total.
    fn running_sum(self) -> impl Iterator<Item = Result<i64>>
    where
        Self::Item: Copy + Into<i64>,
    {
        self.gather(running_sum())
    }

    /// Occurrence counts of the distinct elements, sorted by count.
    fn frequency(self, order: FrequencyOrder) -> impl Iterator<Item = Result<WithCount<Self::Item>>>
    where
        Self::Item: Eq + Hash + Clone,
    {
        self.gather(frequency(order))
    }

    /// The largest element by `compare`, the first one on ties. Empty input yields nothing.
    fn maximum_by<F>(self, compare: F) -> impl Iterator<Item = Result<Self::Item>>
    where
        F: Fn(&Self::Item, &Self::Item) -> Ordering,
    {
        self.gather(max_by(compare))
    }

    /// The smallest element by `compare`, the first one on ties. Empty input yields nothing.
    fn minimum_by<F>(self, compare: F) -> impl Iterator<Item = Result<Self::Item>>
    where
        F: Fn(&Self::Item, &Self::Item) -> Ordering,
    {
        self.gather(min_by(compare))
    }

    fn maximum_by_key<K, F>(self, key: F) -> impl Iterator<Item = Result<Self::Item>>
    where
        K: Ord,
        F: Fn(&Self::Item) -> K,
    {
        self.gather(max_by_key(key))
    }

    fn minimum_by_key<K, F>(self, key: F) -> impl Iterator<Item = Result<Self::Item>>
    where
        K: Ord,
        F: Fn(&Self::Item) -> K,
    {
        self.gather(min_by_key(key))
    }
}

impl<I: Iterator> StatisticsExt for I {}

fn single(mut outputs: impl Iterator<Item = Result<Statistics>>) -> Result<Statistics> {
    outputs.next().unwrap_or(Ok(Statistics::EMPTY))
}
