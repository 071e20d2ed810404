// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::hash::Hash;
use gatherflux_core::Result;
use gatherflux_exec::GatherExt;
use gatherflux_ops::{dedupe_consecutive, dedupe_consecutive_by, distinct, distinct_by, uniquely_occurring};

/// Duplicate suppression on any iterator.
pub trait DedupeExt: Iterator + Sized {
    /// Drops elements equal to the previously emitted one.
    fn dedupe_consecutive(self) -> impl Iterator<Item = Result<Self::Item>>
    where
        Self::Item: Clone + PartialEq,
    {
        self.gather(dedupe_consecutive())
    }

    fn dedupe_consecutive_by<K, F>(self, key: F) -> impl Iterator<Item = Result<Self::Item>>
    where
        K: PartialEq,
        F: Fn(&Self::Item) -> K,
    {
        self.gather(dedupe_consecutive_by(key))
    }

    /// Drops every element seen before. Remembers every distinct element.
    fn distinct(self) -> impl Iterator<Item = Result<Self::Item>>
    where
        Self::Item: Clone + Eq + Hash,
    {
        self.gather(distinct())
    }

    fn distinct_by<K, F>(self, key: F) -> impl Iterator<Item = Result<Self::Item>>
    where
        K: Eq + Hash,
        F: Fn(&Self::Item) -> K,
    {
        self.gather(distinct_by(key))
    }

    /// Elements occurring exactly once, in arrival order, once the input is exhausted.
    fn uniquely_occurring(self) -> impl Iterator<Item = Result<Self::Item>>
    where
        Self::Item: Clone + Eq + Hash,
    {
        self.gather(uniquely_occurring())
    }
}

impl<I: Iterator> DedupeExt for I {}
