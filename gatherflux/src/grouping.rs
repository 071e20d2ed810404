// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::hash::Hash;
use gatherflux_core::Result;
use gatherflux_exec::GatherExt;
use gatherflux_ops::{group_by, group_consecutive, partition_by};

/// Key-based grouping on any iterator.
pub trait GroupingExt: Iterator + Sized {
    /// Runs of equal adjacent elements.
    fn group_consecutive(self) -> impl Iterator<Item = Result<Vec<Self::Item>>>
    where
        Self::Item: Clone + PartialEq,
    {
        self.gather(group_consecutive())
    }

    /// Runs of adjacent elements sharing the same key. A key that reappears later
    /// starts a new group.
    fn group_by_key<K, F>(self, key: F) -> impl Iterator<Item = Result<Vec<Self::Item>>>
    where
        K: PartialEq,
        F: Fn(&Self::Item) -> K,
    {
        self.gather(group_by(key))
    }

    /// Every element grouped under its key, emitted at the end in first-seen key order.
    fn partition_by_key<K, F>(self, key: F) -> impl Iterator<Item = Result<(K, Vec<Self::Item>)>>
    where
        K: Eq + Hash + Clone,
        F: Fn(&Self::Item) -> K,
    {
        self.gather(partition_by(key))
    }
}

impl<I: Iterator> GroupingExt for I {}
