// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use gatherflux_core::Result;
use gatherflux_exec::GatherExt;
use gatherflux_ops::{drop_last, take_last, take_until};

/// Truncation on any iterator.
pub trait SlicingExt: Iterator + Sized {
    /// The final `count` elements, emitted once the input is exhausted.
    fn take_last(self, count: usize) -> impl Iterator<Item = Result<Self::Item>> {
        self.gather(take_last(count))
    }

    /// Everything except the final `count` elements.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when `count` is zero.
    fn drop_last(self, count: usize) -> Result<impl Iterator<Item = Result<Self::Item>>> {
        Ok(self.gather(drop_last(count)?))
    }

    /// Elements up to and including the first one matching `predicate`. The source is
    /// not pulled any further after the match.
    fn take_until<P>(self, predicate: P) -> impl Iterator<Item = Result<Self::Item>>
    where
        P: Fn(&Self::Item) -> bool,
    {
        self.gather(take_until(predicate))
    }
}

impl<I: Iterator> SlicingExt for I {}
