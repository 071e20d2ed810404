// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use gatherflux_core::Result;
use gatherflux_exec::GatherExt;
use gatherflux_ops::{drop_every_nth, intersperse, take_every_nth, with_index};

/// Position-based operators on any iterator.
pub trait IndexingExt: Iterator + Sized {
    /// Pairs each element with its zero-based position.
    fn with_index(self) -> impl Iterator<Item = Result<(u64, Self::Item)>> {
        self.gather(with_index())
    }

    /// Keeps elements `0, n, 2n, ...`.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when `n` is less than 2.
    fn take_every_nth(self, n: u64) -> Result<impl Iterator<Item = Result<Self::Item>>> {
        Ok(self.gather(take_every_nth(n)?))
    }

    /// Drops elements `0, n, 2n, ...`.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when `n` is less than 2.
    fn drop_every_nth(self, n: u64) -> Result<impl Iterator<Item = Result<Self::Item>>> {
        Ok(self.gather(drop_every_nth(n)?))
    }

    /// Places a copy of `separator` between adjacent elements.
    fn separated_by(self, separator: Self::Item) -> impl Iterator<Item = Result<Self::Item>>
    where
        Self::Item: Clone,
    {
        self.gather(intersperse(separator))
    }
}

impl<I: Iterator> IndexingExt for I {}
