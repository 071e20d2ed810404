// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Uniform fixed-size sample over a sequence of unknown length.

use crate::entropy::Entropy;
use core::num::NonZeroUsize;

/// Reservoir holding a uniform random sample of at most `capacity` elements.
///
/// After `n` offers every offered element is retained with probability `capacity / n`
/// (Algorithm R). Each slot remembers the arrival position of its element so the
/// sample can also be read back in arrival order.
#[derive(Debug, Clone)]
pub struct Reservoir<T> {
    slots: Vec<(u64, T)>,
    capacity: usize,
    seen: u64,
}

impl<T> Reservoir<T> {
    /// Creates an empty reservoir.
    #[must_use]
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity.get()),
            capacity: capacity.get(),
            seen: 0,
        }
    }

    /// Offers one element.
    ///
    /// The `i`-th offer (1-based) fills a free slot while `i <= capacity`; afterwards it
    /// replaces a uniformly chosen slot with probability `capacity / i`.
    pub fn offer<R>(&mut self, item: T, entropy: &mut R)
    where
        R: Entropy + ?Sized,
    {
        let position = self.seen;
        self.seen += 1;
        if self.slots.len() < self.capacity {
            self.slots.push((position, item));
            return;
        }
        let slot = entropy.next_below(self.seen);
        if let Ok(slot) = usize::try_from(slot) {
            if slot < self.capacity {
                self.slots[slot] = (position, item);
            }
        }
    }

    /// Total number of elements offered so far.
    #[must_use]
    pub const fn seen(&self) -> u64 {
        self.seen
    }

    /// Number of retained elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if nothing has been offered yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Maximum number of retained elements.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Consumes the reservoir, returning the sample in slot order.
    #[must_use]
    pub fn into_samples(self) -> Vec<T> {
        self.slots.into_iter().map(|(_, item)| item).collect()
    }

    /// Consumes the reservoir, returning the sample in the order elements arrived.
    #[must_use]
    pub fn into_arrival_order(mut self) -> Vec<T> {
        self.slots.sort_unstable_by_key(|(position, _)| *position);
        self.into_samples()
    }
}
