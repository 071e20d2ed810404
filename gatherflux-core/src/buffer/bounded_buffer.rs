// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Fixed-capacity FIFO buffer.

use core::num::NonZeroUsize;
use std::collections::vec_deque::{Drain, Iter};
use std::collections::VecDeque;

/// FIFO buffer that never holds more than `capacity` elements.
///
/// Pushing into a full buffer evicts the oldest element and hands it back, so the
/// buffer doubles as a sliding window. Storage is allocated once, at construction.
///
/// # Examples
///
/// ```
/// use core::num::NonZeroUsize;
/// use gatherflux_core::buffer::BoundedBuffer;
///
/// let mut buffer = BoundedBuffer::new(NonZeroUsize::new(2).unwrap());
/// assert_eq!(buffer.push(1), None);
/// assert_eq!(buffer.push(2), None);
/// assert_eq!(buffer.push(3), Some(1));
/// assert_eq!(buffer.snapshot(), vec![2, 3]);
/// ```
#[derive(Debug, Clone)]
pub struct BoundedBuffer<T> {
    items: VecDeque<T>,
    capacity: usize,
}

impl<T> BoundedBuffer<T> {
    /// Creates an empty buffer.
    #[must_use]
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity.get()),
            capacity: capacity.get(),
        }
    }

    /// Appends `item`, returning the evicted oldest element when the buffer was full.
    pub fn push(&mut self, item: T) -> Option<T> {
        let evicted = if self.items.len() == self.capacity {
            self.items.pop_front()
        } else {
            None
        };
        self.items.push_back(item);
        evicted
    }

    /// Removes and returns the oldest element.
    pub fn pop_front(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    /// Discards up to `n` of the oldest elements.
    pub fn pop_front_n(&mut self, n: usize) {
        let n = n.min(self.items.len());
        self.items.drain(..n);
    }

    /// Iterates oldest to newest without changing the buffer.
    pub fn iter(&self) -> Iter<'_, T> {
        self.items.iter()
    }

    /// Removes every element, oldest first.
    pub fn drain(&mut self) -> Drain<'_, T> {
        self.items.drain(..)
    }

    /// Number of retained elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if nothing is retained.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns `true` if the next push will evict.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.items.len() == self.capacity
    }

    /// Maximum number of retained elements.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drops every retained element.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Consumes the buffer, returning its elements oldest first.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.items.into()
    }
}

impl<T: Clone> BoundedBuffer<T> {
    /// Copies the retained elements, oldest first.
    #[must_use]
    pub fn snapshot(&self) -> Vec<T> {
        self.items.iter().cloned().collect()
    }
}

impl<T> IntoIterator for BoundedBuffer<T> {
    type Item = T;
    type IntoIter = std::collections::vec_deque::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
