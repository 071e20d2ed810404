// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Keep or drop the tail of the input.

use core::marker::PhantomData;
use core::num::NonZeroUsize;
use gatherflux_core::buffer::BoundedBuffer;
use gatherflux_core::config::non_zero;
use gatherflux_core::{Disposition, Downstream, Operator, Result};
use std::collections::VecDeque;

/// Emits the last `count` elements at end of input.
///
/// A `count` of zero emits nothing; inputs shorter than `count` are emitted whole.
///
/// Mergeable: the tail of `a ++ b` is the tail of `tail(a) ++ tail(b)`.
#[derive(Debug, Clone, Copy)]
pub struct TakeLast<T> {
    count: usize,
    _marker: PhantomData<fn(T) -> T>,
}

impl<T> TakeLast<T> {
    #[must_use]
    pub const fn new(count: usize) -> Self {
        Self {
            count,
            _marker: PhantomData,
        }
    }

    fn trim(&self, tail: &mut VecDeque<T>) {
        while tail.len() > self.count {
            let _ = tail.pop_front();
        }
    }
}

#[must_use]
pub const fn take_last<T>(count: usize) -> TakeLast<T> {
    TakeLast::new(count)
}

impl<T> Operator for TakeLast<T> {
    type Input = T;
    type Output = T;
    type State = VecDeque<T>;

    fn name(&self) -> &'static str {
        "take_last"
    }

    fn initialize(&self) -> VecDeque<T> {
        VecDeque::new()
    }

    fn integrate<D>(&self, tail: &mut VecDeque<T>, element: T, _downstream: &mut D) -> Result<Disposition>
    where
        D: Downstream<T>,
    {
        tail.push_back(element);
        self.trim(tail);
        Ok(Disposition::Continue)
    }

    fn finish<D>(&self, tail: VecDeque<T>, downstream: &mut D) -> Result<()>
    where
        D: Downstream<T>,
    {
        let _ = downstream.push_all(tail)?;
        Ok(())
    }

    fn is_mergeable(&self) -> bool {
        true
    }

    fn merge(&self, mut left: VecDeque<T>, right: VecDeque<T>) -> Result<VecDeque<T>> {
        left.extend(right);
        self.trim(&mut left);
        Ok(left)
    }
}

/// Emits everything except the last `count` elements.
///
/// Elements are held back in a buffer of `count` slots and released as later elements
/// push them out; whatever is still buffered at end of input is discarded.
#[derive(Debug, Clone, Copy)]
pub struct DropLast<T> {
    count: NonZeroUsize,
    _marker: PhantomData<fn(T) -> T>,
}

impl<T> DropLast<T> {
    /// # Errors
    ///
    /// Returns a configuration error when `count` is zero.
    pub fn new(count: usize) -> Result<Self> {
        Ok(Self {
            count: non_zero("drop_last", "count", count)?,
            _marker: PhantomData,
        })
    }
}

/// # Errors
///
/// Returns a configuration error when `count` is zero.
pub fn drop_last<T>(count: usize) -> Result<DropLast<T>> {
    DropLast::new(count)
}

impl<T> Operator for DropLast<T> {
    type Input = T;
    type Output = T;
    type State = BoundedBuffer<T>;

    fn name(&self) -> &'static str {
        "drop_last"
    }

    fn initialize(&self) -> BoundedBuffer<T> {
        BoundedBuffer::new(self.count)
    }

    fn integrate<D>(&self, held: &mut BoundedBuffer<T>, element: T, downstream: &mut D) -> Result<Disposition>
    where
        D: Downstream<T>,
    {
        match held.push(element) {
            Some(released) => downstream.push(released),
            None => Ok(Disposition::Continue),
        }
    }
}
