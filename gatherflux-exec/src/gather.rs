// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Lazy iterator adapter driving an operator over a source iterator.

use core::iter::FusedIterator;
use gatherflux_core::{Disposition, Operator, Result};
use std::collections::VecDeque;

/// Iterator produced by [`GatherExt::gather`].
///
/// # Behavior
///
/// - Source elements are pulled one at a time, only when no output is pending
/// - Each element runs through the whole operator before the next one is pulled
/// - When the source is exhausted the operator is finished and its flushed outputs
///   are yielded
/// - When the operator reports a stop, no further element is pulled; the operator is
///   finished (flushing only what lies downstream of the stop point) and the
///   remaining outputs are yielded
/// - Dropping the iterator early finishes nothing
///
/// # Error Handling
///
/// The first error is yielded as an `Err` item, outputs still pending at that point are
/// discarded, and the iterator ends.
pub struct Gather<I, Op: Operator> {
    source: I,
    operator: Op,
    state: Option<Op::State>,
    pending: VecDeque<Op::Output>,
}

impl<I, Op> Gather<I, Op>
where
    I: Iterator<Item = Op::Input>,
    Op: Operator,
{
    pub fn new(source: I, operator: Op) -> Self {
        let state = Some(operator.initialize());
        Self {
            source,
            operator,
            state,
            pending: VecDeque::new(),
        }
    }

    /// The operator being driven.
    pub const fn operator(&self) -> &Op {
        &self.operator
    }

    fn finish(&mut self) -> Result<()> {
        if let Some(state) = self.state.take() {
            trace!("gather: finishing `{}`", self.operator.name());
            self.operator.finish(state, &mut self.pending)?;
        }
        Ok(())
    }

    fn abort(&mut self) {
        self.state = None;
        self.pending.clear();
    }
}

impl<I, Op> Iterator for Gather<I, Op>
where
    I: Iterator<Item = Op::Input>,
    Op: Operator,
{
    type Item = Result<Op::Output>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(output) = self.pending.pop_front() {
                return Some(Ok(output));
            }
            let state = self.state.as_mut()?;
            let outcome = match self.source.next() {
                Some(element) => match self.operator.integrate(state, element, &mut self.pending) {
                    Ok(Disposition::Continue) => Ok(()),
                    Ok(Disposition::Stop) => {
                        debug!("gather: `{}` stopped the traversal", self.operator.name());
                        self.finish()
                    }
                    Err(error) => Err(error),
                },
                None => self.finish(),
            };
            if let Err(error) = outcome {
                self.abort();
                return Some(Err(error));
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.state.is_none() {
            return (self.pending.len(), Some(self.pending.len()));
        }
        (self.pending.len(), None)
    }
}

impl<I, Op> FusedIterator for Gather<I, Op>
where
    I: Iterator<Item = Op::Input>,
    Op: Operator,
{
}

/// Applies operators to any iterator.
pub trait GatherExt: Iterator + Sized {
    /// Drives `operator` over this iterator, lazily.
    ///
    /// ```rust
    /// use gatherflux_exec::GatherExt;
    /// use gatherflux_ops::zip_with_next;
    ///
    /// let pairs: Vec<(i32, i32)> = [1, 2, 3, 4]
    ///     .into_iter()
    ///     .gather(zip_with_next())
    ///     .collect::<Result<_, _>>()?;
    /// assert_eq!(pairs, vec![(1, 2), (2, 3), (3, 4)]);
    /// # Ok::<(), gatherflux_core::GatherError>(())
    /// ```
    fn gather<Op>(self, operator: Op) -> Gather<Self, Op>
    where
        Op: Operator<Input = Self::Item>,
    {
        Gather::new(self, operator)
    }
}

impl<I: Iterator> GatherExt for I {}
