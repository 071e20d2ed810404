// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The operator contract every stage implements.
//!
//! An [`Operator`] is immutable configuration plus three hooks: [`Operator::initialize`]
//! creates a fresh state, [`Operator::integrate`] folds one element into that state and
//! pushes zero or more outputs to a [`Downstream`], and [`Operator::finish`] flushes
//! whatever is still buffered once the input is exhausted.
//!
//! The state is owned by the caller (the composition driver) and is handed to the
//! operator by exclusive reference, so one operator value can serve any number of
//! independent traversals, each with its own state.

use crate::error::{GatherError, Result};
use std::collections::VecDeque;

/// Continue/stop signal produced for every integrated element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[must_use]
pub enum Disposition {
    /// Keep pulling elements
    Continue,
    /// Stop pulling; no further `integrate` call will be made on this state
    Stop,
}

impl Disposition {
    /// Returns `true` if this is [`Disposition::Stop`].
    pub const fn is_stop(self) -> bool {
        matches!(self, Self::Stop)
    }

    /// Returns `true` if this is [`Disposition::Continue`].
    pub const fn is_continue(self) -> bool {
        matches!(self, Self::Continue)
    }

    /// `Stop` if either side is `Stop`.
    pub const fn and(self, other: Self) -> Self {
        match (self, other) {
            (Self::Continue, Self::Continue) => Self::Continue,
            _ => Self::Stop,
        }
    }
}

/// Receiver of an operator's outputs.
///
/// Returning [`Disposition::Stop`] from `push` tells the pushing operator that nothing
/// downstream wants more elements; the operator must stop pushing and report `Stop`
/// from its own `integrate`.
pub trait Downstream<T> {
    /// Accepts one output element.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by a downstream operator.
    fn push(&mut self, element: T) -> Result<Disposition>;

    /// Pushes every element in order, stopping at the first `Stop`.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by a downstream operator.
    fn push_all<I>(&mut self, elements: I) -> Result<Disposition>
    where
        I: IntoIterator<Item = T>,
        Self: Sized,
    {
        for element in elements {
            if self.push(element)?.is_stop() {
                return Ok(Disposition::Stop);
            }
        }
        Ok(Disposition::Continue)
    }
}

impl<T> Downstream<T> for Vec<T> {
    fn push(&mut self, element: T) -> Result<Disposition> {
        Vec::push(self, element);
        Ok(Disposition::Continue)
    }
}

impl<T> Downstream<T> for VecDeque<T> {
    fn push(&mut self, element: T) -> Result<Disposition> {
        self.push_back(element);
        Ok(Disposition::Continue)
    }
}

impl<T, D: Downstream<T>> Downstream<T> for &mut D {
    fn push(&mut self, element: T) -> Result<Disposition> {
        (**self).push(element)
    }
}

/// A stateful stage transforming one input sequence into an output sequence.
///
/// # Contract
///
/// - `initialize` is called once per traversal, before the first element.
/// - `integrate` is called once per input element, in input order, and never after it
///   returned [`Disposition::Stop`].
/// - `finish` is called at most once, after the last `integrate`, when the input was
///   exhausted or when a stop originated at or below this operator. It is never called
///   when the consumer of the pipeline walked away.
/// - Randomized operators draw entropy only from the source they were configured with.
///
/// # Split execution
///
/// Operators whose outputs are all produced by `finish` can usually combine two partial
/// states. Such operators override [`Operator::is_mergeable`] and [`Operator::merge`];
/// merging the state of partition `a` with the state of partition `b` must give the state
/// that processing `a` followed by `b` on a single state would have produced.
/// Every other operator is sequential-only.
pub trait Operator {
    /// Element type consumed by this operator
    type Input;
    /// Element type produced by this operator
    type Output;
    /// Per-traversal state, exclusively owned by the driver
    type State;

    /// Short, stable name used in logs and errors.
    fn name(&self) -> &'static str;

    /// Creates a fresh state.
    fn initialize(&self) -> Self::State;

    /// Integrates one element.
    ///
    /// # Errors
    ///
    /// Returns an error raised by user code, by a numeric fault, or by a downstream push.
    fn integrate<D>(
        &self,
        state: &mut Self::State,
        element: Self::Input,
        downstream: &mut D,
    ) -> Result<Disposition>
    where
        D: Downstream<Self::Output>;

    /// Flushes buffered state at end of input.
    ///
    /// # Errors
    ///
    /// Returns an error raised while flushing or by a downstream push.
    fn finish<D>(&self, state: Self::State, downstream: &mut D) -> Result<()>
    where
        D: Downstream<Self::Output>,
    {
        let _ = (state, downstream);
        Ok(())
    }

    /// Whether [`Operator::merge`] is implemented.
    fn is_mergeable(&self) -> bool {
        false
    }

    /// Combines the states of two adjacent partitions, `left` preceding `right`.
    ///
    /// # Errors
    ///
    /// Returns [`GatherError::SequentialOnly`] unless the operator is mergeable.
    fn merge(&self, left: Self::State, right: Self::State) -> Result<Self::State> {
        let _ = (left, right);
        Err(GatherError::sequential_only(self.name()))
    }
}

impl<O: Operator + ?Sized> Operator for &O {
    type Input = O::Input;
    type Output = O::Output;
    type State = O::State;

    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn initialize(&self) -> Self::State {
        (**self).initialize()
    }

    fn integrate<D>(
        &self,
        state: &mut Self::State,
        element: Self::Input,
        downstream: &mut D,
    ) -> Result<Disposition>
    where
        D: Downstream<Self::Output>,
    {
        (**self).integrate(state, element, downstream)
    }

    fn finish<D>(&self, state: Self::State, downstream: &mut D) -> Result<()>
    where
        D: Downstream<Self::Output>,
    {
        (**self).finish(state, downstream)
    }

    fn is_mergeable(&self) -> bool {
        (**self).is_mergeable()
    }

    fn merge(&self, left: Self::State, right: Self::State) -> Result<Self::State> {
        (**self).merge(left, right)
    }
}
