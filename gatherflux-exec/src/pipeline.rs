// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Fluent pipeline builder and terminal consumers.

use crate::chain::Chain;
use crate::gather::Gather;
use crate::identity::{identity, Identity};
use core::ops::ControlFlow;
use gatherflux_core::{Disposition, Downstream, Operator, Result};

/// A source plus a chain of operators, evaluated only by a terminal method.
///
/// # Examples
///
/// ```rust
/// use gatherflux_exec::Pipeline;
/// use gatherflux_ops::{dedupe_consecutive, with_index};
///
/// let indexed = Pipeline::new([1, 1, 2, 2, 3])
///     .then(dedupe_consecutive())
///     .then(with_index())
///     .collect_vec()?;
/// assert_eq!(indexed, vec![(0, 1), (1, 2), (2, 3)]);
/// # Ok::<(), gatherflux_core::GatherError>(())
/// ```
pub struct Pipeline<I, Op> {
    source: I,
    operator: Op,
}

impl<I: Iterator> Pipeline<I, Identity<I::Item>> {
    pub fn new(source: impl IntoIterator<IntoIter = I>) -> Self {
        Self {
            source: source.into_iter(),
            operator: identity(),
        }
    }
}

impl<I, Op> Pipeline<I, Op>
where
    I: Iterator<Item = Op::Input>,
    Op: Operator,
{
    /// Starts a pipeline with an existing (possibly chained) operator.
    pub fn with_operator(source: impl IntoIterator<IntoIter = I>, operator: Op) -> Self {
        Self {
            source: source.into_iter(),
            operator,
        }
    }

    /// Appends `next` to the chain.
    pub fn then<B>(self, next: B) -> Pipeline<I, Chain<Op, B>>
    where
        B: Operator<Input = Op::Output>,
    {
        Pipeline {
            source: self.source,
            operator: Chain::new(self.operator, next),
        }
    }

    /// Collects every output, or returns the first error.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by any operator.
    pub fn collect_vec(self) -> Result<Vec<Op::Output>> {
        self.into_iter().collect()
    }

    /// Folds every output into an accumulator.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by any operator.
    pub fn fold<A, F>(self, init: A, mut f: F) -> Result<A>
    where
        F: FnMut(A, Op::Output) -> A,
    {
        self.into_iter()
            .try_fold(init, |acc, output| output.map(|output| f(acc, output)))
    }

    /// Number of outputs.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by any operator.
    pub fn count(self) -> Result<u64> {
        self.fold(0, |count, _| count + 1)
    }

    /// Hands every output to `f` until it breaks.
    ///
    /// Breaking is a consumer stop: no further element is pulled and no operator is
    /// finished, so buffered state is discarded.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by any operator.
    pub fn try_for_each<F>(self, f: F) -> Result<()>
    where
        F: FnMut(Op::Output) -> ControlFlow<()>,
    {
        let Self { source, operator } = self;
        let mut sink = Sink {
            consumer: f,
            broken: false,
        };
        let mut state = operator.initialize();
        for element in source {
            if operator.integrate(&mut state, element, &mut sink)?.is_stop() {
                if sink.broken {
                    debug!("pipeline: consumer stopped the traversal");
                    return Ok(());
                }
                debug!("pipeline: `{}` stopped the traversal", operator.name());
                break;
            }
        }
        trace!("pipeline: finishing `{}`", operator.name());
        operator.finish(state, &mut sink)
    }
}

impl<I, Op> IntoIterator for Pipeline<I, Op>
where
    I: Iterator<Item = Op::Input>,
    Op: Operator,
{
    type Item = Result<Op::Output>;
    type IntoIter = Gather<I, Op>;

    fn into_iter(self) -> Gather<I, Op> {
        Gather::new(self.source, self.operator)
    }
}

/// Terminal downstream calling the consumer closure.
struct Sink<F> {
    consumer: F,
    broken: bool,
}

impl<T, F> Downstream<T> for Sink<F>
where
    F: FnMut(T) -> ControlFlow<()>,
{
    fn push(&mut self, element: T) -> Result<Disposition> {
        if self.broken {
            return Ok(Disposition::Stop);
        }
        match (self.consumer)(element) {
            ControlFlow::Continue(()) => Ok(Disposition::Continue),
            ControlFlow::Break(()) => {
                self.broken = true;
                Ok(Disposition::Stop)
            }
        }
    }
}
