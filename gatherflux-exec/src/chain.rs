// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Sequential composition of two operators.

use gatherflux_core::{Disposition, Downstream, Operator, Result};

/// `first` followed by `second`: every output of `first` is integrated into `second`
/// before `first` sees its next element.
///
/// # Stop and finish
///
/// A stop raised inside `second` (or below it) is remembered. When the chain is then
/// finished, `first` is not flushed, since its input was cut short by the stop, while
/// `second` is finished so that anything downstream of the stop point still flushes.
/// A stop raised by `first` itself leaves `second` untouched: `first` is finished into
/// `second`, then `second` is finished.
#[derive(Debug, Clone)]
pub struct Chain<A, B> {
    first: A,
    second: B,
}

impl<A, B> Chain<A, B>
where
    A: Operator,
    B: Operator<Input = A::Output>,
{
    pub const fn new(first: A, second: B) -> Self {
        Self { first, second }
    }

    pub const fn first(&self) -> &A {
        &self.first
    }

    pub const fn second(&self) -> &B {
        &self.second
    }
}

#[derive(Debug, Clone)]
pub struct ChainState<SA, SB> {
    first: SA,
    second: SB,
    tail_stopped: bool,
}

/// Downstream handed to `first`: integrates into `second`.
struct Feed<'a, B: Operator, D> {
    operator: &'a B,
    state: &'a mut B::State,
    downstream: &'a mut D,
    stopped: &'a mut bool,
}

impl<B, D> Downstream<B::Input> for Feed<'_, B, D>
where
    B: Operator,
    D: Downstream<B::Output>,
{
    fn push(&mut self, element: B::Input) -> Result<Disposition> {
        if *self.stopped {
            return Ok(Disposition::Stop);
        }
        let disposition = self
            .operator
            .integrate(&mut *self.state, element, &mut *self.downstream)?;
        if disposition.is_stop() {
            *self.stopped = true;
        }
        Ok(disposition)
    }
}

impl<A, B> Operator for Chain<A, B>
where
    A: Operator,
    B: Operator<Input = A::Output>,
{
    type Input = A::Input;
    type Output = B::Output;
    type State = ChainState<A::State, B::State>;

    fn name(&self) -> &'static str {
        "chain"
    }

    fn initialize(&self) -> Self::State {
        ChainState {
            first: self.first.initialize(),
            second: self.second.initialize(),
            tail_stopped: false,
        }
    }

    fn integrate<D>(&self, state: &mut Self::State, element: A::Input, downstream: &mut D) -> Result<Disposition>
    where
        D: Downstream<B::Output>,
    {
        let mut feed = Feed {
            operator: &self.second,
            state: &mut state.second,
            downstream,
            stopped: &mut state.tail_stopped,
        };
        self.first.integrate(&mut state.first, element, &mut feed)
    }

    fn finish<D>(&self, state: Self::State, downstream: &mut D) -> Result<()>
    where
        D: Downstream<B::Output>,
    {
        let ChainState {
            first,
            mut second,
            mut tail_stopped,
        } = state;
        if tail_stopped {
            trace!(
                "chain: skipping flush of `{}`, stopped downstream",
                self.first.name()
            );
        } else {
            let mut feed = Feed {
                operator: &self.second,
                state: &mut second,
                downstream: &mut *downstream,
                stopped: &mut tail_stopped,
            };
            self.first.finish(first, &mut feed)?;
        }
        self.second.finish(second, downstream)
    }

    fn is_mergeable(&self) -> bool {
        self.first.is_mergeable() && self.second.is_mergeable()
    }

    fn merge(&self, left: Self::State, right: Self::State) -> Result<Self::State> {
        Ok(ChainState {
            first: self.first.merge(left.first, right.first)?,
            second: self.second.merge(left.second, right.second)?,
            tail_stopped: left.tail_stopped || right.tail_stopped,
        })
    }
}

/// Composition helpers available on every operator.
pub trait OperatorExt: Operator + Sized {
    /// Feeds the outputs of `self` into `next`.
    fn then<B>(self, next: B) -> Chain<Self, B>
    where
        B: Operator<Input = Self::Output>,
    {
        Chain::new(self, next)
    }
}

impl<O: Operator> OperatorExt for O {}
