// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Operators over `futures` streams.

use core::pin::Pin;
use core::task::{Context, Poll};
use futures::ready;
use futures::Stream;
use gatherflux_core::{Disposition, Operator, Result};
use pin_project::pin_project;
use std::collections::VecDeque;

/// Stream counterpart of [`Gather`](crate::Gather), with the same stop, finish and
/// error semantics.
#[pin_project]
pub struct GatherStream<S, Op: Operator> {
    #[pin]
    source: S,
    operator: Op,
    state: Option<Op::State>,
    pending: VecDeque<Op::Output>,
}

impl<S, Op> GatherStream<S, Op>
where
    S: Stream<Item = Op::Input>,
    Op: Operator,
{
    pub fn new(source: S, operator: Op) -> Self {
        let state = Some(operator.initialize());
        Self {
            source,
            operator,
            state,
            pending: VecDeque::new(),
        }
    }
}

impl<S, Op> Stream for GatherStream<S, Op>
where
    S: Stream<Item = Op::Input>,
    Op: Operator,
{
    type Item = Result<Op::Output>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();
        loop {
            if let Some(output) = this.pending.pop_front() {
                return Poll::Ready(Some(Ok(output)));
            }
            let Some(state) = this.state.as_mut() else {
                return Poll::Ready(None);
            };
            let finish = match ready!(this.source.as_mut().poll_next(cx)) {
                Some(element) => match this.operator.integrate(state, element, &mut *this.pending) {
                    Ok(Disposition::Continue) => false,
                    Ok(Disposition::Stop) => {
                        debug!("stream: `{}` stopped the traversal", this.operator.name());
                        true
                    }
                    Err(error) => {
                        *this.state = None;
                        this.pending.clear();
                        return Poll::Ready(Some(Err(error)));
                    }
                },
                None => true,
            };
            if finish {
                if let Some(state) = this.state.take() {
                    trace!("stream: finishing `{}`", this.operator.name());
                    if let Err(error) = this.operator.finish(state, &mut *this.pending) {
                        this.pending.clear();
                        return Poll::Ready(Some(Err(error)));
                    }
                }
            }
        }
    }
}

/// Applies operators to any stream.
pub trait GatherStreamExt: Stream + Sized {
    fn gather<Op>(self, operator: Op) -> GatherStream<Self, Op>
    where
        Op: Operator<Input = Self::Item>,
    {
        GatherStream::new(self, operator)
    }
}

impl<S: Stream> GatherStreamExt for S {}
