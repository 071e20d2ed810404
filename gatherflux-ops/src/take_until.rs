// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Inclusive short-circuit.

use core::marker::PhantomData;
use gatherflux_core::{Disposition, Downstream, Operator, Result};

/// Passes elements through up to and including the first one matching `predicate`,
/// then stops the pipeline.
///
/// `[1, 2, 3, 4]` with `|x| *x == 2` gives `[1, 2]` and never pulls `3`.
pub struct TakeUntil<T, P> {
    predicate: P,
    _marker: PhantomData<fn(T) -> T>,
}

impl<T, P> TakeUntil<T, P>
where
    P: Fn(&T) -> bool,
{
    pub const fn new(predicate: P) -> Self {
        Self {
            predicate,
            _marker: PhantomData,
        }
    }
}

pub fn take_until<T>(predicate: impl Fn(&T) -> bool) -> TakeUntil<T, impl Fn(&T) -> bool> {
    TakeUntil::new(predicate)
}

impl<T, P> Operator for TakeUntil<T, P>
where
    P: Fn(&T) -> bool,
{
    type Input = T;
    type Output = T;
    type State = ();

    fn name(&self) -> &'static str {
        "take_until"
    }

    fn initialize(&self) {}

    fn integrate<D>(&self, _state: &mut (), element: T, downstream: &mut D) -> Result<Disposition>
    where
        D: Downstream<T>,
    {
        let done = (self.predicate)(&element);
        let disposition = downstream.push(element)?;
        if done {
            debug!("take_until: predicate matched, stopping");
            return Ok(Disposition::Stop);
        }
        Ok(disposition)
    }
}
