// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::marker::PhantomData;
use gatherflux_core::{Disposition, Downstream, Operator, Result};

/// Passes every element through unchanged; the head of an empty [`Pipeline`](crate::Pipeline).
///
/// Mergeable, with an empty state.
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity<T> {
    _marker: PhantomData<fn(T) -> T>,
}

#[must_use]
pub const fn identity<T>() -> Identity<T> {
    Identity {
        _marker: PhantomData,
    }
}

impl<T> Operator for Identity<T> {
    type Input = T;
    type Output = T;
    type State = ();

    fn name(&self) -> &'static str {
        "identity"
    }

    fn initialize(&self) {}

    fn integrate<D>(&self, _state: &mut (), element: T, downstream: &mut D) -> Result<Disposition>
    where
        D: Downstream<T>,
    {
        downstream.push(element)
    }

    fn is_mergeable(&self) -> bool {
        true
    }

    fn merge(&self, _left: (), _right: ()) -> Result<()> {
        Ok(())
    }
}
