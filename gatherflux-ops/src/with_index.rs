// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::marker::PhantomData;
use gatherflux_core::{Disposition, Downstream, Operator, Result};

/// Pairs each element with its zero-based position in the input.
#[derive(Debug, Clone, Copy, Default)]
pub struct WithIndex<T> {
    _marker: PhantomData<fn(T) -> T>,
}

pub const fn with_index<T>() -> WithIndex<T> {
    WithIndex {
        _marker: PhantomData,
    }
}

impl<T> Operator for WithIndex<T> {
    type Input = T;
    type Output = (u64, T);
    type State = u64;

    fn name(&self) -> &'static str {
        "with_index"
    }

    fn initialize(&self) -> u64 {
        0
    }

    fn integrate<D>(&self, next: &mut u64, element: T, downstream: &mut D) -> Result<Disposition>
    where
        D: Downstream<(u64, T)>,
    {
        let index = *next;
        *next += 1;
        downstream.push((index, element))
    }
}
