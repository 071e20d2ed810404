// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::marker::PhantomData;
use gatherflux_core::{Disposition, Downstream, Operator, Result};

/// Buffers the whole input and emits it back to front at end of input.
///
/// Mergeable: the buffer of a later partition is appended to the earlier one.
#[derive(Debug, Clone, Copy, Default)]
pub struct Reverse<T> {
    _marker: PhantomData<fn(T) -> T>,
}

#[must_use]
pub const fn reverse<T>() -> Reverse<T> {
    Reverse {
        _marker: PhantomData,
    }
}

impl<T> Operator for Reverse<T> {
    type Input = T;
    type Output = T;
    type State = Vec<T>;

    fn name(&self) -> &'static str {
        "reverse"
    }

    fn initialize(&self) -> Vec<T> {
        Vec::new()
    }

    fn integrate<D>(&self, seen: &mut Vec<T>, element: T, _downstream: &mut D) -> Result<Disposition>
    where
        D: Downstream<T>,
    {
        seen.push(element);
        Ok(Disposition::Continue)
    }

    fn finish<D>(&self, seen: Vec<T>, downstream: &mut D) -> Result<()>
    where
        D: Downstream<T>,
    {
        let _ = downstream.push_all(seen.into_iter().rev())?;
        Ok(())
    }

    fn is_mergeable(&self) -> bool {
        true
    }

    fn merge(&self, mut left: Vec<T>, right: Vec<T>) -> Result<Vec<T>> {
        left.extend(right);
        Ok(left)
    }
}
