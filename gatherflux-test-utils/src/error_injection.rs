// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Operators and key functions that fail on purpose.

use core::marker::PhantomData;
use gatherflux_core::{Disposition, Downstream, GatherError, Operator, Result};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("injected failure at index {index}")]
pub struct InjectedError {
    pub index: u64,
}

/// Passes elements through and fails with a user error when the element at
/// `inject_error_at` (zero-based) arrives.
#[derive(Debug, Clone, Copy)]
pub struct FailAt<T> {
    inject_error_at: u64,
    _marker: PhantomData<fn(T) -> T>,
}

impl<T> FailAt<T> {
    #[must_use]
    pub const fn new(inject_error_at: u64) -> Self {
        Self {
            inject_error_at,
            _marker: PhantomData,
        }
    }
}

impl<T> Operator for FailAt<T> {
    type Input = T;
    type Output = T;
    type State = u64;

    fn name(&self) -> &'static str {
        "fail_at"
    }

    fn initialize(&self) -> u64 {
        0
    }

    fn integrate<D>(&self, count: &mut u64, element: T, downstream: &mut D) -> Result<Disposition>
    where
        D: Downstream<T>,
    {
        let index = *count;
        *count += 1;
        if index == self.inject_error_at {
            return Err(GatherError::user_error(InjectedError { index }));
        }
        downstream.push(element)
    }
}

/// A fallible key function returning the element itself, except for `poison`.
pub fn key_failing_on<T>(poison: T) -> impl Fn(&T) -> core::result::Result<T, InjectedError>
where
    T: Clone + PartialEq,
{
    move |element| {
        if *element == poison {
            Err(InjectedError { index: 0 })
        } else {
            Ok(element.clone())
        }
    }
}
