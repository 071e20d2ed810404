// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Exact integer prefix sums.

use core::marker::PhantomData;
use gatherflux_core::{Disposition, Downstream, GatherError, Operator, Result};

/// Emits the sum of every value seen so far.
///
/// Arithmetic is checked: a sum leaving the `i64` range aborts with
/// [`GatherError::Numeric`] instead of wrapping.
pub struct RunningSum<T, F> {
    value: F,
    _marker: PhantomData<fn(T)>,
}

impl<T, F> RunningSum<T, F>
where
    F: Fn(&T) -> i64,
{
    pub const fn new(value: F) -> Self {
        Self {
            value,
            _marker: PhantomData,
        }
    }
}

pub fn running_sum<T>() -> RunningSum<T, impl Fn(&T) -> i64>
where
    T: Copy + Into<i64>,
{
    RunningSum::new(|element: &T| (*element).into())
}

pub fn running_sum_by<T>(value: impl Fn(&T) -> i64) -> RunningSum<T, impl Fn(&T) -> i64> {
    RunningSum::new(value)
}

impl<T, F> Operator for RunningSum<T, F>
where
    F: Fn(&T) -> i64,
{
    type Input = T;
    type Output = i64;
    type State = i64;

    fn name(&self) -> &'static str {
        "running_sum"
    }

    fn initialize(&self) -> i64 {
        0
    }

    fn integrate<D>(&self, total: &mut i64, element: T, downstream: &mut D) -> Result<Disposition>
    where
        D: Downstream<i64>,
    {
        let value = (self.value)(&element);
        let Some(sum) = total.checked_add(value) else {
            warn!("running_sum: overflow adding {value} to {total}");
            return Err(GatherError::numeric_error(format!(
                "running sum overflowed adding {value} to {total}"
            )));
        };
        *total = sum;
        downstream.push(sum)
    }
}
