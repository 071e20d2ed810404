// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Sum over a trailing window.

use core::marker::PhantomData;
use core::num::NonZeroUsize;
use gatherflux_core::buffer::BoundedBuffer;
use gatherflux_core::config::non_zero;
use gatherflux_core::{Disposition, Downstream, GatherError, Operator, Result};

/// Emits the sum of the last `size` values after every element.
///
/// Until `size` values have been seen nothing is emitted, unless partial sums were
/// requested. Each sum is recomputed from the retained window.
pub struct MovingSum<T, F> {
    size: NonZeroUsize,
    include_partials: bool,
    value: F,
    _marker: PhantomData<fn(T)>,
}

impl<T, F> MovingSum<T, F>
where
    F: Fn(&T) -> f64,
{
    /// # Errors
    ///
    /// Returns a configuration error when `size` is zero.
    pub fn new(size: usize, value: F) -> Result<Self> {
        Ok(Self {
            size: non_zero("moving_sum", "window size", size)?,
            include_partials: false,
            value,
            _marker: PhantomData,
        })
    }

    /// Also emit sums while the window is still filling up.
    #[must_use]
    pub fn with_partials(mut self, include_partials: bool) -> Self {
        self.include_partials = include_partials;
        self
    }
}

/// # Errors
///
/// Returns a configuration error when `size` is zero.
pub fn moving_sum<T>(size: usize) -> Result<MovingSum<T, impl Fn(&T) -> f64>>
where
    T: Copy + Into<f64>,
{
    MovingSum::new(size, |element: &T| (*element).into())
}

/// # Errors
///
/// Returns a configuration error when `size` is zero.
pub fn moving_sum_by<T>(size: usize, value: impl Fn(&T) -> f64) -> Result<MovingSum<T, impl Fn(&T) -> f64>> {
    MovingSum::new(size, value)
}

impl<T, F> Operator for MovingSum<T, F>
where
    F: Fn(&T) -> f64,
{
    type Input = T;
    type Output = f64;
    type State = BoundedBuffer<f64>;

    fn name(&self) -> &'static str {
        "moving_sum"
    }

    fn initialize(&self) -> BoundedBuffer<f64> {
        BoundedBuffer::new(self.size)
    }

    fn integrate<D>(&self, window: &mut BoundedBuffer<f64>, element: T, downstream: &mut D) -> Result<Disposition>
    where
        D: Downstream<f64>,
    {
        let value = (self.value)(&element);
        if !value.is_finite() {
            warn!("moving_sum: non-finite input value {value}");
            return Err(GatherError::numeric_error(format!(
                "non-finite input value {value}"
            )));
        }
        let _ = window.push(value);
        if !window.is_full() && !self.include_partials {
            return Ok(Disposition::Continue);
        }
        let sum = window.iter().sum::<f64>();
        if !sum.is_finite() {
            warn!("moving_sum: window sum overflowed");
            return Err(GatherError::numeric_error("window sum overflowed"));
        }
        downstream.push(sum)
    }
}
