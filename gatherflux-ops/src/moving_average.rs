// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Simple moving average over a trailing window.

use core::marker::PhantomData;
use core::num::NonZeroUsize;
use gatherflux_core::buffer::BoundedBuffer;
use gatherflux_core::config::non_zero;
use gatherflux_core::{Disposition, Downstream, GatherError, Operator, Result};

/// Emits the mean of the last `size` values after every element.
///
/// Until `size` values have been seen nothing is emitted, unless partial averages were
/// requested, in which case the mean of what has been seen so far is emitted.
///
/// Each average is recomputed from the retained window, so it never drifts from a
/// from-scratch computation.
pub struct MovingAverage<T, F> {
    size: NonZeroUsize,
    include_partials: bool,
    value: F,
    _marker: PhantomData<fn(T)>,
}

impl<T, F> MovingAverage<T, F>
where
    F: Fn(&T) -> f64,
{
    /// # Errors
    ///
    /// Returns a configuration error when `size` is zero.
    pub fn new(size: usize, value: F) -> Result<Self> {
        Ok(Self {
            size: non_zero("moving_average", "window size", size)?,
            include_partials: false,
            value,
            _marker: PhantomData,
        })
    }

    /// Also emit averages while the window is still filling up.
    #[must_use]
    pub fn with_partials(mut self, include_partials: bool) -> Self {
        self.include_partials = include_partials;
        self
    }
}

/// Moving average of numeric elements.
///
/// # Errors
///
/// Returns a configuration error when `size` is zero.
pub fn moving_average<T>(size: usize) -> Result<MovingAverage<T, impl Fn(&T) -> f64>>
where
    T: Copy + Into<f64>,
{
    MovingAverage::new(size, |element: &T| (*element).into())
}

/// Moving average of the values extracted by `value`.
///
/// # Errors
///
/// Returns a configuration error when `size` is zero.
pub fn moving_average_by<T>(
    size: usize,
    value: impl Fn(&T) -> f64,
) -> Result<MovingAverage<T, impl Fn(&T) -> f64>> {
    MovingAverage::new(size, value)
}

impl<T, F> Operator for MovingAverage<T, F>
where
    F: Fn(&T) -> f64,
{
    type Input = T;
    type Output = f64;
    type State = BoundedBuffer<f64>;

    fn name(&self) -> &'static str {
        "moving_average"
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
            warn!("moving_average: non-finite input value {value}");
            return Err(GatherError::numeric_error(format!(
                "non-finite input value {value}"
            )));
        }
        let _ = window.push(value);
        if !window.is_full() && !self.include_partials {
            return Ok(Disposition::Continue);
        }
        let mean = window.iter().sum::<f64>() / window.len() as f64;
        if !mean.is_finite() {
            return Err(GatherError::numeric_error("window sum overflowed"));
        }
        downstream.push(mean)
    }
}
