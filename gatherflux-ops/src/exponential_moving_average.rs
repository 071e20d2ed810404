// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Exponentially weighted moving average.

use core::marker::PhantomData;
use gatherflux_core::config::{non_zero, smoothing_factor};
use gatherflux_core::{Disposition, Downstream, GatherError, Operator, Result};

/// Emits the exponential moving average after every element.
///
/// The first value seeds the average; every later value `v` moves it to
/// `alpha * v + (1 - alpha) * previous`. An `alpha` of `1.0` tracks the input exactly.
///
/// Sequential-only: the result depends on the order of every value.
pub struct ExponentialMovingAverage<T, F> {
    alpha: f64,
    value: F,
    _marker: PhantomData<fn(T)>,
}

impl<T, F> ExponentialMovingAverage<T, F>
where
    F: Fn(&T) -> f64,
{
    /// # Errors
    ///
    /// Returns a configuration error unless `alpha` lies in `(0.0, 1.0]`.
    pub fn new(alpha: f64, value: F) -> Result<Self> {
        Ok(Self {
            alpha: smoothing_factor("exponential_moving_average", alpha)?,
            value,
            _marker: PhantomData,
        })
    }

    /// Average over roughly `periods` values: `alpha = 2 / (periods + 1)`.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when `periods` is zero.
    pub fn with_periods(periods: usize, value: F) -> Result<Self> {
        let periods = non_zero("exponential_moving_average", "periods", periods)?;
        Self::new(2.0 / (periods.get() as f64 + 1.0), value)
    }

    #[must_use]
    pub const fn alpha(&self) -> f64 {
        self.alpha
    }
}

/// # Errors
///
/// Returns a configuration error unless `alpha` lies in `(0.0, 1.0]`.
pub fn exponential_moving_average<T>(alpha: f64) -> Result<ExponentialMovingAverage<T, impl Fn(&T) -> f64>>
where
    T: Copy + Into<f64>,
{
    ExponentialMovingAverage::new(alpha, |element: &T| (*element).into())
}

/// # Errors
///
/// Returns a configuration error unless `alpha` lies in `(0.0, 1.0]`.
pub fn exponential_moving_average_by<T>(
    alpha: f64,
    value: impl Fn(&T) -> f64,
) -> Result<ExponentialMovingAverage<T, impl Fn(&T) -> f64>> {
    ExponentialMovingAverage::new(alpha, value)
}

impl<T, F> Operator for ExponentialMovingAverage<T, F>
where
    F: Fn(&T) -> f64,
{
    type Input = T;
    type Output = f64;
    type State = Option<f64>;

    fn name(&self) -> &'static str {
        "exponential_moving_average"
    }

    fn initialize(&self) -> Option<f64> {
        None
    }

    fn integrate<D>(&self, average: &mut Option<f64>, element: T, downstream: &mut D) -> Result<Disposition>
    where
        D: Downstream<f64>,
    {
        let value = (self.value)(&element);
        if !value.is_finite() {
            warn!("exponential_moving_average: non-finite input value {value}");
            return Err(GatherError::numeric_error(format!(
                "non-finite input value {value}"
            )));
        }
        let next = match *average {
            None => value,
            Some(previous) => self.alpha.mul_add(value, (1.0 - self.alpha) * previous),
        };
        if !next.is_finite() {
            return Err(GatherError::numeric_error("exponential moving average overflowed"));
        }
        *average = Some(next);
        downstream.push(next)
    }
}
