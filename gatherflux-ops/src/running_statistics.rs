// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Running and final summary statistics.

use core::marker::PhantomData;
use gatherflux_core::buffer::{RunningStats, Statistics};
use gatherflux_core::{Disposition, Downstream, Operator, Result};

fn fold_value(operator: &'static str, stats: &mut RunningStats, value: f64) -> Result<()> {
    stats.push(value).inspect_err(|error| {
        warn!("{operator}: {error}");
    })
}

/// Emits the statistics of everything seen so far after every element.
///
/// # Behavior
///
/// - One [`Statistics`] per input element, the `n`-th covering the first `n` values
/// - Empty input produces nothing
/// - Sample variance is `None` for the first element
///
/// # Error Handling
///
/// A NaN or infinite value, or a sum overflowing to infinity, aborts with
/// [`GatherError::Numeric`](gatherflux_core::GatherError::Numeric).
pub struct RunningStatistics<T, F> {
    value: F,
    _marker: PhantomData<fn(T)>,
}

impl<T, F> RunningStatistics<T, F>
where
    F: Fn(&T) -> f64,
{
    pub const fn new(value: F) -> Self {
        Self {
            value,
            _marker: PhantomData,
        }
    }
}

/// Running statistics over numeric elements.
pub fn running_statistics<T>() -> RunningStatistics<T, impl Fn(&T) -> f64>
where
    T: Copy + Into<f64>,
{
    RunningStatistics::new(|element: &T| (*element).into())
}

/// Running statistics over the values extracted by `value`.
pub fn running_statistics_by<T>(value: impl Fn(&T) -> f64) -> RunningStatistics<T, impl Fn(&T) -> f64> {
    RunningStatistics::new(value)
}

impl<T, F> Operator for RunningStatistics<T, F>
where
    F: Fn(&T) -> f64,
{
    type Input = T;
    type Output = Statistics;
    type State = RunningStats;

    fn name(&self) -> &'static str {
        "running_statistics"
    }

    fn initialize(&self) -> RunningStats {
        RunningStats::new()
    }

    fn integrate<D>(&self, stats: &mut RunningStats, element: T, downstream: &mut D) -> Result<Disposition>
    where
        D: Downstream<Statistics>,
    {
        fold_value(self.name(), stats, (self.value)(&element))?;
        downstream.push(stats.statistics())
    }
}

/// Emits a single [`Statistics`] value at end of input.
///
/// Empty input yields [`Statistics::EMPTY`]: count and sum zero, everything else `None`.
///
/// Mergeable: partial aggregates combine exactly like a sequential pass, within
/// floating-point tolerance.
pub struct Summarize<T, F> {
    value: F,
    _marker: PhantomData<fn(T)>,
}

impl<T, F> Summarize<T, F>
where
    F: Fn(&T) -> f64,
{
    pub const fn new(value: F) -> Self {
        Self {
            value,
            _marker: PhantomData,
        }
    }
}

/// Final statistics over numeric elements.
pub fn summarize<T>() -> Summarize<T, impl Fn(&T) -> f64>
where
    T: Copy + Into<f64>,
{
    Summarize::new(|element: &T| (*element).into())
}

/// Final statistics over the values extracted by `value`.
pub fn summarize_by<T>(value: impl Fn(&T) -> f64) -> Summarize<T, impl Fn(&T) -> f64> {
    Summarize::new(value)
}

impl<T, F> Operator for Summarize<T, F>
where
    F: Fn(&T) -> f64,
{
    type Input = T;
    type Output = Statistics;
    type State = RunningStats;

    fn name(&self) -> &'static str {
        "summarize"
    }

    fn initialize(&self) -> RunningStats {
        RunningStats::new()
    }

    fn integrate<D>(&self, stats: &mut RunningStats, element: T, _downstream: &mut D) -> Result<Disposition>
    where
        D: Downstream<Statistics>,
    {
        fold_value(self.name(), stats, (self.value)(&element))?;
        Ok(Disposition::Continue)
    }

    fn finish<D>(&self, stats: RunningStats, downstream: &mut D) -> Result<()>
    where
        D: Downstream<Statistics>,
    {
        let _ = downstream.push(stats.statistics())?;
        Ok(())
    }

    fn is_mergeable(&self) -> bool {
        true
    }

    fn merge(&self, left: RunningStats, right: RunningStats) -> Result<RunningStats> {
        left.merge(&right)
    }
}
