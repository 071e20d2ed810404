// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Incremental count / sum / mean / variance / min / max.

use crate::error::{GatherError, Result};

/// Numerically stable running aggregate.
///
/// Mean and variance are maintained with Welford's update, and two aggregates can be
/// combined with the pairwise formula of Chan, Golub and LeVeque, so a split
/// computation agrees with a sequential one within floating-point tolerance.
///
/// Non-finite input and sums that overflow to infinity are rejected with
/// [`GatherError::Numeric`]; a rejected value leaves the aggregate untouched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunningStats {
    count: u64,
    mean: f64,
    m2: f64,
    sum: f64,
    min: f64,
    max: f64,
}

impl Default for RunningStats {
    fn default() -> Self {
        Self::new()
    }
}

impl RunningStats {
    /// An aggregate over no values.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            count: 0,
            mean: 0.0,
            m2: 0.0,
            sum: 0.0,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        }
    }

    /// Folds one value into the aggregate.
    ///
    /// # Errors
    ///
    /// Returns [`GatherError::Numeric`] for NaN or infinite input, or when the sum or
    /// the squared deviations overflow.
    pub fn push(&mut self, value: f64) -> Result<()> {
        if !value.is_finite() {
            return Err(GatherError::numeric_error(format!(
                "non-finite input value {value}"
            )));
        }
        let sum = self.sum + value;
        if !sum.is_finite() {
            return Err(GatherError::numeric_error("running sum overflowed"));
        }
        let count = self.count + 1;
        let delta = value - self.mean;
        let mean = self.mean + delta / count as f64;
        let m2 = self.m2 + delta * (value - mean);
        if !m2.is_finite() {
            return Err(GatherError::numeric_error("running variance overflowed"));
        }

        self.count = count;
        self.sum = sum;
        self.mean = mean;
        self.m2 = m2;
        self.min = self.min.min(value);
        self.max = self.max.max(value);
        Ok(())
    }

    /// Combines `self` (earlier values) with `other` (later values).
    ///
    /// # Errors
    ///
    /// Returns [`GatherError::Numeric`] when the combined sum overflows.
    pub fn merge(&self, other: &Self) -> Result<Self> {
        if other.count == 0 {
            return Ok(*self);
        }
        if self.count == 0 {
            return Ok(*other);
        }
        let sum = self.sum + other.sum;
        if !sum.is_finite() {
            return Err(GatherError::numeric_error("merged sum overflowed"));
        }
        let count = self.count + other.count;
        let (left, right, total) = (self.count as f64, other.count as f64, count as f64);
        let delta = other.mean - self.mean;
        let mean = self.mean + delta * right / total;
        let m2 = self.m2 + other.m2 + delta * delta * left * right / total;
        if !m2.is_finite() {
            return Err(GatherError::numeric_error("merged variance overflowed"));
        }
        Ok(Self {
            count,
            mean,
            m2,
            sum,
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        })
    }

    /// Number of values folded in.
    #[must_use]
    pub const fn count(&self) -> u64 {
        self.count
    }

    /// Snapshot of every derived statistic.
    #[must_use]
    pub fn statistics(&self) -> Statistics {
        if self.count == 0 {
            return Statistics::EMPTY;
        }
        let n = self.count as f64;
        Statistics {
            count: self.count,
            sum: self.sum,
            min: Some(self.min),
            max: Some(self.max),
            mean: Some(self.mean),
            population_variance: Some(self.m2 / n),
            sample_variance: (self.count > 1).then(|| self.m2 / (n - 1.0)),
        }
    }
}

/// Point-in-time view of a [`RunningStats`].
///
/// Statistics that are undefined for the number of values seen are `None`: everything
/// but `count` and `sum` for an empty aggregate, and the sample variance until two
/// values have been seen.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Statistics {
    pub count: u64,
    pub sum: f64,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub mean: Option<f64>,
    pub population_variance: Option<f64>,
    pub sample_variance: Option<f64>,
}

impl Statistics {
    /// Statistics of an empty sequence.
    pub const EMPTY: Self = Self {
        count: 0,
        sum: 0.0,
        min: None,
        max: None,
        mean: None,
        population_variance: None,
        sample_variance: None,
    };

    #[must_use]
    pub fn population_std_dev(&self) -> Option<f64> {
        self.population_variance.map(f64::sqrt)
    }

    #[must_use]
    pub fn sample_std_dev(&self) -> Option<f64> {
        self.sample_variance.map(f64::sqrt)
    }
}
