// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use gatherflux_core::{Operator, Result};
use gatherflux_exec::GatherExt;

/// 0.999 quantile of the standard normal distribution.
pub const Z_999: f64 = 3.090;

/// Runs `operator` over `input` and collects the outputs.
///
/// # Errors
///
/// Returns the first error raised by the operator.
pub fn gather_vec<Op, I>(input: I, operator: Op) -> Result<Vec<Op::Output>>
where
    Op: Operator,
    I: IntoIterator<Item = Op::Input>,
{
    input.into_iter().gather(operator).collect()
}

/// Panics unless `actual` is within `tolerance` of `expected`.
///
/// # Panics
///
/// When the values differ by more than `tolerance`.
#[track_caller]
pub fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected} +/- {tolerance}, got {actual}"
    );
}

/// Pearson's chi-square statistic of `observed` counts against a uniform expectation.
#[must_use]
pub fn chi_square_statistic(observed: &[u64], expected_per_bucket: f64) -> f64 {
    observed
        .iter()
        .map(|&count| {
            let delta = count as f64 - expected_per_bucket;
            delta * delta / expected_per_bucket
        })
        .sum()
}

/// Upper critical value of the chi-square distribution with `degrees_of_freedom`,
/// at the quantile of the standard normal `z` (Wilson-Hilferty approximation).
#[must_use]
pub fn chi_square_critical_value(degrees_of_freedom: usize, z: f64) -> f64 {
    let k = degrees_of_freedom as f64;
    let h = 2.0 / (9.0 * k);
    k * (1.0 - h + z * h.sqrt()).powi(3)
}

/// Mean and population variance computed directly from the values.
#[must_use]
pub fn naive_mean_variance(values: &[f64]) -> Option<(f64, f64)> {
    if values.is_empty() {
        return None;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    Some((mean, variance))
}
