// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Construction-time validation shared by every operator crate.
//!
//! Each helper names the rejecting operator in the error context and logs the
//! rejection, so a bad configuration is reported once, before any element flows.

use crate::error::{GatherError, Result};
use core::num::NonZeroUsize;
use core::time::Duration;

/// Builds a configuration error for `operator` and records the rejection.
pub fn reject(operator: &'static str, context: impl Into<String>) -> GatherError {
    let context = format!("{operator}: {}", context.into());
    warn!("rejected operator configuration: {context}");
    GatherError::config_error(context)
}

/// # Errors
///
/// Returns a configuration error when `value` is zero.
pub fn non_zero(operator: &'static str, what: &str, value: usize) -> Result<NonZeroUsize> {
    NonZeroUsize::new(value).ok_or_else(|| reject(operator, format!("{what} must be greater than zero")))
}

/// # Errors
///
/// Returns a configuration error when `duration` is zero.
pub fn positive(operator: &'static str, what: &str, duration: Duration) -> Result<Duration> {
    if duration.is_zero() {
        return Err(reject(operator, format!("{what} must be greater than zero")));
    }
    Ok(duration)
}

/// # Errors
///
/// Returns a configuration error unless `value` lies in `[0.0, 1.0]`.
pub fn probability(operator: &'static str, value: f64) -> Result<f64> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(reject(
            operator,
            format!("probability must be between 0.0 and 1.0, got {value}"),
        ))
    }
}

/// Smoothing factor of an exponential average.
///
/// # Errors
///
/// Returns a configuration error unless `alpha` lies in `(0.0, 1.0]`.
pub fn smoothing_factor(operator: &'static str, alpha: f64) -> Result<f64> {
    if alpha > 0.0 && alpha <= 1.0 {
        Ok(alpha)
    } else {
        Err(reject(
            operator,
            format!("smoothing factor must be in (0.0, 1.0], got {alpha}"),
        ))
    }
}
