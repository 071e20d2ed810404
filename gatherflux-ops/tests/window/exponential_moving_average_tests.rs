// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use gatherflux_core::GatherError;
use gatherflux_ops::{exponential_moving_average, exponential_moving_average_by, ExponentialMovingAverage};
use gatherflux_test_utils::{assert_close, gather_vec, test_data::mixed_records, TestData};

#[test]
fn test_first_value_seeds_the_average() -> anyhow::Result<()> {
    // Act
    let averages = gather_vec(vec![2.0f64, 4.0, 8.0], exponential_moving_average(0.5)?)?;

    // Assert
    assert_eq!(averages, vec![2.0, 3.0, 5.5]);
    Ok(())
}

#[test]
fn test_alpha_one_tracks_the_input() -> anyhow::Result<()> {
    // Arrange
    let measures: Vec<u32> = mixed_records().iter().map(TestData::measure).collect();
    let expected: Vec<f64> = measures.iter().copied().map(f64::from).collect();

    // Act
    let averages = gather_vec(measures, exponential_moving_average::<u32>(1.0)?)?;

    // Assert
    assert_eq!(averages, expected);
    Ok(())
}

#[test]
fn test_periods_derive_the_smoothing_factor() -> anyhow::Result<()> {
    // Arrange
    let operator = ExponentialMovingAverage::with_periods(3, |record: &TestData| f64::from(record.measure()))?;

    // Act
    let averages = gather_vec(mixed_records(), &operator)?;

    // Assert
    assert_close(operator.alpha(), 0.5, 1e-12);
    assert_close(averages[0], 25.0, 1e-12);
    assert_close(averages[1], 27.5, 1e-12);
    assert_close(averages[2], 15.75, 1e-12);
    Ok(())
}

#[test]
fn test_non_finite_input_is_a_numeric_error() -> anyhow::Result<()> {
    // Arrange
    let operator = exponential_moving_average_by(0.3, |v: &f64| *v)?;

    // Act
    let result = gather_vec(vec![1.0, f64::INFINITY], operator);

    // Assert
    assert!(matches!(result, Err(GatherError::Numeric { .. })));
    Ok(())
}

#[test]
fn test_smoothing_factor_outside_range_is_rejected() {
    for alpha in [0.0, -0.5, 1.5, f64::NAN] {
        // Act
        let result = exponential_moving_average::<f64>(alpha);

        // Assert
        assert!(matches!(result, Err(GatherError::InvalidConfiguration { .. })), "alpha={alpha}");
    }
}

#[test]
fn test_zero_periods_is_rejected() {
    // Act
    let result = ExponentialMovingAverage::with_periods(0, |v: &f64| *v);

    // Assert
    assert!(matches!(result, Err(GatherError::InvalidConfiguration { .. })));
}
