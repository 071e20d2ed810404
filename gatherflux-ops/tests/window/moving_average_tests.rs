// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use gatherflux_core::GatherError;
use gatherflux_ops::{moving_average, moving_average_by, MovingAverage};
use gatherflux_test_utils::{assert_close, gather_vec, test_data::mixed_records, TestData};

#[test]
fn test_averages_full_windows_only() -> anyhow::Result<()> {
    // Arrange
    let operator = moving_average::<u32>(3)?;

    // Act
    let averages = gather_vec(vec![1u32, 2, 3, 4, 5], operator)?;

    // Assert
    assert_eq!(averages, vec![2.0, 3.0, 4.0]);
    Ok(())
}

#[test]
fn test_partials_average_what_is_available() -> anyhow::Result<()> {
    // Arrange
    let operator = MovingAverage::new(3, |v: &f64| *v)?.with_partials(true);

    // Act
    let averages = gather_vec(vec![2.0, 4.0, 6.0, 8.0], operator)?;

    // Assert
    assert_eq!(averages, vec![2.0, 3.0, 4.0, 6.0]);
    Ok(())
}

#[test]
fn test_average_by_record_measure() -> anyhow::Result<()> {
    // Arrange
    let operator = moving_average_by(2, |record: &TestData| f64::from(record.measure()))?;

    // Act
    let averages = gather_vec(mixed_records(), operator)?;

    // Assert
    assert_eq!(averages.len(), 7);
    assert_close(averages[0], 27.5, 1e-12);
    assert_close(averages[1], 17.0, 1e-12);
    assert_close(averages[6], 79.0, 1e-12);
    Ok(())
}

#[test]
fn test_non_finite_input_is_a_numeric_error() -> anyhow::Result<()> {
    // Arrange
    let operator = MovingAverage::new(2, |v: &f64| *v)?;

    // Act
    let result = gather_vec(vec![1.0, f64::NAN, 3.0], operator);

    // Assert
    assert!(matches!(result, Err(GatherError::Numeric { .. })));
    Ok(())
}

#[test]
fn test_zero_window_is_rejected() {
    // Act
    let result = moving_average::<u8>(0);

    // Assert
    assert!(result.is_err());
}
