// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use gatherflux_core::GatherError;
use gatherflux_ops::{moving_sum, moving_sum_by, MovingSum};
use gatherflux_test_utils::{gather_vec, test_data::mixed_records, TestData};

#[test]
fn test_sums_full_windows_only() -> anyhow::Result<()> {
    // Act
    let sums = gather_vec(vec![1u32, 2, 3, 4, 5], moving_sum::<u32>(3)?)?;

    // Assert
    assert_eq!(sums, vec![6.0, 9.0, 12.0]);
    Ok(())
}

#[test]
fn test_partials_sum_what_is_available() -> anyhow::Result<()> {
    // Arrange
    let operator = MovingSum::new(3, |v: &f64| *v)?.with_partials(true);

    // Act
    let sums = gather_vec(vec![2.0, 4.0, 6.0, 8.0], operator)?;

    // Assert
    assert_eq!(sums, vec![2.0, 6.0, 12.0, 18.0]);
    Ok(())
}

#[test]
fn test_sum_by_record_measure() -> anyhow::Result<()> {
    // Arrange
    let operator = moving_sum_by(2, |record: &TestData| f64::from(record.measure()))?;

    // Act
    let sums = gather_vec(mixed_records(), operator)?;

    // Assert
    assert_eq!(sums, vec![55.0, 34.0, 8.0, 19.0, 50.0, 43.0, 158.0]);
    Ok(())
}

#[test]
fn test_overflowing_window_is_a_numeric_error() -> anyhow::Result<()> {
    // Arrange
    let operator = MovingSum::new(2, |v: &f64| *v)?;

    // Act
    let result = gather_vec(vec![f64::MAX, f64::MAX], operator);

    // Assert
    assert!(matches!(result, Err(GatherError::Numeric { .. })));
    Ok(())
}

#[test]
fn test_zero_window_is_rejected() {
    // Act
    let result = moving_sum::<u8>(0);

    // Assert
    assert!(matches!(result, Err(GatherError::InvalidConfiguration { .. })));
}
