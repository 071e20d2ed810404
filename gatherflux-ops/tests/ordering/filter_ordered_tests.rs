// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use gatherflux_core::Order;
use gatherflux_ops::{filter_ordered, filter_ordered_by};
use gatherflux_test_utils::{gather_vec, test_data::mixed_records, TestData};

#[test]
fn test_keeps_increasing_subsequence_against_last_kept() -> anyhow::Result<()> {
    // Act
    let kept = gather_vec(vec![3, 1, 4, 1, 5, 9, 2, 6], filter_ordered(Order::Increasing))?;

    // Assert
    assert_eq!(kept, vec![3, 4, 5, 9]);
    Ok(())
}

#[test]
fn test_non_increasing_keeps_equal_values() -> anyhow::Result<()> {
    // Act
    let kept = gather_vec(vec![5, 5, 7, 3, 3, 4, 1], filter_ordered(Order::NonIncreasing))?;

    // Assert
    assert_eq!(kept, vec![5, 5, 3, 3, 1]);
    Ok(())
}

#[test]
fn test_filter_records_by_measure() -> anyhow::Result<()> {
    // Arrange
    let operator = filter_ordered_by(Order::NonDecreasing, |a: &TestData, b: &TestData| {
        a.measure().cmp(&b.measure())
    });

    // Act
    let kept = gather_vec(mixed_records(), operator)?;

    // Assert
    assert_eq!(
        kept.iter().map(TestData::name).collect::<Vec<_>>(),
        vec!["Alice", "Bob", "Charlie", "Fern"]
    );
    Ok(())
}
