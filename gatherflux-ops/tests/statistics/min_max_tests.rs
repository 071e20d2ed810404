// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use gatherflux_ops::{max_by, max_by_key, maximum, min_by_key, minimum, Extreme};
use gatherflux_test_utils::{
    gather_vec,
    test_data::{animal_dog, mixed_records, plant_fern, plant_rose},
    TestData,
};

#[test]
fn test_largest_and_smallest_by_measure() -> anyhow::Result<()> {
    // Act
    let largest = gather_vec(mixed_records(), max_by_key(TestData::measure))?;
    let smallest = gather_vec(mixed_records(), min_by_key(TestData::measure))?;

    // Assert
    assert_eq!(largest, vec![plant_fern()]);
    assert_eq!(smallest, vec![animal_dog()]);
    Ok(())
}

#[test]
fn test_ties_keep_first_seen() -> anyhow::Result<()> {
    // Act
    let last_variant = gather_vec(mixed_records(), max_by_key(TestData::variant))?;

    // Assert
    assert_eq!(last_variant, vec![plant_rose()]);
    Ok(())
}

#[test]
fn test_natural_order() -> anyhow::Result<()> {
    // Act
    let largest = gather_vec(vec![3, 9, 1, 9, 4], maximum())?;
    let smallest = gather_vec(vec![3, 9, 1, 9, 4], minimum())?;

    // Assert
    assert_eq!(largest, vec![9]);
    assert_eq!(smallest, vec![1]);
    Ok(())
}

#[test]
fn test_custom_comparator() -> anyhow::Result<()> {
    // Arrange
    let longest = max_by(|a: &&str, b: &&str| a.len().cmp(&b.len()));

    // Act
    let result = gather_vec(vec!["fern", "rose", "cactus", "orchid"], longest)?;

    // Assert
    assert_eq!(result, vec!["cactus"]);
    Ok(())
}

#[test]
fn test_empty_input_yields_nothing() -> anyhow::Result<()> {
    // Arrange
    let operator = maximum::<i32>();

    // Act
    let result = gather_vec(Vec::new(), &operator)?;

    // Assert
    assert!(result.is_empty());
    assert_eq!(operator.extreme(), Extreme::Max);
    Ok(())
}
