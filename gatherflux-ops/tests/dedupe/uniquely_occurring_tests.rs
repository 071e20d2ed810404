// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use gatherflux_ops::uniquely_occurring;
use gatherflux_test_utils::{
    gather_vec,
    test_data::{animal_cat, animal_dog, mixed_records, person_alice},
    DataVariant, TestData,
};

#[test]
fn test_only_single_occurrences_in_arrival_order() -> anyhow::Result<()> {
    // Arrange
    let measures: Vec<u32> = mixed_records().iter().map(TestData::measure).collect();

    // Act
    let singles = gather_vec(measures, uniquely_occurring())?;

    // Assert
    assert_eq!(singles, vec![25, 30, 15, 35, 8, 150]);
    Ok(())
}

#[test]
fn test_every_value_repeated_yields_nothing() -> anyhow::Result<()> {
    // Arrange
    let variants: Vec<DataVariant> = mixed_records().iter().map(TestData::variant).collect();

    // Act
    let singles = gather_vec(variants, uniquely_occurring())?;

    // Assert
    assert!(singles.is_empty());
    Ok(())
}

#[test]
fn test_element_repeated_three_times_stays_excluded() -> anyhow::Result<()> {
    // Arrange
    let records = vec![animal_dog(), person_alice(), animal_dog(), animal_cat(), animal_dog()];

    // Act
    let singles = gather_vec(records, uniquely_occurring())?;

    // Assert
    assert_eq!(singles, vec![person_alice(), animal_cat()]);
    Ok(())
}

#[test]
fn test_empty_input_yields_nothing() -> anyhow::Result<()> {
    // Act
    let singles = gather_vec(Vec::<char>::new(), uniquely_occurring())?;

    // Assert
    assert!(singles.is_empty());
    Ok(())
}
