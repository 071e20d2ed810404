// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use gatherflux_ops::{partition_by, try_partition_by};
use gatherflux_test_utils::{
    gather_vec, key_failing_on,
    test_data::{
        animal_cat, animal_dog, animal_spider, mixed_records, person_alice, person_bob, person_charlie,
        plant_fern, plant_rose,
    },
    DataVariant, TestData,
};

#[test]
fn test_partitions_in_first_seen_key_order() -> anyhow::Result<()> {
    // Act
    let partitions = gather_vec(mixed_records(), partition_by(TestData::variant))?;

    // Assert
    assert_eq!(
        partitions,
        vec![
            (DataVariant::Person, vec![person_alice(), person_bob(), person_charlie()]),
            (DataVariant::Animal, vec![animal_dog(), animal_cat(), animal_spider()]),
            (DataVariant::Plant, vec![plant_rose(), plant_fern()]),
        ]
    );
    Ok(())
}

#[test]
fn test_partition_by_parity() -> anyhow::Result<()> {
    // Act
    let partitions = gather_vec(1..=6, partition_by(|n: &i32| n % 2 == 0))?;

    // Assert
    assert_eq!(partitions, vec![(false, vec![1, 3, 5]), (true, vec![2, 4, 6])]);
    Ok(())
}

#[test]
fn test_failing_key_emits_nothing() {
    // Act
    let result = gather_vec(vec![1, 2, 3], try_partition_by(key_failing_on(3)));

    // Assert
    assert!(result.is_err());
}
