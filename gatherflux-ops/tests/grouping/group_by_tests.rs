// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use gatherflux_core::GatherError;
use gatherflux_ops::{group_by, group_consecutive, try_group_by};
use gatherflux_test_utils::{
    gather_vec, key_failing_on, InjectedError,
    test_data::{animal_cat, animal_dog, mixed_records, person_alice, person_bob, plant_rose},
    DataVariant, TestData,
};

#[test]
fn test_groups_equal_neighbours() -> anyhow::Result<()> {
    // Act
    let groups = gather_vec(vec![1, 1, 2, 3, 3, 3, 1], group_consecutive())?;

    // Assert
    assert_eq!(groups, vec![vec![1, 1], vec![2], vec![3, 3, 3], vec![1]]);
    Ok(())
}

#[test]
fn test_group_by_variant_starts_new_group_on_reappearance() -> anyhow::Result<()> {
    // Act
    let groups = gather_vec(mixed_records(), group_by(TestData::variant))?;

    // Assert
    let variants: Vec<DataVariant> = groups.iter().map(|g| g[0].variant()).collect();
    assert_eq!(
        variants,
        vec![
            DataVariant::Person,
            DataVariant::Animal,
            DataVariant::Plant,
            DataVariant::Person,
            DataVariant::Animal,
            DataVariant::Plant,
        ]
    );
    assert_eq!(groups[0], vec![person_alice(), person_bob()]);
    assert_eq!(groups[1], vec![animal_dog(), animal_cat()]);
    assert_eq!(groups[2], vec![plant_rose()]);
    Ok(())
}

#[test]
fn test_empty_input_has_no_groups() -> anyhow::Result<()> {
    // Act
    let groups = gather_vec(Vec::<u8>::new(), group_consecutive())?;

    // Assert
    assert!(groups.is_empty());
    Ok(())
}

#[test]
fn test_failing_key_aborts_grouping() {
    // Act
    let result = gather_vec(vec![1, 1, 2], try_group_by(key_failing_on(2)));

    // Assert
    assert!(matches!(result, Err(GatherError::UserError(_))));
}

#[test]
fn test_failing_key_error_is_the_user_error() {
    // Act
    let result = gather_vec(vec![1, 1, 2], try_group_by(key_failing_on(2)));

    // Assert
    match result {
        Err(GatherError::UserError(inner)) => assert!(inner.downcast_ref::<InjectedError>().is_some()),
        other => panic!("expected a user error, got {other:?}"),
    }
}
