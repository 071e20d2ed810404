// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use gatherflux_ops::{zip_with_next, ZipWithNext};
use gatherflux_test_utils::{
    gather_vec,
    test_data::{animal_dog, person_alice, person_bob},
};

#[test]
fn test_pairs_each_element_with_successor() -> anyhow::Result<()> {
    // Act
    let pairs = gather_vec(vec![1, 2, 3, 4], zip_with_next())?;

    // Assert
    assert_eq!(pairs, vec![(1, 2), (2, 3), (3, 4)]);
    Ok(())
}

#[test]
fn test_single_element_produces_nothing() -> anyhow::Result<()> {
    // Act
    let pairs = gather_vec(vec![1], zip_with_next())?;

    // Assert
    assert!(pairs.is_empty());
    Ok(())
}

#[test]
fn test_empty_input_produces_nothing() -> anyhow::Result<()> {
    // Act
    let pairs = gather_vec(Vec::<u8>::new(), zip_with_next())?;

    // Assert
    assert!(pairs.is_empty());
    Ok(())
}

#[test]
fn test_trailing_fill_pairs_last_element() -> anyhow::Result<()> {
    // Arrange
    let operator = ZipWithNext::new().with_trailing_fill(0);

    // Act
    let pairs = gather_vec(vec![7, 8], operator)?;

    // Assert
    assert_eq!(pairs, vec![(7, 8), (8, 0)]);
    Ok(())
}

#[test]
fn test_pairs_records() -> anyhow::Result<()> {
    // Act
    let pairs = gather_vec(vec![person_alice(), person_bob(), animal_dog()], zip_with_next())?;

    // Assert
    assert_eq!(
        pairs,
        vec![(person_alice(), person_bob()), (person_bob(), animal_dog())]
    );
    Ok(())
}
