// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use gatherflux_ops::{distinct, distinct_by};
use gatherflux_test_utils::{gather_vec, test_data::mixed_records, DataVariant, TestData};

#[test]
fn test_keeps_first_occurrence() -> anyhow::Result<()> {
    // Act
    let unique = gather_vec(vec![3, 1, 3, 2, 1, 4], distinct())?;

    // Assert
    assert_eq!(unique, vec![3, 1, 2, 4]);
    Ok(())
}

#[test]
fn test_distinct_by_variant() -> anyhow::Result<()> {
    // Act
    let unique = gather_vec(mixed_records(), distinct_by(TestData::variant))?;

    // Assert
    assert_eq!(
        unique.iter().map(TestData::variant).collect::<Vec<_>>(),
        vec![DataVariant::Person, DataVariant::Animal, DataVariant::Plant]
    );
    Ok(())
}

#[test]
fn test_distinct_output_has_no_duplicates() -> anyhow::Result<()> {
    let mut rng = fastrand::Rng::with_seed(5);
    for _ in 0..20 {
        // Arrange
        let input: Vec<u16> = (0..200).map(|_| rng.u16(0..50)).collect();

        // Act
        let unique = gather_vec(input.clone(), distinct())?;

        // Assert
        let mut sorted = unique.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), unique.len());
        assert!(input.iter().all(|v| unique.contains(v)));
    }
    Ok(())
}
