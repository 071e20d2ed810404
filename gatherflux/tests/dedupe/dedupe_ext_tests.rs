// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use gatherflux::prelude::*;
use gatherflux_test_utils::{test_data::mixed_records, TestData};

#[test]
fn test_dedupe_consecutive_is_idempotent() -> anyhow::Result<()> {
    let mut rng = fastrand::Rng::with_seed(99);
    for _ in 0..25 {
        // Arrange
        let input: Vec<u8> = (0..rng.usize(0..50)).map(|_| rng.u8(0..3)).collect();

        // Act
        let once = input.into_iter().dedupe_consecutive().collect::<Result<Vec<_>>>()?;
        let twice = once.clone().into_iter().dedupe_consecutive().collect::<Result<Vec<_>>>()?;

        // Assert
        assert_eq!(once, twice);
    }
    Ok(())
}

#[test]
fn test_distinct_by_variant_with_index() -> anyhow::Result<()> {
    // Act
    let firsts = mixed_records()
        .into_iter()
        .distinct_by(TestData::variant)
        .map(|r| r.map(|record| record.name().to_string()))
        .collect::<Result<Vec<_>>>()?;
    let indexed = vec!['x', 'y'].into_iter().with_index().collect::<Result<Vec<_>>>()?;

    // Assert
    assert_eq!(firsts, vec!["Alice", "Dog", "Rose"]);
    assert_eq!(indexed, vec![(0, 'x'), (1, 'y')]);
    Ok(())
}

#[test]
fn test_every_nth_and_separator() -> anyhow::Result<()> {
    // Act
    let taken = (0..7).take_every_nth(3)?.collect::<Result<Vec<_>>>()?;
    let dropped = (0..7).drop_every_nth(3)?.collect::<Result<Vec<_>>>()?;
    let separated = vec![1, 2, 3].into_iter().separated_by(0).collect::<Result<Vec<_>>>()?;

    // Assert
    assert_eq!(taken, vec![0, 3, 6]);
    assert_eq!(dropped, vec![1, 2, 4, 5]);
    assert_eq!(separated, vec![1, 0, 2, 0, 3]);
    Ok(())
}

#[test]
fn test_uniquely_occurring_measures() -> anyhow::Result<()> {
    // Act
    let singles = mixed_records()
        .iter()
        .map(TestData::measure)
        .uniquely_occurring()
        .collect::<Result<Vec<_>>>()?;

    // Assert
    assert_eq!(singles, vec![25, 30, 15, 35, 8, 150]);
    Ok(())
}
