// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use gatherflux::prelude::*;
use gatherflux_test_utils::{test_data::mixed_records, DataVariant, TestData};

#[test]
fn test_group_by_key_and_partition_by_key() -> anyhow::Result<()> {
    // Act
    let runs = mixed_records()
        .into_iter()
        .group_by_key(TestData::variant)
        .collect::<Result<Vec<_>>>()?;
    let partitions = mixed_records()
        .into_iter()
        .partition_by_key(TestData::variant)
        .collect::<Result<Vec<_>>>()?;

    // Assert
    assert_eq!(runs.len(), 6);
    assert_eq!(
        partitions.iter().map(|(key, group)| (*key, group.len())).collect::<Vec<_>>(),
        vec![(DataVariant::Person, 3), (DataVariant::Animal, 3), (DataVariant::Plant, 2)]
    );
    Ok(())
}

#[test]
fn test_group_consecutive() -> anyhow::Result<()> {
    // Act
    let groups = "aabccc".chars().group_consecutive().collect::<Result<Vec<_>>>()?;

    // Assert
    assert_eq!(groups, vec![vec!['a', 'a'], vec!['b'], vec!['c', 'c', 'c']]);
    Ok(())
}
