// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use gatherflux::prelude::*;
use gatherflux::WindowConfig;
use gatherflux_test_utils::test_data::{animal_dog, person_alice, person_bob};

#[test]
fn test_windows_fixed_count_is_floor_of_length_over_size() -> anyhow::Result<()> {
    for len in [0usize, 1, 5, 6, 7, 100] {
        // Act
        let windows = (0..len).windows_fixed(3)?.collect::<Result<Vec<_>>>()?;

        // Assert
        assert_eq!(windows.len(), len / 3);
    }
    Ok(())
}

#[test]
fn test_windows_sliding_and_partials() -> anyhow::Result<()> {
    // Act
    let sliding = (1..=4).windows_sliding(2, 1)?.collect::<Result<Vec<_>>>()?;
    let partial = (1..=5)
        .windows_with(WindowConfig::fixed(2).with_partials(true))?
        .collect::<Result<Vec<_>>>()?;

    // Assert
    assert_eq!(sliding, vec![vec![1, 2], vec![2, 3], vec![3, 4]]);
    assert_eq!(partial, vec![vec![1, 2], vec![3, 4], vec![5]]);
    Ok(())
}

#[test]
fn test_zip_with_next() -> anyhow::Result<()> {
    // Act
    let pairs = vec![1, 2, 3, 4].into_iter().zip_with_next().collect::<Result<Vec<_>>>()?;
    let single = vec![1].into_iter().zip_with_next().collect::<Result<Vec<_>>>()?;
    let records = vec![person_alice(), person_bob(), animal_dog()]
        .into_iter()
        .zip_with_next()
        .collect::<Result<Vec<_>>>()?;

    // Assert
    assert_eq!(pairs, vec![(1, 2), (2, 3), (3, 4)]);
    assert!(single.is_empty());
    assert_eq!(records.len(), 2);
    Ok(())
}

#[test]
fn test_moving_average() -> anyhow::Result<()> {
    // Act
    let averages = [10u8, 20, 30, 40].into_iter().moving_average(2)?.collect::<Result<Vec<_>>>()?;

    // Assert
    assert_eq!(averages, vec![15.0, 25.0, 35.0]);
    Ok(())
}

#[test]
fn test_invalid_window_is_reported_before_iteration() {
    // Act
    let result = (0..10).windows_sliding(3, 0);

    // Assert
    assert!(matches!(result, Err(GatherError::InvalidConfiguration { .. })));
}

#[test]
fn test_moving_sum_and_exponential_average() -> anyhow::Result<()> {
    // Act
    let sums = [1u8, 2, 3, 4].into_iter().moving_sum(2)?.collect::<Result<Vec<_>>>()?;
    let averages = [2u8, 4, 8].into_iter().exponential_moving_average(0.5)?.collect::<Result<Vec<_>>>()?;

    // Assert
    assert_eq!(sums, vec![3.0, 5.0, 7.0]);
    assert_eq!(averages, vec![2.0, 3.0, 5.5]);
    Ok(())
}
