// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use gatherflux_core::GatherError;
use gatherflux_ops::{drop_every_nth, take_every_nth, EveryNth, EveryNthMode};
use gatherflux_test_utils::gather_vec;

#[test]
fn test_take_every_third_starts_with_first() -> anyhow::Result<()> {
    // Act
    let taken = gather_vec(0..10, take_every_nth(3)?)?;

    // Assert
    assert_eq!(taken, vec![0, 3, 6, 9]);
    Ok(())
}

#[test]
fn test_drop_every_third_is_complement() -> anyhow::Result<()> {
    // Act
    let dropped = gather_vec(0..10, drop_every_nth(3)?)?;

    // Assert
    assert_eq!(dropped, vec![1, 2, 4, 5, 7, 8]);
    Ok(())
}

#[test]
fn test_take_and_drop_partition_input() -> anyhow::Result<()> {
    for n in 2..7u64 {
        // Arrange
        let input: Vec<u32> = (0..50).collect();

        // Act
        let mut merged = gather_vec(input.clone(), EveryNth::new(n, EveryNthMode::Take)?)?;
        merged.extend(gather_vec(input.clone(), EveryNth::new(n, EveryNthMode::Drop)?)?);
        merged.sort_unstable();

        // Assert
        assert_eq!(merged, input);
    }
    Ok(())
}

#[test]
fn test_n_below_two_is_rejected() {
    for n in [0, 1] {
        // Act
        let result = take_every_nth::<u8>(n);

        // Assert
        assert!(matches!(result, Err(GatherError::InvalidConfiguration { .. })));
    }
}
