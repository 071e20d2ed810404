// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use gatherflux_ops::reverse;
use gatherflux_test_utils::{gather_vec, test_data::mixed_records};

#[test]
fn test_reverses_input() -> anyhow::Result<()> {
    // Act
    let reversed = gather_vec(mixed_records(), reverse())?;

    // Assert
    let mut expected = mixed_records();
    expected.reverse();
    assert_eq!(reversed, expected);
    Ok(())
}

#[test]
fn test_empty_input() -> anyhow::Result<()> {
    // Act
    let reversed = gather_vec(Vec::<u8>::new(), reverse())?;

    // Assert
    assert!(reversed.is_empty());
    Ok(())
}
