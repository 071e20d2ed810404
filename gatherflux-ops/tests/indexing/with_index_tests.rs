// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use gatherflux_ops::with_index;
use gatherflux_test_utils::{
    gather_vec,
    test_data::{animal_dog, person_alice},
};

#[test]
fn test_indices_start_at_zero() -> anyhow::Result<()> {
    // Act
    let indexed = gather_vec(vec![person_alice(), animal_dog()], with_index())?;

    // Assert
    assert_eq!(indexed, vec![(0, person_alice()), (1, animal_dog())]);
    Ok(())
}

#[test]
fn test_indices_are_contiguous() -> anyhow::Result<()> {
    // Act
    let indexed = gather_vec(100..200, with_index())?;

    // Assert
    assert!(indexed.iter().enumerate().all(|(i, (index, value))| {
        *index == i as u64 && *value == 100 + i as i32
    }));
    Ok(())
}
