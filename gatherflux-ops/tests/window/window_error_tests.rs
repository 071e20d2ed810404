// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use gatherflux_core::GatherError;
use gatherflux_exec::{GatherExt, OperatorExt};
use gatherflux_ops::{window_fixed, window_sliding};
use gatherflux_test_utils::FailAt;

#[test]
fn test_zero_size_is_rejected() {
    // Act
    let result = window_fixed::<i32>(0);

    // Assert
    assert!(matches!(result, Err(GatherError::InvalidConfiguration { .. })));
}

#[test]
fn test_zero_step_is_rejected() {
    // Act
    let result = window_sliding::<i32>(3, 0);

    // Assert
    assert!(matches!(
        result,
        Err(GatherError::InvalidConfiguration { ref context }) if context.contains("step")
    ));
}

#[test]
fn test_upstream_error_ends_windowing() -> anyhow::Result<()> {
    // Arrange
    let operator = FailAt::new(4).then(window_fixed(2)?);

    // Act
    let results: Vec<_> = (0..10).gather(operator).collect();

    // Assert
    assert_eq!(results.len(), 3);
    assert_eq!(results[0].as_ref().ok(), Some(&vec![0, 1]));
    assert_eq!(results[1].as_ref().ok(), Some(&vec![2, 3]));
    assert!(matches!(results[2], Err(GatherError::UserError(_))));
    Ok(())
}
