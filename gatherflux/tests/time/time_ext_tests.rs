// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::time::Duration;
use gatherflux::prelude::*;
use gatherflux::{ManualClock, RateLimitConfig, ThrottleConfig};
use gatherflux_test_utils::arriving_at;

#[test]
fn test_throttle_with_manual_clock() -> anyhow::Result<()> {
    // Arrange
    let clock = ManualClock::new();
    let source = arriving_at(&clock, [(0, 0), (50, 50), (150, 150), (160, 160), (300, 300)]);

    // Act
    let emitted = source
        .throttle_with(ThrottleConfig::new(Duration::from_millis(100)), clock.clone())?
        .collect::<Result<Vec<_>>>()?;

    // Assert
    assert_eq!(emitted, vec![0, 150, 300]);
    Ok(())
}

#[test]
fn test_rate_limit_with_manual_clock() -> anyhow::Result<()> {
    // Arrange
    let clock = ManualClock::new();
    let source = arriving_at(&clock, [(0, 'a'), (10, 'b'), (20, 'c'), (1_000, 'd')]);

    // Act
    let emitted = source
        .rate_limit_with(RateLimitConfig::new(1, Duration::from_secs(1)), clock.clone())?
        .collect::<Result<Vec<_>>>()?;

    // Assert
    assert_eq!(emitted, vec!['a', 'd']);
    Ok(())
}

#[test]
fn test_wall_clock_throttle_emits_first_element() -> anyhow::Result<()> {
    // Act
    let emitted = (0..5).throttle(Duration::from_secs(3_600))?.collect::<Result<Vec<_>>>()?;

    // Assert
    assert_eq!(emitted, vec![0]);
    Ok(())
}

#[test]
fn test_zero_durations_are_rejected() {
    // Act & Assert
    assert!((0..3).throttle(Duration::ZERO).is_err());
    assert!((0..3).rate_limit(0, Duration::from_secs(1)).is_err());
}
