// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use gatherflux_core::{entropy, GatherError};
use gatherflux_ops::{sample_ratio, SampleRatio};
use gatherflux_test_utils::{gather_vec, Z_999};

#[test]
fn test_zero_keeps_nothing_and_one_keeps_everything() -> anyhow::Result<()> {
    // Act
    let none = gather_vec(0..1_000, sample_ratio(0.0)?)?;
    let all = gather_vec(0..1_000, sample_ratio(1.0)?)?;

    // Assert
    assert!(none.is_empty());
    assert_eq!(all, (0..1_000).collect::<Vec<_>>());
    Ok(())
}

#[test]
fn test_kept_fraction_matches_probability() -> anyhow::Result<()> {
    // Arrange
    let n = 20_000.0;
    let p = 0.3;
    let operator = SampleRatio::with_entropy(p, entropy::seeded(2024))?;

    // Act
    let kept = gather_vec(0..20_000, operator)?;

    // Assert
    let tolerance = Z_999 * (n * p * (1.0 - p)).sqrt();
    assert!((kept.len() as f64 - n * p).abs() < tolerance, "kept {}", kept.len());
    assert!(kept.windows(2).all(|pair| pair[0] < pair[1]));
    Ok(())
}

#[test]
fn test_seeded_operator_repeats_across_traversals() -> anyhow::Result<()> {
    // Arrange
    let operator = SampleRatio::with_entropy(0.5, entropy::seeded(11))?;

    // Act
    let first = gather_vec(0..1_000, &operator)?;
    let second = gather_vec(0..1_000, &operator)?;

    // Assert
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn test_unseeded_operator_keeps_different_elements_per_traversal() -> anyhow::Result<()> {
    // Arrange
    let operator = sample_ratio(0.5)?;

    // Act
    let first = gather_vec(0..1_000, &operator)?;
    let second = gather_vec(0..1_000, &operator)?;

    // Assert
    assert_ne!(first, second);
    Ok(())
}

#[test]
fn test_probability_outside_unit_interval_is_rejected() {
    for p in [-0.1, 1.5, f64::NAN] {
        // Act
        let result = sample_ratio::<u8>(p);

        // Assert
        assert!(matches!(result, Err(GatherError::InvalidConfiguration { .. })), "p={p}");
    }
}
