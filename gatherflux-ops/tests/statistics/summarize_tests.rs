// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use gatherflux_core::buffer::Statistics;
use gatherflux_ops::{summarize, summarize_by};
use gatherflux_test_utils::{assert_close, gather_vec, naive_mean_variance, test_data::mixed_records, TestData};

#[test]
fn test_empty_input_yields_empty_statistics() -> anyhow::Result<()> {
    // Act
    let summary = gather_vec(Vec::<f64>::new(), summarize())?;

    // Assert
    assert_eq!(summary, vec![Statistics::EMPTY]);
    Ok(())
}

#[test]
fn test_single_value() -> anyhow::Result<()> {
    // Act
    let summary = gather_vec(vec![7u32], summarize())?;

    // Assert
    assert_eq!(summary.len(), 1);
    assert_eq!(summary[0].count, 1);
    assert_eq!(summary[0].mean, Some(7.0));
    assert_eq!(summary[0].min, Some(7.0));
    assert_eq!(summary[0].sample_variance, None);
    Ok(())
}

#[test]
fn test_summary_matches_naive_recomputation() -> anyhow::Result<()> {
    // Arrange
    let values: Vec<f64> = mixed_records().iter().map(|r| f64::from(r.measure())).collect();
    let (mean, variance) = naive_mean_variance(&values).ok_or_else(|| anyhow::anyhow!("no values"))?;

    // Act
    let summary = gather_vec(mixed_records(), summarize_by(|r: &TestData| f64::from(r.measure())))?;

    // Assert
    let [stats] = summary.as_slice() else {
        anyhow::bail!("expected exactly one summary, got {}", summary.len());
    };
    assert_close(stats.mean.unwrap_or(f64::NAN), mean, 1e-9);
    assert_close(stats.population_variance.unwrap_or(f64::NAN), variance, 1e-9);
    assert_close(stats.sample_variance.unwrap_or(f64::NAN), variance * 8.0 / 7.0, 1e-9);
    Ok(())
}
