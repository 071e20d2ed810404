// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::time::Duration;
use gatherflux::prelude::*;
use gatherflux::{ThrottleConfig, WindowConfig};

#[test]
fn test_window_config_from_json_drives_windows() -> anyhow::Result<()> {
    // Arrange
    let json = r#"{"size":3,"step":2,"include_partials":true}"#;

    // Act
    let config: WindowConfig = serde_json::from_str(json)?;
    let windows = (1..=6).windows_with(config)?.collect::<Result<Vec<_>>>()?;

    // Assert
    assert_eq!(config, WindowConfig::sliding(3, 2).with_partials(true));
    assert_eq!(windows, vec![vec![1, 2, 3], vec![3, 4, 5], vec![5, 6]]);
    assert_eq!(serde_json::to_string(&config)?, json);
    Ok(())
}

#[test]
fn test_throttle_config_round_trips() -> anyhow::Result<()> {
    // Arrange
    let config = ThrottleConfig::new(Duration::from_millis(250));

    // Act
    let restored: ThrottleConfig = serde_json::from_str(&serde_json::to_string(&config)?)?;

    // Assert
    assert_eq!(restored, config);
    Ok(())
}
