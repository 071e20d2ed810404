// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use gatherflux_ops::intersperse;
use gatherflux_test_utils::gather_vec;

#[test]
fn test_separator_between_elements() -> anyhow::Result<()> {
    // Act
    let joined = gather_vec(vec!["a", "b", "c"], intersperse(","))?;

    // Assert
    assert_eq!(joined.concat(), "a,b,c");
    Ok(())
}

#[test]
fn test_single_and_empty_inputs() -> anyhow::Result<()> {
    // Act
    let single = gather_vec(vec![1], intersperse(0))?;
    let empty = gather_vec(Vec::<i32>::new(), intersperse(0))?;

    // Assert
    assert_eq!(single, vec![1]);
    assert!(empty.is_empty());
    Ok(())
}
