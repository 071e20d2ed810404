// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::cmp::Ordering;
use core::fmt::{self, Display};

/// Relationship required between consecutive elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Order {
    /// Each element strictly greater than the previous one
    Increasing,
    /// Each element greater than or equal to the previous one
    NonDecreasing,
    /// Each element strictly less than the previous one
    Decreasing,
    /// Each element less than or equal to the previous one
    NonIncreasing,
}

impl Order {
    /// Whether `next` may follow `previous`, given `next.cmp(previous)`.
    #[must_use]
    pub const fn allows(self, next_vs_previous: Ordering) -> bool {
        match self {
            Self::Increasing => matches!(next_vs_previous, Ordering::Greater),
            Self::NonDecreasing => !matches!(next_vs_previous, Ordering::Less),
            Self::Decreasing => matches!(next_vs_previous, Ordering::Less),
            Self::NonIncreasing => !matches!(next_vs_previous, Ordering::Greater),
        }
    }
}

impl Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Increasing => "increasing",
            Self::NonDecreasing => "non-decreasing",
            Self::Decreasing => "decreasing",
            Self::NonIncreasing => "non-increasing",
        };
        f.write_str(name)
    }
}
