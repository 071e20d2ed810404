// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
//! The gatherflux operator catalog.
//!
//! Every operator is an immutable, validated configuration implementing
//! [`gatherflux_core::Operator`]; drive it with `gatherflux-exec` or through the
//! extension traits of the `gatherflux` facade.
//!
//! | Category | Operators |
//! |---|---|
//! | Windowing | [`Window`], [`MovingAverage`], [`MovingSum`], [`ExponentialMovingAverage`], [`ZipWithNext`] |
//! | Deduplication | [`DedupeConsecutive`], [`Distinct`], [`UniquelyOccurring`] |
//! | Indexing | [`WithIndex`], [`EveryNth`], [`Intersperse`] |
//! | Sampling | [`ReservoirSample`], [`SampleRatio`] |
//! | Statistics | [`RunningStatistics`], [`Summarize`], [`RunningSum`], [`Frequency`], [`MinMax`] |
//! | Ordering | [`EnsureOrdered`], [`FilterOrdered`], [`GroupOrdered`], [`Reverse`] |
//! | Grouping | [`GroupBy`], [`PartitionBy`] |
//! | Truncation | [`TakeLast`], [`DropLast`], [`TakeUntil`] |
//!
//! Only [`Summarize`], [`PartitionBy`], [`Frequency`], [`UniquelyOccurring`],
//! [`MinMax`], [`TakeLast`] and [`Reverse`] can merge partial states; every other
//! operator is sequential-only.

#[macro_use]
mod logging;
mod key;

pub mod dedupe_consecutive;
pub mod distinct;
pub mod ensure_ordered;
pub mod every_nth;
pub mod exponential_moving_average;
pub mod filter_ordered;
pub mod frequency;
pub mod group_by;
pub mod group_ordered;
pub mod intersperse;
pub mod min_max;
pub mod moving_average;
pub mod moving_sum;
pub mod partition_by;
pub mod reservoir_sample;
pub mod reverse;
pub mod running_statistics;
pub mod running_sum;
pub mod sample_ratio;
pub mod take_last;
pub mod take_until;
pub mod uniquely_occurring;
pub mod window;
pub mod with_index;
pub mod zip_with_next;

// Re-export commonly used types
pub use dedupe_consecutive::{
    dedupe_consecutive, dedupe_consecutive_by, try_dedupe_consecutive_by, DedupeConsecutive,
};
pub use distinct::{distinct, distinct_by, try_distinct_by, Distinct};
pub use ensure_ordered::{
    ensure_ordered, ensure_ordered_by, ensure_ordered_by_key, EnsureOrdered, OnViolation,
};
pub use every_nth::{drop_every_nth, take_every_nth, EveryNth, EveryNthMode};
pub use exponential_moving_average::{
    exponential_moving_average, exponential_moving_average_by, ExponentialMovingAverage,
};
pub use filter_ordered::{filter_ordered, filter_ordered_by, FilterOrdered};
pub use frequency::{frequency, Frequency, FrequencyOrder, WithCount};
pub use group_by::{group_by, group_consecutive, try_group_by, GroupBy};
pub use group_ordered::{group_ordered, group_ordered_by, GroupOrdered};
pub use intersperse::{intersperse, Intersperse};
pub use min_max::{max_by, max_by_key, maximum, min_by, min_by_key, minimum, Extreme, MinMax};
pub use moving_average::{moving_average, moving_average_by, MovingAverage};
pub use moving_sum::{moving_sum, moving_sum_by, MovingSum};
pub use partition_by::{partition_by, try_partition_by, PartitionBy};
pub use reservoir_sample::{
    sample_reservoir, sample_reservoir_seeded, ReservoirConfig, ReservoirSample,
};
pub use reverse::{reverse, Reverse};
pub use running_statistics::{
    running_statistics, running_statistics_by, summarize, summarize_by, RunningStatistics,
    Summarize,
};
pub use running_sum::{running_sum, running_sum_by, RunningSum};
pub use sample_ratio::{sample_ratio, SampleRatio};
pub use take_last::{drop_last, take_last, DropLast, TakeLast};
pub use take_until::{take_until, TakeUntil};
pub use uniquely_occurring::{uniquely_occurring, UniquelyOccurring};
pub use window::{window_fixed, window_sliding, Window, WindowConfig};
pub use with_index::{with_index, WithIndex};
pub use zip_with_next::{zip_with_next, ZipWithNext};
