// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Internal structures shared by several operators.

pub mod bounded_buffer;
pub mod reservoir;
pub mod running_stats;

pub use bounded_buffer::BoundedBuffer;
pub use reservoir::Reservoir;
pub use running_stats::{RunningStats, Statistics};
