// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use gatherflux_time::ManualClock;

/// Source yielding `(millis, value)` pairs, moving `clock` to `millis` just before each
/// value is handed out.
///
/// Because the driver pulls one element at a time, an operator reading `clock` while
/// integrating a value sees exactly that value's timestamp.
pub fn arriving_at<T>(
    clock: &ManualClock,
    schedule: impl IntoIterator<Item = (u64, T)>,
) -> impl Iterator<Item = T> {
    let clock = clock.clone();
    schedule.into_iter().map(move |(millis, value)| {
        clock.set_millis(millis);
        value
    })
}
