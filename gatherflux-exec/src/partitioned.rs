// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Split execution over pre-partitioned input.

use gatherflux_core::{GatherError, Operator, Result};
use std::thread;

/// Runs `operator` over each partition on its own scoped thread and combines the
/// results as if the partitions had been processed back to back.
///
/// # Behavior
///
/// - Every partition gets an independently initialized state
/// - Outputs produced while integrating are concatenated in partition order
/// - Partition states are merged left to right, then the merged state is finished once
/// - No partitions at all behaves like an empty input
///
/// # Errors
///
/// - [`GatherError::SequentialOnly`] before any work starts when the operator cannot
///   merge partial states
/// - Otherwise the error of the leftmost failing partition, or of the merge or finish
///
/// # Panics
///
/// A panic inside a partition is resumed on the calling thread.
pub fn gather_partitioned<Op, P>(operator: &Op, partitions: Vec<P>) -> Result<Vec<Op::Output>>
where
    Op: Operator + Sync,
    Op::State: Send,
    Op::Output: Send,
    P: IntoIterator<Item = Op::Input> + Send,
{
    if !operator.is_mergeable() {
        warn!(
            "partitioned: `{}` cannot merge partial states",
            operator.name()
        );
        return Err(GatherError::sequential_only(operator.name()));
    }
    debug!(
        "partitioned: running `{}` over {} partitions",
        operator.name(),
        partitions.len()
    );

    let partials: Vec<Result<(Op::State, Vec<Op::Output>)>> = thread::scope(|scope| {
        let handles: Vec<_> = partitions
            .into_iter()
            .map(|partition| scope.spawn(move || run_partition(operator, partition)))
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap_or_else(|panic| std::panic::resume_unwind(panic)))
            .collect()
    });

    let mut outputs = Vec::new();
    let mut merged: Option<Op::State> = None;
    for partial in partials {
        let (state, partition_outputs) = partial?;
        outputs.extend(partition_outputs);
        merged = Some(match merged {
            Some(left) => operator.merge(left, state)?,
            None => state,
        });
    }
    debug!("partitioned: merged states of `{}`", operator.name());

    let state = merged.unwrap_or_else(|| operator.initialize());
    operator.finish(state, &mut outputs)?;
    Ok(outputs)
}

fn run_partition<Op, P>(operator: &Op, partition: P) -> Result<(Op::State, Vec<Op::Output>)>
where
    Op: Operator,
    P: IntoIterator<Item = Op::Input>,
{
    let mut state = operator.initialize();
    let mut outputs = Vec::new();
    for element in partition {
        if operator.integrate(&mut state, element, &mut outputs)?.is_stop() {
            break;
        }
    }
    Ok((state, outputs))
}
