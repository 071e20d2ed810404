// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Zip-with-next operator that pairs each element with its successor.

use gatherflux_core::{Disposition, Downstream, Operator, Result};

/// Pairs every element with the element that follows it.
///
/// # Behavior
///
/// - `[1, 2, 3, 4]` becomes `[(1, 2), (2, 3), (3, 4)]`
/// - A single element produces nothing
/// - The last element is dropped at end of input, unless a trailing fill value was
///   configured, in which case `(last, fill)` is emitted
///
/// Sequential-only: the pair spanning a partition boundary cannot be rebuilt.
#[derive(Debug, Clone)]
pub struct ZipWithNext<T> {
    trailing_fill: Option<T>,
}

impl<T> Default for ZipWithNext<T> {
    fn default() -> Self {
        Self {
            trailing_fill: None,
        }
    }
}

impl<T: Clone> ZipWithNext<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pair the last element with `fill` instead of dropping it.
    #[must_use]
    pub fn with_trailing_fill(mut self, fill: T) -> Self {
        self.trailing_fill = Some(fill);
        self
    }
}

#[must_use]
pub fn zip_with_next<T: Clone>() -> ZipWithNext<T> {
    ZipWithNext::new()
}

impl<T: Clone> Operator for ZipWithNext<T> {
    type Input = T;
    type Output = (T, T);
    type State = Option<T>;

    fn name(&self) -> &'static str {
        "zip_with_next"
    }

    fn initialize(&self) -> Option<T> {
        None
    }

    fn integrate<D>(&self, previous: &mut Option<T>, element: T, downstream: &mut D) -> Result<Disposition>
    where
        D: Downstream<(T, T)>,
    {
        match previous.replace(element.clone()) {
            Some(prev) => downstream.push((prev, element)),
            None => Ok(Disposition::Continue),
        }
    }

    fn finish<D>(&self, previous: Option<T>, downstream: &mut D) -> Result<()>
    where
        D: Downstream<(T, T)>,
    {
        if let (Some(last), Some(fill)) = (previous, self.trailing_fill.clone()) {
            let _ = downstream.push((last, fill))?;
        }
        Ok(())
    }
}
