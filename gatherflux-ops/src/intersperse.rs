// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use gatherflux_core::{Disposition, Downstream, Operator, Result};

/// Places a copy of `separator` between every two adjacent elements.
///
/// `[a, b, c]` becomes `[a, sep, b, sep, c]`; empty and single-element inputs are
/// unchanged.
#[derive(Debug, Clone)]
pub struct Intersperse<T> {
    separator: T,
}

impl<T: Clone> Intersperse<T> {
    pub const fn new(separator: T) -> Self {
        Self { separator }
    }
}

pub fn intersperse<T: Clone>(separator: T) -> Intersperse<T> {
    Intersperse::new(separator)
}

impl<T: Clone> Operator for Intersperse<T> {
    type Input = T;
    type Output = T;
    type State = bool;

    fn name(&self) -> &'static str {
        "intersperse"
    }

    fn initialize(&self) -> bool {
        false
    }

    fn integrate<D>(&self, started: &mut bool, element: T, downstream: &mut D) -> Result<Disposition>
    where
        D: Downstream<T>,
    {
        if *started && downstream.push(self.separator.clone())?.is_stop() {
            return Ok(Disposition::Stop);
        }
        *started = true;
        downstream.push(element)
    }
}
