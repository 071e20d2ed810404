// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use gatherflux_core::{Disposition, Downstream, Result};

/// Downstream that records what it receives and starts rejecting after `limit` elements.
///
/// Lets a test drive an operator by hand and observe how it reacts to a consumer stop.
#[derive(Debug, Clone)]
pub struct Recorder<T> {
    pub received: Vec<T>,
    limit: Option<usize>,
}

impl<T> Default for Recorder<T> {
    fn default() -> Self {
        Self::unbounded()
    }
}

impl<T> Recorder<T> {
    #[must_use]
    pub const fn unbounded() -> Self {
        Self {
            received: Vec::new(),
            limit: None,
        }
    }

    /// Accepts `limit` elements; the push of the last accepted one already reports a stop.
    #[must_use]
    pub const fn rejecting_after(limit: usize) -> Self {
        Self {
            received: Vec::new(),
            limit: Some(limit),
        }
    }
}

impl<T> Downstream<T> for Recorder<T> {
    fn push(&mut self, element: T) -> Result<Disposition> {
        match self.limit {
            Some(limit) if self.received.len() >= limit => Ok(Disposition::Stop),
            Some(limit) => {
                self.received.push(element);
                if self.received.len() >= limit {
                    Ok(Disposition::Stop)
                } else {
                    Ok(Disposition::Continue)
                }
            }
            None => {
                self.received.push(element);
                Ok(Disposition::Continue)
            }
        }
    }
}
