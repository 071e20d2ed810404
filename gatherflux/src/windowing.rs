// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use gatherflux_core::Result;
use gatherflux_exec::GatherExt;
use gatherflux_ops::{exponential_moving_average, moving_average, moving_sum, zip_with_next, Window, WindowConfig};

/// Window-shaped operators on any iterator.
pub trait WindowingExt: Iterator + Sized {
    /// Non-overlapping windows of `size` elements; a trailing partial window is dropped.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when `size` is zero.
    fn windows_fixed(self, size: usize) -> Result<impl Iterator<Item = Result<Vec<Self::Item>>>>
    where
        Self::Item: Clone,
    {
        self.windows_with(WindowConfig::fixed(size))
    }

    /// Windows of `size` elements advancing by `step`.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when `size` or `step` is zero.
    fn windows_sliding(
        self,
        size: usize,
        step: usize,
    ) -> Result<impl Iterator<Item = Result<Vec<Self::Item>>>>
    where
        Self::Item: Clone,
    {
        self.windows_with(WindowConfig::sliding(size, step))
    }

    /// # Errors
    ///
    /// Returns a configuration error when `size` or `step` is zero.
    fn windows_with(self, config: WindowConfig) -> Result<impl Iterator<Item = Result<Vec<Self::Item>>>>
    where
        Self::Item: Clone,
    {
        Ok(self.gather(Window::new(config)?))
    }

    /// Pairs of adjacent elements.
    fn zip_with_next(self) -> impl Iterator<Item = Result<(Self::Item, Self::Item)>>
    where
        Self::Item: Clone,
    {
        self.gather(zip_with_next())
    }

    /// Trailing mean of the last `size` elements.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when `size` is zero.
    fn moving_average(self, size: usize) -> Result<impl Iterator<Item = Result<f64>>>
    where
        Self::Item: Copy + Into<f64>,
    {
        Ok(self.gather(moving_average(size)?))
    }

    /// Trailing sum of the last `size` elements.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when `size` is zero.
    fn moving_sum(self, size: usize) -> Result<impl Iterator<Item = Result<f64>>>
    where
        Self::Item: Copy + Into<f64>,
    {
        Ok(self.gather(moving_sum(size)?))
    }

    /// Exponential moving average with smoothing factor `alpha`.
    ///
    /// # Errors
    ///
    /// Returns a configuration error unless `alpha` lies in `(0.0, 1.0]`.
    fn exponential_moving_average(self, alpha: f64) -> Result<impl Iterator<Item = Result<f64>>>
    where
        Self::Item: Copy + Into<f64>,
    {
        Ok(self.gather(exponential_moving_average(alpha)?))
    }
}

impl<I: Iterator> WindowingExt for I {}
