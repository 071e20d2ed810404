// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Fixed and sliding count windows.

use core::marker::PhantomData;
use core::num::NonZeroUsize;
use gatherflux_core::buffer::BoundedBuffer;
use gatherflux_core::config::non_zero;
use gatherflux_core::{Disposition, Downstream, Operator, Result};

/// Window geometry.
///
/// - `size` - number of elements in every emitted window
/// - `step` - how far the window advances after each emission
/// - `include_partials` - whether the incomplete window left at end of input is emitted
///
/// `step == size` gives fixed (tumbling) windows, `step < size` overlapping windows.
/// With `step > size` the `step - size` elements following each window belong to no
/// window and are skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowConfig {
    pub size: usize,
    pub step: usize,
    pub include_partials: bool,
}

impl WindowConfig {
    /// Non-overlapping windows of `size` elements; a trailing partial window is dropped.
    #[must_use]
    pub const fn fixed(size: usize) -> Self {
        Self {
            size,
            step: size,
            include_partials: false,
        }
    }

    /// Windows of `size` elements advancing by `step`.
    #[must_use]
    pub const fn sliding(size: usize, step: usize) -> Self {
        Self {
            size,
            step,
            include_partials: false,
        }
    }

    /// Emit (or drop) the incomplete window left at end of input.
    #[must_use]
    pub const fn with_partials(mut self, include_partials: bool) -> Self {
        self.include_partials = include_partials;
        self
    }
}

/// Groups consecutive elements into windows.
///
/// # Behavior
///
/// - A window is emitted as soon as it holds `size` elements
/// - After an emission the oldest `step` elements leave the window
/// - With `include_partials`, a non-empty window still open at end of input is emitted
/// - Emitted windows preserve input order
///
/// # Examples
///
/// ```rust
/// use gatherflux_ops::{Window, WindowConfig};
///
/// let windows = Window::<i32>::new(WindowConfig::sliding(3, 1)).unwrap();
/// // [1, 2, 3, 4] -> [1, 2, 3], [2, 3, 4]
/// ```
#[derive(Debug, Clone)]
pub struct Window<T> {
    size: NonZeroUsize,
    step: NonZeroUsize,
    include_partials: bool,
    _marker: PhantomData<fn(T) -> T>,
}

impl<T> Window<T> {
    /// Validates `config` and builds the operator.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when `size` or `step` is zero.
    pub fn new(config: WindowConfig) -> Result<Self> {
        Ok(Self {
            size: non_zero("window", "window size", config.size)?,
            step: non_zero("window", "step", config.step)?,
            include_partials: config.include_partials,
            _marker: PhantomData,
        })
    }

    /// The validated configuration.
    #[must_use]
    pub const fn config(&self) -> WindowConfig {
        WindowConfig {
            size: self.size.get(),
            step: self.step.get(),
            include_partials: self.include_partials,
        }
    }
}

/// Fixed windows of `size` elements.
///
/// # Errors
///
/// Returns a configuration error when `size` is zero.
pub fn window_fixed<T: Clone>(size: usize) -> Result<Window<T>> {
    Window::new(WindowConfig::fixed(size))
}

/// Sliding windows of `size` elements advancing by `step`.
///
/// # Errors
///
/// Returns a configuration error when `size` or `step` is zero.
pub fn window_sliding<T: Clone>(size: usize, step: usize) -> Result<Window<T>> {
    Window::new(WindowConfig::sliding(size, step))
}

#[derive(Debug, Clone)]
pub struct WindowState<T> {
    window: BoundedBuffer<T>,
    skip: usize,
}

impl<T: Clone> Operator for Window<T> {
    type Input = T;
    type Output = Vec<T>;
    type State = WindowState<T>;

    fn name(&self) -> &'static str {
        "window"
    }

    fn initialize(&self) -> Self::State {
        WindowState {
            window: BoundedBuffer::new(self.size),
            skip: 0,
        }
    }

    fn integrate<D>(&self, state: &mut Self::State, element: T, downstream: &mut D) -> Result<Disposition>
    where
        D: Downstream<Vec<T>>,
    {
        if state.skip > 0 {
            state.skip -= 1;
            return Ok(Disposition::Continue);
        }
        state.window.push(element);
        if !state.window.is_full() {
            return Ok(Disposition::Continue);
        }

        let (size, step) = (self.size.get(), self.step.get());
        let emitted = if step >= size {
            state.skip = step - size;
            state.window.drain().collect()
        } else {
            let snapshot = state.window.snapshot();
            state.window.pop_front_n(step);
            snapshot
        };
        downstream.push(emitted)
    }

    fn finish<D>(&self, mut state: Self::State, downstream: &mut D) -> Result<()>
    where
        D: Downstream<Vec<T>>,
    {
        if self.include_partials && !state.window.is_empty() {
            let _ = downstream.push(state.window.drain().collect())?;
        }
        Ok(())
    }
}
