// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities and fixtures for the gatherflux workspace.
//!
//! - `test_data` - heterogeneous fixture records (`Person`, `Animal`, `Plant`)
//! - `error_injection` - an operator and a key function that fail on purpose
//! - `recorder` - a hand-driven downstream that can reject
//! - `timed` - a source that moves a `ManualClock` as elements are pulled
//! - `helpers` - float assertions, chi-square helpers and a collect shortcut
//!
//! Intended for development and tests only.

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod error_injection;
pub mod helpers;
pub mod recorder;
pub mod test_data;
pub mod timed;

// Re-export commonly used test utilities
pub use error_injection::{key_failing_on, FailAt, InjectedError};
pub use helpers::{
    assert_close, chi_square_critical_value, chi_square_statistic, gather_vec,
    naive_mean_variance, Z_999,
};
pub use recorder::Recorder;
pub use test_data::{DataVariant, TestData};
pub use timed::arriving_at;
