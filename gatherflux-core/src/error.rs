// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::doc_markdown)]
//! Error types for gatherflux operators
//!
//! This module provides the single error type shared by every operator and by the
//! composition driver. Configuration problems are reported when an operator is
//! constructed; everything else is reported while elements are integrated or while
//! buffered state is flushed.
//!
//! # Examples
//!
//! ```
//! use gatherflux_core::{GatherError, Result};
//!
//! fn window_size(size: usize) -> Result<usize> {
//!     if size == 0 {
//!         return Err(GatherError::config_error("window size must be greater than zero"));
//!     }
//!     Ok(size)
//! }
//!
//! assert!(window_size(0).is_err());
//! ```

/// Root error type for all gatherflux operations
#[derive(Debug, thiserror::Error)]
pub enum GatherError {
    /// An operator was constructed with an invalid configuration
    ///
    /// Raised synchronously by constructors, never once elements are flowing.
    #[error("Invalid configuration: {context}")]
    InvalidConfiguration {
        /// Which parameter was rejected and why
        context: String,
    },

    /// An ordering check observed an element out of order
    #[error("Order violation at index {index}: {context}")]
    OrderViolation {
        /// Zero-based position of the offending element
        index: u64,
        /// The order that was expected
        context: String,
    },

    /// Arithmetic could not be carried out on the given input
    ///
    /// Covers non-finite floating point input and overflowing accumulators.
    #[error("Numeric error: {context}")]
    Numeric {
        /// Description of the fault
        context: String,
    },

    /// A split (partitioned) execution was requested for an operator without a merge law
    #[error("Operator `{operator}` is sequential-only and cannot merge partial states")]
    SequentialOnly {
        /// Name of the operator that refused the split
        operator: &'static str,
    },

    /// Custom error from user code
    ///
    /// Wraps failures of user-provided functions such as key extractors.
    #[error("User error: {0}")]
    UserError(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl GatherError {
    /// Create a configuration error with the given context
    pub fn config_error(context: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            context: context.into(),
        }
    }

    /// Create an order violation for the element at `index`
    pub fn order_violation(index: u64, context: impl Into<String>) -> Self {
        Self::OrderViolation {
            index,
            context: context.into(),
        }
    }

    /// Create a numeric error with the given context
    pub fn numeric_error(context: impl Into<String>) -> Self {
        Self::Numeric {
            context: context.into(),
        }
    }

    /// Report that `operator` cannot take part in a split execution
    pub const fn sequential_only(operator: &'static str) -> Self {
        Self::SequentialOnly { operator }
    }

    /// Wrap a user error
    pub fn user_error(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::UserError(Box::new(error))
    }
}

/// Specialized Result type for gatherflux operations
///
/// # Examples
///
/// ```
/// use gatherflux_core::Result;
///
/// fn process() -> Result<String> {
///     Ok("processed".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, GatherError>;

/// Extension trait for converting errors into `GatherError`
///
/// Automatically implemented for every `std::error::Error + Send + Sync + 'static`,
/// which is what fallible key extractors hand back.
pub trait IntoGatherError {
    /// Convert this error into a `GatherError`
    fn into_gather_error(self) -> GatherError;
}

impl<E: std::error::Error + Send + Sync + 'static> IntoGatherError for E {
    fn into_gather_error(self) -> GatherError {
        GatherError::user_error(self)
    }
}
