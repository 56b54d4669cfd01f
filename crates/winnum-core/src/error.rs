//! Error types for winnum operations.
//!
//! # Overview
//!
//! The [`Error`] enum is intentionally small. Numeric degeneracies (normalizing
//! a zero vector, inverting a zero quaternion, a plane through collinear points)
//! are not errors: they propagate NaN/Inf through the result. Matrix inversion
//! and decomposition report failure through their return values.
//!
//! The one validated condition is the near/far plane range of the perspective
//! projection factories, reported as [`Error::InvalidArgument`].
//!
//! # Usage
//!
//! ```rust
//! use winnum_core::{Error, Result};
//!
//! fn check_near(near: f32) -> Result<()> {
//!     if !(near > 0.0) {
//!         return Err(Error::invalid_argument("near_plane", near, "must be positive"));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_near(0.0).unwrap_err().is_invalid_argument());
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation
//!
//! # Used By
//!
//! - `winnum-math` - Perspective projection factories
//! - `winnum-cli` - Reporting rejected projection parameters

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
///
/// Convenience alias for `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by winnum operations.
///
/// This enum uses [`thiserror`] for automatic [`std::error::Error`] and
/// [`std::fmt::Display`] implementations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// An argument is outside the range the operation accepts.
    ///
    /// Returned by the perspective projection factories when
    /// `near <= 0`, `far <= 0` or `near >= far`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use winnum_core::Error;
    ///
    /// let err = Error::invalid_argument("far_plane", -1.0, "must be positive");
    /// assert!(err.to_string().contains("far_plane"));
    /// ```
    #[error("invalid argument `{name}` = {value}: {reason}")]
    InvalidArgument {
        /// Parameter name as it appears in the operation signature
        name: &'static str,
        /// The rejected value
        value: f32,
        /// Which constraint was violated
        reason: &'static str,
    },
}

impl Error {
    /// Creates an [`Error::InvalidArgument`] error.
    ///
    /// # Arguments
    ///
    /// * `name` - Name of the rejected parameter
    /// * `value` - The rejected value
    /// * `reason` - Constraint the value violated
    #[inline]
    pub fn invalid_argument(name: &'static str, value: f32, reason: &'static str) -> Self {
        Self::InvalidArgument {
            name,
            value,
            reason,
        }
    }

    /// Returns `true` if this is an invalid-argument error.
    #[inline]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }

    /// Name of the offending parameter.
    #[inline]
    pub fn argument_name(&self) -> &'static str {
        match self {
            Self::InvalidArgument { name, .. } => name,
        }
    }
}
