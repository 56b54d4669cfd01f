//! # winnum-core
//!
//! Core types shared by the winnum numerics crates.
//!
//! This crate provides the pieces that every other winnum crate builds on:
//!
//! - [`Error`], [`Result`] - The (deliberately small) error taxonomy
//! - [`scalar`] - Angle conversion, scalar interpolation and the tolerance
//!   constants used across the kernel
//!
//! ## Crate Structure
//!
//! ```text
//! winnum-core (this crate)
//!    ^
//!    |
//!    +-- winnum-math (vectors, matrices, planes, quaternions)
//!    +-- winnum-cli (command-line front end)
//! ```
//!
//! ## Error Model
//!
//! The kernel is pure arithmetic over value types. Degenerate inputs
//! propagate IEEE-754 NaN/Inf values instead of failing, and `invert`/
//! `decompose` report failure through their return value. The only
//! operations that return [`Error`] are the perspective projection
//! factories, which validate their near/far planes.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod scalar;

pub use error::*;
pub use scalar::{clamp, lerp, to_degrees, to_radians};

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use winnum_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::scalar::{clamp, lerp, to_degrees, to_radians};
}
