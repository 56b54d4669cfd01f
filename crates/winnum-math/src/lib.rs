//! # winnum-math
//!
//! Small-object geometry kernel for 2D and 3D graphics.
//!
//! This crate provides the seven value types of the kernel:
//!
//! - [`Float2`], [`Float3`], [`Float4`] - Vectors
//! - [`Float3x2`] - 2D affine transforms
//! - [`Float4x4`] - 3D affine and projective transforms
//! - [`Plane`] - Plane equation `normal . p + d = 0`
//! - [`Quaternion`] - Rotations
//!
//! plus the [`Transform`] family of traits that applies matrices and
//! quaternions to them, and [`batch`] transforms for point slices.
//!
//! # Design
//!
//! All types are `#[repr(C)]`, `Copy` and [`bytemuck::Pod`]. Matrices are
//! stored **row-major** and vectors are **row vectors**:
//!
//! ```text
//! result = vector * matrix
//! ```
//!
//! so `a * b` applies `a` first, then `b`.
//!
//! # Usage
//!
//! ```rust
//! use winnum_math::{Float3, Float4x4, Quaternion, Transform};
//! use std::f32::consts::FRAC_PI_2;
//!
//! let spin = Quaternion::from_axis_angle(Float3::UNIT_Y, FRAC_PI_2);
//! let world = Float4x4::from_quaternion(spin) * Float4x4::from_translation(Float3::new(0.0, 0.0, -5.0));
//!
//! let p = Float3::UNIT_Z.transform(world);
//! assert!((p - Float3::new(1.0, 0.0, -5.0)).length() < 1e-6);
//! ```
//!
//! # Features
//!
//! - `serde` - `Serialize`/`Deserialize` for all types
//! - `approx` - `approx` equality traits for all types
//!
//! # Dependencies
//!
//! - [`glam`] - Conversions to and from glam types
//! - [`wide`] - Portable SIMD for [`batch`]
//! - [`bytemuck`] - Layout-checked casts
//! - `winnum-core` - Errors and scalar helpers

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod macros;

mod float2;
mod float3;
mod float4;
mod float3x2;
mod float4x4;
mod plane;
mod quaternion;
mod transform;
pub mod batch;

#[cfg(feature = "approx")]
mod approx_eq;

pub use float2::*;
pub use float3::*;
pub use float4::*;
pub use float3x2::*;
pub use float4x4::*;
pub use plane::*;
pub use quaternion::*;
pub use transform::*;

pub use winnum_core::{Error, Result};

/// Re-export glam types for direct use
pub mod glam {
    pub use ::glam::{Affine2, Mat4, Quat, Vec2, Vec3, Vec4};
}
