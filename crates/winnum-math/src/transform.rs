//! Transform traits.
//!
//! Points, directions and planes are transformed by matrices and quaternions
//! through three traits, one per kind of operation:
//!
//! - [`Transform`] - Full transform of a position (translation included)
//! - [`TransformNormal`] - Linear part only, for direction vectors
//! - [`Transform4`] - Homogeneous transform returning the full [`Float4`]
//!
//! # Convention
//!
//! Vectors are **row vectors** multiplied on the left of the matrix:
//!
//! ```text
//! [x y z 1] * | m11 m12 m13 m14 |
//!             | m21 m22 m23 m24 |
//!             | m31 m32 m33 m34 |
//!             | m41 m42 m43 m44 |
//! ```
//!
//! so `transform(p, a * b) == transform(transform(p, a), b)`.
//!
//! # Usage
//!
//! ```rust
//! use winnum_math::{transform, Float2, Float3x2};
//!
//! let m = Float3x2::from_translation(Float2::new(1.0, 2.0));
//! assert_eq!(transform(Float2::ZERO, m), Float2::new(1.0, 2.0));
//! ```

use crate::Float4;

/// Transforms a value by a matrix or quaternion.
///
/// For positions the translation part of the matrix is applied (implicit
/// `w = 1`). For planes the inverse transpose of the matrix is used.
pub trait Transform<M> {
    /// Result type of the transform.
    type Output;

    /// Applies `by` to `self`.
    fn transform(self, by: M) -> Self::Output;
}

/// Transforms a direction vector by the linear part of a matrix.
///
/// No translation is applied and no inverse-transpose correction is
/// performed.
pub trait TransformNormal<M> {
    /// Applies the linear part of `by` to `self`.
    fn transform_normal(self, by: M) -> Self;
}

/// Transforms a lower-dimension position as the homogeneous point `(.., 1)`
/// and returns all four components of the result.
pub trait Transform4<M> {
    /// Applies `by` to the homogeneous extension of `self`.
    fn transform4(self, by: M) -> Float4;
}

/// Free-function form of [`Transform::transform`].
#[inline]
pub fn transform<V, M>(value: V, by: M) -> V::Output
where
    V: Transform<M>,
{
    value.transform(by)
}

/// Free-function form of [`TransformNormal::transform_normal`].
#[inline]
pub fn transform_normal<V, M>(normal: V, by: M) -> V
where
    V: TransformNormal<M>,
{
    normal.transform_normal(by)
}

/// Free-function form of [`Transform4::transform4`].
#[inline]
pub fn transform4<V, M>(value: V, by: M) -> Float4
where
    V: Transform4<M>,
{
    value.transform4(by)
}
