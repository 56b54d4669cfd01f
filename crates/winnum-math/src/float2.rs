//! 2D vector type.
//!
//! [`Float2`] is a point or direction in the plane. It is transformed by
//! [`Float3x2`] affine matrices, by [`Float4x4`] (as the point `(x, y, 0, 1)`)
//! and rotated by [`Quaternion`].
//!
//! # Usage
//!
//! ```rust
//! use winnum_math::{Float2, Float3x2, Transform};
//!
//! let p = Float2::new(1.0, 0.0);
//! let moved = p.transform(Float3x2::from_translation(Float2::new(2.0, 3.0)));
//! assert_eq!(moved, Float2::new(3.0, 3.0));
//! ```

use std::ops::{Add, Div, Index, IndexMut, Mul, Neg, Sub};

use bytemuck::{Pod, Zeroable};
use winnum_core::scalar;

use crate::macros::impl_assign_op;
use crate::{Float3x2, Float4, Float4x4, Quaternion, Transform, Transform4, TransformNormal};

/// A 2D vector.
///
/// `#[repr(C)]` with fields in the order `x, y`; the layout is shared with
/// `[f32; 2]` and can be reinterpreted with [`bytemuck`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Float2 {
    /// X component
    pub x: f32,
    /// Y component
    pub y: f32,
}

impl Float2 {
    /// Zero vector (0, 0).
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// One vector (1, 1).
    pub const ONE: Self = Self::new(1.0, 1.0);

    /// Unit X vector (1, 0).
    pub const UNIT_X: Self = Self::new(1.0, 0.0);

    /// Unit Y vector (0, 1).
    pub const UNIT_Y: Self = Self::new(0.0, 1.0);

    /// Creates a new vector.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Creates a vector with both components set to the same value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use winnum_math::Float2;
    ///
    /// assert_eq!(Float2::splat(0.5), Float2::new(0.5, 0.5));
    /// ```
    #[inline]
    pub const fn splat(v: f32) -> Self {
        Self::new(v, v)
    }

    /// Creates from an array.
    #[inline]
    pub const fn from_array(a: [f32; 2]) -> Self {
        Self::new(a[0], a[1])
    }

    /// Converts to an array.
    #[inline]
    pub const fn to_array(self) -> [f32; 2] {
        [self.x, self.y]
    }

    /// Dot product.
    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// Euclidean length.
    #[inline]
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Squared length (avoids sqrt).
    #[inline]
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    /// Distance between two points.
    #[inline]
    pub fn distance(self, other: Self) -> f32 {
        self.distance_squared(other).sqrt()
    }

    /// Squared distance between two points.
    #[inline]
    pub fn distance_squared(self, other: Self) -> f32 {
        (self - other).length_squared()
    }

    /// Divides the vector by its length.
    ///
    /// A zero vector yields NaN components.
    #[inline]
    pub fn normalize(self) -> Self {
        self / self.length()
    }

    /// Reflects the vector off a surface with the given normal.
    ///
    /// `normal` must already be unit length.
    #[inline]
    pub fn reflect(self, normal: Self) -> Self {
        self - normal * (2.0 * self.dot(normal))
    }

    /// Component-wise minimum.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self::new(scalar::min(self.x, other.x), scalar::min(self.y, other.y))
    }

    /// Component-wise maximum.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self::new(scalar::max(self.x, other.x), scalar::max(self.y, other.y))
    }

    /// Clamps each component to [min, max].
    ///
    /// Where `min > max` on a component the result is `min`.
    #[inline]
    pub fn clamp(self, min: Self, max: Self) -> Self {
        Self::new(
            scalar::clamp(self.x, min.x, max.x),
            scalar::clamp(self.y, min.y, max.y),
        )
    }

    /// Linear interpolation, `self + (other - self) * t`. `t` is not clamped.
    #[inline]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        self + (other - self) * t
    }

    /// Component-wise absolute value.
    #[inline]
    pub fn abs(self) -> Self {
        Self::new(self.x.abs(), self.y.abs())
    }

    /// Component-wise square root.
    #[inline]
    pub fn sqrt(self) -> Self {
        Self::new(self.x.sqrt(), self.y.sqrt())
    }

    /// Returns true if any component is NaN.
    #[inline]
    pub fn is_nan(self) -> bool {
        self.x.is_nan() || self.y.is_nan()
    }

    /// Returns true if all components are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Index<usize> for Float2 {
    type Output = f32;

    #[inline]
    fn index(&self, i: usize) -> &f32 {
        match i {
            0 => &self.x,
            1 => &self.y,
            _ => panic!("Float2 index out of bounds: {}", i),
        }
    }
}

impl IndexMut<usize> for Float2 {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut f32 {
        match i {
            0 => &mut self.x,
            1 => &mut self.y,
            _ => panic!("Float2 index out of bounds: {}", i),
        }
    }
}

impl Add for Float2 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Float2 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

// Component-wise
impl Mul for Float2 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::new(self.x * rhs.x, self.y * rhs.y)
    }
}

impl Mul<f32> for Float2 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl Mul<Float2> for f32 {
    type Output = Float2;

    #[inline]
    fn mul(self, rhs: Float2) -> Float2 {
        rhs * self
    }
}

impl Div for Float2 {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self {
        Self::new(self.x / rhs.x, self.y / rhs.y)
    }
}

impl Div<f32> for Float2 {
    type Output = Self;

    #[inline]
    fn div(self, rhs: f32) -> Self {
        Self::new(self.x / rhs, self.y / rhs)
    }
}

impl Neg for Float2 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl_assign_op!(Float2, Float2, AddAssign, add_assign, +);
impl_assign_op!(Float2, Float2, SubAssign, sub_assign, -);
impl_assign_op!(Float2, Float2, MulAssign, mul_assign, *);
impl_assign_op!(Float2, f32, MulAssign, mul_assign, *);
impl_assign_op!(Float2, Float2, DivAssign, div_assign, /);
impl_assign_op!(Float2, f32, DivAssign, div_assign, /);

impl Transform<Float3x2> for Float2 {
    type Output = Float2;

    #[inline]
    fn transform(self, m: Float3x2) -> Float2 {
        Float2::new(
            self.x * m.m11 + self.y * m.m21 + m.m31,
            self.x * m.m12 + self.y * m.m22 + m.m32,
        )
    }
}

impl Transform<Float4x4> for Float2 {
    type Output = Float2;

    #[inline]
    fn transform(self, m: Float4x4) -> Float2 {
        Float2::new(
            self.x * m.m11 + self.y * m.m21 + m.m41,
            self.x * m.m12 + self.y * m.m22 + m.m42,
        )
    }
}

impl Transform<Quaternion> for Float2 {
    type Output = Float2;

    #[inline]
    fn transform(self, q: Quaternion) -> Float2 {
        let r = q.rotation_rows();
        Float2::new(
            self.x * r[0][0] + self.y * r[1][0],
            self.x * r[0][1] + self.y * r[1][1],
        )
    }
}

impl TransformNormal<Float3x2> for Float2 {
    #[inline]
    fn transform_normal(self, m: Float3x2) -> Float2 {
        Float2::new(
            self.x * m.m11 + self.y * m.m21,
            self.x * m.m12 + self.y * m.m22,
        )
    }
}

impl TransformNormal<Float4x4> for Float2 {
    #[inline]
    fn transform_normal(self, m: Float4x4) -> Float2 {
        Float2::new(
            self.x * m.m11 + self.y * m.m21,
            self.x * m.m12 + self.y * m.m22,
        )
    }
}

impl Transform4<Float4x4> for Float2 {
    #[inline]
    fn transform4(self, m: Float4x4) -> Float4 {
        Float4::new(
            self.x * m.m11 + self.y * m.m21 + m.m41,
            self.x * m.m12 + self.y * m.m22 + m.m42,
            self.x * m.m13 + self.y * m.m23 + m.m43,
            self.x * m.m14 + self.y * m.m24 + m.m44,
        )
    }
}

impl Transform4<Quaternion> for Float2 {
    #[inline]
    fn transform4(self, q: Quaternion) -> Float4 {
        let r = q.rotation_rows();
        Float4::new(
            self.x * r[0][0] + self.y * r[1][0],
            self.x * r[0][1] + self.y * r[1][1],
            self.x * r[0][2] + self.y * r[1][2],
            1.0,
        )
    }
}

impl From<[f32; 2]> for Float2 {
    #[inline]
    fn from(a: [f32; 2]) -> Self {
        Self::from_array(a)
    }
}

impl From<Float2> for [f32; 2] {
    #[inline]
    fn from(v: Float2) -> [f32; 2] {
        v.to_array()
    }
}

impl From<glam::Vec2> for Float2 {
    #[inline]
    fn from(v: glam::Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Float2> for glam::Vec2 {
    #[inline]
    fn from(v: Float2) -> glam::Vec2 {
        glam::Vec2::new(v.x, v.y)
    }
}
