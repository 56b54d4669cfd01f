//! 3D vector type.
//!
//! [`Float3`] is a point or direction in space. Points are transformed by
//! [`Float4x4`] with implicit `w = 1`; directions use
//! [`TransformNormal`] which ignores the translation row.
//!
//! # Usage
//!
//! ```rust
//! use winnum_math::Float3;
//!
//! let a = Float3::new(1.0, 0.0, 0.0);
//! let b = Float3::new(0.0, 1.0, 0.0);
//! assert_eq!(a.cross(b), Float3::UNIT_Z);
//! ```

use std::ops::{Add, Div, Index, IndexMut, Mul, Neg, Sub};

use bytemuck::{Pod, Zeroable};
use winnum_core::scalar;

use crate::macros::impl_assign_op;
use crate::{Float2, Float4, Float4x4, Quaternion, Transform, Transform4, TransformNormal};

/// A 3D vector.
///
/// `#[repr(C)]` with fields in the order `x, y, z`.
///
/// # Example
///
/// ```rust
/// use winnum_math::Float3;
///
/// let v = Float3::new(1.0, 2.0, 2.0);
/// assert_eq!(v.length(), 3.0);
/// assert_eq!(v[2], 2.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Float3 {
    /// X component
    pub x: f32,
    /// Y component
    pub y: f32,
    /// Z component
    pub z: f32,
}

impl Float3 {
    /// Zero vector (0, 0, 0).
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// One vector (1, 1, 1).
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);

    /// Unit X vector (1, 0, 0).
    pub const UNIT_X: Self = Self::new(1.0, 0.0, 0.0);

    /// Unit Y vector (0, 1, 0).
    pub const UNIT_Y: Self = Self::new(0.0, 1.0, 0.0);

    /// Unit Z vector (0, 0, 1).
    pub const UNIT_Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Creates a new vector.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Creates a vector with all components set to the same value.
    #[inline]
    pub const fn splat(v: f32) -> Self {
        Self::new(v, v, v)
    }

    /// Widens a [`Float2`] with the given `z`.
    #[inline]
    pub const fn from_float2(v: Float2, z: f32) -> Self {
        Self::new(v.x, v.y, z)
    }

    /// Creates from an array.
    #[inline]
    pub const fn from_array(a: [f32; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }

    /// Converts to an array.
    #[inline]
    pub const fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    /// Dot product.
    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product.
    #[inline]
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
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

    /// Reflects the vector off a surface with the given unit normal.
    #[inline]
    pub fn reflect(self, normal: Self) -> Self {
        self - normal * (2.0 * self.dot(normal))
    }

    /// Component-wise minimum.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self::new(
            scalar::min(self.x, other.x),
            scalar::min(self.y, other.y),
            scalar::min(self.z, other.z),
        )
    }

    /// Component-wise maximum.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self::new(
            scalar::max(self.x, other.x),
            scalar::max(self.y, other.y),
            scalar::max(self.z, other.z),
        )
    }

    /// Clamps each component to [min, max].
    #[inline]
    pub fn clamp(self, min: Self, max: Self) -> Self {
        Self::new(
            scalar::clamp(self.x, min.x, max.x),
            scalar::clamp(self.y, min.y, max.y),
            scalar::clamp(self.z, min.z, max.z),
        )
    }

    /// Linear interpolation between self and other. `t` is not clamped.
    #[inline]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        self + (other - self) * t
    }

    /// Component-wise absolute value.
    #[inline]
    pub fn abs(self) -> Self {
        Self::new(self.x.abs(), self.y.abs(), self.z.abs())
    }

    /// Component-wise square root.
    #[inline]
    pub fn sqrt(self) -> Self {
        Self::new(self.x.sqrt(), self.y.sqrt(), self.z.sqrt())
    }

    /// Returns true if any component is NaN.
    #[inline]
    pub fn is_nan(self) -> bool {
        self.x.is_nan() || self.y.is_nan() || self.z.is_nan()
    }

    /// Returns true if all components are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl Index<usize> for Float3 {
    type Output = f32;

    #[inline]
    fn index(&self, i: usize) -> &f32 {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Float3 index out of bounds: {}", i),
        }
    }
}

impl IndexMut<usize> for Float3 {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut f32 {
        match i {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("Float3 index out of bounds: {}", i),
        }
    }
}

impl Add for Float3 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Float3 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

// Float3 * Float3 (component-wise)
impl Mul for Float3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::new(self.x * rhs.x, self.y * rhs.y, self.z * rhs.z)
    }
}

impl Mul<f32> for Float3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Mul<Float3> for f32 {
    type Output = Float3;

    #[inline]
    fn mul(self, rhs: Float3) -> Float3 {
        Float3::new(self * rhs.x, self * rhs.y, self * rhs.z)
    }
}

// Float3 / Float3 (component-wise)
impl Div for Float3 {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self {
        Self::new(self.x / rhs.x, self.y / rhs.y, self.z / rhs.z)
    }
}

impl Div<f32> for Float3 {
    type Output = Self;

    #[inline]
    fn div(self, rhs: f32) -> Self {
        Self::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl Neg for Float3 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl_assign_op!(Float3, Float3, AddAssign, add_assign, +);
impl_assign_op!(Float3, Float3, SubAssign, sub_assign, -);
impl_assign_op!(Float3, Float3, MulAssign, mul_assign, *);
impl_assign_op!(Float3, f32, MulAssign, mul_assign, *);
impl_assign_op!(Float3, Float3, DivAssign, div_assign, /);
impl_assign_op!(Float3, f32, DivAssign, div_assign, /);

impl Transform<Float4x4> for Float3 {
    type Output = Float3;

    #[inline]
    fn transform(self, m: Float4x4) -> Float3 {
        Float3::new(
            self.x * m.m11 + self.y * m.m21 + self.z * m.m31 + m.m41,
            self.x * m.m12 + self.y * m.m22 + self.z * m.m32 + m.m42,
            self.x * m.m13 + self.y * m.m23 + self.z * m.m33 + m.m43,
        )
    }
}

impl Transform<Quaternion> for Float3 {
    type Output = Float3;

    #[inline]
    fn transform(self, q: Quaternion) -> Float3 {
        let r = q.rotation_rows();
        Float3::new(
            self.x * r[0][0] + self.y * r[1][0] + self.z * r[2][0],
            self.x * r[0][1] + self.y * r[1][1] + self.z * r[2][1],
            self.x * r[0][2] + self.y * r[1][2] + self.z * r[2][2],
        )
    }
}

impl TransformNormal<Float4x4> for Float3 {
    #[inline]
    fn transform_normal(self, m: Float4x4) -> Float3 {
        Float3::new(
            self.x * m.m11 + self.y * m.m21 + self.z * m.m31,
            self.x * m.m12 + self.y * m.m22 + self.z * m.m32,
            self.x * m.m13 + self.y * m.m23 + self.z * m.m33,
        )
    }
}

impl Transform4<Float4x4> for Float3 {
    #[inline]
    fn transform4(self, m: Float4x4) -> Float4 {
        Float4::new(
            self.x * m.m11 + self.y * m.m21 + self.z * m.m31 + m.m41,
            self.x * m.m12 + self.y * m.m22 + self.z * m.m32 + m.m42,
            self.x * m.m13 + self.y * m.m23 + self.z * m.m33 + m.m43,
            self.x * m.m14 + self.y * m.m24 + self.z * m.m34 + m.m44,
        )
    }
}

impl Transform4<Quaternion> for Float3 {
    #[inline]
    fn transform4(self, q: Quaternion) -> Float4 {
        Float4::from_float3(self.transform(q), 1.0)
    }
}

impl From<[f32; 3]> for Float3 {
    #[inline]
    fn from(a: [f32; 3]) -> Self {
        Self::from_array(a)
    }
}

impl From<Float3> for [f32; 3] {
    #[inline]
    fn from(v: Float3) -> [f32; 3] {
        v.to_array()
    }
}

impl From<glam::Vec3> for Float3 {
    #[inline]
    fn from(v: glam::Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Float3> for glam::Vec3 {
    #[inline]
    fn from(v: Float3) -> glam::Vec3 {
        glam::Vec3::new(v.x, v.y, v.z)
    }
}
