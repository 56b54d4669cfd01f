//! 4D vector type.
//!
//! [`Float4`] holds homogeneous coordinates (`w = 1` for points, `w = 0` for
//! directions) and the raw coefficients of a [`Plane`](crate::Plane).

use std::ops::{Add, Div, Index, IndexMut, Mul, Neg, Sub};

use bytemuck::{Pod, Zeroable};
use winnum_core::scalar;

use crate::macros::impl_assign_op;
use crate::{Float2, Float3, Float4x4, Quaternion, Transform};

/// A 4D vector.
///
/// `#[repr(C)]` with fields in the order `x, y, z, w`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Float4 {
    /// X component
    pub x: f32,
    /// Y component
    pub y: f32,
    /// Z component
    pub z: f32,
    /// W component
    pub w: f32,
}

impl Float4 {
    /// Zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// One vector.
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0, 1.0);

    /// Unit X vector (1, 0, 0, 0).
    pub const UNIT_X: Self = Self::new(1.0, 0.0, 0.0, 0.0);

    /// Unit Y vector (0, 1, 0, 0).
    pub const UNIT_Y: Self = Self::new(0.0, 1.0, 0.0, 0.0);

    /// Unit Z vector (0, 0, 1, 0).
    pub const UNIT_Z: Self = Self::new(0.0, 0.0, 1.0, 0.0);

    /// Unit W vector (0, 0, 0, 1).
    pub const UNIT_W: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Creates a new vector.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Creates a vector with all components set to the same value.
    #[inline]
    pub const fn splat(v: f32) -> Self {
        Self::new(v, v, v, v)
    }

    /// Widens a [`Float2`] with the given `z` and `w`.
    #[inline]
    pub const fn from_float2(v: Float2, z: f32, w: f32) -> Self {
        Self::new(v.x, v.y, z, w)
    }

    /// Widens a [`Float3`] with the given `w`.
    #[inline]
    pub const fn from_float3(v: Float3, w: f32) -> Self {
        Self::new(v.x, v.y, v.z, w)
    }

    /// Creates from an array.
    #[inline]
    pub const fn from_array(a: [f32; 4]) -> Self {
        Self::new(a[0], a[1], a[2], a[3])
    }

    /// Converts to an array.
    #[inline]
    pub const fn to_array(self) -> [f32; 4] {
        [self.x, self.y, self.z, self.w]
    }

    /// The `x, y, z` part.
    #[inline]
    pub const fn xyz(self) -> Float3 {
        Float3::new(self.x, self.y, self.z)
    }

    /// Dot product.
    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Euclidean length.
    #[inline]
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Squared length.
    #[inline]
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    /// Distance between two vectors.
    #[inline]
    pub fn distance(self, other: Self) -> f32 {
        self.distance_squared(other).sqrt()
    }

    /// Squared distance between two vectors.
    #[inline]
    pub fn distance_squared(self, other: Self) -> f32 {
        (self - other).length_squared()
    }

    /// Divides the vector by its length. A zero vector yields NaN.
    #[inline]
    pub fn normalize(self) -> Self {
        self / self.length()
    }

    /// Component-wise minimum.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self::new(
            scalar::min(self.x, other.x),
            scalar::min(self.y, other.y),
            scalar::min(self.z, other.z),
            scalar::min(self.w, other.w),
        )
    }

    /// Component-wise maximum.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self::new(
            scalar::max(self.x, other.x),
            scalar::max(self.y, other.y),
            scalar::max(self.z, other.z),
            scalar::max(self.w, other.w),
        )
    }

    /// Clamps each component to [min, max].
    #[inline]
    pub fn clamp(self, min: Self, max: Self) -> Self {
        Self::new(
            scalar::clamp(self.x, min.x, max.x),
            scalar::clamp(self.y, min.y, max.y),
            scalar::clamp(self.z, min.z, max.z),
            scalar::clamp(self.w, min.w, max.w),
        )
    }

    /// Linear interpolation. `t` is not clamped.
    #[inline]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        self + (other - self) * t
    }

    /// Component-wise absolute value.
    #[inline]
    pub fn abs(self) -> Self {
        Self::new(self.x.abs(), self.y.abs(), self.z.abs(), self.w.abs())
    }

    /// Component-wise square root.
    #[inline]
    pub fn sqrt(self) -> Self {
        Self::new(self.x.sqrt(), self.y.sqrt(), self.z.sqrt(), self.w.sqrt())
    }

    /// Returns true if any component is NaN.
    #[inline]
    pub fn is_nan(self) -> bool {
        self.x.is_nan() || self.y.is_nan() || self.z.is_nan() || self.w.is_nan()
    }

    /// Returns true if all components are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite() && self.w.is_finite()
    }
}

impl Index<usize> for Float4 {
    type Output = f32;

    #[inline]
    fn index(&self, i: usize) -> &f32 {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            3 => &self.w,
            _ => panic!("Float4 index out of bounds: {}", i),
        }
    }
}

impl IndexMut<usize> for Float4 {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut f32 {
        match i {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            3 => &mut self.w,
            _ => panic!("Float4 index out of bounds: {}", i),
        }
    }
}

impl Add for Float4 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z, self.w + rhs.w)
    }
}

impl Sub for Float4 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z, self.w - rhs.w)
    }
}

impl Mul for Float4 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::new(self.x * rhs.x, self.y * rhs.y, self.z * rhs.z, self.w * rhs.w)
    }
}

impl Mul<f32> for Float4 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs, self.w * rhs)
    }
}

impl Mul<Float4> for f32 {
    type Output = Float4;

    #[inline]
    fn mul(self, rhs: Float4) -> Float4 {
        rhs * self
    }
}

impl Div for Float4 {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self {
        Self::new(self.x / rhs.x, self.y / rhs.y, self.z / rhs.z, self.w / rhs.w)
    }
}

impl Div<f32> for Float4 {
    type Output = Self;

    #[inline]
    fn div(self, rhs: f32) -> Self {
        Self::new(self.x / rhs, self.y / rhs, self.z / rhs, self.w / rhs)
    }
}

impl Neg for Float4 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }
}

impl_assign_op!(Float4, Float4, AddAssign, add_assign, +);
impl_assign_op!(Float4, Float4, SubAssign, sub_assign, -);
impl_assign_op!(Float4, Float4, MulAssign, mul_assign, *);
impl_assign_op!(Float4, f32, MulAssign, mul_assign, *);
impl_assign_op!(Float4, Float4, DivAssign, div_assign, /);
impl_assign_op!(Float4, f32, DivAssign, div_assign, /);

impl Transform<Float4x4> for Float4 {
    type Output = Float4;

    #[inline]
    fn transform(self, m: Float4x4) -> Float4 {
        Float4::new(
            self.x * m.m11 + self.y * m.m21 + self.z * m.m31 + self.w * m.m41,
            self.x * m.m12 + self.y * m.m22 + self.z * m.m32 + self.w * m.m42,
            self.x * m.m13 + self.y * m.m23 + self.z * m.m33 + self.w * m.m43,
            self.x * m.m14 + self.y * m.m24 + self.z * m.m34 + self.w * m.m44,
        )
    }
}

// Rotates x, y, z; w passes through.
impl Transform<Quaternion> for Float4 {
    type Output = Float4;

    #[inline]
    fn transform(self, q: Quaternion) -> Float4 {
        Float4::from_float3(self.xyz().transform(q), self.w)
    }
}

impl From<[f32; 4]> for Float4 {
    #[inline]
    fn from(a: [f32; 4]) -> Self {
        Self::from_array(a)
    }
}

impl From<Float4> for [f32; 4] {
    #[inline]
    fn from(v: Float4) -> [f32; 4] {
        v.to_array()
    }
}

impl From<glam::Vec4> for Float4 {
    #[inline]
    fn from(v: glam::Vec4) -> Self {
        Self::new(v.x, v.y, v.z, v.w)
    }
}

impl From<Float4> for glam::Vec4 {
    #[inline]
    fn from(v: Float4) -> glam::Vec4 {
        glam::Vec4::new(v.x, v.y, v.z, v.w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float4_widening() {
        let v = Float4::from_float2(Float2::new(1.0, 2.0), 3.0, 4.0);
        assert_eq!(v, Float4::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(Float4::from_float3(v.xyz(), 4.0), v);
    }

    #[test]
    fn test_float4_unit_vectors() {
        let sum = Float4::UNIT_X + Float4::UNIT_Y + Float4::UNIT_Z + Float4::UNIT_W;
        assert_eq!(sum, Float4::ONE);
    }

    #[test]
    fn test_float4_length() {
        let v = Float4::new(1.0, 1.0, 1.0, 1.0);
        assert_eq!(v.length(), 2.0);
        assert_eq!(v.length_squared(), v.dot(v));
    }

    #[test]
    fn test_float4_transform_keeps_w_direction() {
        let m = Float4x4::from_translation(Float3::new(5.0, 5.0, 5.0));
        let dir = Float4::new(1.0, 0.0, 0.0, 0.0);
        assert_eq!(dir.transform(m), dir);
        let point = Float4::new(1.0, 0.0, 0.0, 1.0);
        assert_eq!(point.transform(m), Float4::new(6.0, 5.0, 5.0, 1.0));
    }

    #[test]
    fn test_float4_transform_quaternion_keeps_w() {
        let q = Quaternion::from_axis_angle(Float3::UNIT_Y, 1.0);
        let v = Float4::new(0.0, 1.0, 0.0, 7.0).transform(q);
        assert!((v.y - 1.0).abs() < 1e-6);
        assert_eq!(v.w, 7.0);
    }

    #[test]
    fn test_float4_clamp() {
        let v = Float4::new(-1.0, 0.5, 2.0, 0.0);
        assert_eq!(
            v.clamp(Float4::ZERO, Float4::ONE),
            Float4::new(0.0, 0.5, 1.0, 0.0)
        );
    }
}
