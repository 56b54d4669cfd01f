//! Quaternion type for 3D rotations.
//!
//! [`Quaternion`] stores `(x, y, z, w)` with the vector part first, the same
//! layout as [`glam::Quat`]. Unit quaternions represent rotations; non-unit
//! values are allowed as intermediates.
//!
//! # Composition
//!
//! `*` is the Hamilton product. `b * a` rotates by `a` first and then by
//! `b`, which is what [`Quaternion::concatenate`]`(a, b)` returns:
//!
//! ```rust
//! use winnum_math::{Float3, Quaternion, Transform};
//! use std::f32::consts::FRAC_PI_2;
//!
//! let a = Quaternion::from_axis_angle(Float3::UNIT_Z, FRAC_PI_2);
//! let b = Quaternion::from_axis_angle(Float3::UNIT_X, FRAC_PI_2);
//! let v = Float3::UNIT_X.transform(a.concatenate(b));
//! // X -> Y (about Z), then Y -> Z (about X)
//! assert!((v - Float3::UNIT_Z).length() < 1e-6);
//! ```

use std::ops::{Add, Div, Mul, Neg, Sub};

use bytemuck::{Pod, Zeroable};
use winnum_core::scalar::SLERP_EPSILON;

use crate::macros::impl_assign_op;
use crate::{Float3, Float4, Float4x4};

/// A quaternion `x*i + y*j + z*k + w`.
///
/// `#[repr(C)]` with fields in the order `x, y, z, w`.
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Quaternion {
    /// X component of the vector part
    pub x: f32,
    /// Y component of the vector part
    pub y: f32,
    /// Z component of the vector part
    pub z: f32,
    /// Scalar part
    pub w: f32,
}

impl Quaternion {
    /// Identity rotation (0, 0, 0, 1).
    pub const IDENTITY: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Creates a quaternion from its four components.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Creates a quaternion from a vector part and a scalar part.
    #[inline]
    pub const fn from_parts(vector: Float3, scalar: f32) -> Self {
        Self::new(vector.x, vector.y, vector.z, scalar)
    }

    /// Returns the vector part `(x, y, z)`.
    #[inline]
    pub const fn vector_part(self) -> Float3 {
        Float3::new(self.x, self.y, self.z)
    }

    /// Rotation of `angle` radians about `axis`.
    ///
    /// `axis` is expected to be unit length.
    #[inline]
    pub fn from_axis_angle(axis: Float3, angle: f32) -> Self {
        let (s, c) = (angle * 0.5).sin_cos();
        Self::from_parts(axis * s, c)
    }

    /// Rotation from yaw (about Y), pitch (about X) and roll (about Z),
    /// applied roll first, then pitch, then yaw.
    pub fn from_yaw_pitch_roll(yaw: f32, pitch: f32, roll: f32) -> Self {
        let (sr, cr) = (roll * 0.5).sin_cos();
        let (sp, cp) = (pitch * 0.5).sin_cos();
        let (sy, cy) = (yaw * 0.5).sin_cos();

        Self::new(
            cy * sp * cr + sy * cp * sr,
            sy * cp * cr - cy * sp * sr,
            cy * cp * sr - sy * sp * cr,
            cy * cp * cr + sy * sp * sr,
        )
    }

    /// Extracts the rotation from the upper-left 3x3 of `m`.
    ///
    /// Picks the branch for whichever of `w, x, y, z` has the largest
    /// magnitude so the square root never operates near zero.
    pub fn from_rotation_matrix(m: &Float4x4) -> Self {
        let trace = m.m11 + m.m22 + m.m33;

        if trace > 0.0 {
            let s = (trace + 1.0).sqrt();
            let inv = 0.5 / s;
            Self::new(
                (m.m23 - m.m32) * inv,
                (m.m31 - m.m13) * inv,
                (m.m12 - m.m21) * inv,
                s * 0.5,
            )
        } else if m.m11 >= m.m22 && m.m11 >= m.m33 {
            let s = (1.0 + m.m11 - m.m22 - m.m33).sqrt();
            let inv = 0.5 / s;
            Self::new(
                0.5 * s,
                (m.m12 + m.m21) * inv,
                (m.m13 + m.m31) * inv,
                (m.m23 - m.m32) * inv,
            )
        } else if m.m22 > m.m33 {
            let s = (1.0 + m.m22 - m.m11 - m.m33).sqrt();
            let inv = 0.5 / s;
            Self::new(
                (m.m21 + m.m12) * inv,
                0.5 * s,
                (m.m32 + m.m23) * inv,
                (m.m31 - m.m13) * inv,
            )
        } else {
            let s = (1.0 + m.m33 - m.m11 - m.m22).sqrt();
            let inv = 0.5 / s;
            Self::new(
                (m.m31 + m.m13) * inv,
                (m.m32 + m.m23) * inv,
                0.5 * s,
                (m.m12 - m.m21) * inv,
            )
        }
    }

    /// Returns true if this is exactly (0, 0, 0, 1).
    #[inline]
    pub fn is_identity(self) -> bool {
        self == Self::IDENTITY
    }

    /// Four-component dot product.
    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Returns the length.
    #[inline]
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Returns the squared length.
    #[inline]
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    /// Scales to unit length. A zero quaternion yields NaN components.
    #[inline]
    pub fn normalize(self) -> Self {
        self * (1.0 / self.length())
    }

    /// Negates the vector part.
    #[inline]
    pub fn conjugate(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, self.w)
    }

    /// Multiplicative inverse, `conjugate / length_squared`.
    ///
    /// Equals [`Self::conjugate`] for unit quaternions; NaN for zero.
    #[inline]
    pub fn inverse(self) -> Self {
        self.conjugate() * (1.0 / self.length_squared())
    }

    /// Rotation by `self` followed by `then`, i.e. `then * self`.
    #[inline]
    pub fn concatenate(self, then: Self) -> Self {
        then * self
    }

    /// Spherical linear interpolation along the shorter arc.
    ///
    /// `end` is negated when the two are more than 90 degrees apart in 4D.
    /// Nearly parallel inputs (`cos > 1 - SLERP_EPSILON`) fall back to a
    /// normalized linear blend, since `sin(theta)` is too small to divide by.
    pub fn slerp(self, end: Self, t: f32) -> Self {
        let mut cos_omega = self.dot(end);
        let flip = cos_omega < 0.0;
        if flip {
            cos_omega = -cos_omega;
        }

        if cos_omega > 1.0 - SLERP_EPSILON {
            let s2 = if flip { -t } else { t };
            return (self * (1.0 - t) + end * s2).normalize();
        }

        let omega = cos_omega.acos();
        let inv_sin = 1.0 / omega.sin();
        let s1 = ((1.0 - t) * omega).sin() * inv_sin;
        let s2 = (t * omega).sin() * inv_sin;
        let s2 = if flip { -s2 } else { s2 };

        self * s1 + end * s2
    }

    /// Normalized linear interpolation along the shorter arc.
    pub fn lerp(self, end: Self, t: f32) -> Self {
        let s2 = if self.dot(end) >= 0.0 { t } else { -t };
        (self * (1.0 - t) + end * s2).normalize()
    }

    /// Rows of the equivalent 3x3 rotation matrix for row vectors.
    pub(crate) fn rotation_rows(self) -> [[f32; 3]; 3] {
        let x2 = self.x + self.x;
        let y2 = self.y + self.y;
        let z2 = self.z + self.z;

        let wx2 = self.w * x2;
        let wy2 = self.w * y2;
        let wz2 = self.w * z2;
        let xx2 = self.x * x2;
        let xy2 = self.x * y2;
        let xz2 = self.x * z2;
        let yy2 = self.y * y2;
        let yz2 = self.y * z2;
        let zz2 = self.z * z2;

        [
            [1.0 - yy2 - zz2, xy2 + wz2, xz2 - wy2],
            [xy2 - wz2, 1.0 - xx2 - zz2, yz2 + wx2],
            [xz2 + wy2, yz2 - wx2, 1.0 - xx2 - yy2],
        ]
    }
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::IDENTITY
    }
}

// Quaternion + Quaternion
impl Add for Quaternion {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z, self.w + rhs.w)
    }
}

// Quaternion - Quaternion
impl Sub for Quaternion {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z, self.w - rhs.w)
    }
}

// Hamilton product
impl Mul for Quaternion {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        let a = self.vector_part();
        let b = rhs.vector_part();
        let v = b * self.w + a * rhs.w + a.cross(b);
        Self::from_parts(v, self.w * rhs.w - a.dot(b))
    }
}

impl Mul<f32> for Quaternion {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs, self.w * rhs)
    }
}

impl Div for Quaternion {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self {
        self * rhs.inverse()
    }
}

impl Neg for Quaternion {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }
}

impl_assign_op!(Quaternion, Quaternion, AddAssign, add_assign, +);
impl_assign_op!(Quaternion, Quaternion, SubAssign, sub_assign, -);
impl_assign_op!(Quaternion, Quaternion, MulAssign, mul_assign, *);
impl_assign_op!(Quaternion, f32, MulAssign, mul_assign, *);
impl_assign_op!(Quaternion, Quaternion, DivAssign, div_assign, /);

impl From<Float4> for Quaternion {
    #[inline]
    fn from(v: Float4) -> Self {
        Self::new(v.x, v.y, v.z, v.w)
    }
}

impl From<Quaternion> for Float4 {
    #[inline]
    fn from(q: Quaternion) -> Self {
        Float4::new(q.x, q.y, q.z, q.w)
    }
}

impl From<glam::Quat> for Quaternion {
    #[inline]
    fn from(q: glam::Quat) -> Self {
        Self::new(q.x, q.y, q.z, q.w)
    }
}

impl From<Quaternion> for glam::Quat {
    #[inline]
    fn from(q: Quaternion) -> glam::Quat {
        glam::Quat::from_xyzw(q.x, q.y, q.z, q.w)
    }
}
