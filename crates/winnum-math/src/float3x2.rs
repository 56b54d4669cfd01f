//! 3x2 matrix type for 2D affine transforms.
//!
//! [`Float3x2`] holds translation, scale, rotation and skew in the plane.
//!
//! # Convention
//!
//! Matrices are stored in **row-major** order and act on **row vectors**:
//!
//! ```text
//!              | m11 m12 |
//! [x y 1]  *   | m21 m22 |  =  [x*m11 + y*m21 + m31,  x*m12 + y*m22 + m32]
//!              | m31 m32 |
//! ```
//!
//! Rows 1-2 are the linear part, row 3 is the translation. Products compose
//! left to right: `a * b` applies `a` first, then `b`.
//!
//! # Usage
//!
//! ```rust
//! use winnum_math::{Float2, Float3x2, Transform};
//!
//! let m = Float3x2::from_scale_uniform(2.0) * Float3x2::from_translation(Float2::new(1.0, 0.0));
//! assert_eq!(Float2::ONE.transform(m), Float2::new(3.0, 2.0));
//! ```

use std::f32::consts::{FRAC_PI_2, PI};
use std::ops::{Add, Mul, Neg, Sub};

use bytemuck::{Pod, Zeroable};
use tracing::trace;
use winnum_core::scalar::{self, ROTATION_SNAP_EPSILON};

use crate::macros::impl_assign_op;
use crate::Float2;

/// A 3x2 affine matrix.
///
/// `#[repr(C)]` with fields in the order `m11, m12, m21, m22, m31, m32`.
///
/// # Example
///
/// ```rust
/// use winnum_math::{Float2, Float3x2, Transform};
///
/// let identity = Float3x2::IDENTITY;
/// let v = Float2::new(1.0, 2.0);
/// assert_eq!(v.transform(identity), v);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Float3x2 {
    /// Row 1, column 1
    pub m11: f32,
    /// Row 1, column 2
    pub m12: f32,
    /// Row 2, column 1
    pub m21: f32,
    /// Row 2, column 2
    pub m22: f32,
    /// Row 3, column 1 (X translation)
    pub m31: f32,
    /// Row 3, column 2 (Y translation)
    pub m32: f32,
}

impl Float3x2 {
    /// Identity matrix.
    pub const IDENTITY: Self = Self::new(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);

    /// Matrix with every element NaN.
    pub const NAN: Self = Self::new(f32::NAN, f32::NAN, f32::NAN, f32::NAN, f32::NAN, f32::NAN);

    /// Creates a matrix from its six elements in row-major order.
    #[inline]
    pub const fn new(m11: f32, m12: f32, m21: f32, m22: f32, m31: f32, m32: f32) -> Self {
        Self {
            m11,
            m12,
            m21,
            m22,
            m31,
            m32,
        }
    }

    /// Creates a matrix from row arrays.
    #[rustfmt::skip]
    #[inline]
    pub const fn from_rows(rows: [[f32; 2]; 3]) -> Self {
        Self::new(
            rows[0][0], rows[0][1],
            rows[1][0], rows[1][1],
            rows[2][0], rows[2][1],
        )
    }

    /// Returns the rows as arrays.
    #[inline]
    pub const fn to_rows(&self) -> [[f32; 2]; 3] {
        [
            [self.m11, self.m12],
            [self.m21, self.m22],
            [self.m31, self.m32],
        ]
    }

    /// Creates a translation matrix.
    #[inline]
    pub const fn from_translation(position: Float2) -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, position.x, position.y)
    }

    /// Creates a non-uniform scale about the origin.
    #[inline]
    pub const fn from_scale(scales: Float2) -> Self {
        Self::new(scales.x, 0.0, 0.0, scales.y, 0.0, 0.0)
    }

    /// Creates a uniform scale about the origin.
    #[inline]
    pub const fn from_scale_uniform(scale: f32) -> Self {
        Self::from_scale(Float2::splat(scale))
    }

    /// Creates a non-uniform scale about `center`.
    ///
    /// Equivalent to translating `center` to the origin, scaling, and
    /// translating back.
    #[inline]
    pub fn from_scale_about(scales: Float2, center: Float2) -> Self {
        Self::new(
            scales.x,
            0.0,
            0.0,
            scales.y,
            center.x * (1.0 - scales.x),
            center.y * (1.0 - scales.y),
        )
    }

    /// Creates a uniform scale about `center`.
    #[inline]
    pub fn from_scale_uniform_about(scale: f32, center: Float2) -> Self {
        Self::from_scale_about(Float2::splat(scale), center)
    }

    /// Creates a skew from the given X and Y angles, in radians.
    #[inline]
    pub fn from_skew(radians_x: f32, radians_y: f32) -> Self {
        Self::new(1.0, radians_y.tan(), radians_x.tan(), 1.0, 0.0, 0.0)
    }

    /// Creates a skew about `center`.
    #[inline]
    pub fn from_skew_about(radians_x: f32, radians_y: f32, center: Float2) -> Self {
        let x_tan = radians_x.tan();
        let y_tan = radians_y.tan();
        Self::new(1.0, y_tan, x_tan, 1.0, -center.y * x_tan, -center.x * y_tan)
    }

    /// Creates a rotation about the origin.
    ///
    /// Angles within 0.001 degree of 0, ±90° or ±180° produce exact sine and
    /// cosine values, so quarter turns compose without drift.
    #[inline]
    pub fn from_rotation(radians: f32) -> Self {
        let (s, c) = snapped_sin_cos(radians);
        Self::new(c, s, -s, c, 0.0, 0.0)
    }

    /// Creates a rotation about `center`.
    #[inline]
    pub fn from_rotation_about(radians: f32, center: Float2) -> Self {
        let (s, c) = snapped_sin_cos(radians);
        let x = center.x * (1.0 - c) + center.y * s;
        let y = center.y * (1.0 - c) - center.x * s;
        Self::new(c, s, -s, c, x, y)
    }

    /// Returns true if this is exactly the identity matrix.
    #[inline]
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// Determinant of the 2x2 linear part. Translation does not contribute.
    #[inline]
    pub fn determinant(&self) -> f32 {
        self.m11 * self.m22 - self.m12 * self.m21
    }

    /// Translation row `(m31, m32)`.
    #[inline]
    pub const fn translation(&self) -> Float2 {
        Float2::new(self.m31, self.m32)
    }

    /// Returns a copy with the translation row replaced.
    #[inline]
    pub const fn with_translation(mut self, translation: Float2) -> Self {
        self.m31 = translation.x;
        self.m32 = translation.y;
        self
    }

    /// Computes the inverse of this matrix.
    ///
    /// Returns `None` only when the determinant is exactly zero.
    ///
    /// # Example
    ///
    /// ```rust
    /// use winnum_math::Float3x2;
    ///
    /// let m = Float3x2::from_scale_uniform(2.0);
    /// let inv = m.invert().unwrap();
    /// assert!((m * inv).is_identity());
    ///
    /// assert!(Float3x2::new(1.0, 0.0, 2.0, 0.0, 0.0, 0.0).invert().is_none());
    /// ```
    pub fn invert(&self) -> Option<Self> {
        let det = self.determinant();
        if det == 0.0 {
            trace!(determinant = det, "float3x2 is singular");
            return None;
        }

        let inv_det = 1.0 / det;
        Some(Self::new(
            self.m22 * inv_det,
            -self.m12 * inv_det,
            -self.m21 * inv_det,
            self.m11 * inv_det,
            (self.m21 * self.m32 - self.m31 * self.m22) * inv_det,
            (self.m31 * self.m12 - self.m11 * self.m32) * inv_det,
        ))
    }

    /// Component-wise linear interpolation of all six elements.
    ///
    /// This is not a decomposition-based interpolation; rotations in between
    /// the endpoints are generally not rigid.
    #[inline]
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        Self::new(
            scalar::lerp(self.m11, other.m11, t),
            scalar::lerp(self.m12, other.m12, t),
            scalar::lerp(self.m21, other.m21, t),
            scalar::lerp(self.m22, other.m22, t),
            scalar::lerp(self.m31, other.m31, t),
            scalar::lerp(self.m32, other.m32, t),
        )
    }

    /// Returns true if all elements are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.to_rows().iter().flatten().all(|x| x.is_finite())
    }
}

fn snapped_sin_cos(radians: f32) -> (f32, f32) {
    let near = |target: f32| (radians - target).abs() < ROTATION_SNAP_EPSILON;

    if near(0.0) {
        (0.0, 1.0)
    } else if near(FRAC_PI_2) {
        (1.0, 0.0)
    } else if near(-FRAC_PI_2) {
        (-1.0, 0.0)
    } else if near(PI) || near(-PI) {
        (0.0, -1.0)
    } else {
        radians.sin_cos()
    }
}

impl Default for Float3x2 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Add for Float3x2 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(
            self.m11 + rhs.m11,
            self.m12 + rhs.m12,
            self.m21 + rhs.m21,
            self.m22 + rhs.m22,
            self.m31 + rhs.m31,
            self.m32 + rhs.m32,
        )
    }
}

impl Sub for Float3x2 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(
            self.m11 - rhs.m11,
            self.m12 - rhs.m12,
            self.m21 - rhs.m21,
            self.m22 - rhs.m22,
            self.m31 - rhs.m31,
            self.m32 - rhs.m32,
        )
    }
}

// Float3x2 * Float3x2: applies self first, then rhs
impl Mul for Float3x2 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.m11 * rhs.m11 + self.m12 * rhs.m21,
            self.m11 * rhs.m12 + self.m12 * rhs.m22,
            self.m21 * rhs.m11 + self.m22 * rhs.m21,
            self.m21 * rhs.m12 + self.m22 * rhs.m22,
            self.m31 * rhs.m11 + self.m32 * rhs.m21 + rhs.m31,
            self.m31 * rhs.m12 + self.m32 * rhs.m22 + rhs.m32,
        )
    }
}

impl Mul<f32> for Float3x2 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self {
        Self::new(
            self.m11 * rhs,
            self.m12 * rhs,
            self.m21 * rhs,
            self.m22 * rhs,
            self.m31 * rhs,
            self.m32 * rhs,
        )
    }
}

impl Neg for Float3x2 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self * -1.0
    }
}

impl_assign_op!(Float3x2, Float3x2, AddAssign, add_assign, +);
impl_assign_op!(Float3x2, Float3x2, SubAssign, sub_assign, -);
impl_assign_op!(Float3x2, Float3x2, MulAssign, mul_assign, *);
impl_assign_op!(Float3x2, f32, MulAssign, mul_assign, *);

impl From<glam::Affine2> for Float3x2 {
    #[inline]
    fn from(a: glam::Affine2) -> Self {
        let x = a.matrix2.x_axis;
        let y = a.matrix2.y_axis;
        Self::new(x.x, x.y, y.x, y.y, a.translation.x, a.translation.y)
    }
}

impl From<Float3x2> for glam::Affine2 {
    #[inline]
    fn from(m: Float3x2) -> glam::Affine2 {
        glam::Affine2::from_cols(
            glam::Vec2::new(m.m11, m.m12),
            glam::Vec2::new(m.m21, m.m22),
            glam::Vec2::new(m.m31, m.m32),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Transform;

    fn assert_near(a: Float3x2, b: Float3x2) {
        for (x, y) in a.to_rows().iter().flatten().zip(b.to_rows().iter().flatten()) {
            assert!((x - y).abs() < 1e-5, "{:?} != {:?}", a, b);
        }
    }

    #[test]
    fn test_float3x2_identity() {
        let v = Float2::new(1.0, 2.0);
        assert_eq!(v.transform(Float3x2::IDENTITY), v);
        assert!(Float3x2::IDENTITY.is_identity());
        assert!(Float3x2::default().is_identity());
    }

    #[test]
    fn test_float3x2_is_identity_exact() {
        let mut m = Float3x2::IDENTITY;
        m.m31 = f32::EPSILON;
        assert!(!m.is_identity());
    }

    #[test]
    fn test_float3x2_determinant_ignores_translation() {
        let m = Float3x2::new(2.0, 1.0, 1.0, 3.0, 100.0, -50.0);
        assert_eq!(m.determinant(), 5.0);
    }

    #[test]
    fn test_float3x2_invert() {
        let m = Float3x2::from_rotation_about(0.7, Float2::new(3.0, -2.0))
            * Float3x2::from_scale(Float2::new(2.0, 0.5));
        let inv = m.invert().unwrap();
        assert_near(m * inv, Float3x2::IDENTITY);
        assert_near(inv * m, Float3x2::IDENTITY);
    }

    #[test]
    fn test_float3x2_singular() {
        let m = Float3x2::new(1.0, 0.0, 2.0, 0.0, 0.0, 0.0);
        assert_eq!(m.determinant(), 0.0);
        assert!(m.invert().is_none());
    }

    #[test]
    fn test_float3x2_tiny_determinant_still_inverts() {
        let m = Float3x2::from_scale_uniform(1e-10);
        assert!(m.invert().is_some());
    }

    #[test]
    fn test_float3x2_rotation_snaps_quarter_turns() {
        let m = Float3x2::from_rotation(FRAC_PI_2);
        assert_eq!(m, Float3x2::new(0.0, 1.0, -1.0, 0.0, 0.0, 0.0));
        let half = Float3x2::from_rotation(PI);
        assert_eq!(half, Float3x2::new(-1.0, 0.0, 0.0, -1.0, 0.0, 0.0));
        assert!(Float3x2::from_rotation(0.0).is_identity());
    }

    #[test]
    fn test_float3x2_rotation_beyond_half_turn() {
        // 3/4 turn is not snapped to a half turn
        let m = Float3x2::from_rotation(3.0 * FRAC_PI_2);
        let v = Float2::UNIT_X.transform(m);
        assert!((v - Float2::new(0.0, -1.0)).length() < 1e-6);
    }

    #[test]
    fn test_float3x2_rotation_about_center_fixes_center() {
        let center = Float2::new(5.0, 7.0);
        let m = Float3x2::from_rotation_about(1.234, center);
        let moved = center.transform(m);
        assert!((moved - center).length() < 1e-5);
    }

    #[test]
    fn test_float3x2_scale_about_center() {
        let center = Float2::new(2.0, 2.0);
        let m = Float3x2::from_scale_uniform_about(3.0, center);
        assert_eq!(center.transform(m), center);
        assert_eq!(Float2::new(3.0, 2.0).transform(m), Float2::new(5.0, 2.0));
    }

    #[test]
    fn test_float3x2_skew() {
        let m = Float3x2::from_skew(std::f32::consts::FRAC_PI_4, 0.0);
        let v = Float2::new(0.0, 1.0).transform(m);
        assert!((v.x - 1.0).abs() < 1e-6);
        assert_eq!(v.y, 1.0);

        let center = Float2::new(1.0, 1.0);
        let about = Float3x2::from_skew_about(0.3, 0.4, center);
        assert!((center.transform(about) - center).length() < 1e-6);
    }

    #[test]
    fn test_float3x2_composition_order() {
        let a = Float3x2::from_translation(Float2::new(1.0, 0.0));
        let b = Float3x2::from_scale_uniform(2.0);
        let p = Float2::new(1.0, 1.0);
        assert_eq!(p.transform(a * b), p.transform(a).transform(b));
        assert_eq!(p.transform(a * b), Float2::new(4.0, 2.0));
    }

    #[test]
    fn test_float3x2_translation_accessors() {
        let m = Float3x2::from_rotation(0.5).with_translation(Float2::new(3.0, 4.0));
        assert_eq!(m.translation(), Float2::new(3.0, 4.0));
    }

    #[test]
    fn test_float3x2_lerp_componentwise() {
        let a = Float3x2::IDENTITY;
        let b = Float3x2::new(3.0, 2.0, 2.0, 3.0, 10.0, 20.0);
        let mid = a.lerp(&b, 0.5);
        assert_eq!(mid, Float3x2::new(2.0, 1.0, 1.0, 2.0, 5.0, 10.0));
    }

    #[test]
    fn test_float3x2_arithmetic() {
        let a = Float3x2::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0);
        assert_eq!(a + a, a * 2.0);
        assert_eq!(a - a, Float3x2::zeroed());
        assert_eq!(-a, a * -1.0);

        let mut c = a;
        c *= Float3x2::IDENTITY;
        assert_eq!(c, a);
    }

    #[test]
    fn test_float3x2_glam_roundtrip() {
        let m = Float3x2::from_rotation_about(0.3, Float2::new(1.0, 2.0));
        let g: glam::Affine2 = m.into();
        let p = glam::Vec2::new(3.0, -1.0);
        let ours = Float2::from(p).transform(m);
        let theirs = g.transform_point2(p);
        assert!((ours.x - theirs.x).abs() < 1e-6 && (ours.y - theirs.y).abs() < 1e-6);
        assert_eq!(Float3x2::from(g), m);
    }
}
