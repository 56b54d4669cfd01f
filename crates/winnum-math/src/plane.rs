//! Plane in 3D space.
//!
//! A [`Plane`] holds the coefficients of `normal . p + d = 0`. The normal is
//! not required to be unit length except where a method says so.

use bytemuck::{Pod, Zeroable};

use crate::{Float3, Float4, Float4x4, Quaternion, Transform};

/// A plane `a*x + b*y + c*z + d = 0` with `normal = (a, b, c)`.
///
/// `#[repr(C)]` with layout `normal.x, normal.y, normal.z, d`, the same as
/// a [`Float4`].
///
/// # Example
///
/// ```rust
/// use winnum_math::{Float3, Plane};
///
/// let floor = Plane::from_normal(Float3::UNIT_Y, 0.0);
/// assert_eq!(floor.dot_coordinate(Float3::new(5.0, 2.0, -1.0)), 2.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Plane {
    /// Plane normal `(a, b, c)`
    pub normal: Float3,
    /// Distance term
    pub d: f32,
}

impl Plane {
    /// Creates a plane from raw coefficients.
    #[inline]
    pub const fn new(a: f32, b: f32, c: f32, d: f32) -> Self {
        Self {
            normal: Float3::new(a, b, c),
            d,
        }
    }

    /// Creates a plane from a normal and distance term.
    #[inline]
    pub const fn from_normal(normal: Float3, d: f32) -> Self {
        Self { normal, d }
    }

    /// Plane through three points, with a unit normal.
    ///
    /// The winding `p1 -> p2 -> p3` is counter-clockwise when viewed from
    /// the side the normal points to. Collinear points give NaN.
    pub fn from_vertices(p1: Float3, p2: Float3, p3: Float3) -> Self {
        let normal = (p2 - p1).cross(p3 - p1).normalize();
        Self::from_normal(normal, -normal.dot(p1))
    }

    /// Scales the plane so the normal has unit length.
    ///
    /// Planes that are already normalized (within `f32::EPSILON`) are
    /// returned unchanged.
    pub fn normalize(self) -> Self {
        let length_squared = self.normal.length_squared();
        if (length_squared - 1.0).abs() < f32::EPSILON {
            return self;
        }
        let inv = 1.0 / length_squared.sqrt();
        Self::from_normal(self.normal * inv, self.d * inv)
    }

    /// Full 4-component dot product of `(normal, d)` with `value`.
    #[inline]
    pub fn dot(self, value: Float4) -> f32 {
        Float4::from(self).dot(value)
    }

    /// `normal . point + d`: signed distance to `point` for a unit normal.
    #[inline]
    pub fn dot_coordinate(self, point: Float3) -> f32 {
        self.normal.dot(point) + self.d
    }

    /// `normal . direction`, without the distance term.
    #[inline]
    pub fn dot_normal(self, direction: Float3) -> f32 {
        self.normal.dot(direction)
    }
}

impl From<Float4> for Plane {
    #[inline]
    fn from(v: Float4) -> Self {
        Self::new(v.x, v.y, v.z, v.w)
    }
}

impl From<Plane> for Float4 {
    #[inline]
    fn from(p: Plane) -> Self {
        Float4::from_float3(p.normal, p.d)
    }
}

// Planes are covectors: they transform by the inverse transpose
impl Transform<Float4x4> for Plane {
    type Output = Plane;

    /// Transforms the plane by `m`.
    ///
    /// A singular `m` has no inverse and produces a NaN plane.
    fn transform(self, m: Float4x4) -> Plane {
        let inv = m.invert().unwrap_or(Float4x4::NAN);
        let Float3 { x, y, z } = self.normal;
        let w = self.d;

        Plane::new(
            x * inv.m11 + y * inv.m12 + z * inv.m13 + w * inv.m14,
            x * inv.m21 + y * inv.m22 + z * inv.m23 + w * inv.m24,
            x * inv.m31 + y * inv.m32 + z * inv.m33 + w * inv.m34,
            x * inv.m41 + y * inv.m42 + z * inv.m43 + w * inv.m44,
        )
    }
}

// Rotation about the origin: only the normal turns
impl Transform<Quaternion> for Plane {
    type Output = Plane;

    fn transform(self, q: Quaternion) -> Plane {
        Plane::from_normal(self.normal.transform(q), self.d)
    }
}
