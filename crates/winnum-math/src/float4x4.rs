//! 4x4 matrix type for 3D affine and projective transforms.
//!
//! [`Float4x4`] carries world, view and projection transforms. The factory
//! functions cover rigid transforms, cameras, billboards, projections and
//! planar shadow/reflection matrices.
//!
//! # Convention
//!
//! Row-major storage, row vectors on the left:
//!
//! ```text
//!                | m11 m12 m13 m14 |
//! [x y z 1]  *   | m21 m22 m23 m24 |
//!                | m31 m32 m33 m34 |
//!                | m41 m42 m43 m44 |   <- translation in m41..m43
//! ```
//!
//! `a * b` applies `a` first, then `b`. The memory layout is identical to
//! [`glam::Mat4`] (whose columns are our rows), so `glam_a * glam_b`
//! corresponds to `b * a` here.
//!
//! # Usage
//!
//! ```rust
//! use winnum_math::{Float3, Float4x4, Transform};
//!
//! let world = Float4x4::from_scale_uniform(2.0) * Float4x4::from_translation(Float3::new(0.0, 0.0, 5.0));
//! let p = Float3::ONE.transform(world);
//! assert_eq!(p, Float3::new(2.0, 2.0, 7.0));
//! ```

use std::ops::{Add, Mul, Neg, Sub};

use bytemuck::{Pod, Zeroable};
use tracing::{debug, trace};
use winnum_core::scalar::{self, BILLBOARD_EPSILON, DECOMPOSE_EPSILON, INVERT_EPSILON};
use winnum_core::{Error, Result};

use crate::macros::impl_assign_op;
use crate::{Float3, Plane, Quaternion, Transform};

/// A 4x4 row-major matrix.
///
/// `#[repr(C)]` with fields in the order `m11, m12, .., m44`.
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Float4x4 {
    /// Row 1, column 1
    pub m11: f32,
    /// Row 1, column 2
    pub m12: f32,
    /// Row 1, column 3
    pub m13: f32,
    /// Row 1, column 4
    pub m14: f32,
    /// Row 2, column 1
    pub m21: f32,
    /// Row 2, column 2
    pub m22: f32,
    /// Row 2, column 3
    pub m23: f32,
    /// Row 2, column 4
    pub m24: f32,
    /// Row 3, column 1
    pub m31: f32,
    /// Row 3, column 2
    pub m32: f32,
    /// Row 3, column 3
    pub m33: f32,
    /// Row 3, column 4
    pub m34: f32,
    /// Row 4, column 1 (X translation)
    pub m41: f32,
    /// Row 4, column 2 (Y translation)
    pub m42: f32,
    /// Row 4, column 3 (Z translation)
    pub m43: f32,
    /// Row 4, column 4
    pub m44: f32,
}

/// Result of [`Float4x4::decompose`].
///
/// All three components are written even when `success` is false: `scale`
/// and `translation` hold the values read from the matrix and `rotation` is
/// the identity.
///
/// The default value is a failed decomposition of zero scale.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Decomposition {
    /// Per-axis scale. One axis is negated for mirrored matrices.
    pub scale: Float3,
    /// Rotation part.
    pub rotation: Quaternion,
    /// Translation row.
    pub translation: Float3,
    /// False when the matrix is not scale x rotation x translation.
    pub success: bool,
}

impl Decomposition {
    /// Returns `(scale, rotation, translation)` if decomposition succeeded.
    #[inline]
    pub fn ok(self) -> Option<(Float3, Quaternion, Float3)> {
        self.success
            .then_some((self.scale, self.rotation, self.translation))
    }
}

impl Float4x4 {
    /// Identity matrix.
    pub const IDENTITY: Self = Self::from_rows([
        [1.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]);

    /// Matrix with every element NaN.
    pub const NAN: Self = Self::from_rows([[f32::NAN; 4]; 4]);

    /// Creates a matrix from its sixteen elements in row-major order.
    #[allow(clippy::too_many_arguments)]
    #[rustfmt::skip]
    #[inline]
    pub const fn new(
        m11: f32, m12: f32, m13: f32, m14: f32,
        m21: f32, m22: f32, m23: f32, m24: f32,
        m31: f32, m32: f32, m33: f32, m34: f32,
        m41: f32, m42: f32, m43: f32, m44: f32,
    ) -> Self {
        Self {
            m11, m12, m13, m14,
            m21, m22, m23, m24,
            m31, m32, m33, m34,
            m41, m42, m43, m44,
        }
    }

    /// Creates a matrix from row arrays.
    #[rustfmt::skip]
    #[inline]
    pub const fn from_rows(r: [[f32; 4]; 4]) -> Self {
        Self::new(
            r[0][0], r[0][1], r[0][2], r[0][3],
            r[1][0], r[1][1], r[1][2], r[1][3],
            r[2][0], r[2][1], r[2][2], r[2][3],
            r[3][0], r[3][1], r[3][2], r[3][3],
        )
    }

    /// Returns the rows as arrays.
    #[inline]
    pub const fn to_rows(&self) -> [[f32; 4]; 4] {
        [
            [self.m11, self.m12, self.m13, self.m14],
            [self.m21, self.m22, self.m23, self.m24],
            [self.m31, self.m32, self.m33, self.m34],
            [self.m41, self.m42, self.m43, self.m44],
        ]
    }

    /// Affine matrix from three basis rows and a translation row.
    #[inline]
    fn from_basis(x: Float3, y: Float3, z: Float3, translation: Float3) -> Self {
        Self::from_rows([
            [x.x, x.y, x.z, 0.0],
            [y.x, y.y, y.z, 0.0],
            [z.x, z.y, z.z, 0.0],
            [translation.x, translation.y, translation.z, 1.0],
        ])
    }

    // ------------------------------------------------------------------
    // Rigid and scaling transforms
    // ------------------------------------------------------------------

    /// Creates a translation matrix.
    #[inline]
    pub const fn from_translation(position: Float3) -> Self {
        let mut m = Self::IDENTITY;
        m.m41 = position.x;
        m.m42 = position.y;
        m.m43 = position.z;
        m
    }

    /// Creates a non-uniform scale about the origin.
    #[inline]
    pub const fn from_scale(scales: Float3) -> Self {
        let mut m = Self::IDENTITY;
        m.m11 = scales.x;
        m.m22 = scales.y;
        m.m33 = scales.z;
        m
    }

    /// Creates a uniform scale about the origin.
    #[inline]
    pub const fn from_scale_uniform(scale: f32) -> Self {
        Self::from_scale(Float3::splat(scale))
    }

    /// Creates a non-uniform scale about `center`.
    #[inline]
    pub fn from_scale_about(scales: Float3, center: Float3) -> Self {
        let mut m = Self::from_scale(scales);
        m.m41 = center.x * (1.0 - scales.x);
        m.m42 = center.y * (1.0 - scales.y);
        m.m43 = center.z * (1.0 - scales.z);
        m
    }

    /// Creates a uniform scale about `center`.
    #[inline]
    pub fn from_scale_uniform_about(scale: f32, center: Float3) -> Self {
        Self::from_scale_about(Float3::splat(scale), center)
    }

    /// Rotation about the X axis.
    pub fn from_rotation_x(radians: f32) -> Self {
        let (s, c) = radians.sin_cos();
        let mut m = Self::IDENTITY;
        m.m22 = c;
        m.m23 = s;
        m.m32 = -s;
        m.m33 = c;
        m
    }

    /// Rotation about an X-parallel axis through `center`.
    pub fn from_rotation_x_about(radians: f32, center: Float3) -> Self {
        let (s, c) = radians.sin_cos();
        let mut m = Self::from_rotation_x(radians);
        m.m42 = center.y * (1.0 - c) + center.z * s;
        m.m43 = center.z * (1.0 - c) - center.y * s;
        m
    }

    /// Rotation about the Y axis.
    pub fn from_rotation_y(radians: f32) -> Self {
        let (s, c) = radians.sin_cos();
        let mut m = Self::IDENTITY;
        m.m11 = c;
        m.m13 = -s;
        m.m31 = s;
        m.m33 = c;
        m
    }

    /// Rotation about a Y-parallel axis through `center`.
    pub fn from_rotation_y_about(radians: f32, center: Float3) -> Self {
        let (s, c) = radians.sin_cos();
        let mut m = Self::from_rotation_y(radians);
        m.m41 = center.x * (1.0 - c) - center.z * s;
        m.m43 = center.z * (1.0 - c) + center.x * s;
        m
    }

    /// Rotation about the Z axis.
    pub fn from_rotation_z(radians: f32) -> Self {
        let (s, c) = radians.sin_cos();
        let mut m = Self::IDENTITY;
        m.m11 = c;
        m.m12 = s;
        m.m21 = -s;
        m.m22 = c;
        m
    }

    /// Rotation about a Z-parallel axis through `center`.
    pub fn from_rotation_z_about(radians: f32, center: Float3) -> Self {
        let (s, c) = radians.sin_cos();
        let mut m = Self::from_rotation_z(radians);
        m.m41 = center.x * (1.0 - c) + center.y * s;
        m.m42 = center.y * (1.0 - c) - center.x * s;
        m
    }

    /// Rotation of `angle` radians about `axis` (Rodrigues' formula).
    ///
    /// `axis` must be unit length; it is not normalized here.
    pub fn from_axis_angle(axis: Float3, angle: f32) -> Self {
        let Float3 { x, y, z } = axis;
        let (sa, ca) = angle.sin_cos();
        let (xx, yy, zz) = (x * x, y * y, z * z);
        let (xy, xz, yz) = (x * y, x * z, y * z);

        Self::from_rows([
            [xx + ca * (1.0 - xx), xy - ca * xy + sa * z, xz - ca * xz - sa * y, 0.0],
            [xy - ca * xy - sa * z, yy + ca * (1.0 - yy), yz - ca * yz + sa * x, 0.0],
            [xz - ca * xz + sa * y, yz - ca * yz - sa * x, zz + ca * (1.0 - zz), 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Rotation matrix equivalent to a unit quaternion.
    pub fn from_quaternion(q: Quaternion) -> Self {
        let r = q.rotation_rows();
        Self::from_rows([
            [r[0][0], r[0][1], r[0][2], 0.0],
            [r[1][0], r[1][1], r[1][2], 0.0],
            [r[2][0], r[2][1], r[2][2], 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Rotation from yaw (about Y), pitch (about X) and roll (about Z).
    pub fn from_yaw_pitch_roll(yaw: f32, pitch: f32, roll: f32) -> Self {
        Self::from_quaternion(Quaternion::from_yaw_pitch_roll(yaw, pitch, roll))
    }

    // ------------------------------------------------------------------
    // Cameras and billboards
    // ------------------------------------------------------------------

    /// Spherical billboard: rotates an object at `object_position` to face
    /// the camera.
    ///
    /// When object and camera coincide (squared distance below
    /// [`BILLBOARD_EPSILON`]) the facing direction cannot be derived from the
    /// positions and the negated `camera_forward` is used instead.
    pub fn billboard(
        object_position: Float3,
        camera_position: Float3,
        camera_up: Float3,
        camera_forward: Float3,
    ) -> Self {
        let z_axis = facing_direction(object_position, camera_position, camera_forward);
        let x_axis = camera_up.cross(z_axis).normalize();
        let y_axis = z_axis.cross(x_axis);

        Self::from_basis(x_axis, y_axis, z_axis, object_position)
    }

    /// Cylindrical billboard that only rotates about `rotate_axis`.
    ///
    /// When the facing direction is within 0.1 degree of `rotate_axis` the
    /// object's own `object_forward` is used, and if that is parallel too a
    /// fixed canonical axis is substituted.
    pub fn constrained_billboard(
        object_position: Float3,
        camera_position: Float3,
        rotate_axis: Float3,
        camera_forward: Float3,
        object_forward: Float3,
    ) -> Self {
        // cos(0.1 degree)
        const MIN_ANGLE: f32 = 1.0 - (0.1 * (std::f32::consts::PI / 180.0));

        let face_dir = facing_direction(object_position, camera_position, camera_forward);
        let y_axis = rotate_axis;

        let (x_axis, z_axis) = if rotate_axis.dot(face_dir).abs() > MIN_ANGLE {
            let mut z_axis = object_forward;
            if rotate_axis.dot(z_axis).abs() > MIN_ANGLE {
                z_axis = if rotate_axis.z.abs() > MIN_ANGLE {
                    Float3::UNIT_X
                } else {
                    -Float3::UNIT_Z
                };
            }
            let x_axis = rotate_axis.cross(z_axis).normalize();
            (x_axis, x_axis.cross(rotate_axis).normalize())
        } else {
            let x_axis = rotate_axis.cross(face_dir).normalize();
            (x_axis, x_axis.cross(y_axis).normalize())
        };

        Self::from_basis(x_axis, y_axis, z_axis, object_position)
    }

    /// View matrix looking from `camera_position` at `camera_target`.
    pub fn look_at(camera_position: Float3, camera_target: Float3, camera_up: Float3) -> Self {
        let z_axis = (camera_position - camera_target).normalize();
        let x_axis = camera_up.cross(z_axis).normalize();
        let y_axis = z_axis.cross(x_axis);

        Self::from_rows([
            [x_axis.x, y_axis.x, z_axis.x, 0.0],
            [x_axis.y, y_axis.y, z_axis.y, 0.0],
            [x_axis.z, y_axis.z, z_axis.z, 0.0],
            [
                -x_axis.dot(camera_position),
                -y_axis.dot(camera_position),
                -z_axis.dot(camera_position),
                1.0,
            ],
        ])
    }

    /// World matrix placing an object at `position` facing `forward`.
    pub fn world(position: Float3, forward: Float3, up: Float3) -> Self {
        let z_axis = (-forward).normalize();
        let x_axis = up.cross(z_axis).normalize();
        let y_axis = z_axis.cross(x_axis);

        Self::from_basis(x_axis, y_axis, z_axis, position)
    }

    // ------------------------------------------------------------------
    // Projections
    // ------------------------------------------------------------------

    /// Perspective projection from a vertical field of view.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] if `near_plane <= 0`, `far_plane <= 0` or
    /// `near_plane >= far_plane`.
    pub fn perspective_field_of_view(
        field_of_view: f32,
        aspect_ratio: f32,
        near_plane: f32,
        far_plane: f32,
    ) -> Result<Self> {
        validate_depth_range(near_plane, far_plane)?;

        let y_scale = 1.0 / (field_of_view * 0.5).tan();
        let x_scale = y_scale / aspect_ratio;
        Ok(perspective_matrix(x_scale, y_scale, 0.0, 0.0, near_plane, far_plane))
    }

    /// Perspective projection from the view volume's width and height at the
    /// near plane.
    ///
    /// # Errors
    ///
    /// Same depth-range validation as [`Self::perspective_field_of_view`].
    pub fn perspective(width: f32, height: f32, near_plane: f32, far_plane: f32) -> Result<Self> {
        validate_depth_range(near_plane, far_plane)?;

        Ok(perspective_matrix(
            2.0 * near_plane / width,
            2.0 * near_plane / height,
            0.0,
            0.0,
            near_plane,
            far_plane,
        ))
    }

    /// Off-center perspective projection.
    ///
    /// # Errors
    ///
    /// Same depth-range validation as [`Self::perspective_field_of_view`].
    pub fn perspective_off_center(
        left: f32,
        right: f32,
        bottom: f32,
        top: f32,
        near_plane: f32,
        far_plane: f32,
    ) -> Result<Self> {
        validate_depth_range(near_plane, far_plane)?;

        Ok(perspective_matrix(
            2.0 * near_plane / (right - left),
            2.0 * near_plane / (top - bottom),
            (left + right) / (right - left),
            (top + bottom) / (top - bottom),
            near_plane,
            far_plane,
        ))
    }

    /// Orthographic projection. The depth range is not validated.
    pub fn orthographic(width: f32, height: f32, z_near: f32, z_far: f32) -> Self {
        let range = 1.0 / (z_near - z_far);
        Self::from_rows([
            [2.0 / width, 0.0, 0.0, 0.0],
            [0.0, 2.0 / height, 0.0, 0.0],
            [0.0, 0.0, range, 0.0],
            [0.0, 0.0, z_near * range, 1.0],
        ])
    }

    /// Off-center orthographic projection. The depth range is not validated.
    pub fn orthographic_off_center(
        left: f32,
        right: f32,
        bottom: f32,
        top: f32,
        z_near: f32,
        z_far: f32,
    ) -> Self {
        let range = 1.0 / (z_near - z_far);
        Self::from_rows([
            [2.0 / (right - left), 0.0, 0.0, 0.0],
            [0.0, 2.0 / (top - bottom), 0.0, 0.0],
            [0.0, 0.0, range, 0.0],
            [
                (left + right) / (left - right),
                (top + bottom) / (bottom - top),
                z_near * range,
                1.0,
            ],
        ])
    }

    // ------------------------------------------------------------------
    // Planar projections
    // ------------------------------------------------------------------

    /// Flattens geometry onto `plane` along `light_direction`.
    ///
    /// The result is projective: divide by `w` after [`Transform4`](crate::Transform4).
    pub fn shadow(light_direction: Float3, plane: Plane) -> Self {
        let p = plane.normalize();
        let dot = p.normal.dot(light_direction);
        let a = -p.normal.x;
        let b = -p.normal.y;
        let c = -p.normal.z;
        let d = -p.d;
        let l = light_direction;

        Self::from_rows([
            [a * l.x + dot, a * l.y, a * l.z, 0.0],
            [b * l.x, b * l.y + dot, b * l.z, 0.0],
            [c * l.x, c * l.y, c * l.z + dot, 0.0],
            [d * l.x, d * l.y, d * l.z, dot],
        ])
    }

    /// Mirror reflection about `plane`.
    pub fn reflection(plane: Plane) -> Self {
        let p = plane.normalize();
        let Float3 { x: a, y: b, z: c } = p.normal;
        let fa = -2.0 * a;
        let fb = -2.0 * b;
        let fc = -2.0 * c;

        Self::from_rows([
            [fa * a + 1.0, fb * a, fc * a, 0.0],
            [fa * b, fb * b + 1.0, fc * b, 0.0],
            [fa * c, fb * c, fc * c + 1.0, 0.0],
            [fa * p.d, fb * p.d, fc * p.d, 1.0],
        ])
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    /// Returns true if this is exactly the identity matrix.
    #[inline]
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// Translation row `(m41, m42, m43)`.
    #[inline]
    pub const fn translation(&self) -> Float3 {
        Float3::new(self.m41, self.m42, self.m43)
    }

    /// Returns a copy with the translation row replaced.
    #[inline]
    pub const fn with_translation(mut self, translation: Float3) -> Self {
        self.m41 = translation.x;
        self.m42 = translation.y;
        self.m43 = translation.z;
        self
    }

    /// Full 4x4 determinant by cofactor expansion along the first row.
    pub fn determinant(&self) -> f32 {
        let [[a, b, c, d], [e, f, g, h], [i, j, k, l], [m, n, o, p]] = self.to_rows();

        let kp_lo = k * p - l * o;
        let jp_ln = j * p - l * n;
        let jo_kn = j * o - k * n;
        let ip_lm = i * p - l * m;
        let io_km = i * o - k * m;
        let in_jm = i * n - j * m;

        a * (f * kp_lo - g * jp_ln + h * jo_kn) - b * (e * kp_lo - g * ip_lm + h * io_km)
            + c * (e * jp_ln - f * ip_lm + h * in_jm)
            - d * (e * jo_kn - f * io_km + g * in_jm)
    }

    /// Computes the inverse of this matrix.
    ///
    /// Returns `None` when `|det| < INVERT_EPSILON` (the smallest normal
    /// `f32`), i.e. when the reciprocal of the determinant would overflow.
    pub fn invert(&self) -> Option<Self> {
        let [[a, b, c, d], [e, f, g, h], [i, j, k, l], [m, n, o, p]] = self.to_rows();

        let kp_lo = k * p - l * o;
        let jp_ln = j * p - l * n;
        let jo_kn = j * o - k * n;
        let ip_lm = i * p - l * m;
        let io_km = i * o - k * m;
        let in_jm = i * n - j * m;

        let a11 = f * kp_lo - g * jp_ln + h * jo_kn;
        let a12 = -(e * kp_lo - g * ip_lm + h * io_km);
        let a13 = e * jp_ln - f * ip_lm + h * in_jm;
        let a14 = -(e * jo_kn - f * io_km + g * in_jm);

        let det = a * a11 + b * a12 + c * a13 + d * a14;
        if det.abs() < INVERT_EPSILON {
            trace!(determinant = det, "float4x4 is singular");
            return None;
        }

        let inv_det = 1.0 / det;

        let gp_ho = g * p - h * o;
        let fp_hn = f * p - h * n;
        let fo_gn = f * o - g * n;
        let ep_hm = e * p - h * m;
        let eo_gm = e * o - g * m;
        let en_fm = e * n - f * m;

        let gl_hk = g * l - h * k;
        let fl_hj = f * l - h * j;
        let fk_gj = f * k - g * j;
        let el_hi = e * l - h * i;
        let ek_gi = e * k - g * i;
        let ej_fi = e * j - f * i;

        Some(Self::from_rows([
            [
                a11 * inv_det,
                -(b * kp_lo - c * jp_ln + d * jo_kn) * inv_det,
                (b * gp_ho - c * fp_hn + d * fo_gn) * inv_det,
                -(b * gl_hk - c * fl_hj + d * fk_gj) * inv_det,
            ],
            [
                a12 * inv_det,
                (a * kp_lo - c * ip_lm + d * io_km) * inv_det,
                -(a * gp_ho - c * ep_hm + d * eo_gm) * inv_det,
                (a * gl_hk - c * el_hi + d * ek_gi) * inv_det,
            ],
            [
                a13 * inv_det,
                -(a * jp_ln - b * ip_lm + d * in_jm) * inv_det,
                (a * fp_hn - b * ep_hm + d * en_fm) * inv_det,
                -(a * fl_hj - b * el_hi + d * ej_fi) * inv_det,
            ],
            [
                a14 * inv_det,
                (a * jo_kn - b * io_km + c * in_jm) * inv_det,
                -(a * fo_gn - b * eo_gm + c * en_fm) * inv_det,
                (a * fk_gj - b * ek_gi + c * ej_fi) * inv_det,
            ],
        ]))
    }

    /// Splits an affine matrix into scale, rotation and translation.
    ///
    /// The basis rows are ordered by length; axes shorter than
    /// [`DECOMPOSE_EPSILON`] are rebuilt from the longer ones so that
    /// flattened matrices still yield a rotation. Mirrored matrices report a
    /// negative scale on the longest axis. If the fourth column is not
    /// `(0, 0, 0, 1)` or the normalized basis is not orthonormal (skew)
    /// `success` is false and the rotation is the identity.
    ///
    /// # Example
    ///
    /// ```rust
    /// use winnum_math::{Float3, Float4x4};
    ///
    /// let m = Float4x4::from_scale(Float3::new(2.0, 3.0, 4.0))
    ///     * Float4x4::from_translation(Float3::new(1.0, 2.0, 3.0));
    /// let (scale, _rotation, translation) = m.decompose().ok().unwrap();
    /// assert!((scale - Float3::new(2.0, 3.0, 4.0)).length() < 1e-5);
    /// assert_eq!(translation, Float3::new(1.0, 2.0, 3.0));
    /// ```
    pub fn decompose(&self) -> Decomposition {
        const CANONICAL: [Float3; 3] = [Float3::UNIT_X, Float3::UNIT_Y, Float3::UNIT_Z];

        let translation = self.translation();
        let mut basis = [
            Float3::new(self.m11, self.m12, self.m13),
            Float3::new(self.m21, self.m22, self.m23),
            Float3::new(self.m31, self.m32, self.m33),
        ];
        let mut scales = [basis[0].length(), basis[1].length(), basis[2].length()];

        if !self.is_affine() {
            trace!(
                m14 = self.m14,
                m24 = self.m24,
                m34 = self.m34,
                m44 = self.m44,
                "float4x4 is projective"
            );
            return Decomposition {
                scale: Float3::from_array(scales),
                rotation: Quaternion::IDENTITY,
                translation,
                success: false,
            };
        }

        let [a, b, c] = rank_by_length(scales);

        if scales[a] < DECOMPOSE_EPSILON {
            basis[a] = CANONICAL[a];
        }
        basis[a] = basis[a].normalize();

        if scales[b] < DECOMPOSE_EPSILON {
            basis[b] = basis[a].cross(CANONICAL[smallest_component(basis[a].abs())]);
        }
        basis[b] = basis[b].normalize();

        if scales[c] < DECOMPOSE_EPSILON {
            basis[c] = basis[a].cross(basis[b]);
        }
        basis[c] = basis[c].normalize();

        let mut rotation_matrix = Self::from_basis(basis[0], basis[1], basis[2], Float3::ZERO);
        let mut det = rotation_matrix.determinant();

        // Left-handed basis: flip the dominant axis
        if det < 0.0 {
            scales[a] = -scales[a];
            basis[a] = -basis[a];
            det = -det;
            rotation_matrix = Self::from_basis(basis[0], basis[1], basis[2], Float3::ZERO);
        }

        let scale = Float3::from_array(scales);
        let deviation = (det - 1.0) * (det - 1.0);
        if deviation > DECOMPOSE_EPSILON {
            trace!(deviation, "float4x4 is not scale-rotation-translation");
            return Decomposition {
                scale,
                rotation: Quaternion::IDENTITY,
                translation,
                success: false,
            };
        }

        Decomposition {
            scale,
            rotation: Quaternion::from_rotation_matrix(&rotation_matrix),
            translation,
            success: true,
        }
    }

    /// Returns true if the fourth column is exactly `(0, 0, 0, 1)`.
    #[inline]
    pub fn is_affine(&self) -> bool {
        self.m14 == 0.0 && self.m24 == 0.0 && self.m34 == 0.0 && self.m44 == 1.0
    }

    /// Returns the transpose.
    #[inline]
    pub fn transpose(&self) -> Self {
        let r = self.to_rows();
        Self::from_rows(std::array::from_fn(|i| std::array::from_fn(|j| r[j][i])))
    }

    /// Component-wise linear interpolation of all sixteen elements.
    #[inline]
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        self.zip_map(other, |a, b| scalar::lerp(a, b, t))
    }

    /// Returns true if all elements are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.to_rows().iter().flatten().all(|x| x.is_finite())
    }

    #[inline]
    fn map(&self, f: impl Fn(f32) -> f32) -> Self {
        let r = self.to_rows();
        Self::from_rows(r.map(|row| row.map(&f)))
    }

    #[inline]
    fn zip_map(&self, other: &Self, f: impl Fn(f32, f32) -> f32) -> Self {
        let a = self.to_rows();
        let b = other.to_rows();
        Self::from_rows(std::array::from_fn(|i| {
            std::array::from_fn(|j| f(a[i][j], b[i][j]))
        }))
    }
}

/// Unit vector from the camera to the object, or the negated camera forward
/// when the two coincide.
fn facing_direction(object_position: Float3, camera_position: Float3, camera_forward: Float3) -> Float3 {
    let dir = object_position - camera_position;
    let norm = dir.length_squared();
    if norm < BILLBOARD_EPSILON {
        -camera_forward
    } else {
        dir * (1.0 / norm.sqrt())
    }
}

/// Indices of the three scale factors, largest first.
fn rank_by_length(s: [f32; 3]) -> [usize; 3] {
    let [x, y, z] = s;
    if x < y {
        if y < z {
            [2, 1, 0]
        } else if x < z {
            [1, 2, 0]
        } else {
            [1, 0, 2]
        }
    } else if x < z {
        [2, 0, 1]
    } else if y < z {
        [0, 2, 1]
    } else {
        [0, 1, 2]
    }
}

/// Index of the smallest component; ties resolve towards the later axis.
fn smallest_component(v: Float3) -> usize {
    if v.x < v.y {
        if v.x < v.z { 0 } else { 2 }
    } else if v.y < v.z {
        1
    } else {
        2
    }
}

#[allow(clippy::neg_cmp_op_on_partial_ord)]
fn validate_depth_range(near_plane: f32, far_plane: f32) -> Result<()> {
    // Phrased as "reject unless valid" so NaN is rejected too
    let err = if !(near_plane > 0.0) {
        Error::invalid_argument("near_plane", near_plane, "must be positive")
    } else if !(far_plane > 0.0) {
        Error::invalid_argument("far_plane", far_plane, "must be positive")
    } else if !(near_plane < far_plane) {
        Error::invalid_argument("near_plane", near_plane, "must be less than far_plane")
    } else {
        return Ok(());
    };

    debug!(near_plane, far_plane, %err, "rejected perspective depth range");
    Err(err)
}

fn perspective_matrix(
    x_scale: f32,
    y_scale: f32,
    x_offset: f32,
    y_offset: f32,
    near_plane: f32,
    far_plane: f32,
) -> Float4x4 {
    let range = far_plane / (near_plane - far_plane);
    Float4x4::from_rows([
        [x_scale, 0.0, 0.0, 0.0],
        [0.0, y_scale, 0.0, 0.0],
        [x_offset, y_offset, range, -1.0],
        [0.0, 0.0, near_plane * range, 0.0],
    ])
}

impl Default for Float4x4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Add for Float4x4 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        self.zip_map(&rhs, |a, b| a + b)
    }
}

impl Sub for Float4x4 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self.zip_map(&rhs, |a, b| a - b)
    }
}

// Float4x4 * Float4x4: applies self first, then rhs
impl Mul for Float4x4 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        let a = self.to_rows();
        let b = rhs.to_rows();
        let mut result = [[0.0; 4]; 4];
        for i in 0..4 {
            for j in 0..4 {
                result[i][j] = a[i][0] * b[0][j]
                    + a[i][1] * b[1][j]
                    + a[i][2] * b[2][j]
                    + a[i][3] * b[3][j];
            }
        }
        Self::from_rows(result)
    }
}

impl Mul<f32> for Float4x4 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self {
        self.map(|a| a * rhs)
    }
}

impl Neg for Float4x4 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self.map(|a| -a)
    }
}

impl_assign_op!(Float4x4, Float4x4, AddAssign, add_assign, +);
impl_assign_op!(Float4x4, Float4x4, SubAssign, sub_assign, -);
impl_assign_op!(Float4x4, Float4x4, MulAssign, mul_assign, *);
impl_assign_op!(Float4x4, f32, MulAssign, mul_assign, *);

// Rotates the first three columns of every row; the fourth column is kept.
impl Transform<Quaternion> for Float4x4 {
    type Output = Float4x4;

    fn transform(self, q: Quaternion) -> Float4x4 {
        let r = q.rotation_rows();
        let rows = self.to_rows().map(|row| {
            [
                row[0] * r[0][0] + row[1] * r[1][0] + row[2] * r[2][0],
                row[0] * r[0][1] + row[1] * r[1][1] + row[2] * r[2][1],
                row[0] * r[0][2] + row[1] * r[1][2] + row[2] * r[2][2],
                row[3],
            ]
        });
        Float4x4::from_rows(rows)
    }
}

impl From<glam::Mat4> for Float4x4 {
    #[inline]
    fn from(m: glam::Mat4) -> Self {
        bytemuck::cast(m.to_cols_array())
    }
}

impl From<Float4x4> for glam::Mat4 {
    #[inline]
    fn from(m: Float4x4) -> glam::Mat4 {
        glam::Mat4::from_cols_array(&bytemuck::cast(m))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};

    fn assert_near(a: &Float4x4, b: &Float4x4, eps: f32) {
        for (x, y) in a.to_rows().iter().flatten().zip(b.to_rows().iter().flatten()) {
            assert!((x - y).abs() < eps, "{:?}\n!=\n{:?}", a, b);
        }
    }

    fn sample() -> Float4x4 {
        Float4x4::from_scale(Float3::new(2.0, 3.0, 4.0))
            * Float4x4::from_axis_angle(Float3::UNIT_Y, FRAC_PI_4)
            * Float4x4::from_translation(Float3::new(1.0, 2.0, 3.0))
    }

    #[test]
    fn test_float4x4_identity() {
        assert!(Float4x4::IDENTITY.is_identity());
        assert!(Float4x4::default().is_identity());
        let mut m = Float4x4::IDENTITY;
        m.m23 = 1e-6;
        assert!(!m.is_identity());
    }

    #[test]
    fn test_float4x4_transpose() {
        let m = Float4x4::from_rows([
            [1.0, 2.0, 3.0, 4.0],
            [5.0, 6.0, 7.0, 8.0],
            [9.0, 10.0, 11.0, 12.0],
            [13.0, 14.0, 15.0, 16.0],
        ]);
        let t = m.transpose();
        assert_eq!(t.m12, 5.0);
        assert_eq!(t.m41, 4.0);
        assert_eq!(t.transpose(), m);
    }

    #[test]
    fn test_float4x4_determinant() {
        assert_eq!(Float4x4::IDENTITY.determinant(), 1.0);
        assert_eq!(Float4x4::from_scale(Float3::new(2.0, 3.0, 4.0)).determinant(), 24.0);
        // Translation does not change the determinant
        let t = Float4x4::from_translation(Float3::new(5.0, 6.0, 7.0));
        assert_eq!(t.determinant(), 1.0);
    }

    #[test]
    fn test_float4x4_invert() {
        let m = sample();
        let inv = m.invert().unwrap();
        assert_near(&(m * inv), &Float4x4::IDENTITY, 1e-5);
        assert_near(&(inv * m), &Float4x4::IDENTITY, 1e-5);
    }

    #[test]
    fn test_float4x4_invert_singular() {
        let m = Float4x4::from_scale(Float3::new(1.0, 0.0, 1.0));
        assert!(m.invert().is_none());
        assert!(Float4x4::zeroed().invert().is_none());
    }

    #[test]
    fn test_float4x4_invert_epsilon_boundary() {
        // det = 1e-39 is subnormal: rejected
        assert!(Float4x4::from_scale(Float3::new(1e-13, 1e-13, 1e-13)).invert().is_none());
        // det = 1e-30 is a normal float: accepted
        assert!(Float4x4::from_scale(Float3::new(1e-10, 1e-10, 1e-10)).invert().is_some());
    }

    #[test]
    fn test_float4x4_composition_order() {
        let a = Float4x4::from_translation(Float3::UNIT_X);
        let b = Float4x4::from_rotation_z(FRAC_PI_2);
        let p = Float3::ZERO;
        let composed = p.transform(a * b);
        let stepwise = p.transform(a).transform(b);
        assert!((composed - stepwise).length() < 1e-6);
        assert!((composed - Float3::UNIT_Y).length() < 1e-6);
    }

    #[test]
    fn test_float4x4_rotation_about_center() {
        let center = Float3::new(1.0, 2.0, 3.0);
        for m in [
            Float4x4::from_rotation_x_about(0.4, center),
            Float4x4::from_rotation_y_about(0.4, center),
            Float4x4::from_rotation_z_about(0.4, center),
        ] {
            assert!((center.transform(m) - center).length() < 1e-5);
        }
    }

    #[test]
    fn test_float4x4_axis_angle_matches_axis_rotations() {
        assert_near(
            &Float4x4::from_axis_angle(Float3::UNIT_X, 0.3),
            &Float4x4::from_rotation_x(0.3),
            1e-6,
        );
        assert_near(
            &Float4x4::from_axis_angle(Float3::UNIT_Y, 0.3),
            &Float4x4::from_rotation_y(0.3),
            1e-6,
        );
        assert_near(
            &Float4x4::from_axis_angle(Float3::UNIT_Z, 0.3),
            &Float4x4::from_rotation_z(0.3),
            1e-6,
        );
    }

    #[test]
    fn test_float4x4_scale_about() {
        let center = Float3::new(1.0, 1.0, 1.0);
        let m = Float4x4::from_scale_uniform_about(2.0, center);
        assert_eq!(center.transform(m), center);
        assert_eq!(Float3::new(2.0, 1.0, 1.0).transform(m), Float3::new(3.0, 1.0, 1.0));
    }

    #[test]
    fn test_float4x4_decompose() {
        let d = sample().decompose();
        assert!(d.success);
        assert!((d.scale - Float3::new(2.0, 3.0, 4.0)).length() < 1e-5);
        assert!((d.translation - Float3::new(1.0, 2.0, 3.0)).length() < 1e-5);
        assert_near(
            &Float4x4::from_quaternion(d.rotation),
            &Float4x4::from_axis_angle(Float3::UNIT_Y, FRAC_PI_4),
            1e-5,
        );
    }

    #[test]
    fn test_float4x4_decompose_mirrored() {
        let m = Float4x4::from_scale(Float3::new(1.0, 2.0, -3.0));
        let d = m.decompose();
        assert!(d.success);
        // Longest axis carries the reflection
        assert!((d.scale - Float3::new(1.0, 2.0, -3.0)).length() < 1e-6);
    }

    #[test]
    fn test_float4x4_decompose_skew_fails_with_partial_output() {
        let m = Float4x4::from_rows([
            [1.0, 0.0, 0.0, 0.0],
            [1.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [4.0, 5.0, 6.0, 1.0],
        ]);
        let d = m.decompose();
        assert!(!d.success);
        assert!(d.ok().is_none());
        assert_eq!(d.translation, Float3::new(4.0, 5.0, 6.0));
        assert_eq!(d.rotation, Quaternion::IDENTITY);
        assert!((d.scale.y - 2.0_f32.sqrt()).abs() < 1e-6);
    }

    #[test]
    fn test_float4x4_decompose_projective_fails() {
        let m = Float4x4::perspective_field_of_view(1.0, 1.0, 0.1, 10.0).unwrap();
        assert!(!m.is_affine());
        let d = m.decompose();
        assert!(!d.success);
        assert_eq!(d.rotation, Quaternion::IDENTITY);
        assert_eq!(d.translation, m.translation());

        // Rotation-only basis with a non-unit w
        let mut m = Float4x4::IDENTITY;
        m.m14 = 0.5;
        m.m44 = 2.0;
        let d = m.decompose();
        assert!(!d.success);
        assert_eq!(d.scale, Float3::ONE);

        let mut m = Float4x4::from_translation(Float3::new(1.0, 2.0, 3.0));
        m.m44 = 2.0;
        assert!(!m.decompose().success);
    }

    #[test]
    fn test_decomposition_default_is_failure() {
        let d = Decomposition::default();
        assert!(!d.success);
        assert!(d.ok().is_none());
        assert_eq!(d.rotation, Quaternion::IDENTITY);
        assert_eq!(d.scale, Float3::ZERO);
    }

    #[test]
    fn test_float4x4_is_affine() {
        assert!(Float4x4::IDENTITY.is_affine());
        assert!(sample().is_affine());
        assert!(Float4x4::orthographic(2.0, 2.0, 0.1, 10.0).is_affine());
        assert!(!Float4x4::perspective(2.0, 2.0, 1.0, 10.0).unwrap().is_affine());
    }

    #[test]
    fn test_float4x4_decompose_flattened_axis() {
        let m = Float4x4::from_scale(Float3::new(2.0, 0.0, 3.0));
        let d = m.decompose();
        assert!(d.success);
        assert_eq!(d.scale.y, 0.0);
        assert!(d.rotation.length() > 0.99);
    }

    #[test]
    fn test_float4x4_perspective_validation() {
        let fov = FRAC_PI_4;
        assert!(Float4x4::perspective_field_of_view(fov, 1.5, 0.1, 10.0).is_ok());

        let err = Float4x4::perspective_field_of_view(fov, 1.5, 0.0, 10.0).unwrap_err();
        assert!(err.is_invalid_argument());
        assert_eq!(err.argument_name(), "near_plane");

        let err = Float4x4::perspective_field_of_view(fov, 1.5, 1.0, -1.0).unwrap_err();
        assert_eq!(err.argument_name(), "far_plane");

        assert!(Float4x4::perspective_field_of_view(fov, 1.5, 10.0, 5.0).is_err());
        assert!(Float4x4::perspective_field_of_view(fov, 1.5, 5.0, 5.0).is_err());
        assert!(Float4x4::perspective_field_of_view(fov, 1.5, f32::NAN, 5.0).is_err());
        assert!(Float4x4::perspective(2.0, 2.0, 0.0, 1.0).is_err());
        assert!(Float4x4::perspective_off_center(-1.0, 1.0, -1.0, 1.0, 2.0, 1.0).is_err());
    }

    #[test]
    fn test_float4x4_perspective_maps_depth_range() {
        let m = Float4x4::perspective(2.0, 2.0, 1.0, 10.0).unwrap();
        use crate::Transform4;
        let near = Float3::new(0.0, 0.0, -1.0).transform4(m);
        let far = Float3::new(0.0, 0.0, -10.0).transform4(m);
        assert!((near.z / near.w).abs() < 1e-6);
        assert!((far.z / far.w - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_float4x4_perspective_off_center_matches_centered() {
        let a = Float4x4::perspective(4.0, 2.0, 1.0, 100.0).unwrap();
        let b = Float4x4::perspective_off_center(-2.0, 2.0, -1.0, 1.0, 1.0, 100.0).unwrap();
        assert_near(&a, &b, 1e-6);
    }

    #[test]
    fn test_float4x4_orthographic_is_not_validated() {
        let m = Float4x4::orthographic(2.0, 2.0, 10.0, 1.0);
        assert!(m.is_finite());
        let off = Float4x4::orthographic_off_center(-1.0, 1.0, -1.0, 1.0, -5.0, -10.0);
        assert!(off.is_finite());
    }

    #[test]
    fn test_float4x4_look_at() {
        let eye = Float3::new(0.0, 0.0, 5.0);
        let view = Float4x4::look_at(eye, Float3::ZERO, Float3::UNIT_Y);
        assert!((eye.transform(view)).length() < 1e-6);
        let target = Float3::ZERO.transform(view);
        assert!((target - Float3::new(0.0, 0.0, -5.0)).length() < 1e-6);
    }

    #[test]
    fn test_float4x4_world_inverts_look_at() {
        let position = Float3::new(1.0, 2.0, 3.0);
        let forward = Float3::new(0.0, 0.0, -1.0);
        let world = Float4x4::world(position, forward, Float3::UNIT_Y);
        let view = Float4x4::look_at(position, position + forward, Float3::UNIT_Y);
        assert_near(&(world * view), &Float4x4::IDENTITY, 1e-5);
    }

    #[test]
    fn test_float4x4_billboard_coincident_uses_forward() {
        let pos = Float3::new(1.0, 1.0, 1.0);
        let forward = Float3::new(0.0, 0.0, -1.0);
        let m = Float4x4::billboard(pos, pos, Float3::UNIT_Y, forward);
        assert!(m.is_finite());
        assert_eq!(Float3::new(m.m31, m.m32, m.m33), -forward);
        assert_eq!(m.translation(), pos);
    }

    #[test]
    fn test_float4x4_billboard_faces_camera() {
        let object = Float3::new(0.0, 0.0, -10.0);
        let camera = Float3::ZERO;
        let m = Float4x4::billboard(object, camera, Float3::UNIT_Y, -Float3::UNIT_Z);
        let z = Float3::new(m.m31, m.m32, m.m33);
        assert!((z - Float3::new(0.0, 0.0, -1.0)).length() < 1e-6);
    }

    #[test]
    fn test_float4x4_constrained_billboard_keeps_axis() {
        let m = Float4x4::constrained_billboard(
            Float3::new(3.0, 0.0, -4.0),
            Float3::new(0.0, 5.0, 0.0),
            Float3::UNIT_Y,
            -Float3::UNIT_Z,
            -Float3::UNIT_Z,
        );
        assert_eq!(Float3::new(m.m21, m.m22, m.m23), Float3::UNIT_Y);
        let z = Float3::new(m.m31, m.m32, m.m33);
        assert!(z.dot(Float3::UNIT_Y).abs() < 1e-6);
        assert!((z.length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_float4x4_constrained_billboard_parallel_fallback() {
        // Camera straight above the object: facing direction is parallel to the axis
        let m = Float4x4::constrained_billboard(
            Float3::ZERO,
            Float3::new(0.0, 10.0, 0.0),
            Float3::UNIT_Y,
            -Float3::UNIT_Y,
            -Float3::UNIT_Z,
        );
        assert!(m.is_finite());
        let z = Float3::new(m.m31, m.m32, m.m33);
        assert!((z - (-Float3::UNIT_Z)).length() < 1e-6);
    }

    #[test]
    fn test_float4x4_reflection_is_involution() {
        let plane = Plane::new(1.0, 2.0, 3.0, 4.0);
        let m = Float4x4::reflection(plane);
        assert_near(&(m * m), &Float4x4::IDENTITY, 1e-5);
    }

    #[test]
    fn test_float4x4_reflection_mirrors_point() {
        let floor = Plane::from_normal(Float3::UNIT_Y, 0.0);
        let p = Float3::new(1.0, 2.0, 3.0).transform(Float4x4::reflection(floor));
        assert_eq!(p, Float3::new(1.0, -2.0, 3.0));
    }

    #[test]
    fn test_float4x4_shadow_flattens_onto_plane() {
        use crate::Transform4;
        let floor = Plane::from_normal(Float3::UNIT_Y, 0.0);
        let light = Float3::new(0.0, 1.0, 0.0);
        let m = Float4x4::shadow(light, floor);
        let h = Float3::new(2.0, 5.0, -1.0).transform4(m);
        let p = h.xyz() / h.w;
        assert!(p.y.abs() < 1e-6);
        assert!((p.x - 2.0).abs() < 1e-6 && (p.z + 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_float4x4_from_yaw_pitch_roll() {
        assert_near(
            &Float4x4::from_yaw_pitch_roll(0.5, 0.0, 0.0),
            &Float4x4::from_rotation_y(0.5),
            1e-6,
        );
        assert_near(
            &Float4x4::from_yaw_pitch_roll(0.0, 0.5, 0.0),
            &Float4x4::from_rotation_x(0.5),
            1e-6,
        );
        assert_near(
            &Float4x4::from_yaw_pitch_roll(0.0, 0.0, 0.5),
            &Float4x4::from_rotation_z(0.5),
            1e-6,
        );
    }

    #[test]
    fn test_float4x4_transform_by_quaternion() {
        let m = Float4x4::from_translation(Float3::new(1.0, 2.0, 3.0));
        let q = Quaternion::from_axis_angle(Float3::UNIT_Z, 0.8);
        assert_near(&m.transform(q), &(m * Float4x4::from_quaternion(q)), 1e-6);
    }

    #[test]
    fn test_float4x4_lerp_and_arithmetic() {
        let a = Float4x4::IDENTITY;
        let b = Float4x4::from_scale_uniform(3.0);
        assert_eq!(a.lerp(&b, 0.5), Float4x4::from_scale_uniform(2.0));
        assert_eq!(a + a, a * 2.0);
        assert!((a - a).to_rows().iter().flatten().all(|x| *x == 0.0));
        assert_eq!(-(-b), b);
    }

    #[test]
    fn test_float4x4_glam_layout() {
        let m = sample();
        let g: glam::Mat4 = m.into();
        let p = glam::Vec3::new(0.5, -1.0, 2.0);
        let ours = Float3::from(p).transform(m);
        let theirs = g.transform_point3(p);
        assert!((ours - Float3::from(theirs)).length() < 1e-5);
        assert_eq!(Float4x4::from(g), m);
    }
}
