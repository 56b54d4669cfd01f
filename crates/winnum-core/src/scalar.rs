//! Scalar helpers shared by the vector, matrix and quaternion code.
//!
//! - Angle conversion ([`to_radians`], [`to_degrees`])
//! - Linear interpolation ([`lerp`])
//! - Clamping ([`clamp`])
//! - Tolerances used by the numerically sensitive operations
//!
//! # Usage
//!
//! ```rust
//! use winnum_core::scalar::{lerp, to_radians};
//!
//! let mid = lerp(0.0, 10.0, 0.5);
//! assert_eq!(mid, 5.0);
//!
//! let quarter = to_radians(90.0);
//! assert!((quarter - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
//! ```

use std::f32::consts::PI;

/// Squared length below which a billboard treats the object and camera
/// positions as coincident.
pub const BILLBOARD_EPSILON: f32 = 1e-4;

/// Tolerance for degenerate scale axes and the orthonormality check in
/// matrix decomposition.
pub const DECOMPOSE_EPSILON: f32 = 1e-4;

/// `|dot|` above `1 - SLERP_EPSILON` makes slerp fall back to normalized lerp.
pub const SLERP_EPSILON: f32 = 1e-6;

/// Determinants with magnitude below this are treated as singular by the
/// 4x4 inversion. Smallest normal `f32`: `1 / det` overflows below it.
pub const INVERT_EPSILON: f32 = f32::MIN_POSITIVE;

/// Angles within this many radians (0.001 degree) of a quarter turn produce
/// exact sin/cos values in 2D rotation factories.
pub const ROTATION_SNAP_EPSILON: f32 = 0.001 * PI / 180.0;

/// Converts degrees to radians.
#[inline]
pub fn to_radians(degrees: f32) -> f32 {
    degrees * (PI / 180.0)
}

/// Converts radians to degrees.
#[inline]
pub fn to_degrees(radians: f32) -> f32 {
    radians * (180.0 / PI)
}

/// Linear interpolation between two values.
///
/// Returns `a` when `t = 0.0`, and `b` when `t = 1.0`.
/// For values outside [0, 1], the result is extrapolated.
///
/// # Formula
///
/// `a + (b - a) * t`
///
/// # Example
///
/// ```rust
/// use winnum_core::lerp;
///
/// assert_eq!(lerp(0.0, 10.0, 0.0), 0.0);
/// assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
/// assert_eq!(lerp(0.0, 10.0, 1.5), 15.0);
/// ```
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Clamps a value to the range [min, max].
///
/// The upper bound is applied first, then the lower bound, so when
/// `min > max` the result is `min`. Bounds are never reordered.
///
/// # Example
///
/// ```rust
/// use winnum_core::clamp;
///
/// assert_eq!(clamp(-0.5, 0.0, 1.0), 0.0);
/// assert_eq!(clamp(0.5, 0.0, 1.0), 0.5);
/// assert_eq!(clamp(1.5, 0.0, 1.0), 1.0);
/// assert_eq!(clamp(0.5, 2.0, 1.0), 2.0);
/// ```
#[inline]
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    let v = if value > max { max } else { value };
    if v < min { min } else { v }
}

/// Minimum that returns `b` whenever `a < b` is false.
#[inline]
pub fn min(a: f32, b: f32) -> f32 {
    if a < b { a } else { b }
}

/// Maximum that returns `b` whenever `a > b` is false.
#[inline]
pub fn max(a: f32, b: f32) -> f32 {
    if a > b { a } else { b }
}
