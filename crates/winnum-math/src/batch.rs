//! Batch point transforms.
//!
//! Transforms slices of points by a single matrix, four points per step
//! using the `wide` crate for portable SIMD on stable Rust. Points are
//! gathered into structure-of-arrays lanes, transformed, and scattered back;
//! the tail that does not fill a lane group goes through the scalar
//! [`Transform`] path.
//!
//! # Example
//!
//! ```rust
//! use winnum_math::batch::transform_points3;
//! use winnum_math::{Float3, Float4x4};
//!
//! let m = Float4x4::from_translation(Float3::new(0.0, 0.0, 1.0));
//! let points = vec![Float3::ZERO; 5];
//! let moved = transform_points3(&points, m);
//! assert!(moved.iter().all(|p| *p == Float3::UNIT_Z));
//! ```

use wide::f32x4;

use crate::{Float2, Float3, Float3x2, Float4x4, Transform};

const LANES: usize = 4;

#[inline]
fn transform2_x4(xs: f32x4, ys: f32x4, m: &Float3x2) -> (f32x4, f32x4) {
    let rx = xs * f32x4::splat(m.m11) + ys * f32x4::splat(m.m21) + f32x4::splat(m.m31);
    let ry = xs * f32x4::splat(m.m12) + ys * f32x4::splat(m.m22) + f32x4::splat(m.m32);
    (rx, ry)
}

#[inline]
fn transform3_x4(xs: f32x4, ys: f32x4, zs: f32x4, m: &Float4x4) -> (f32x4, f32x4, f32x4) {
    let rx = xs * f32x4::splat(m.m11)
        + ys * f32x4::splat(m.m21)
        + zs * f32x4::splat(m.m31)
        + f32x4::splat(m.m41);
    let ry = xs * f32x4::splat(m.m12)
        + ys * f32x4::splat(m.m22)
        + zs * f32x4::splat(m.m32)
        + f32x4::splat(m.m42);
    let rz = xs * f32x4::splat(m.m13)
        + ys * f32x4::splat(m.m23)
        + zs * f32x4::splat(m.m33)
        + f32x4::splat(m.m43);
    (rx, ry, rz)
}

#[inline]
fn gather2(chunk: &[Float2]) -> (f32x4, f32x4) {
    (
        f32x4::from([chunk[0].x, chunk[1].x, chunk[2].x, chunk[3].x]),
        f32x4::from([chunk[0].y, chunk[1].y, chunk[2].y, chunk[3].y]),
    )
}

#[inline]
fn gather3(chunk: &[Float3]) -> (f32x4, f32x4, f32x4) {
    (
        f32x4::from([chunk[0].x, chunk[1].x, chunk[2].x, chunk[3].x]),
        f32x4::from([chunk[0].y, chunk[1].y, chunk[2].y, chunk[3].y]),
        f32x4::from([chunk[0].z, chunk[1].z, chunk[2].z, chunk[3].z]),
    )
}

/// Transforms 2D points by a 3x2 matrix.
///
/// Equivalent to `points.iter().map(|p| p.transform(m))`.
pub fn transform_points2(points: &[Float2], m: Float3x2) -> Vec<Float2> {
    let mut result = Vec::with_capacity(points.len());
    let chunks = points.chunks_exact(LANES);
    let remainder = chunks.remainder();

    for chunk in chunks {
        let (xs, ys) = gather2(chunk);
        let (rx, ry) = transform2_x4(xs, ys, &m);
        let (rx, ry) = (rx.to_array(), ry.to_array());
        result.extend((0..LANES).map(|i| Float2::new(rx[i], ry[i])));
    }

    result.extend(remainder.iter().map(|p| p.transform(m)));
    result
}

/// Transforms 2D points by a 3x2 matrix in place.
pub fn transform_points2_in_place(points: &mut [Float2], m: Float3x2) {
    let mut chunks = points.chunks_exact_mut(LANES);

    for chunk in &mut chunks {
        let (xs, ys) = gather2(chunk);
        let (rx, ry) = transform2_x4(xs, ys, &m);
        let (rx, ry) = (rx.to_array(), ry.to_array());
        for (i, p) in chunk.iter_mut().enumerate() {
            *p = Float2::new(rx[i], ry[i]);
        }
    }

    for p in chunks.into_remainder() {
        *p = p.transform(m);
    }
}

/// Transforms 3D points by a 4x4 matrix (implicit `w = 1`, result `w`
/// dropped).
///
/// Equivalent to `points.iter().map(|p| p.transform(m))`.
pub fn transform_points3(points: &[Float3], m: Float4x4) -> Vec<Float3> {
    let mut result = Vec::with_capacity(points.len());
    let chunks = points.chunks_exact(LANES);
    let remainder = chunks.remainder();

    for chunk in chunks {
        let (xs, ys, zs) = gather3(chunk);
        let (rx, ry, rz) = transform3_x4(xs, ys, zs, &m);
        let (rx, ry, rz) = (rx.to_array(), ry.to_array(), rz.to_array());
        result.extend((0..LANES).map(|i| Float3::new(rx[i], ry[i], rz[i])));
    }

    result.extend(remainder.iter().map(|p| p.transform(m)));
    result
}

/// Transforms 3D points by a 4x4 matrix in place.
pub fn transform_points3_in_place(points: &mut [Float3], m: Float4x4) {
    let mut chunks = points.chunks_exact_mut(LANES);

    for chunk in &mut chunks {
        let (xs, ys, zs) = gather3(chunk);
        let (rx, ry, rz) = transform3_x4(xs, ys, zs, &m);
        let (rx, ry, rz) = (rx.to_array(), ry.to_array(), rz.to_array());
        for (i, p) in chunk.iter_mut().enumerate() {
            *p = Float3::new(rx[i], ry[i], rz[i]);
        }
    }

    for p in chunks.into_remainder() {
        *p = p.transform(m);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points2(n: usize) -> Vec<Float2> {
        (0..n)
            .map(|i| Float2::new(i as f32 * 0.5, 1.0 - i as f32))
            .collect()
    }

    fn points3(n: usize) -> Vec<Float3> {
        (0..n)
            .map(|i| Float3::new(i as f32, -(i as f32) * 0.25, 2.0 + i as f32))
            .collect()
    }

    #[test]
    fn test_transform_points2_matches_scalar() {
        let m = Float3x2::from_rotation(0.7) * Float3x2::from_translation(Float2::new(3.0, -2.0));
        // 11 = two full lane groups plus a remainder of 3
        let points = points2(11);
        let batch = transform_points2(&points, m);
        assert_eq!(batch.len(), points.len());
        for (b, p) in batch.iter().zip(&points) {
            assert!((*b - p.transform(m)).length() < 1e-5);
        }
    }

    #[test]
    fn test_transform_points2_in_place() {
        let m = Float3x2::from_scale(Float2::new(2.0, 3.0));
        let mut points = points2(6);
        let expected = transform_points2(&points, m);
        transform_points2_in_place(&mut points, m);
        assert_eq!(points, expected);
    }

    #[test]
    fn test_transform_points3_matches_scalar() {
        let m = Float4x4::from_yaw_pitch_roll(0.3, 0.2, 0.1)
            * Float4x4::from_translation(Float3::new(1.0, 2.0, 3.0));
        let points = points3(9);
        let batch = transform_points3(&points, m);
        assert_eq!(batch.len(), points.len());
        for (b, p) in batch.iter().zip(&points) {
            assert!((*b - p.transform(m)).length() < 1e-4);
        }
    }

    #[test]
    fn test_transform_points3_in_place() {
        let m = Float4x4::from_scale_uniform(2.0);
        let mut points = points3(5);
        transform_points3_in_place(&mut points, m);
        assert_eq!(points[4], Float3::new(8.0, -2.0, 12.0));
    }

    #[test]
    fn test_batch_empty_and_short() {
        assert!(transform_points3(&[], Float4x4::IDENTITY).is_empty());
        let one = [Float2::new(1.0, 2.0)];
        assert_eq!(transform_points2(&one, Float3x2::IDENTITY), one.to_vec());
    }
}
