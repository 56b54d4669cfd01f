//! Cross-checks against `glam`.
//!
//! glam stores column-major with column vectors; its columns are our rows, so
//! the same sixteen floats describe the same transform. Products reverse:
//! `glam_a * glam_b` corresponds to `b * a` here.

use approx::{assert_abs_diff_eq, assert_relative_eq};
use glam::{Affine2, Mat4, Quat, Vec2, Vec3};
use winnum_math::{Float2, Float3, Float3x2, Float4x4, Quaternion, Transform};

fn matrices() -> Vec<Float4x4> {
    vec![
        Float4x4::from_yaw_pitch_roll(0.4, -1.1, 0.2)
            * Float4x4::from_translation(Float3::new(3.0, -2.0, 1.0)),
        Float4x4::from_scale(Float3::new(1.5, 2.0, 0.25)) * Float4x4::from_rotation_z(2.5),
        Float4x4::from_rows([
            [2.0, 0.5, -1.0, 0.0],
            [0.0, 3.0, 0.25, 0.1],
            [1.0, -2.0, 4.0, 0.0],
            [5.0, 6.0, 7.0, 1.0],
        ]),
    ]
}

#[test]
fn test_product_matches_glam() {
    for a in matrices() {
        for b in matrices() {
            let ours = a * b;
            let theirs = Mat4::from(b) * Mat4::from(a);
            assert_relative_eq!(ours, Float4x4::from(theirs), epsilon = 1e-4, max_relative = 1e-5);
        }
    }
}

#[test]
fn test_determinant_matches_glam() {
    for m in matrices() {
        assert_relative_eq!(m.determinant(), Mat4::from(m).determinant(), max_relative = 1e-5);
    }
}

#[test]
fn test_inverse_matches_glam() {
    for m in matrices() {
        let ours = m.invert().expect("non-singular");
        let theirs = Float4x4::from(Mat4::from(m).inverse());
        assert_abs_diff_eq!(ours, theirs, epsilon = 1e-4);
    }
}

#[test]
fn test_point_transform_matches_glam() {
    let p = Float3::new(0.5, -3.0, 2.0);
    for m in matrices().into_iter().take(2) {
        let theirs = Mat4::from(m).transform_point3(Vec3::from(p));
        assert_abs_diff_eq!(p.transform(m), Float3::from(theirs), epsilon = 1e-4);
    }
}

#[test]
fn test_quaternion_matches_glam() {
    let axis = Float3::new(1.0, -2.0, 0.5).normalize();
    let ours = Quaternion::from_axis_angle(axis, 1.3);
    let theirs = Quat::from_axis_angle(Vec3::from(axis), 1.3);
    assert_abs_diff_eq!(ours, Quaternion::from(theirs), epsilon = 1e-6);

    // glam composes the same way: its `b * a` rotates by a first
    let other = Quaternion::from_yaw_pitch_roll(0.3, 0.2, 0.1);
    let composed = ours.concatenate(other);
    assert_abs_diff_eq!(
        composed,
        Quaternion::from(Quat::from(other) * Quat::from(ours)),
        epsilon = 1e-6
    );

    let v = Float3::new(3.0, 1.0, -2.0);
    assert_abs_diff_eq!(
        v.transform(ours),
        Float3::from(theirs * Vec3::from(v)),
        epsilon = 1e-5
    );
}

#[test]
fn test_from_quaternion_matches_glam() {
    let q = Quaternion::from_yaw_pitch_roll(-0.7, 0.9, 1.4);
    assert_abs_diff_eq!(
        Float4x4::from_quaternion(q),
        Float4x4::from(Mat4::from_quat(Quat::from(q))),
        epsilon = 1e-6
    );
}

#[test]
fn test_from_yaw_pitch_roll_matches_glam_euler() {
    let (yaw, pitch, roll) = (0.6, -0.4, 1.9);
    let theirs = Quat::from_euler(glam::EulerRot::YXZ, yaw, pitch, roll);
    assert_abs_diff_eq!(
        Quaternion::from_yaw_pitch_roll(yaw, pitch, roll),
        Quaternion::from(theirs),
        epsilon = 1e-6
    );
}

#[test]
fn test_slerp_matches_glam() {
    let a = Quaternion::from_axis_angle(Float3::UNIT_X, 0.3);
    let b = Quaternion::from_axis_angle(Float3::new(0.0, 0.6, 0.8), 2.0);
    for t in [0.25, 0.5, 0.75] {
        let theirs = Quat::from(a).slerp(Quat::from(b), t);
        assert_abs_diff_eq!(a.slerp(b, t), Quaternion::from(theirs), epsilon = 1e-4);
    }
}

#[test]
fn test_look_at_matches_glam() {
    let eye = Float3::new(4.0, 3.0, 5.0);
    let target = Float3::new(0.0, 1.0, 0.0);
    let ours = Float4x4::look_at(eye, target, Float3::UNIT_Y);
    let theirs = Mat4::look_at_rh(eye.into(), target.into(), Vec3::Y);
    assert_abs_diff_eq!(ours, Float4x4::from(theirs), epsilon = 1e-5);
}

#[test]
fn test_projections_match_glam() {
    let ours = Float4x4::perspective_field_of_view(1.0, 1.5, 0.1, 100.0).expect("valid range");
    let theirs = Mat4::perspective_rh(1.0, 1.5, 0.1, 100.0);
    assert_relative_eq!(ours, Float4x4::from(theirs), max_relative = 1e-5);

    let ours = Float4x4::orthographic_off_center(-2.0, 4.0, -1.0, 3.0, 0.5, 20.0);
    let theirs = Mat4::orthographic_rh(-2.0, 4.0, -1.0, 3.0, 0.5, 20.0);
    assert_relative_eq!(ours, Float4x4::from(theirs), max_relative = 1e-5);
}

#[test]
fn test_float3x2_matches_glam_affine2() {
    let m = Float3x2::from_rotation(0.8)
        * Float3x2::from_scale(Float2::new(2.0, 0.5))
        * Float3x2::from_translation(Float2::new(-1.0, 3.0));
    let theirs = Affine2::from(m);

    let p = Float2::new(1.25, -0.75);
    assert_abs_diff_eq!(
        p.transform(m),
        Float2::from(theirs.transform_point2(Vec2::from(p))),
        epsilon = 1e-5
    );

    let inv = m.invert().expect("non-singular");
    assert_abs_diff_eq!(inv, Float3x2::from(theirs.inverse()), epsilon = 1e-5);
}
