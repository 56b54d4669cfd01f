//! Layout and serialization checks.
//!
//! Callers reinterpret these types as plain float structs, so field order and
//! size are part of the interface.

use std::mem::{align_of, size_of};
use winnum_math::{Decomposition, Float2, Float3, Float3x2, Float4, Float4x4, Plane, Quaternion};

#[test]
fn test_sizes_and_alignment() {
    assert_eq!(size_of::<Float2>(), 2 * 4);
    assert_eq!(size_of::<Float3>(), 3 * 4);
    assert_eq!(size_of::<Float4>(), 4 * 4);
    assert_eq!(size_of::<Float3x2>(), 6 * 4);
    assert_eq!(size_of::<Float4x4>(), 16 * 4);
    assert_eq!(size_of::<Plane>(), 4 * 4);
    assert_eq!(size_of::<Quaternion>(), 4 * 4);
    assert_eq!(align_of::<Float4x4>(), align_of::<f32>());
}

#[test]
fn test_field_order_via_cast() {
    let m = Float3x2::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0);
    assert_eq!(bytemuck::cast::<_, [f32; 6]>(m), [1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);

    let values: [f32; 16] = std::array::from_fn(|i| i as f32);
    let m: Float4x4 = bytemuck::cast(values);
    assert_eq!(m.m11, 0.0);
    assert_eq!(m.m14, 3.0);
    assert_eq!(m.m21, 4.0);
    assert_eq!(m.m44, 15.0);

    let p: Plane = bytemuck::cast([1.0_f32, 2.0, 3.0, 4.0]);
    assert_eq!(p, Plane::new(1.0, 2.0, 3.0, 4.0));

    let q: Quaternion = bytemuck::cast([1.0_f32, 2.0, 3.0, 4.0]);
    assert_eq!(q.w, 4.0);
}

#[test]
fn test_slice_reinterpretation() {
    let points = [Float3::new(1.0, 2.0, 3.0), Float3::new(4.0, 5.0, 6.0)];
    let flat: &[f32] = bytemuck::cast_slice(&points);
    assert_eq!(flat, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
}

#[test]
fn test_serde_field_order() {
    let json = serde_json::to_string(&Float2::new(1.0, 2.0)).unwrap();
    assert_eq!(json, r#"{"x":1.0,"y":2.0}"#);

    let json = serde_json::to_string(&Quaternion::IDENTITY).unwrap();
    assert_eq!(json, r#"{"x":0.0,"y":0.0,"z":0.0,"w":1.0}"#);

    let json = serde_json::to_string(&Plane::new(0.0, 1.0, 0.0, -2.0)).unwrap();
    assert_eq!(json, r#"{"normal":{"x":0.0,"y":1.0,"z":0.0},"d":-2.0}"#);

    let json = serde_json::to_string(&Float3x2::IDENTITY).unwrap();
    assert_eq!(
        json,
        r#"{"m11":1.0,"m12":0.0,"m21":0.0,"m22":1.0,"m31":0.0,"m32":0.0}"#
    );
}

#[test]
fn test_serde_round_trip() {
    let m = Float4x4::from_rotation_y(0.5) * Float4x4::from_translation(Float3::new(1.0, 2.0, 3.0));
    let json = serde_json::to_string(&m).unwrap();
    let back: Float4x4 = serde_json::from_str(&json).unwrap();
    assert_eq!(back, m);
}

#[test]
fn test_decomposition_serde() {
    let d = Float4x4::from_translation(Float3::new(1.0, 2.0, 3.0)).decompose();
    let json = serde_json::to_string(&d).unwrap();
    assert!(json.ends_with(r#""translation":{"x":1.0,"y":2.0,"z":3.0},"success":true}"#));
    let back: Decomposition = serde_json::from_str(&json).unwrap();
    assert_eq!(back, d);
}
