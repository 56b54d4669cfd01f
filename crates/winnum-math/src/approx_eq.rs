//! `approx` trait impls, enabled by the `approx` feature.
//!
//! Every type compares component-wise over its `f32` fields, in layout
//! order.

use ::approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::{Float2, Float3, Float3x2, Float4, Float4x4, Plane, Quaternion};

#[inline]
fn components<T: bytemuck::Pod>(value: &T) -> &[f32] {
    bytemuck::cast_slice(std::slice::from_ref(value))
}

macro_rules! impl_approx {
    ($($ty:ty),* $(,)?) => {$(
        impl AbsDiffEq for $ty {
            type Epsilon = f32;

            fn default_epsilon() -> f32 {
                f32::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
                components(self)
                    .iter()
                    .zip(components(other))
                    .all(|(a, b)| a.abs_diff_eq(b, epsilon))
            }
        }

        impl RelativeEq for $ty {
            fn default_max_relative() -> f32 {
                f32::default_max_relative()
            }

            fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
                components(self)
                    .iter()
                    .zip(components(other))
                    .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
            }
        }

        impl UlpsEq for $ty {
            fn default_max_ulps() -> u32 {
                f32::default_max_ulps()
            }

            fn ulps_eq(&self, other: &Self, epsilon: f32, max_ulps: u32) -> bool {
                components(self)
                    .iter()
                    .zip(components(other))
                    .all(|(a, b)| a.ulps_eq(b, epsilon, max_ulps))
            }
        }
    )*};
}

impl_approx!(Float2, Float3, Float4, Float3x2, Float4x4, Plane, Quaternion);
