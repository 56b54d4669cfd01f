//! Compound-assignment operators derived from the binary operators.

/// Implements `op=` for a `Copy` type in terms of its binary operator.
///
/// ```ignore
/// impl_assign_op!(Float2, f32, MulAssign, mul_assign, *);
/// ```
macro_rules! impl_assign_op {
    ($ty:ty, $rhs:ty, $trait:ident, $method:ident, $op:tt) => {
        impl ::std::ops::$trait<$rhs> for $ty {
            #[inline]
            fn $method(&mut self, rhs: $rhs) {
                *self = *self $op rhs;
            }
        }
    };
}

pub(crate) use impl_assign_op;
