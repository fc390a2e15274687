// SPDX-License-Identifier: MIT OR Apache-2.0
//! Strict equality.
//!
//! Scalars compare by value, containers compare by identity. Two JSON arrays
//! holding the same elements are *different* unless they are the same
//! allocation, which is what a shallow, reference-based comparison needs.

use serde_json::{Number, Value};
use std::rc::Rc;
use std::sync::Arc;

/// Equality by value for scalars and by identity for shared or container values.
///
/// Unlike [`PartialEq`], implementations never look inside containers.
pub trait StrictEq {
    /// Returns true when `self` and `other` are strictly equal.
    fn strict_eq(&self, other: &Self) -> bool;
}

macro_rules! impl_strict_eq_by_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl StrictEq for $ty {
                #[inline]
                #[allow(clippy::float_cmp)]
                fn strict_eq(&self, other: &Self) -> bool {
                    self == other
                }
            }
        )*
    };
}

impl_strict_eq_by_value!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, str,
    String, (),
);

impl<T: StrictEq + ?Sized> StrictEq for &T {
    #[inline]
    fn strict_eq(&self, other: &Self) -> bool {
        (**self).strict_eq(*other)
    }
}

impl<T: StrictEq> StrictEq for Option<T> {
    fn strict_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Some(a), Some(b)) => a.strict_eq(b),
            (None, None) => true,
            _ => false,
        }
    }
}

impl<T: ?Sized> StrictEq for Rc<T> {
    #[inline]
    fn strict_eq(&self, other: &Self) -> bool {
        Self::ptr_eq(self, other)
    }
}

impl<T: ?Sized> StrictEq for Arc<T> {
    #[inline]
    fn strict_eq(&self, other: &Self) -> bool {
        Self::ptr_eq(self, other)
    }
}

impl StrictEq for Value {
    fn strict_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Number(a), Self::Number(b)) => numbers_equal(a, b),
            (Self::String(a), Self::String(b)) => a == b,
            // Compare the container headers, not their heap buffers: two
            // empty vectors share a dangling buffer pointer.
            (Self::Array(a), Self::Array(b)) => std::ptr::eq(a, b),
            (Self::Object(a), Self::Object(b)) => std::ptr::eq(a, b),
            _ => false,
        }
    }
}

/// Numeric equality across integer and float representations.
///
/// Integers compare exactly; anything involving a float compares as `f64`,
/// so `1` and `1.0` are equal.
#[allow(clippy::float_cmp)]
fn numbers_equal(a: &Number, b: &Number) -> bool {
    if let (Some(x), Some(y)) = (a.as_i64(), b.as_i64()) {
        return x == y;
    }
    if let (Some(x), Some(y)) = (a.as_u64(), b.as_u64()) {
        return x == y;
    }
    if a.is_f64() || b.is_f64() {
        return match (a.as_f64(), b.as_f64()) {
            (Some(x), Some(y)) => x == y,
            _ => false,
        };
    }
    // One negative i64 and one u64 above i64::MAX
    false
}

/// Name of a JSON value's kind, as used in error messages.
#[must_use]
pub const fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
