use crate::ops::arithmetic::{mul_op, pow_op};
use crate::value::Value;

/// Computes `a / b` as `a * b^-1`.
///
/// Division by a zero-valued node yields an infinite result rather than an error.
pub fn div_op(a: &Value, b: &Value) -> Value {
    mul_op(a, &pow_op(b, &Value::new(-1.0)))
}

#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
