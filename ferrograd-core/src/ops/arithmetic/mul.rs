use crate::autograd::Op;
use crate::ops::apply_binary_op;
use crate::value::Value;

/// Computes `a * b`.
///
/// Local gradients: `b.data` for `a`, `a.data` for `b`.
pub fn mul_op(a: &Value, b: &Value) -> Value {
    apply_binary_op(a, b, |x, y| x * y, Op::Mul)
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
