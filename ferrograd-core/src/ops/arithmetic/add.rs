use crate::autograd::Op;
use crate::ops::apply_binary_op;
use crate::value::Value;

/// Computes `a + b`.
///
/// Local gradients: `1` for both operands.
pub fn add_op(a: &Value, b: &Value) -> Value {
    apply_binary_op(a, b, |x, y| x + y, Op::Add)
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
