use crate::autograd::Op;
use crate::ops::apply_unary_op;
use crate::value::Value;

// --- Forward Operation ---

/// Applies the Rectified Linear Unit: `max(0, a)`.
///
/// The local gradient is `1` where the output is positive and `0` elsewhere,
/// including at exactly zero.
pub fn relu_op(a: &Value) -> Value {
    apply_unary_op(a, |x| if x > 0.0 { x } else { 0.0 }, Op::Relu)
}

impl Value {
    pub fn relu(&self) -> Value {
        relu_op(self)
    }
}

#[cfg(test)]
#[path = "relu_test.rs"]
mod tests;
