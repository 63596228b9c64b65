use crate::autograd::Op;
use crate::ops::apply_unary_op;
use crate::value::Value;

/// Logistic sigmoid `1 / (1 + e^-a)`. The local gradient is `out * (1 - out)`.
pub fn sigmoid_op(a: &Value) -> Value {
    apply_unary_op(a, |x| 1.0 / (1.0 + (-x).exp()), Op::Sigmoid)
}

impl Value {
    pub fn sigmoid(&self) -> Value {
        sigmoid_op(self)
    }
}
