use crate::autograd::Op;
use crate::ops::apply_unary_op;
use crate::value::Value;

/// Hyperbolic tangent. The local gradient is `1 - out^2`.
pub fn tanh_op(a: &Value) -> Value {
    apply_unary_op(a, f64::tanh, Op::Tanh)
}

impl Value {
    pub fn tanh(&self) -> Value {
        tanh_op(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_tanh_forward_backward() {
        let a = Value::new(2.0);
        let b = a.tanh();
        b.backward();
        assert_relative_eq!(b.data(), 2.0_f64.tanh());
        assert_relative_eq!(a.grad(), 1.0 - 2.0_f64.tanh().powi(2), epsilon = 1e-12);
    }

    #[test]
    fn test_tanh_saturates_without_nan() {
        let b = Value::new(1000.0).tanh();
        assert_relative_eq!(b.data(), 1.0);
        let c = Value::new(-1000.0).tanh();
        assert_relative_eq!(c.data(), -1.0);
    }
}
