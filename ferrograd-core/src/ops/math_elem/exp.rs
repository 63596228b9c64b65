use crate::autograd::Op;
use crate::ops::apply_unary_op;
use crate::value::Value;

/// Computes `e^a`. The local gradient is the output itself.
pub fn exp_op(a: &Value) -> Value {
    apply_unary_op(a, f64::exp, Op::Exp)
}

impl Value {
    pub fn exp(&self) -> Value {
        exp_op(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_exp_forward_backward() {
        let a = Value::new(2.0);
        let b = a.exp();
        b.backward();
        assert_relative_eq!(b.data(), 2.0_f64.exp());
        assert_relative_eq!(a.grad(), 2.0_f64.exp());
        assert_eq!(b.op(), Op::Exp);
    }
}
