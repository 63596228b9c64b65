use crate::ops::arithmetic::mul_op;
use crate::value::Value;

/// Computes `-a` as `a * -1`.
pub fn neg_op(a: &Value) -> Value {
    mul_op(a, &Value::new(-1.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_neg() {
        let a = Value::new(2.5);
        let b = neg_op(&a);
        b.backward();
        assert_relative_eq!(b.data(), -2.5);
        assert_relative_eq!(a.grad(), -1.0);
    }
}
