use super::*;
use approx::assert_relative_eq;

#[test]
fn test_mul_forward_backward() {
    let a = Value::new(3.0);
    let b = Value::new(5.0);
    let c = mul_op(&a, &b);
    c.backward();
    assert_relative_eq!(c.data(), 15.0);
    assert_eq!(c.op(), Op::Mul);
    assert_relative_eq!(a.grad(), 5.0);
    assert_relative_eq!(b.grad(), 3.0);
}

#[test]
fn test_mul_self() {
    let a = Value::new(5.0);
    let c = mul_op(&a, &a);
    c.backward();
    assert_relative_eq!(c.data(), 25.0);
    assert_relative_eq!(a.grad(), 10.0);
}
