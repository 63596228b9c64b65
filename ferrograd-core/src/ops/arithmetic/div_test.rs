use super::*;
use approx::assert_relative_eq;

#[test]
fn test_div_forward_backward() {
    let a = Value::new(10.0);
    let b = Value::new(2.0);
    let c = div_op(&a, &b);
    c.backward();
    assert_relative_eq!(c.data(), 5.0);
    assert_relative_eq!(a.grad(), 0.5);
    assert_relative_eq!(b.grad(), -2.5);
}

#[test]
fn test_div_self() {
    let a = Value::new(100.0);
    let c = div_op(&a, &a);
    c.backward();
    assert_relative_eq!(c.data(), 1.0);
    assert_relative_eq!(a.grad(), 0.0, epsilon = 1e-12);
}

#[test]
fn test_div_by_zero_is_infinite() {
    let a = Value::new(1.0);
    let b = Value::new(0.0);
    let c = div_op(&a, &b);
    assert!(c.data().is_infinite());
}
