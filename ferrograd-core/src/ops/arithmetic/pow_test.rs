use super::*;
use approx::assert_relative_eq;

#[test]
fn test_pow_forward_backward() {
    let a = Value::new(4.0);
    let b = Value::new(2.0);
    let c = pow_op(&a, &b);
    c.backward();
    assert_relative_eq!(c.data(), 16.0);
    assert_eq!(c.op(), Op::Pow);
    assert_relative_eq!(a.grad(), 8.0);
    assert_relative_eq!(b.grad(), 16.0 * 4.0_f64.ln(), epsilon = 1e-12);
}

#[test]
fn test_pow_self() {
    let x = Value::new(2.0);
    let c = x.pow(&x);
    c.backward();
    assert_relative_eq!(c.data(), 4.0);
    assert_relative_eq!(x.grad(), 4.0 * (2.0_f64.ln() + 1.0), epsilon = 1e-12);
}

#[test]
fn test_pow_with_number_exponent() {
    let x = Value::new(3.0);
    let c = x.pow(3);
    c.backward();
    assert_relative_eq!(c.data(), 27.0);
    assert_relative_eq!(x.grad(), 27.0);
}

#[test]
fn test_pow_negative_base_skips_log_term() {
    let base = Value::new(-3.0);
    let exponent = Value::new(2.0);
    let c = pow_op(&base, &exponent);
    c.backward();
    assert_relative_eq!(c.data(), 9.0);
    assert_relative_eq!(base.grad(), -6.0);
    assert_eq!(exponent.grad(), 0.0);
}

#[test]
fn test_pow_zero_base_skips_log_term() {
    let base = Value::new(0.0);
    let exponent = Value::new(3.0);
    pow_op(&base, &exponent).backward();
    assert_eq!(base.grad(), 0.0);
    assert_eq!(exponent.grad(), 0.0);
}
