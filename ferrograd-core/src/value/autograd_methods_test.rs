use super::*;
use approx::assert_relative_eq;

#[test]
fn test_backward_product_plus_square() {
    let x = Value::new(5.0);
    let y = Value::new(2.0);
    let z = &x * &y + x.pow(2.0);
    z.backward();
    assert_relative_eq!(z.data(), 35.0);
    assert_relative_eq!(x.grad(), 12.0);
    assert_relative_eq!(y.grad(), 5.0);
    assert_relative_eq!(z.grad(), 1.0);
}

#[test]
fn test_backward_shared_operand_accumulates() {
    let x = Value::new(3.0);
    let y = &x + &x;
    y.backward();
    assert_relative_eq!(y.data(), 6.0);
    assert_relative_eq!(x.grad(), 2.0);
}

#[test]
fn test_backward_diamond() {
    // d = a^2 * (a + 1), d' = 3a^2 + 2a = 16 at a = 2
    let a = Value::new(2.0);
    let b = &a * &a;
    let c = &a + 1.0;
    let d = &b * &c;
    d.backward();
    assert_relative_eq!(d.data(), 12.0);
    assert_relative_eq!(a.grad(), 16.0);
    assert_relative_eq!(b.grad(), 3.0);
    assert_relative_eq!(c.grad(), 4.0);
}

#[test]
fn test_backward_accumulates_across_calls() {
    let x = Value::new(4.0);
    let y = &x * 3.0;
    y.backward();
    y.backward();
    assert_relative_eq!(x.grad(), 6.0);

    x.zero_grad();
    y.backward();
    assert_relative_eq!(x.grad(), 3.0);
}

#[test]
fn test_backward_on_leaf() {
    let x = Value::new(7.0);
    x.backward();
    assert_relative_eq!(x.grad(), 1.0);
}

#[test]
fn test_zero_grad_is_idempotent() {
    let x = Value::new(1.5);
    (x.exp() * 2.0).backward();
    assert!(x.grad() != 0.0);
    x.zero_grad();
    assert_eq!(x.grad(), 0.0);
    x.zero_grad();
    assert_eq!(x.grad(), 0.0);
}

#[test]
fn test_backward_long_chain() {
    let x = Value::new(0.5);
    let mut acc = x.clone();
    for _ in 0..100_000 {
        acc = &acc + 0.0;
    }
    acc.backward();
    assert_relative_eq!(x.grad(), 1.0);
}
