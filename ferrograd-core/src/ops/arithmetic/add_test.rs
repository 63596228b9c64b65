use super::*;
use approx::assert_relative_eq;

#[test]
fn test_add_forward() {
    let a = Value::new(5.0);
    let b = Value::new(2.0);
    let c = add_op(&a, &b);
    assert_relative_eq!(c.data(), 7.0);
    assert_eq!(c.op(), Op::Add);
    let children = c.children();
    assert_eq!(children.len(), 2);
    assert!(children[0].ptr_eq(&a));
    assert!(children[1].ptr_eq(&b));
}

#[test]
fn test_add_backward() {
    let a = Value::new(5.0);
    let b = Value::new(2.0);
    add_op(&a, &b).backward();
    assert_relative_eq!(a.grad(), 1.0);
    assert_relative_eq!(b.grad(), 1.0);
}

#[test]
fn test_add_self() {
    let a = Value::new(10.5);
    let c = add_op(&a, &a);
    c.backward();
    assert_relative_eq!(c.data(), 21.0);
    assert_relative_eq!(a.grad(), 2.0);
}
