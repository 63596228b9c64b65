use super::*;
use approx::assert_relative_eq;

#[test]
fn test_relu_forward() {
    let inputs = [-2.0, -1.0, 0.0, 1.0, 2.0];
    let expected = [0.0, 0.0, 0.0, 1.0, 2.0];
    for (x, e) in inputs.iter().zip(expected.iter()) {
        assert_relative_eq!(Value::new(*x).relu().data(), *e);
    }
}

#[test]
fn test_relu_backward() {
    let inputs: Vec<Value> = [-2.0, -1.0, 0.0, 1.0, 2.0].iter().map(|&x| Value::new(x)).collect();
    let loss: Value = inputs.iter().map(relu_op).sum();
    loss.backward();
    let grads: Vec<f64> = inputs.iter().map(Value::grad).collect();
    assert_eq!(grads, vec![0.0, 0.0, 0.0, 1.0, 1.0]);
}

#[test]
fn test_relu_backward_chain() {
    // loss = relu(x * 2)
    let x = Value::new(2.0);
    let out = (&x * 2.0).relu();
    out.backward();
    assert_relative_eq!(out.data(), 4.0);
    assert_relative_eq!(x.grad(), 2.0);
}
