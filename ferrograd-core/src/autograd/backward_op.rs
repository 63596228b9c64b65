use crate::autograd::Op;
use crate::value::Value;

/// Applies the local-gradient rule of `node` to its operands.
///
/// Reads the node's current `grad` and adds the chain-rule contribution
/// `d(node)/d(operand) * node.grad` into every operand's `grad`. Contributions
/// are always accumulated, never assigned, so an operand used several times
/// (even twice by the same node, as in `x * x`) receives the sum.
///
/// Numeric domain cases are resolved here rather than raised: the exponent
/// term of `Pow` contributes zero when the base is not strictly positive.
pub fn propagate(node: &Value) {
    let (op, out, upstream, children) = {
        let guard = node.read_data();
        (guard.op, guard.data, guard.grad, guard.children.clone())
    };

    match op {
        Op::Leaf => {}
        Op::Add => {
            for child in &children {
                child.accumulate_grad(upstream);
            }
        }
        Op::Mul => {
            if let [a, b] = children.as_slice() {
                let (a_data, b_data) = (a.data(), b.data());
                a.accumulate_grad(b_data * upstream);
                b.accumulate_grad(a_data * upstream);
            }
        }
        Op::Pow => {
            if let [base, exponent] = children.as_slice() {
                let (a, b) = (base.data(), exponent.data());
                base.accumulate_grad(b * a.powf(b - 1.0) * upstream);
                let d_exponent = if a > 0.0 { out * a.ln() } else { 0.0 };
                exponent.accumulate_grad(d_exponent * upstream);
            }
        }
        Op::Exp => unary(&children, |_| out, upstream),
        Op::Log => unary(&children, |a| 1.0 / a, upstream),
        Op::Tanh => unary(&children, |_| 1.0 - out * out, upstream),
        Op::Relu => unary(&children, |_| if out > 0.0 { 1.0 } else { 0.0 }, upstream),
        Op::Sigmoid => unary(&children, |_| out * (1.0 - out), upstream),
    }
}

fn unary(children: &[Value], derivative: impl Fn(f64) -> f64, upstream: f64) {
    if let [a] = children {
        let local = derivative(a.data());
        a.accumulate_grad(local * upstream);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_leaf_is_noop() {
        let a = Value::new(4.0);
        a.set_grad(2.0);
        propagate(&a);
        assert_eq!(a.grad(), 2.0);
    }

    #[test]
    fn test_propagate_accumulates() {
        let a = Value::new(3.0);
        let b = Value::new(5.0);
        let c = &a * &b;
        a.set_grad(1.0);
        c.set_grad(2.0);
        propagate(&c);
        assert_relative_eq!(a.grad(), 1.0 + 5.0 * 2.0);
        assert_relative_eq!(b.grad(), 3.0 * 2.0);
    }

    #[test]
    fn test_pow_non_positive_base_exponent_grad_is_zero() {
        let base = Value::new(-2.0);
        let exponent = Value::new(2.0);
        let out = base.pow(&exponent);
        out.set_grad(1.0);
        propagate(&out);
        assert_relative_eq!(base.grad(), -4.0);
        assert_eq!(exponent.grad(), 0.0);
    }
}
