//! Forward operators on [`Value`] nodes.
//!
//! Every operator returns a new node whose `children` are exactly its
//! operands. Subtraction, negation and division are built from `add`, `mul`
//! and `pow` and have no gradient rule of their own.

pub mod activation;
pub mod arithmetic;
pub mod math_elem;

use crate::autograd::Op;
use crate::value::Value;

/// Builds the output node of a one-operand operator.
pub(crate) fn apply_unary_op(a: &Value, f: impl Fn(f64) -> f64, op: Op) -> Value {
    Value::from_operation(f(a.data()), vec![a.clone()], op)
}

/// Builds the output node of a two-operand operator.
pub(crate) fn apply_binary_op(
    a: &Value,
    b: &Value,
    f: impl Fn(f64, f64) -> f64,
    op: Op,
) -> Value {
    Value::from_operation(f(a.data(), b.data()), vec![a.clone(), b.clone()], op)
}
