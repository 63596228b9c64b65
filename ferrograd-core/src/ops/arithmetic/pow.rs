use crate::autograd::Op;
use crate::ops::apply_binary_op;
use crate::value::{Operand, Value};

/// Computes `base ** exponent`.
///
/// Both operands are graph nodes and both receive a gradient:
/// `exponent * base^(exponent - 1)` for the base and `out * ln(base)` for the
/// exponent. The exponent term is zero when `base <= 0`, where the logarithm
/// is undefined.
pub fn pow_op(base: &Value, exponent: &Value) -> Value {
    apply_binary_op(base, exponent, f64::powf, Op::Pow)
}

impl Value {
    /// Raises this node to `exponent`, promoting a plain number to a leaf.
    pub fn pow(&self, exponent: impl Into<Operand>) -> Value {
        pow_op(self, &exponent.into().into_value())
    }
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
