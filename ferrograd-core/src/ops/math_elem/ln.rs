// src/ops/math_elem/ln.rs

use crate::autograd::Op;
use crate::ops::apply_unary_op;
use crate::value::Value;

/// Computes the natural logarithm of `a`.
///
/// # Domain Considerations
/// The logarithm is only defined for strictly positive numbers. For `a <= 0`
/// this returns negative infinity instead of failing; what happens to the
/// non-finite value downstream is up to the caller. The local gradient is
/// `1 / a`.
pub fn log_op(a: &Value) -> Value {
    apply_unary_op(
        a,
        |x| if x > 0.0 { x.ln() } else { f64::NEG_INFINITY },
        Op::Log,
    )
}

impl Value {
    /// Natural logarithm.
    pub fn log(&self) -> Value {
        log_op(self)
    }
}

#[cfg(test)]
#[path = "ln_test.rs"]
mod tests;
