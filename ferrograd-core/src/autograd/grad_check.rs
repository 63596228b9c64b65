use crate::value::Value;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: analytical grad {analytical_grad} != numerical grad {numerical_grad}. Difference: {difference}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },

    #[error("Numerical gradient is NaN or infinite for input {input_index}. Details: f+: {value_plus}, f-: {value_minus}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        value_plus: f64,
        value_minus: f64,
    },

    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },

    #[error("Epsilon must be finite and strictly positive, got {0}")]
    InvalidEpsilon(f64),
}

/// Checks analytical gradients against numerical gradients using central finite differences.
///
/// `func` is evaluated on fresh leaves built from `inputs`. The analytical
/// gradient comes from one backward pass; the numerical one from
/// `(f(x + eps) - f(x - eps)) / (2 * eps)` per input. A gradient matches when
/// the absolute difference is within `tolerance * max(1, |numerical|)`.
pub fn check_grad<F>(
    func: F,
    inputs: &[f64],
    epsilon: f64,
    tolerance: f64,
) -> Result<(), GradCheckError>
where
    F: Fn(&[Value]) -> Value,
{
    if !(epsilon.is_finite() && epsilon > 0.0) {
        return Err(GradCheckError::InvalidEpsilon(epsilon));
    }

    let leaves: Vec<Value> = inputs.iter().map(|&x| Value::new(x)).collect();
    let output = func(&leaves);
    output.backward();

    let evaluate = |shifted: &[f64]| -> f64 {
        let shifted_leaves: Vec<Value> = shifted.iter().map(|&x| Value::new(x)).collect();
        func(&shifted_leaves).data()
    };

    for (input_index, leaf) in leaves.iter().enumerate() {
        let analytical_grad = leaf.grad();
        if !analytical_grad.is_finite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index,
                value: analytical_grad,
            });
        }

        let mut plus = inputs.to_vec();
        plus[input_index] += epsilon;
        let mut minus = inputs.to_vec();
        minus[input_index] -= epsilon;

        let value_plus = evaluate(&plus);
        let value_minus = evaluate(&minus);
        let numerical_grad = (value_plus - value_minus) / (2.0 * epsilon);
        if !numerical_grad.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index,
                value_plus,
                value_minus,
            });
        }

        let difference = (analytical_grad - numerical_grad).abs();
        if difference > tolerance * numerical_grad.abs().max(1.0) {
            return Err(GradCheckError::GradientMismatch {
                input_index,
                analytical_grad,
                numerical_grad,
                difference,
            });
        }
    }
    Ok(())
}
