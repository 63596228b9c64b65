use crate::array::ValueArray;
use crate::value::Value;
use approx::relative_eq;

/// Checks that an array has the expected shape and element values (within tolerance).
/// Panics if shapes differ or data differs significantly.
pub fn check_array_near(
    actual: &ValueArray,
    expected_shape: &[usize],
    expected_data: &[f64],
    tolerance: f64,
) {
    assert_eq!(actual.shape(), expected_shape, "Shape mismatch");
    let actual_data = actual.to_flat();
    assert_eq!(
        actual_data.len(),
        expected_data.len(),
        "Data length mismatch"
    );
    for (i, (a, e)) in actual_data.iter().zip(expected_data.iter()).enumerate() {
        if !relative_eq!(*a, *e, epsilon = tolerance, max_relative = tolerance) {
            panic!(
                "Data mismatch at index {}: actual={:?}, expected={:?}, tolerance={:?}",
                i, a, e, tolerance
            );
        }
    }
}

/// Checks the gradients held by `values` against `expected_grads`.
pub fn check_grads_near(values: &[Value], expected_grads: &[f64], tolerance: f64) {
    assert_eq!(values.len(), expected_grads.len(), "Gradient count mismatch");
    for (i, (v, e)) in values.iter().zip(expected_grads.iter()).enumerate() {
        let g = v.grad();
        if !relative_eq!(g, *e, epsilon = tolerance, max_relative = tolerance) {
            panic!(
                "Gradient mismatch for input {}: actual={:?}, expected={:?}, tolerance={:?}",
                i, g, e, tolerance
            );
        }
    }
}
