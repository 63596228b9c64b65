use ferrograd_core::ValueArray;

// Helper to create the row-major `0..rows*cols` grid used across the array tests.
#[allow(dead_code)]
pub(crate) fn create_grid(rows: usize, cols: usize) -> ValueArray {
    let data: Vec<f64> = (0..rows * cols).map(|i| i as f64).collect();
    ValueArray::from_flat(&data, vec![rows, cols]).expect("Test array creation failed")
}

// Helper to build fresh leaves from plain numbers.
#[allow(dead_code)]
pub(crate) fn leaves(data: &[f64]) -> Vec<ferrograd_core::Value> {
    data.iter().map(|&x| ferrograd_core::Value::new(x)).collect()
}
