// src/array/mod.rs

use crate::array::utils::calculate_strides;
use crate::value::{Operand, Value};

pub mod create;
mod debug;
pub mod indexing;
pub mod nested;
pub mod utils;

pub use indexing::{Selection, Selector, SliceSpec};
pub use nested::{Literal, Nested};

/// An n-dimensional array of [`Value`] nodes with a fixed shape.
///
/// Nodes are stored flat in row-major order next to the shape and its
/// strides. The array owns the slots, not the nodes: the same node may also
/// be an operand of any number of graph nodes built from it.
///
/// The shape is fixed at construction. Indexed writes replace nodes in
/// existing slots and are rejected if they would change the shape.
///
/// Cloning an array clones the slot vector; both arrays then share the same
/// nodes.
#[derive(Debug, Clone)]
pub struct ValueArray {
    values: Vec<Value>,
    shape: Vec<usize>,
    strides: Vec<usize>,
    label: Option<String>,
}

impl ValueArray {
    /// Assembles an array from row-major nodes. The caller guarantees that
    /// `values.len()` matches `shape`.
    pub(crate) fn from_parts(values: Vec<Value>, shape: Vec<usize>, label: Option<String>) -> Self {
        debug_assert_eq!(values.len(), shape.iter().product::<usize>());
        let strides = calculate_strides(&shape);
        ValueArray {
            values,
            shape,
            strides,
            label,
        }
    }

    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    pub fn strides(&self) -> &[usize] {
        &self.strides
    }

    pub fn rank(&self) -> usize {
        self.shape.len()
    }

    /// Size of the first dimension.
    pub fn len(&self) -> usize {
        self.shape.first().copied().unwrap_or(0)
    }

    /// True if the array holds no nodes. Constructors reject zero-sized
    /// dimensions, so this is false for every array they return.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Total number of elements.
    pub fn numel(&self) -> usize {
        self.values.len()
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = Some(label.into());
    }

    /// The backing nodes in row-major order, e.g. for an optimizer to update.
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub(crate) fn values_mut(&mut self) -> &mut [Value] {
        &mut self.values
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.values.iter()
    }

    /// Sets the gradient of every contained node to zero.
    pub fn zero_grad(&self) {
        for value in &self.values {
            value.zero_grad();
        }
    }

    /// Element values in row-major order.
    pub fn to_flat(&self) -> Vec<f64> {
        self.values.iter().map(Value::data).collect()
    }

    /// Element gradients in row-major order.
    pub fn grads(&self) -> Vec<f64> {
        self.values.iter().map(Value::grad).collect()
    }

    /// Exports the element values as a plain nested structure. Gradients
    /// are not carried over.
    pub fn to_nested(&self) -> Nested<f64> {
        Nested::from_flat(self.to_flat(), &self.shape).unwrap_or(Nested::List(Vec::new()))
    }

    /// Returns true if any element holds the same number as `operand`.
    pub fn contains(&self, operand: impl Into<Operand>) -> bool {
        let target = operand.into().data();
        self.values.iter().any(|v| v.data() == target)
    }

    /// Flat index of the first maximum element.
    pub fn argmax(&self) -> usize {
        let mut best = 0;
        for (i, value) in self.values.iter().enumerate().skip(1) {
            if value.data() > self.values[best].data() {
                best = i;
            }
        }
        best
    }
}

impl<'a> IntoIterator for &'a ValueArray {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

/// Arrays are equal when their shapes match and their elements are equal by
/// value (see `PartialEq for Value`). Labels are ignored.
impl PartialEq for ValueArray {
    fn eq(&self, other: &Self) -> bool {
        self.shape == other.shape && self.values == other.values
    }
}

#[cfg(test)]
#[path = "array_test.rs"]
mod tests;
