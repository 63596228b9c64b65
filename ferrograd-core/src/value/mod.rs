// src/value/mod.rs

use crate::autograd::Op;
use crate::value_data::{NodeId, ValueData};
use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

mod autograd_methods;
mod operand;
mod traits;

pub use operand::Operand;

/// A scalar node in a dynamic computation graph.
///
/// `Value` uses `Rc<RefCell<ValueData>>` internally to allow for:
/// 1.  **Shared Ownership:** the same node can sit in an array slot and be an
///     operand of any number of later operations; cloning a `Value` clones
///     the handle, never the node.
/// 2.  **Interior Mutability:** `grad` (and `data`, for optimizers) can be
///     updated through any of those handles.
///
/// Values are single-threaded. Building new nodes while a backward pass over
/// the same nodes is in progress is not supported.
#[derive(Clone)]
pub struct Value {
    pub(crate) data: Rc<RefCell<ValueData>>,
}

impl Value {
    /// Creates a new leaf node holding `data` with a zero gradient.
    pub fn new(data: f64) -> Self {
        Value::from_value_data(ValueData::new(data))
    }

    /// Creates a new labelled leaf node.
    pub fn with_label(data: f64, label: impl Into<String>) -> Self {
        let value = Value::new(data);
        value.set_label(label);
        value
    }

    /// Creates the output node of `op` applied to `children`.
    pub(crate) fn from_operation(data: f64, children: Vec<Value>, op: Op) -> Self {
        Value::from_value_data(ValueData::from_operation(data, children, op))
    }

    fn from_value_data(value_data: ValueData) -> Self {
        Value {
            data: Rc::new(RefCell::new(value_data)),
        }
    }

    /// Borrows the node record immutably.
    ///
    /// Panics if the node is currently borrowed mutably.
    pub fn read_data(&self) -> Ref<'_, ValueData> {
        self.data.borrow()
    }

    /// Borrows the node record mutably.
    ///
    /// Panics if the node is currently borrowed.
    pub fn write_data(&self) -> RefMut<'_, ValueData> {
        self.data.borrow_mut()
    }

    /// The scalar computed by the forward pass.
    pub fn data(&self) -> f64 {
        self.read_data().data
    }

    /// Overwrites the scalar, e.g. for a parameter update. Nodes already built
    /// on top of this one keep the value they were computed with.
    pub fn set_data(&self, data: f64) {
        self.write_data().data = data;
    }

    /// The accumulated gradient.
    pub fn grad(&self) -> f64 {
        self.read_data().grad
    }

    pub fn set_grad(&self, grad: f64) {
        self.write_data().grad = grad;
    }

    pub(crate) fn accumulate_grad(&self, delta: f64) {
        self.write_data().grad += delta;
    }

    pub fn label(&self) -> Option<String> {
        self.read_data().label.clone()
    }

    pub fn set_label(&self, label: impl Into<String>) {
        self.write_data().label = Some(label.into());
    }

    /// The rule that produced this node.
    pub fn op(&self) -> Op {
        self.read_data().op
    }

    /// Handles to the operands of this node, in operand order.
    pub fn children(&self) -> Vec<Value> {
        self.read_data().children.clone()
    }

    pub(crate) fn child_at(&self, index: usize) -> Option<Value> {
        self.read_data().children.get(index).cloned()
    }

    pub fn is_leaf(&self) -> bool {
        self.read_data().is_leaf()
    }

    /// Stable identity of the node behind this handle.
    pub fn id(&self) -> NodeId {
        self.read_data().id
    }

    /// Returns true if both handles point to the same node.
    pub fn ptr_eq(&self, other: &Value) -> bool {
        Rc::ptr_eq(&self.data, &other.data)
    }
}
