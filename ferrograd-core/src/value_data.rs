// src/value_data.rs
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::autograd::Op;
use crate::value::Value;

static NEXT_NODE_ID: AtomicU64 = AtomicU64::new(0);

/// Stable identity of a graph node.
///
/// Two nodes holding the same number are still distinct graph entities, so the
/// backward pass deduplicates on this id and never on `data`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u64);

impl NodeId {
    pub(crate) fn next() -> Self {
        NodeId(NEXT_NODE_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the raw integer behind this id.
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

/// Internal storage and metadata for a [`Value`].
///
/// It is wrapped in `Rc<RefCell<ValueData>>` by the `Value` handle so that a
/// node can be shared by array slots and by several parent nodes at once,
/// while its gradient stays mutable through any of those references.
#[derive(Debug)]
pub struct ValueData {
    /// The scalar produced by the forward computation.
    pub(crate) data: f64,
    /// Accumulated gradient. Only ever grown with `+=` during backward.
    pub(crate) grad: f64,
    /// Operands this node was computed from, in operand order.
    /// A node may appear twice (e.g. `x * x`).
    pub(crate) children: Vec<Value>,
    /// Which rule produced this node. `Op::Leaf` for inputs and parameters.
    pub(crate) op: Op,
    /// Display-only name.
    pub(crate) label: Option<String>,
    pub(crate) id: NodeId,
}

impl ValueData {
    /// Creates a leaf record with a zero gradient.
    pub fn new(data: f64) -> Self {
        ValueData {
            data,
            grad: 0.0,
            children: Vec::new(),
            op: Op::Leaf,
            label: None,
            id: NodeId::next(),
        }
    }

    /// Creates the record of a node produced by `op` from `children`.
    pub fn from_operation(data: f64, children: Vec<Value>, op: Op) -> Self {
        ValueData {
            data,
            grad: 0.0,
            children,
            op,
            label: None,
            id: NodeId::next(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

impl Drop for ValueData {
    // Long operator chains would otherwise be torn down recursively, one
    // stack frame per node.
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(child) = pending.pop() {
            if let Ok(cell) = Rc::try_unwrap(child.data) {
                let mut inner = cell.into_inner();
                pending.append(&mut inner.children);
            }
        }
    }
}
