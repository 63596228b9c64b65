//! Reverse-mode machinery: operator tags, local-gradient rules and graph ordering.

pub mod backward_op;
pub mod grad_check;
pub mod graph;

pub use backward_op::propagate;
pub use graph::topological_sort;

use std::fmt;

/// Tag identifying which rule produced a node.
///
/// The node keeps only this tag; the matching local-gradient rule lives in
/// [`backward_op::propagate`], so a node never owns a closure over its operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    Leaf,
    Add,
    Mul,
    Pow,
    Exp,
    Log,
    Tanh,
    Relu,
    Sigmoid,
}

impl Op {
    /// Short symbol used when printing graphs and nodes.
    pub fn symbol(&self) -> &'static str {
        match self {
            Op::Leaf => "",
            Op::Add => "+",
            Op::Mul => "*",
            Op::Pow => "**",
            Op::Exp => "exp",
            Op::Log => "log",
            Op::Tanh => "tanh",
            Op::Relu => "ReLU",
            Op::Sigmoid => "sigmoid",
        }
    }

    /// Number of operands the operator takes.
    pub fn arity(&self) -> usize {
        match self {
            Op::Leaf => 0,
            Op::Add | Op::Mul | Op::Pow => 2,
            Op::Exp | Op::Log | Op::Tanh | Op::Relu | Op::Sigmoid => 1,
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
