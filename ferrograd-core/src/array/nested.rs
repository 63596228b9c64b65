//! Nested literals: the input and export format of [`ValueArray`].

use crate::array::ValueArray;
use crate::error::FerroGradError;
use crate::value::{Operand, Value};

/// A possibly nested sequence with scalar leaves.
#[derive(Debug, Clone, PartialEq)]
pub enum Nested<T> {
    Scalar(T),
    List(Vec<Nested<T>>),
}

/// A nested literal whose leaves are numbers or existing graph nodes.
pub type Literal = Nested<Operand>;

impl<T> Nested<T> {
    pub fn is_scalar(&self) -> bool {
        matches!(self, Nested::Scalar(_))
    }

    /// Infers the rectangular shape of this literal.
    ///
    /// A scalar has shape `[]`. Every list must be non-empty and all of its
    /// elements must share one shape.
    ///
    /// # Errors
    /// `EmptyDimension` for an empty list, `InconsistentShape` for siblings of
    /// different shapes.
    pub fn shape(&self) -> Result<Vec<usize>, FerroGradError> {
        shape_at(self, 0)
    }

    /// Consumes the literal and returns its leaves in row-major order.
    pub fn into_flat(self) -> Vec<T> {
        let mut leaves = Vec::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            match node {
                Nested::Scalar(x) => leaves.push(x),
                Nested::List(items) => stack.extend(items.into_iter().rev()),
            }
        }
        leaves
    }

    /// Rebuilds a nested structure from row-major `data` and a shape.
    ///
    /// Returns `None` if `data` is empty. The caller guarantees that
    /// `data.len()` equals the product of `shape`.
    pub(crate) fn from_flat(data: Vec<T>, shape: &[usize]) -> Option<Nested<T>> {
        let mut level: Vec<Nested<T>> = data.into_iter().map(Nested::Scalar).collect();
        for &dim in shape.iter().rev() {
            let mut grouped = Vec::with_capacity(level.len() / dim.max(1));
            let mut items = level.into_iter();
            loop {
                let chunk: Vec<Nested<T>> = items.by_ref().take(dim).collect();
                if chunk.is_empty() {
                    break;
                }
                grouped.push(Nested::List(chunk));
            }
            level = grouped;
        }
        level.into_iter().next()
    }
}

fn shape_at<T>(node: &Nested<T>, depth: usize) -> Result<Vec<usize>, FerroGradError> {
    match node {
        Nested::Scalar(_) => Ok(Vec::new()),
        Nested::List(items) => {
            let (first, rest) = items
                .split_first()
                .ok_or(FerroGradError::EmptyDimension { depth })?;
            let inner = shape_at(first, depth + 1)?;
            for item in rest {
                let sibling = shape_at(item, depth + 1)?;
                if sibling != inner {
                    return Err(FerroGradError::InconsistentShape {
                        depth: depth + 1,
                        expected: inner,
                        actual: sibling,
                    });
                }
            }
            let mut shape = Vec::with_capacity(inner.len() + 1);
            shape.push(items.len());
            shape.extend(inner);
            Ok(shape)
        }
    }
}

// --- Conversions into literals ---

impl From<Operand> for Literal {
    fn from(operand: Operand) -> Self {
        Nested::Scalar(operand)
    }
}

impl From<f64> for Literal {
    fn from(x: f64) -> Self {
        Nested::Scalar(Operand::from(x))
    }
}

impl From<f32> for Literal {
    fn from(x: f32) -> Self {
        Nested::Scalar(Operand::from(x))
    }
}

impl From<i32> for Literal {
    fn from(x: i32) -> Self {
        Nested::Scalar(Operand::from(x))
    }
}

impl From<Value> for Literal {
    fn from(v: Value) -> Self {
        Nested::Scalar(Operand::Node(v))
    }
}

impl From<&Value> for Literal {
    fn from(v: &Value) -> Self {
        Nested::Scalar(Operand::Node(v.clone()))
    }
}

impl<T: Into<Literal>> From<Vec<T>> for Literal {
    fn from(items: Vec<T>) -> Self {
        Nested::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Literal>, const N: usize> From<[T; N]> for Literal {
    fn from(items: [T; N]) -> Self {
        Nested::List(items.into_iter().map(Into::into).collect())
    }
}

/// An array becomes a literal of its own nodes, shared by reference.
impl From<&ValueArray> for Literal {
    fn from(array: &ValueArray) -> Self {
        let nodes = array.values().iter().cloned().map(Operand::Node).collect();
        match Nested::from_flat(nodes, array.shape()) {
            Some(literal) => literal,
            None => Nested::List(Vec::new()),
        }
    }
}

impl From<ValueArray> for Literal {
    fn from(array: ValueArray) -> Self {
        Literal::from(&array)
    }
}
