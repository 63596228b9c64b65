use thiserror::Error;

/// Broad category of a [`FerroGradError`].
///
/// Callers that only care whether a failure came from a shape problem, a bad
/// selector or a bad input type can match on this instead of on every variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Shape,
    Index,
    Type,
    Parameter,
}

/// Custom error type for the ferrograd core.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum FerroGradError {
    #[error("Inconsistent shape in nested literal at depth {depth}: expected {expected:?}, got {actual:?}")]
    InconsistentShape {
        depth: usize,
        expected: Vec<usize>,
        actual: Vec<usize>,
    },

    #[error("Empty dimension at depth {depth}: every dimension must have a positive size")]
    EmptyDimension { depth: usize },

    #[error("Invalid shape {shape:?}: rank must be at least 1 and every dimension positive")]
    InvalidShape { shape: Vec<usize> },

    #[error("Shape mismatch: expected {expected:?}, got {actual:?} during operation {operation}")]
    ShapeMismatch {
        expected: Vec<usize>,
        actual: Vec<usize>,
        operation: String,
    },

    #[error("Length mismatch in dimension {dim}: trying to set data of length {value_len} on a selection of length {selection_len}")]
    LengthMismatch {
        dim: usize,
        selection_len: usize,
        value_len: usize,
    },

    #[error("Array creation error: data length {data_len} does not match shape {shape:?}")]
    TensorCreationError { data_len: usize, shape: Vec<usize> },

    #[error("Selection along dimension {dim} is empty")]
    EmptySelection { dim: usize },

    #[error("Index out of bounds: index {index} for dimension {dim} with size {size}")]
    IndexOutOfBounds { index: isize, dim: usize, size: usize },

    #[error("Too many indices: {given} selectors for an array of rank {rank}")]
    TooManyIndices { given: usize, rank: usize },

    #[error("Invalid slice for dimension {dim}: step cannot be zero")]
    InvalidSlice { dim: usize },

    #[error("Cannot assign a non-sequence value to a selection of {selection_len} elements in dimension {dim}")]
    NonSequenceAssignment { dim: usize, selection_len: usize },

    #[error("Leaf value is not convertible to a real number: {0}")]
    NonNumericLeaf(String),

    #[error("Invalid distribution parameters: {0}")]
    InvalidDistribution(String),
}

impl FerroGradError {
    /// Returns the category this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            FerroGradError::InconsistentShape { .. }
            | FerroGradError::EmptyDimension { .. }
            | FerroGradError::InvalidShape { .. }
            | FerroGradError::ShapeMismatch { .. }
            | FerroGradError::LengthMismatch { .. }
            | FerroGradError::TensorCreationError { .. }
            | FerroGradError::EmptySelection { .. } => ErrorKind::Shape,
            FerroGradError::IndexOutOfBounds { .. }
            | FerroGradError::TooManyIndices { .. }
            | FerroGradError::InvalidSlice { .. } => ErrorKind::Index,
            FerroGradError::NonSequenceAssignment { .. } | FerroGradError::NonNumericLeaf(_) => {
                ErrorKind::Type
            }
            FerroGradError::InvalidDistribution(_) => ErrorKind::Parameter,
        }
    }
}
