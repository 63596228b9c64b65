// Core modules of the crate
pub mod array;
pub mod autograd;
pub mod ops;
pub mod value;
pub mod value_data;

pub mod utils;

// Re-export the main types so they are reachable as `ferrograd_core::Value` etc.
pub use array::{Literal, Nested, Selection, Selector, SliceSpec, ValueArray};
pub use autograd::Op;
pub use value::{Operand, Value};
pub use value_data::NodeId;

// Re-export traits required by public functions
pub use num_traits;

pub mod error;
pub use error::{ErrorKind, FerroGradError};
