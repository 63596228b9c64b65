//! # Activation Functions
//!
//! Non-linear scalar functions used between layers.

pub mod relu;
pub mod sigmoid;
pub mod tanh;

pub use relu::relu_op;
pub use sigmoid::sigmoid_op;
pub use tanh::tanh_op;
