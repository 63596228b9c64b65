// src/array/create.rs

use crate::array::nested::{Literal, Nested};
use crate::array::utils::validate_shape;
use crate::array::ValueArray;
use crate::error::FerroGradError;
use crate::value::{Operand, Value};
use log::debug;
use num_traits::ToPrimitive;
use rand::Rng;
use rand_distr::{Distribution, Normal, Uniform};
use std::fmt::Debug;

impl ValueArray {
    /// Creates an array from a nested literal.
    ///
    /// The shape is inferred from the nesting; a bare scalar becomes an array
    /// of shape `[1]`. Numeric leaves are wrapped in fresh leaf nodes, while
    /// leaves that already are nodes are stored by reference, so existing
    /// graph links are preserved.
    ///
    /// # Errors
    /// `InconsistentShape` if siblings differ in shape, `EmptyDimension` if a
    /// sequence is empty.
    pub fn from_literal(
        literal: impl Into<Literal>,
        label: Option<&str>,
    ) -> Result<Self, FerroGradError> {
        let literal = match literal.into() {
            scalar @ Nested::Scalar(_) => Nested::List(vec![scalar]),
            list => list,
        };
        let shape = literal.shape()?;
        let values: Vec<Value> = literal.into_flat().into_iter().map(Operand::into_value).collect();
        debug!("from_literal: created array of shape {:?}", shape);
        Ok(ValueArray::from_parts(values, shape, label.map(str::to_string)))
    }

    /// Creates an array from a flat row-major buffer of host numbers.
    ///
    /// # Errors
    /// `InvalidShape` for an empty or zero-sized shape, `TensorCreationError`
    /// if the data length does not match, `NonNumericLeaf` if a number has
    /// no `f64` representation.
    pub fn from_flat<N>(data: &[N], shape: Vec<usize>) -> Result<Self, FerroGradError>
    where
        N: ToPrimitive + Copy + Debug,
    {
        validate_shape(&shape)?;
        let numel: usize = shape.iter().product();
        if data.len() != numel {
            return Err(FerroGradError::TensorCreationError {
                data_len: data.len(),
                shape,
            });
        }
        let values = data
            .iter()
            .map(|&x| Operand::try_from_primitive(x).map(Operand::into_value))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(ValueArray::from_parts(values, shape, None))
    }

    /// Creates an array of fresh zero-valued leaves.
    pub fn zeros(shape: &[usize]) -> Result<Self, FerroGradError> {
        ValueArray::from_fn(shape, || 0.0)
    }

    /// Creates an array of leaves drawn from `N(mean, std^2)` using the thread-local RNG.
    pub fn random_normal(shape: &[usize], mean: f64, std: f64) -> Result<Self, FerroGradError> {
        ValueArray::random_normal_with_rng(shape, mean, std, &mut rand::thread_rng())
    }

    /// Like [`ValueArray::random_normal`] with a caller-supplied RNG.
    ///
    /// # Errors
    /// `InvalidDistribution` if `mean` or `std` is not finite or `std < 0`.
    pub fn random_normal_with_rng<R: Rng + ?Sized>(
        shape: &[usize],
        mean: f64,
        std: f64,
        rng: &mut R,
    ) -> Result<Self, FerroGradError> {
        if !mean.is_finite() || !std.is_finite() {
            return Err(FerroGradError::InvalidDistribution(format!(
                "normal requires finite parameters, got mean={} std={}",
                mean, std
            )));
        }
        let normal = Normal::new(mean, std)
            .map_err(|e| FerroGradError::InvalidDistribution(format!("normal(mean={}, std={}): {}", mean, std, e)))?;
        ValueArray::from_fn(shape, || normal.sample(&mut *rng))
    }

    /// Creates an array of leaves drawn uniformly from `[low, high)` using the thread-local RNG.
    pub fn random_uniform(shape: &[usize], low: f64, high: f64) -> Result<Self, FerroGradError> {
        ValueArray::random_uniform_with_rng(shape, low, high, &mut rand::thread_rng())
    }

    /// Like [`ValueArray::random_uniform`] with a caller-supplied RNG.
    ///
    /// # Errors
    /// `InvalidDistribution` unless `low < high` and both are finite.
    pub fn random_uniform_with_rng<R: Rng + ?Sized>(
        shape: &[usize],
        low: f64,
        high: f64,
        rng: &mut R,
    ) -> Result<Self, FerroGradError> {
        if !(low.is_finite() && high.is_finite() && low < high) {
            return Err(FerroGradError::InvalidDistribution(format!(
                "uniform requires finite low < high, got [{}, {})",
                low, high
            )));
        }
        let uniform = Uniform::new(low, high);
        ValueArray::from_fn(shape, || uniform.sample(&mut *rng))
    }

    fn from_fn(shape: &[usize], mut f: impl FnMut() -> f64) -> Result<Self, FerroGradError> {
        validate_shape(shape)?;
        let numel: usize = shape.iter().product();
        let values = (0..numel).map(|_| Value::new(f())).collect();
        debug!("from_fn: created array of shape {:?}", shape);
        Ok(ValueArray::from_parts(values, shape.to_vec(), None))
    }
}

#[cfg(test)]
#[path = "create_test.rs"]
mod tests;
