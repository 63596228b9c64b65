use crate::array::nested::{Literal, Nested};
use crate::array::utils::{normalize_index, resolve_slice};
use crate::array::ValueArray;
use crate::error::FerroGradError;
use crate::value::Value;
use log::{debug, trace};
use std::ops::{Range, RangeFrom, RangeFull, RangeInclusive, RangeTo};

/// A `start:stop:step` slice over one dimension. Missing bounds default the
/// way Python slices do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SliceSpec {
    pub start: Option<isize>,
    pub stop: Option<isize>,
    pub step: Option<isize>,
}

impl SliceSpec {
    /// The whole dimension (`:`).
    pub fn full() -> Self {
        SliceSpec::default()
    }

    pub fn new(start: Option<isize>, stop: Option<isize>) -> Self {
        SliceSpec {
            start,
            stop,
            step: None,
        }
    }

    pub fn with_step(mut self, step: isize) -> Self {
        self.step = Some(step);
        self
    }
}

/// Selects positions along a single dimension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// One position. The dimension disappears from the result.
    Index(isize),
    /// A slice. The dimension is kept with the slice's length.
    Slice(SliceSpec),
    /// An explicit list of positions ("fancy" indexing). The dimension is kept
    /// with the list's length.
    List(Vec<isize>),
}

impl Selector {
    pub fn index(i: isize) -> Self {
        Selector::Index(i)
    }

    pub fn full() -> Self {
        Selector::Slice(SliceSpec::full())
    }

    pub fn range(start: isize, stop: isize) -> Self {
        Selector::Slice(SliceSpec::new(Some(start), Some(stop)))
    }

    pub fn list(indices: &[isize]) -> Self {
        Selector::List(indices.to_vec())
    }
}

impl From<isize> for Selector {
    fn from(i: isize) -> Self {
        Selector::Index(i)
    }
}

impl From<i32> for Selector {
    fn from(i: i32) -> Self {
        Selector::Index(i as isize)
    }
}

impl From<SliceSpec> for Selector {
    fn from(spec: SliceSpec) -> Self {
        Selector::Slice(spec)
    }
}

impl From<Vec<i32>> for Selector {
    fn from(indices: Vec<i32>) -> Self {
        Selector::List(indices.into_iter().map(|i| i as isize).collect())
    }
}

impl From<Vec<isize>> for Selector {
    fn from(indices: Vec<isize>) -> Self {
        Selector::List(indices)
    }
}

impl From<Range<i32>> for Selector {
    fn from(r: Range<i32>) -> Self {
        Selector::range(r.start as isize, r.end as isize)
    }
}

impl From<RangeFrom<i32>> for Selector {
    fn from(r: RangeFrom<i32>) -> Self {
        Selector::Slice(SliceSpec::new(Some(r.start as isize), None))
    }
}

impl From<RangeTo<i32>> for Selector {
    fn from(r: RangeTo<i32>) -> Self {
        Selector::Slice(SliceSpec::new(None, Some(r.end as isize)))
    }
}

impl From<RangeInclusive<i32>> for Selector {
    fn from(r: RangeInclusive<i32>) -> Self {
        let end = *r.end() as isize;
        // `..=-1` runs to the end of the dimension.
        let stop = if end == -1 { None } else { Some(end + 1) };
        Selector::Slice(SliceSpec::new(Some(*r.start() as isize), stop))
    }
}

impl From<RangeFull> for Selector {
    fn from(_: RangeFull) -> Self {
        Selector::full()
    }
}

/// Result of an indexed read.
#[derive(Debug, Clone)]
pub enum Selection {
    /// Every dimension was selected with a single index.
    Scalar(Value),
    /// At least one dimension was kept.
    Array(ValueArray),
}

impl Selection {
    pub fn into_scalar(self) -> Option<Value> {
        match self {
            Selection::Scalar(v) => Some(v),
            Selection::Array(_) => None,
        }
    }

    pub fn into_array(self) -> Option<ValueArray> {
        match self {
            Selection::Scalar(_) => None,
            Selection::Array(a) => Some(a),
        }
    }
}

/// A selector resolved against a concrete dimension length.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Resolved {
    Single(usize),
    Multi(Vec<usize>),
}

impl Resolved {
    fn positions(&self) -> &[usize] {
        match self {
            Resolved::Single(i) => std::slice::from_ref(i),
            Resolved::Multi(indices) => indices,
        }
    }
}

fn resolve(selector: &Selector, size: usize, dim: usize) -> Result<Resolved, FerroGradError> {
    match selector {
        Selector::Index(i) => Ok(Resolved::Single(normalize_index(*i, size, dim)?)),
        Selector::Slice(spec) => Ok(Resolved::Multi(resolve_slice(spec, size, dim)?)),
        Selector::List(indices) => indices
            .iter()
            .map(|&i| normalize_index(i, size, dim))
            .collect::<Result<Vec<_>, _>>()
            .map(Resolved::Multi),
    }
}

impl ValueArray {
    /// Resolves one selector per dimension, padding missing trailing
    /// dimensions with full slices.
    fn resolve_selectors(&self, selectors: &[Selector]) -> Result<Vec<Resolved>, FerroGradError> {
        let rank = self.rank();
        if selectors.len() > rank {
            return Err(FerroGradError::TooManyIndices {
                given: selectors.len(),
                rank,
            });
        }
        self.shape()
            .iter()
            .enumerate()
            .map(|(dim, &size)| match selectors.get(dim) {
                Some(selector) => resolve(selector, size, dim),
                None => Ok(Resolved::Multi((0..size).collect())),
            })
            .collect()
    }

    /// Reads the elements selected by `selectors`.
    ///
    /// Dimensions selected with an index disappear; dimensions selected with
    /// a slice or a list are kept, in order, with the selection's length.
    /// Several list/slice selectors combine as an outer product. When every
    /// dimension is indexed the bare node is returned.
    ///
    /// The returned nodes are the stored nodes themselves, not copies, so
    /// arithmetic on a read result extends the same computation graph.
    ///
    /// # Errors
    /// `TooManyIndices`, `IndexOutOfBounds`, `InvalidSlice`, or
    /// `EmptySelection` if a slice or list selects nothing.
    pub fn get(&self, selectors: &[Selector]) -> Result<Selection, FerroGradError> {
        let resolved = self.resolve_selectors(selectors)?;

        let mut out_shape = Vec::new();
        for (dim, r) in resolved.iter().enumerate() {
            if let Resolved::Multi(indices) = r {
                if indices.is_empty() {
                    return Err(FerroGradError::EmptySelection { dim });
                }
                out_shape.push(indices.len());
            }
        }

        let strides = self.strides();
        let positions: Vec<&[usize]> = resolved.iter().map(Resolved::positions).collect();
        let mut counters = vec![0usize; positions.len()];
        let mut selected = Vec::with_capacity(out_shape.iter().product());
        'outer: loop {
            let offset: usize = counters
                .iter()
                .zip(positions.iter())
                .zip(strides.iter())
                .map(|((&c, pos), &stride)| pos[c] * stride)
                .sum();
            selected.push(self.values()[offset].clone());

            // Advance the odometer, last dimension fastest.
            for dim in (0..counters.len()).rev() {
                counters[dim] += 1;
                if counters[dim] < positions[dim].len() {
                    continue 'outer;
                }
                counters[dim] = 0;
            }
            break;
        }

        trace!("get: selected {} nodes, result shape {:?}", selected.len(), out_shape);
        if out_shape.is_empty() {
            return selected
                .into_iter()
                .next()
                .map(Selection::Scalar)
                .ok_or(FerroGradError::EmptySelection { dim: 0 });
        }
        Ok(Selection::Array(ValueArray::from_parts(selected, out_shape, None)))
    }

    /// Writes `value` into the positions selected by `selectors`.
    ///
    /// Selectors are resolved as in [`ValueArray::get`]; missing trailing
    /// dimensions are full slices. At every dimension selected with a slice or
    /// list, `value` must be a sequence of exactly the selected length; at
    /// the last dimension every assigned element must be a scalar. Written
    /// slots receive fresh leaf nodes holding the assigned numbers.
    ///
    /// The whole assignment is validated before any slot is touched: on error
    /// the array is left exactly as it was, and on success its shape is
    /// unchanged.
    ///
    /// # Errors
    /// Index errors as for `get`; `NonSequenceAssignment` for a scalar on a
    /// multi-element selection; `LengthMismatch` for a sequence of the wrong
    /// length; `ShapeMismatch` for a sequence where a single element is expected.
    pub fn set(
        &mut self,
        selectors: &[Selector],
        value: impl Into<Literal>,
    ) -> Result<(), FerroGradError> {
        let value = value.into();
        let resolved = self.resolve_selectors(selectors)?;
        let strides = self.strides().to_vec();

        let mut writes: Vec<(usize, f64)> = Vec::new();
        plan_writes(&resolved, &strides, self.shape(), 0, 0, &value, &mut writes)?;

        debug!(
            "set: writing {} slots into array of shape {:?}",
            writes.len(),
            self.shape()
        );
        for (offset, data) in writes {
            trace!("set: slot {} <- {}", offset, data);
            self.values_mut()[offset] = Value::new(data);
        }
        Ok(())
    }
}

/// Walks `value` alongside the resolved selectors, collecting
/// `(flat offset, number)` pairs without touching the array.
fn plan_writes(
    resolved: &[Resolved],
    strides: &[usize],
    shape: &[usize],
    dim: usize,
    base: usize,
    value: &Literal,
    writes: &mut Vec<(usize, f64)>,
) -> Result<(), FerroGradError> {
    let is_last_dim = dim + 1 == resolved.len();
    match &resolved[dim] {
        Resolved::Single(i) => {
            let offset = base + i * strides[dim];
            if is_last_dim {
                writes.push((offset, scalar_at(value, shape)?));
                Ok(())
            } else {
                plan_writes(resolved, strides, shape, dim + 1, offset, value, writes)
            }
        }
        Resolved::Multi(indices) => {
            let items = match value {
                Nested::List(items) => items,
                Nested::Scalar(_) => {
                    return Err(FerroGradError::NonSequenceAssignment {
                        dim,
                        selection_len: indices.len(),
                    })
                }
            };
            if items.len() != indices.len() {
                return Err(FerroGradError::LengthMismatch {
                    dim,
                    selection_len: indices.len(),
                    value_len: items.len(),
                });
            }
            for (&i, item) in indices.iter().zip(items.iter()) {
                let offset = base + i * strides[dim];
                if is_last_dim {
                    writes.push((offset, scalar_at(item, shape)?));
                } else {
                    plan_writes(resolved, strides, shape, dim + 1, offset, item, writes)?;
                }
            }
            Ok(())
        }
    }
}

/// The number for a single slot. A sequence here would nest deeper than the
/// array and change its shape.
fn scalar_at(value: &Literal, shape: &[usize]) -> Result<f64, FerroGradError> {
    match value {
        Nested::Scalar(operand) => Ok(operand.data()),
        Nested::List(_) => {
            let extra = value.shape().unwrap_or_default();
            let mut actual = shape.to_vec();
            actual.extend(extra);
            Err(FerroGradError::ShapeMismatch {
                expected: shape.to_vec(),
                actual,
                operation: "set".to_string(),
            })
        }
    }
}

#[cfg(test)]
#[path = "indexing_test.rs"]
mod tests;
