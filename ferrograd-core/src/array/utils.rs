use crate::array::indexing::SliceSpec;
use crate::error::FerroGradError;

/// Calculates the strides for a given shape.
/// Strides represent the number of elements to skip in the flattened data array
/// to move one step along each dimension.
///
/// Example:
/// shape = [2, 3] -> strides = [3, 1]
/// shape = [2, 2, 2] -> strides = [4, 2, 1]
pub fn calculate_strides(shape: &[usize]) -> Vec<usize> {
    if shape.is_empty() {
        return vec![];
    }
    let rank = shape.len();
    let mut strides = vec![1; rank];
    for i in (0..rank - 1).rev() {
        strides[i] = strides[i + 1] * shape[i + 1];
    }
    strides
}

/// Checks that a shape has rank >= 1 and only positive dimensions.
pub fn validate_shape(shape: &[usize]) -> Result<(), FerroGradError> {
    if shape.is_empty() || shape.contains(&0) {
        return Err(FerroGradError::InvalidShape {
            shape: shape.to_vec(),
        });
    }
    Ok(())
}

/// Maps a possibly negative index onto `0..size`. Negative indices count
/// from the end.
pub fn normalize_index(index: isize, size: usize, dim: usize) -> Result<usize, FerroGradError> {
    let out_of_bounds = FerroGradError::IndexOutOfBounds { index, dim, size };
    let size_i = isize::try_from(size).map_err(|_| out_of_bounds.clone())?;
    let resolved = if index < 0 { index + size_i } else { index };
    if (0..size_i).contains(&resolved) {
        Ok(resolved as usize)
    } else {
        Err(out_of_bounds)
    }
}

/// Resolves a slice against a dimension of length `size` into concrete indices.
///
/// Bounds are clamped, negative bounds count from the end and a negative step
/// walks backwards, exactly like Python's `slice.indices`.
pub fn resolve_slice(spec: &SliceSpec, size: usize, dim: usize) -> Result<Vec<usize>, FerroGradError> {
    let step = spec.step.unwrap_or(1);
    if step == 0 {
        return Err(FerroGradError::InvalidSlice { dim });
    }
    let len = isize::try_from(size).map_err(|_| FerroGradError::IndexOutOfBounds {
        index: isize::MAX,
        dim,
        size,
    })?;
    let (lower, upper) = if step > 0 { (0, len) } else { (-1, len - 1) };
    let clamp = |bound: Option<isize>, default: isize| match bound {
        None => default,
        Some(b) => {
            let b = if b < 0 { b + len } else { b };
            b.clamp(lower, upper)
        }
    };
    let start = clamp(spec.start, if step > 0 { lower } else { upper });
    let stop = clamp(spec.stop, if step > 0 { upper } else { lower });

    let mut indices = Vec::new();
    let mut i = start;
    while (step > 0 && i < stop) || (step < 0 && i > stop) {
        indices.push(i as usize);
        // An overflowing step has already passed `stop`.
        match i.checked_add(step) {
            Some(next) => i = next,
            None => break,
        }
    }
    Ok(indices)
}

#[cfg(test)]
#[path = "utils_test.rs"]
mod tests;
