//! Row-major mapping between multi-dimensional indices and flat buffer offsets.

use super::*;

/// Returns the number of elements described by the shape.
/// Every extent must be positive, an empty shape describes a single scalar.
pub fn size_of(shape: &[usize]) -> Result<usize> {
    if let Some(axis) = shape.iter().position(|&extent| extent == 0) {
        return Err(TensorError::ShapeMismatch(format!(
            "Shape {shape:?} has non-positive extent at axis {axis}"
        )));
    }

    shape
        .iter()
        .try_fold(1usize, |size, &extent| size.checked_mul(extent))
        .ok_or_else(|| TensorError::ShapeMismatch(format!("Size of shape {shape:?} overflows usize")))
}

/// Computes row-major strides: the last axis varies fastest.
pub fn strides_of(shape: &[usize]) -> Vec<usize> {
    let mut strides = vec![1; shape.len()];
    for axis in (0..shape.len().saturating_sub(1)).rev() {
        strides[axis] = strides[axis + 1] * shape[axis + 1];
    }
    strides
}

/// Maps a multi-dimensional index to the flat offset in a row-major buffer.
pub fn offset_of(shape: &[usize], indices: &[usize]) -> Result<usize> {
    if indices.len() != shape.len() {
        return Err(TensorError::IndexOutOfBounds(format!(
            "Index dimension mismatch: {} != {}",
            indices.len(),
            shape.len()
        )));
    }

    let mut offset = 0;
    for (axis, (&idx, &extent)) in indices.iter().zip(shape.iter()).enumerate() {
        if idx >= extent {
            return Err(TensorError::IndexOutOfBounds(format!(
                "Index {idx} out of bounds for dimension {axis} with size {extent}"
            )));
        }
        offset = offset * extent + idx;
    }

    Ok(offset)
}

/// Inverse of [`offset_of`]: recovers the multi-dimensional index of a flat offset.
/// The offset is expected to be less than the shape's size.
pub fn indices_of(shape: &[usize], offset: usize) -> Vec<usize> {
    let mut indices = vec![0; shape.len()];
    let mut remainder = offset;
    for (axis, &extent) in shape.iter().enumerate().rev() {
        indices[axis] = remainder % extent;
        remainder /= extent;
    }
    indices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn can_compute_size() -> Result<()> {
        assert_eq!(size_of(&[2, 3, 4])?, 24);
        assert_eq!(size_of(&[])?, 1);
        assert!(matches!(size_of(&[2, 0, 4]), Err(TensorError::ShapeMismatch(_))));
        assert!(matches!(size_of(&[usize::MAX, 2]), Err(TensorError::ShapeMismatch(_))));
        assert_eq!(size_of(&[usize::MAX, 1])?, usize::MAX);

        Ok(())
    }

    #[test]
    fn can_compute_strides() {
        assert_eq!(strides_of(&[2, 3, 4]), vec![12, 4, 1]);
        assert_eq!(strides_of(&[5]), vec![1]);
        assert!(strides_of(&[]).is_empty());
    }

    #[test]
    fn can_map_indices_to_offset() -> Result<()> {
        let shape = [2, 3, 4];
        assert_eq!(offset_of(&shape, &[0, 0, 0])?, 0);
        assert_eq!(offset_of(&shape, &[0, 1, 0])?, 4);
        assert_eq!(offset_of(&shape, &[1, 2, 3])?, 23);
        assert_eq!(offset_of(&[], &[])?, 0);

        Ok(())
    }

    #[test]
    fn offset_matches_strides() -> Result<()> {
        let shape = [3, 1, 5, 2];
        let strides = strides_of(&shape);
        let indices = [2, 0, 3, 1];
        let expected: usize = indices.iter().zip(strides.iter()).map(|(i, s)| i * s).sum();

        assert_eq!(offset_of(&shape, &indices)?, expected);

        Ok(())
    }

    #[test]
    fn can_reject_bad_indices() {
        assert!(matches!(offset_of(&[2, 3], &[1]), Err(TensorError::IndexOutOfBounds(_))));
        assert!(matches!(offset_of(&[2, 3], &[1, 3]), Err(TensorError::IndexOutOfBounds(_))));
        assert!(matches!(offset_of(&[2, 3], &[2, 0]), Err(TensorError::IndexOutOfBounds(_))));
    }

    #[test]
    fn can_map_offset_to_indices() -> Result<()> {
        let shape = [2, 3, 4];
        for offset in 0..size_of(&shape)? {
            let indices = indices_of(&shape, offset);
            assert_eq!(offset_of(&shape, &indices)?, offset);
        }
        assert_eq!(indices_of(&shape, 23), vec![1, 2, 3]);
        assert!(indices_of(&[], 0).is_empty());

        Ok(())
    }
}
