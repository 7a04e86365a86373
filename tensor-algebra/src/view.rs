use super::*;
use num_traits::ToPrimitive;
use std::fmt;

/// Shape entry which asks [`Tensor::reshape`] to infer the extent of its axis.
pub const INFER: isize = -1;

impl<T> Tensor<T> {
    // Get shape
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    pub fn rank(&self) -> usize {
        self.shape.len()
    }

    /// Returns the total number of elements.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always false: every tensor holds at least one element.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the row-major buffer.
    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn into_data(self) -> Vec<T> {
        self.data
    }

    // Get element at multi-dimensional index
    pub fn get(&self, indices: &[usize]) -> Result<&T> {
        let offset = shape::offset_of(&self.shape, indices)?;
        Ok(&self.data[offset])
    }

    pub fn get_mut(&mut self, indices: &[usize]) -> Result<&mut T> {
        let offset = shape::offset_of(&self.shape, indices)?;
        Ok(&mut self.data[offset])
    }

    /// Replaces the element at multi-dimensional index.
    pub fn set(&mut self, indices: &[usize], value: T) -> Result<()> {
        *self.get_mut(indices)? = value;
        Ok(())
    }

    /// Reshapes the tensor keeping the row-major order of elements.
    /// At most one entry of the new shape can be [`INFER`]: its extent is derived from the others.
    pub fn reshape(&self, new_shape: &[isize]) -> Result<Tensor<T>>
    where
        T: Clone,
    {
        let resolved = resolve_shape(self.len(), new_shape)?;
        Ok(Tensor::from_parts(self.data.clone(), resolved))
    }

    /// Same as [`Tensor::reshape`] but consumes the tensor and reuses its buffer.
    pub fn into_shape(self, new_shape: &[isize]) -> Result<Tensor<T>> {
        let resolved = resolve_shape(self.len(), new_shape)?;
        Ok(Tensor::from_parts(self.data, resolved))
    }

    /// Reshapes the tensor into rank 1.
    pub fn flatten(&self) -> Tensor<T>
    where
        T: Clone,
    {
        Tensor::from_parts(self.data.clone(), vec![self.len()])
    }

    /// Fixes the leading axis at the given index and returns a tensor of rank lowered by one.
    pub fn slice_leading_axis(&self, index: usize) -> Result<Tensor<T>>
    where
        T: Clone,
    {
        let Some((&leading, rest)) = self.shape.split_first() else {
            return Err(TensorError::UnsupportedOperation(
                "Cannot slice a rank 0 tensor".to_string(),
            ));
        };

        if index >= leading {
            return Err(TensorError::IndexOutOfBounds(format!(
                "Index {index} out of bounds for dimension 0 with size {leading}"
            )));
        }

        let chunk = rest.iter().product::<usize>();
        let start = index * chunk;

        Ok(Tensor::from_parts(
            self.data[start..start + chunk].to_vec(),
            rest.to_vec(),
        ))
    }
}

impl<T: Scalar> Tensor<T> {
    /// Replaces the element at multi-dimensional index with a value of any primitive numeric type.
    pub fn set_from<P>(&mut self, indices: &[usize], value: P) -> Result<()>
    where
        P: ToPrimitive + fmt::Debug,
    {
        let value = T::from_primitive(value)?;
        self.set(indices, value)
    }
}

fn resolve_shape(size: usize, new_shape: &[isize]) -> Result<Vec<usize>> {
    let mut inferred = None;
    let mut known = 1usize;

    for (axis, &extent) in new_shape.iter().enumerate() {
        match extent {
            INFER if inferred.is_some() => {
                return Err(TensorError::ShapeMismatch(format!(
                    "Only one axis can be inferred in {new_shape:?}"
                )));
            }
            INFER => inferred = Some(axis),
            extent if extent > 0 => {
                known = known.checked_mul(extent as usize).ok_or_else(|| {
                    TensorError::ShapeMismatch(format!("Size of shape {new_shape:?} overflows usize"))
                })?;
            }
            _ => {
                return Err(TensorError::ShapeMismatch(format!(
                    "Invalid extent {extent} at axis {axis} of {new_shape:?}"
                )));
            }
        }
    }

    if size % known != 0 || (inferred.is_none() && known != size) {
        return Err(TensorError::ShapeMismatch(format!(
            "Cannot reshape tensor of size {size} to shape {new_shape:?}"
        )));
    }

    Ok(new_shape
        .iter()
        .enumerate()
        .map(|(axis, &extent)| {
            if Some(axis) == inferred {
                size / known
            } else {
                extent as usize
            }
        })
        .collect())
}
