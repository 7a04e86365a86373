use super::*;

/// An iterator over the sub-tensors along the leading axis.
pub struct TensorIter<'a, T> {
    tensor: &'a Tensor<T>,
    current_index: usize,
}

impl<'a, T: Clone> IntoIterator for &'a Tensor<T> {
    type Item = Tensor<T>;
    type IntoIter = TensorIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        TensorIter {
            tensor: self,
            current_index: 0,
        }
    }
}

impl<T: Clone> Iterator for TensorIter<'_, T> {
    type Item = Tensor<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.tensor.shape.is_empty() || self.current_index >= self.tensor.shape[0] {
            return None;
        }
        let sub_tensor = self.tensor.slice_leading_axis(self.current_index).ok();
        self.current_index += 1;
        sub_tensor
    }
}

impl<T> Tensor<T> {
    /// Returns an iterator over the elements of the tensor.
    /// This iterator traverses the tensor's elements in a row-major order.
    pub fn elements(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    /// Returns an iterator over the elements paired with their multi-dimensional indices.
    pub fn indexed_elements(&self) -> impl Iterator<Item = (Vec<usize>, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(offset, value)| (shape::indices_of(&self.shape, offset), value))
    }
}
