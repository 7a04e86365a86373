use super::*;

impl<T: Scalar> Tensor<T> {
    /// Contracts the last axis of this tensor with the first axis of the other one.
    ///
    /// The result has shape `self.shape[..-1] ++ other.shape[1..]` and every element is the sum over the contracted
    /// axis `k` of `self[i.., k] * other[k, j..]`, accumulated left to right. This generalizes matrix-matrix,
    /// matrix-vector and vector-vector products: the latter yields a rank-0 tensor.
    pub fn times(&self, other: &Tensor<T>) -> Result<Tensor<T>> {
        let (Some(&k), Some(&k2)) = (self.shape.last(), other.shape.first()) else {
            return Err(TensorError::ShapeMismatch(format!(
                "Cannot contract tensors of shapes {:?} and {:?}: rank 0 has no axis to contract",
                self.shape, other.shape
            )));
        };

        if k != k2 {
            return Err(TensorError::ShapeMismatch(format!(
                "Contracted axes have different sizes: {:?} x {:?}",
                self.shape, other.shape
            )));
        }

        let outer = &self.shape[..self.rank() - 1];
        let inner = &other.shape[1..];
        let (m, n) = (outer.iter().product::<usize>(), inner.iter().product::<usize>());

        let mut result_data = Vec::with_capacity(m * n);
        for i in 0..m {
            let row = &self.data[i * k..(i + 1) * k];
            for j in 0..n {
                let sum = row
                    .iter()
                    .enumerate()
                    .fold(T::zero(), |sum, (l, &a_val)| sum + a_val * other.data[l * n + j]);
                result_data.push(sum);
            }
        }

        Ok(Tensor::from_parts(result_data, [outer, inner].concat()))
    }

    /// Performs matrix multiplication between two rank 2 tensors.
    pub fn matmul(&self, other: &Tensor<T>) -> Result<Tensor<T>> {
        if self.rank() != 2 || other.rank() != 2 {
            return Err(TensorError::UnsupportedOperation(format!(
                "Unsupported dimensions for matmul: {:?} x {:?}",
                self.shape, other.shape
            )));
        }

        self.times(other)
    }

    /// Computes the dot product of two 1D tensors.
    /// Returns an error if the tensors are not 1D or have different sizes.
    pub fn dot(&self, other: &Tensor<T>) -> Result<T> {
        if self.rank() != 1 || other.rank() != 1 {
            return Err(TensorError::UnsupportedOperation(format!(
                "Dot product requires 1D tensors, but got shapes {:?} and {:?}",
                self.shape, other.shape
            )));
        }

        Ok(self.times(other)?.data[0])
    }

    /// Computes the outer product: the result shape is the concatenation of both shapes.
    pub fn outer(&self, other: &Tensor<T>) -> Tensor<T> {
        let data = self
            .data
            .iter()
            .flat_map(|&a| other.data.iter().map(move |&b| a * b))
            .collect();

        Tensor::from_parts(data, [self.shape.as_slice(), other.shape.as_slice()].concat())
    }
}
