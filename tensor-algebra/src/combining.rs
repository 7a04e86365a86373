use super::*;

impl<T: Clone> Tensor<T> {
    /// Joins two tensors along an existing axis.
    /// Both tensors must have the same rank and equal extents on every other axis.
    pub fn concat(&self, other: &Tensor<T>, axis: usize) -> Result<Tensor<T>> {
        if self.rank() != other.rank() || axis >= self.rank() {
            return Err(TensorError::ShapeMismatch(format!(
                "Cannot concatenate shapes {:?} and {:?} along axis {axis}",
                self.shape, other.shape
            )));
        }

        let mismatch = self
            .shape
            .iter()
            .zip(other.shape.iter())
            .enumerate()
            .any(|(dim, (a, b))| dim != axis && a != b);
        if mismatch {
            return Err(TensorError::ShapeMismatch(format!(
                "Two tensors must have the same shape except for axis {axis}: {:?} != {:?}",
                self.shape, other.shape
            )));
        }

        // Both buffers are row-major: the result interleaves contiguous blocks of the inner axes.
        let inner = self.shape[axis + 1..].iter().product::<usize>();
        let self_block = self.shape[axis] * inner;
        let other_block = other.shape[axis] * inner;

        let mut data = Vec::with_capacity(self.len() + other.len());
        for (lhs, rhs) in self.data.chunks(self_block).zip(other.data.chunks(other_block)) {
            data.extend_from_slice(lhs);
            data.extend_from_slice(rhs);
        }

        let mut shape = self.shape.clone();
        shape[axis] += other.shape[axis];

        Ok(Tensor::from_parts(data, shape))
    }

    /// Stacks tensors of identical shape along a new leading axis.
    /// The extent of the new axis equals the number of tensors.
    pub fn stack<'a, I>(tensors: I) -> Result<Tensor<T>>
    where
        T: 'a,
        I: IntoIterator<Item = &'a Tensor<T>>,
    {
        let mut tensors = tensors.into_iter();
        let first = tensors.next().ok_or_else(|| {
            TensorError::ShapeMismatch("Cannot stack an empty sequence of tensors".to_string())
        })?;

        let mut shape = Vec::with_capacity(first.rank() + 1);
        shape.push(1);
        shape.extend_from_slice(&first.shape);

        tensors.try_fold(Tensor::from_parts(first.data.clone(), shape), |acc, tensor| acc.push_layer(tensor))
    }

    /// Appends a tensor as the next layer along the leading axis of the stacked accumulator.
    fn push_layer(mut self, layer: &Tensor<T>) -> Result<Tensor<T>> {
        if self.shape[1..] != layer.shape[..] {
            return Err(TensorError::ShapeMismatch(format!(
                "Cannot stack tensors with different shapes: {:?} != {:?}",
                &self.shape[1..],
                layer.shape
            )));
        }

        self.data.extend_from_slice(&layer.data);
        self.shape[0] += 1;

        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arange(n: usize) -> Tensor<f64> {
        Tensor::from_parts((0..n).map(|v| v as f64).collect(), vec![n])
    }

    #[test]
    fn can_concat_along_leading_axis() -> Result<()> {
        let a = Tensor::try_from(vec![[1., 2.], [3., 4.]])?;
        let b = Tensor::try_from(vec![[5., 6.]])?;

        let joined = a.concat(&b, 0)?;
        assert_eq!(joined, Tensor::try_from(vec![[1., 2.], [3., 4.], [5., 6.]])?);

        Ok(())
    }

    #[test]
    fn can_concat_along_trailing_axis() -> Result<()> {
        let a = Tensor::try_from(vec![[1., 2.], [3., 4.]])?;
        let b = Tensor::try_from(vec![[5.], [6.]])?;

        let joined = a.concat(&b, 1)?;
        assert_eq!(joined, Tensor::try_from(vec![[1., 2., 5.], [3., 4., 6.]])?);

        Ok(())
    }

    #[test]
    fn can_concat_along_middle_axis() -> Result<()> {
        let a = arange(12).into_shape(&[2, 3, 2])?;
        let b = arange(4).into_shape(&[2, 1, 2])? * -1.;

        let joined = a.concat(&b, 1)?;
        assert_eq!(joined.shape(), &[2, 4, 2]);
        for (indices, value) in joined.indexed_elements() {
            let expected = if indices[1] < 3 {
                *a.get(&indices)?
            } else {
                *b.get(&[indices[0], indices[1] - 3, indices[2]])?
            };
            assert_eq!(*value, expected);
        }

        Ok(())
    }

    #[test]
    fn can_reject_invalid_concat() -> Result<()> {
        let a = arange(6).into_shape(&[2, 3])?;

        assert!(matches!(a.concat(&arange(3), 0), Err(TensorError::ShapeMismatch(_))));
        assert!(matches!(a.concat(&a, 2), Err(TensorError::ShapeMismatch(_))));
        assert!(matches!(
            a.concat(&arange(4).into_shape(&[2, 2])?, 0),
            Err(TensorError::ShapeMismatch(_))
        ));

        Ok(())
    }

    #[test]
    fn can_stack_tensors() -> Result<()> {
        let tensor = arange(6).into_shape(&[3, 2])?;

        let stacked = Tensor::stack([&tensor, &tensor, &tensor])?;
        assert_eq!(stacked.shape(), &[3, 3, 2]);
        assert_eq!(stacked.data(), [tensor.data(), tensor.data(), tensor.data()].concat().as_slice());

        let single = Tensor::stack([&tensor])?;
        assert_eq!(single.shape(), &[1, 3, 2]);

        Ok(())
    }

    #[test]
    fn stacked_layers_can_be_sliced_back() -> Result<()> {
        let layers = (0..4).map(|i| &arange(6) * i as f64).collect::<Vec<_>>();

        let stacked = Tensor::stack(&layers)?;
        assert_eq!(stacked.shape(), &[4, 6]);
        for (i, layer) in stacked.into_iter().enumerate() {
            assert_eq!(layer, layers[i]);
        }

        Ok(())
    }

    #[test]
    fn can_reject_invalid_stack() -> Result<()> {
        let a = arange(6);
        let b = arange(6).into_shape(&[2, 3])?;

        assert!(matches!(Tensor::stack([&a, &b]), Err(TensorError::ShapeMismatch(_))));
        assert!(matches!(Tensor::stack([&a, &a, &arange(5)]), Err(TensorError::ShapeMismatch(_))));
        assert!(matches!(
            Tensor::<f64>::stack(Vec::<&Tensor<f64>>::new()),
            Err(TensorError::ShapeMismatch(_))
        ));

        Ok(())
    }
}
