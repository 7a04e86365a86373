//! Validated rank-specific views over a tensor.

use super::*;

/// Read-only view of a rank 2 tensor.
#[derive(Clone, Copy, Debug)]
pub struct MatrixView<'a, T> {
    tensor: &'a Tensor<T>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Orientation {
    Flat,
    Column,
    Row,
}

/// Read-only view of a rank 1 tensor, or of a rank 2 tensor with a single row or column.
#[derive(Clone, Copy, Debug)]
pub struct VectorView<'a, T> {
    tensor: &'a Tensor<T>,
    orientation: Orientation,
}

impl<T> Tensor<T> {
    pub fn as_matrix(&self) -> Result<MatrixView<'_, T>> {
        if self.rank() != 2 {
            return Err(not_representable("a matrix", &self.shape));
        }
        Ok(MatrixView { tensor: self })
    }

    pub fn as_vector(&self) -> Result<VectorView<'_, T>> {
        if self.rank() != 1 {
            return Err(not_representable("a vector", &self.shape));
        }
        Ok(VectorView {
            tensor: self,
            orientation: Orientation::Flat,
        })
    }

    /// Views a rank 1 tensor or an n x 1 matrix as a column vector.
    pub fn as_column_vector(&self) -> Result<VectorView<'_, T>> {
        match self.shape.as_slice() {
            [_] | [_, 1] => Ok(VectorView {
                tensor: self,
                orientation: Orientation::Column,
            }),
            _ => Err(not_representable("a column vector", &self.shape)),
        }
    }

    /// Views a rank 1 tensor or a 1 x n matrix as a row vector.
    pub fn as_row_vector(&self) -> Result<VectorView<'_, T>> {
        match self.shape.as_slice() {
            [_] | [1, _] => Ok(VectorView {
                tensor: self,
                orientation: Orientation::Row,
            }),
            _ => Err(not_representable("a row vector", &self.shape)),
        }
    }
}

fn not_representable(what: &str, shape: &[usize]) -> TensorError {
    TensorError::UnsupportedOperation(format!(
        "Tensor of shape {shape:?} is not representable as {what} at rank {}",
        shape.len()
    ))
}

impl<'a, T> MatrixView<'a, T> {
    pub fn rows(&self) -> usize {
        self.tensor.shape[0]
    }

    pub fn cols(&self) -> usize {
        self.tensor.shape[1]
    }

    pub fn is_square(&self) -> bool {
        self.rows() == self.cols()
    }

    pub fn get(&self, row: usize, col: usize) -> Result<&'a T> {
        self.tensor.get(&[row, col])
    }

    pub fn tensor(&self) -> &'a Tensor<T> {
        self.tensor
    }
}

impl<T: Clone> MatrixView<'_, T> {
    pub fn row(&self, row: usize) -> Result<Tensor<T>> {
        self.tensor.slice_leading_axis(row)
    }

    pub fn column(&self, col: usize) -> Result<Tensor<T>> {
        if col >= self.cols() {
            return Err(TensorError::IndexOutOfBounds(format!(
                "Column {col} out of bounds for matrix with {} columns",
                self.cols()
            )));
        }

        let data = self.tensor.data.iter().skip(col).step_by(self.cols()).cloned().collect();
        Ok(Tensor::from_parts(data, vec![self.rows()]))
    }
}

impl<T: Scalar> MatrixView<'_, T> {
    /// Mean of every row.
    pub fn row_means(&self) -> Tensor<T> {
        let cols = T::from_f64(self.cols() as f64);
        let data = self
            .tensor
            .data
            .chunks(self.cols())
            .map(|row| row.iter().fold(T::zero(), |acc, &value| acc + value) / cols)
            .collect();

        Tensor::from_parts(data, vec![self.rows()])
    }

    /// Mean of every column.
    pub fn column_means(&self) -> Tensor<T> {
        let rows = T::from_f64(self.rows() as f64);
        let mut sums = vec![T::zero(); self.cols()];
        for row in self.tensor.data.chunks(self.cols()) {
            sums.iter_mut().zip(row.iter()).for_each(|(sum, &value)| *sum += value);
        }

        Tensor::from_parts(sums.into_iter().map(|sum| sum / rows).collect(), vec![self.cols()])
    }
}

impl<'a, T> VectorView<'a, T> {
    pub fn len(&self) -> usize {
        self.tensor.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tensor.is_empty()
    }

    pub fn get(&self, index: usize) -> Result<&'a T> {
        self.tensor.data.get(index).ok_or_else(|| {
            TensorError::IndexOutOfBounds(format!(
                "Index {index} out of bounds for vector of length {}",
                self.len()
            ))
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a T> + use<'a, T> {
        self.tensor.data.iter()
    }

    pub fn tensor(&self) -> &'a Tensor<T> {
        self.tensor
    }
}

impl<T: Scalar> VectorView<'_, T> {
    /// Inner product of two vectors of the same length regardless of their orientation.
    pub fn dot(&self, other: &VectorView<'_, T>) -> Result<T> {
        self.ensure_same_len(other)?;

        Ok(self.iter().zip(other.iter()).fold(T::zero(), |acc, (&a, &b)| acc + a * b))
    }

    /// Cross product of two 3-dimensional vectors, shaped like this vector.
    pub fn cross(&self, other: &VectorView<'_, T>) -> Result<Tensor<T>> {
        if self.len() != 3 || other.len() != 3 {
            return Err(TensorError::ShapeMismatch(format!(
                "Cross product requires 3 dimensional vectors, but got lengths {} and {}",
                self.len(),
                other.len()
            )));
        }

        let (a, b) = (self.tensor.data(), other.tensor.data());
        let data = vec![
            a[1] * b[2] - a[2] * b[1],
            a[2] * b[0] - a[0] * b[2],
            a[0] * b[1] - a[1] * b[0],
        ];

        Ok(Tensor::from_parts(data, self.tensor.shape.clone()))
    }

    /// Repeats the vector: a row vector becomes `count` identical rows, otherwise the vector becomes `count`
    /// identical columns.
    pub fn replicate(&self, count: usize) -> Result<Tensor<T>> {
        if count == 0 {
            return Err(TensorError::ShapeMismatch(
                "Replication count must be positive".to_string(),
            ));
        }

        let len = self.len();
        match self.orientation {
            Orientation::Row => Tensor::from_fn(&[count, len], |idx| self.tensor.data[idx[1]]),
            Orientation::Column | Orientation::Flat => {
                Tensor::from_fn(&[len, count], |idx| self.tensor.data[idx[0]])
            }
        }
    }

    fn ensure_same_len(&self, other: &VectorView<'_, T>) -> Result<()> {
        if self.len() != other.len() {
            return Err(TensorError::ShapeMismatch(format!(
                "Both vectors must have the same length: {} != {}",
                self.len(),
                other.len()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn can_view_by_rank() -> Result<()> {
        let matrix = Tensor::try_from(vec![[1., 2., 3.], [4., 5., 6.]])?;
        let vector = Tensor::vector(vec![1., 2., 3.])?;
        let cube = Tensor::<f64>::zeros(&[2, 2, 2])?;

        let view = matrix.as_matrix()?;
        assert_eq!((view.rows(), view.cols()), (2, 3));
        assert!(!view.is_square());
        assert_eq!(*view.get(1, 2)?, 6.);

        assert_eq!(vector.as_vector()?.len(), 3);

        assert!(matches!(cube.as_matrix(), Err(TensorError::UnsupportedOperation(_))));
        assert!(matches!(matrix.as_vector(), Err(TensorError::UnsupportedOperation(_))));
        assert!(matches!(vector.as_matrix(), Err(TensorError::UnsupportedOperation(_))));

        Ok(())
    }

    #[test]
    fn can_view_oriented_vectors() -> Result<()> {
        let column = Tensor::new(vec![1., 2., 3.], &[3, 1])?;
        let row = Tensor::new(vec![1., 2., 3.], &[1, 3])?;

        assert_eq!(column.as_column_vector()?.len(), 3);
        assert_eq!(row.as_row_vector()?.len(), 3);
        assert!(column.as_row_vector().is_err());
        assert!(row.as_column_vector().is_err());
        assert!(Tensor::<f64>::zeros(&[2, 2])?.as_column_vector().is_err());

        Ok(())
    }

    #[test]
    fn can_access_rows_and_columns() -> Result<()> {
        let matrix = Tensor::try_from(vec![[1., 2., 3.], [4., 5., 6.]])?;
        let view = matrix.as_matrix()?;

        assert_eq!(view.row(1)?, Tensor::vector(vec![4., 5., 6.])?);
        assert_eq!(view.column(1)?, Tensor::vector(vec![2., 5.])?);
        assert!(matches!(view.column(3), Err(TensorError::IndexOutOfBounds(_))));
        assert!(matches!(view.row(2), Err(TensorError::IndexOutOfBounds(_))));

        Ok(())
    }

    #[test]
    fn can_compute_means() -> Result<()> {
        let matrix = Tensor::try_from(vec![[1., 2., 3.], [4., 5., 6.]])?;
        let view = matrix.as_matrix()?;

        assert_eq!(view.row_means(), Tensor::vector(vec![2., 5.])?);
        assert_eq!(view.column_means(), Tensor::vector(vec![2.5, 3.5, 4.5])?);

        Ok(())
    }

    #[test]
    fn can_multiply_vectors() -> Result<()> {
        let x = Tensor::new(vec![1., 0., 0.], &[3, 1])?;
        let y = Tensor::vector(vec![0., 1., 0.])?;

        let (x_view, y_view) = (x.as_column_vector()?, y.as_vector()?);
        assert_eq!(x_view.dot(&y_view)?, 0.);
        assert_eq!(x_view.dot(&x_view)?, 1.);
        assert_eq!(x_view.cross(&y_view)?, Tensor::new(vec![0., 0., 1.], &[3, 1])?);

        let short = Tensor::vector(vec![1., 2.])?;
        assert!(matches!(x_view.dot(&short.as_vector()?), Err(TensorError::ShapeMismatch(_))));
        assert!(matches!(x_view.cross(&short.as_vector()?), Err(TensorError::ShapeMismatch(_))));

        Ok(())
    }

    #[test]
    fn can_replicate_vectors() -> Result<()> {
        let column = Tensor::new(vec![1., 2.], &[2, 1])?;
        let row = Tensor::new(vec![1., 2.], &[1, 2])?;

        assert_eq!(
            column.as_column_vector()?.replicate(3)?,
            Tensor::try_from(vec![[1., 1., 1.], [2., 2., 2.]])?
        );
        assert_eq!(
            row.as_row_vector()?.replicate(2)?,
            Tensor::try_from(vec![[1., 2.], [1., 2.]])?
        );
        assert!(row.as_row_vector()?.replicate(0).is_err());

        Ok(())
    }
}
