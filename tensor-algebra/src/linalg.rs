//! Matrix algebra over rank 2 tensors: determinant by recursive Schur complement elimination, cofactors, adjoint
//! and inverse.

use super::*;
use log::{debug, trace, warn};
use std::ops::Range;

impl<T: Clone> Tensor<T> {
    /// Returns a new matrix with two rows exchanged.
    pub fn switch_row(&self, row1: usize, row2: usize) -> Result<Tensor<T>> {
        let view = self.as_matrix()?;
        let (rows, cols) = (view.rows(), view.cols());

        if row1 >= rows || row2 >= rows {
            return Err(TensorError::IndexOutOfBounds(format!(
                "Cannot switch rows {row1} and {row2} of matrix with {rows} rows"
            )));
        }

        let mut data = self.data.clone();
        if row1 != row2 {
            let (low, high) = (row1.min(row2), row1.max(row2));
            let (head, tail) = data.split_at_mut(high * cols);
            head[low * cols..(low + 1) * cols].swap_with_slice(&mut tail[..cols]);
        }

        Ok(Tensor::from_parts(data, self.shape.clone()))
    }

    /// Copies the block of a matrix spanned by half-open row and column ranges.
    pub fn submatrix(&self, rows: Range<usize>, cols: Range<usize>) -> Result<Tensor<T>> {
        let view = self.as_matrix()?;
        if rows.is_empty() || cols.is_empty() || rows.end > view.rows() || cols.end > view.cols() {
            return Err(TensorError::IndexOutOfBounds(format!(
                "Submatrix {rows:?} x {cols:?} out of bounds for shape {:?}",
                self.shape
            )));
        }

        let width = view.cols();
        let data = rows
            .clone()
            .flat_map(|row| self.data[row * width + cols.start..row * width + cols.end].iter().cloned())
            .collect();

        Ok(Tensor::from_parts(data, vec![rows.len(), cols.len()]))
    }

    /// Overwrites the block starting at the given row and column with another matrix.
    pub fn set_submatrix(&mut self, row: usize, col: usize, block: &Tensor<T>) -> Result<()> {
        let (rows, cols) = {
            let view = self.as_matrix()?;
            (view.rows(), view.cols())
        };
        let block_view = block.as_matrix()?;
        let (block_rows, block_cols) = (block_view.rows(), block_view.cols());

        if row + block_rows > rows || col + block_cols > cols {
            return Err(TensorError::IndexOutOfBounds(format!(
                "Block of shape {:?} at ({row}, {col}) does not fit into shape {:?}",
                block.shape, self.shape
            )));
        }

        for (offset, source) in block.data.chunks(block_cols).enumerate() {
            let start = (row + offset) * cols + col;
            self.data[start..start + block_cols].clone_from_slice(source);
        }

        Ok(())
    }

    /// Returns the matrix with the given row and column removed.
    pub fn cofactor_minor(&self, row: usize, col: usize) -> Result<Tensor<T>> {
        let view = self.as_matrix()?;
        let (rows, cols) = (view.rows(), view.cols());

        if rows < 2 || cols < 2 || row >= rows || col >= cols {
            return Err(TensorError::IndexOutOfBounds(format!(
                "Cannot remove row {row} and column {col} from matrix of shape {:?}",
                self.shape
            )));
        }

        let data = self
            .data
            .chunks(cols)
            .enumerate()
            .filter(|&(r, _)| r != row)
            .flat_map(|(_, values)| {
                values
                    .iter()
                    .enumerate()
                    .filter(move |&(c, _)| c != col)
                    .map(|(_, value)| value.clone())
            })
            .collect();

        Ok(Tensor::from_parts(data, vec![rows - 1, cols - 1]))
    }
}

impl<T: Scalar> Tensor<T> {
    /// Computes the determinant of a square matrix comparing pivots against exact zero.
    pub fn determinant(&self) -> Result<T> {
        self.determinant_with(&AlgebraConfig::default())
    }

    /// Computes the determinant of a square matrix.
    ///
    /// Each step picks the first non-negligible entry of the leading column as the pivot `a`, moves its row to the
    /// top and recurses on the Schur complement `A'' - v w / a` of the exchanged matrix. When the whole leading
    /// column is negligible the determinant is zero. The total work is O(n^3) and the recursion depth is n - 2.
    pub fn determinant_with(&self, config: &AlgebraConfig) -> Result<T> {
        self.square_size("determinant")?;
        schur_determinant(self, config.pivot_tolerance())
    }

    /// Computes the adjoint (adjugate): the transposed matrix of cofactors.
    pub fn adjoint(&self) -> Result<Tensor<T>> {
        self.adjoint_with(&AlgebraConfig::default())
    }

    pub fn adjoint_with(&self, config: &AlgebraConfig) -> Result<Tensor<T>> {
        let n = self.square_size("adjoint")?;
        if n == 1 {
            return Tensor::identity(1);
        }

        let mut cofactors = Vec::with_capacity(n * n);
        for row in 0..n {
            for col in 0..n {
                let minor = self.cofactor_minor(row, col)?.determinant_with(config)?;
                cofactors.push(if (row + col) % 2 == 0 { minor } else { -minor });
            }
        }

        Tensor::from_parts(cofactors, vec![n, n]).transpose()
    }

    /// Computes the inverse as `adjoint / det`.
    ///
    /// A matrix with exactly zero determinant has no inverse: the identity matrix is returned instead. Use
    /// [`Tensor::try_inverse`] to get an error for singular input.
    pub fn inverse(&self) -> Result<Tensor<T>> {
        self.inverse_with(&AlgebraConfig::default())
    }

    /// Computes the inverse, failing with [`TensorError::Singular`] when the determinant is exactly zero.
    pub fn try_inverse(&self) -> Result<Tensor<T>> {
        self.inverse_with(&AlgebraConfig::default().with_singular_policy(SingularPolicy::Error))
    }

    pub fn inverse_with(&self, config: &AlgebraConfig) -> Result<Tensor<T>> {
        let n = self.square_size("inverse")?;
        let det = self.determinant_with(config)?;

        if det.is_negligible(config.pivot_tolerance()) {
            return match config.singular_policy() {
                SingularPolicy::Identity => {
                    warn!("matrix {n}x{n} is singular (det = {det}), returning identity instead of inverse");
                    Tensor::identity(n)
                }
                SingularPolicy::Error => Err(TensorError::Singular(format!(
                    "Matrix of shape {:?} has determinant {det}",
                    self.shape
                ))),
            };
        }

        Ok(self.adjoint_with(config)? * (T::one() / det))
    }

    fn square_size(&self, operation: &str) -> Result<usize> {
        let view = self.as_matrix()?;
        if !view.is_square() {
            return Err(TensorError::ShapeMismatch(format!(
                "The {operation} is only available for square matrices, but got shape {:?}",
                self.shape
            )));
        }
        Ok(view.rows())
    }
}

fn schur_determinant<T: Scalar>(matrix: &Tensor<T>, tolerance: f64) -> Result<T> {
    let n = matrix.shape[0];
    let d = &matrix.data;

    match n {
        1 => Ok(d[0]),
        2 => Ok(d[0] * d[3] - d[1] * d[2]),
        _ => {
            let Some(pivot) = (0..n).find(|&row| !d[row * n].is_negligible(tolerance)) else {
                trace!("leading column of {n}x{n} matrix is zero");
                return Ok(T::zero());
            };

            let (exchanged, sign) = if pivot == 0 {
                (matrix.clone(), T::one())
            } else {
                debug!("exchanging rows 0 and {pivot} of {n}x{n} matrix");
                (matrix.switch_row(0, pivot)?, -T::one())
            };

            let a = exchanged.data[0];
            let v = exchanged.submatrix(1..n, 0..1)?;
            let w = exchanged.submatrix(0..1, 1..n)?;
            let rest = exchanged.submatrix(1..n, 1..n)?;

            let complement = (rest - &(v.times(&w)? / a))?;
            trace!("eliminated {n}x{n} matrix with pivot {a}");

            Ok(sign * a * schur_determinant(&complement, tolerance)?)
        }
    }
}
