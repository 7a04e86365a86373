use super::*;
use num_traits::ToPrimitive;
use std::fmt;

impl<T> Tensor<T> {
    /// Creates a tensor from a row-major buffer and a shape.
    /// Returns an error if the buffer length does not match the shape's size.
    pub fn new(data: Vec<T>, shape: &[usize]) -> Result<Self> {
        let size = shape::size_of(shape)?;
        if size != data.len() {
            return Err(TensorError::ShapeMismatch(format!(
                "Data length {} does not match shape {shape:?} of size {size}",
                data.len()
            )));
        }

        Ok(Self {
            data,
            shape: shape.to_vec(),
        })
    }

    /// Creates a tensor by evaluating the generator at every multi-dimensional index in row-major order.
    pub fn from_fn<F>(shape: &[usize], mut f: F) -> Result<Self>
    where
        F: FnMut(&[usize]) -> T,
    {
        let size = shape::size_of(shape)?;
        let data = (0..size).map(|offset| f(&shape::indices_of(shape, offset))).collect();

        Ok(Self {
            data,
            shape: shape.to_vec(),
        })
    }

    /// Creates a rank 1 tensor from a non-empty buffer.
    pub fn vector(data: Vec<T>) -> Result<Self> {
        let len = data.len();
        Self::new(data, &[len])
    }

    /// Creates a rank-0 tensor holding a single value.
    pub fn scalar(value: T) -> Self {
        Self {
            data: vec![value],
            shape: Vec::new(),
        }
    }

    /// Assembles a tensor from parts produced by an operation which already keeps the invariant.
    pub(crate) fn from_parts(data: Vec<T>, shape: Vec<usize>) -> Self {
        debug_assert_eq!(data.len(), shape.iter().product::<usize>());
        Self { data, shape }
    }
}

impl<T: Clone> Tensor<T> {
    /// Creates a tensor with every element set to the given value.
    pub fn full(shape: &[usize], value: T) -> Result<Self> {
        let size = shape::size_of(shape)?;
        Ok(Self {
            data: vec![value; size],
            shape: shape.to_vec(),
        })
    }
}

impl<T: Scalar> Tensor<T> {
    pub fn zeros(shape: &[usize]) -> Result<Self> {
        Self::full(shape, T::zero())
    }

    pub fn ones(shape: &[usize]) -> Result<Self> {
        Self::full(shape, T::one())
    }

    /// Creates an n x n identity matrix.
    pub fn identity(n: usize) -> Result<Self> {
        Self::from_fn(&[n, n], |idx| if idx[0] == idx[1] { T::one() } else { T::zero() })
    }

    /// Creates a tensor from a buffer of any primitive numeric type.
    /// Returns an error if some value cannot be converted into the scalar type.
    pub fn from_primitives<P>(data: Vec<P>, shape: &[usize]) -> Result<Self>
    where
        P: ToPrimitive + fmt::Debug,
    {
        let data = data.into_iter().map(T::from_primitive).collect::<Result<Vec<_>>>()?;
        Self::new(data, shape)
    }
}

impl<T, const M: usize> TryFrom<Vec<[T; M]>> for Tensor<T> {
    type Error = TensorError;

    fn try_from(rows: Vec<[T; M]>) -> Result<Self> {
        let shape = [rows.len(), M];
        let data = rows.into_iter().flatten().collect();
        Self::new(data, &shape)
    }
}
