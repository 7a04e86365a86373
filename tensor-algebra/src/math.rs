use super::*;
use num_complex::{Complex, Complex32, Complex64};
use std::ops::{Add, Div, DivAssign, Mul, MulAssign, Neg, Sub};

impl<T> Tensor<T> {
    /// Creates a new tensor by applying the function to every element.
    pub fn map<U, F>(&self, f: F) -> Tensor<U>
    where
        F: FnMut(&T) -> U,
    {
        Tensor::from_parts(self.data.iter().map(f).collect(), self.shape.clone())
    }

    /// Combines elements of two tensors of the same shape pairwise.
    pub fn zip_with<U, V, F>(&self, other: &Tensor<U>, mut f: F) -> Result<Tensor<V>>
    where
        F: FnMut(&T, &U) -> V,
    {
        self.ensure_same_shape(other)?;

        let data = self.data.iter().zip(other.data.iter()).map(|(a, b)| f(a, b)).collect();

        Ok(Tensor::from_parts(data, self.shape.clone()))
    }

    fn ensure_same_shape<U>(&self, other: &Tensor<U>) -> Result<()> {
        if self.shape != other.shape {
            return Err(TensorError::ShapeMismatch(format!(
                "Two tensors should have the same shape: {:?} != {:?}",
                self.shape, other.shape
            )));
        }
        Ok(())
    }

    /// Copies the elements into a fresh row-major buffer laid out with axes `dim0` and `dim1` exchanged.
    /// Both axes must be below the rank.
    pub fn transpose_axes(&self, dim0: usize, dim1: usize) -> Result<Tensor<T>>
    where
        T: Clone,
    {
        if dim0 >= self.rank() || dim1 >= self.rank() {
            return Err(TensorError::ShapeMismatch(format!(
                "Invalid dimensions for transpose: {dim0} and {dim1}"
            )));
        }

        let mut new_shape = self.shape.clone();
        new_shape.swap(dim0, dim1);

        let strides = shape::strides_of(&self.shape);
        let data = (0..self.len())
            .map(|offset| {
                let mut indices = shape::indices_of(&new_shape, offset);
                indices.swap(dim0, dim1);
                let source = indices.iter().zip(strides.iter()).map(|(i, s)| i * s).sum::<usize>();
                self.data[source].clone()
            })
            .collect();

        Ok(Tensor::from_parts(data, new_shape))
    }

    /// Transposes a matrix.
    pub fn transpose(&self) -> Result<Tensor<T>>
    where
        T: Clone,
    {
        if self.rank() != 2 {
            return Err(TensorError::UnsupportedOperation(format!(
                "Transpose requires a rank 2 tensor, but got shape {:?}",
                self.shape
            )));
        }
        self.transpose_axes(0, 1)
    }
}

impl<T: Scalar> Tensor<T> {
    /// Elementwise (Hadamard) product of two tensors of the same shape.
    pub fn hadamard(&self, other: &Tensor<T>) -> Result<Tensor<T>> {
        self.zip_with(other, |&a, &b| a * b)
    }

    pub fn sum(&self) -> T {
        self.data.iter().fold(T::zero(), |acc, &value| acc + value)
    }

    pub fn frobenius_norm_squared(&self) -> f64 {
        self.data.iter().map(|value| value.magnitude().powi(2)).sum()
    }

    /// Adds another tensor of the same shape in place.
    /// On error the receiver is left untouched.
    pub fn try_add_assign(&mut self, other: &Tensor<T>) -> Result<()> {
        self.ensure_same_shape(other)?;
        self.data.iter_mut().zip(other.data.iter()).for_each(|(a, &b)| *a += b);
        Ok(())
    }

    /// Subtracts another tensor of the same shape in place.
    /// On error the receiver is left untouched.
    pub fn try_sub_assign(&mut self, other: &Tensor<T>) -> Result<()> {
        self.ensure_same_shape(other)?;
        self.data.iter_mut().zip(other.data.iter()).for_each(|(a, &b)| *a -= b);
        Ok(())
    }
}

impl Tensor<f64> {
    pub fn to_complex(&self) -> Tensor<Complex64> {
        self.map(|&re| Complex64::new(re, 0.))
    }
}

impl Tensor<f32> {
    pub fn to_complex(&self) -> Tensor<Complex32> {
        self.map(|&re| Complex32::new(re, 0.))
    }
}

impl<F> Tensor<Complex<F>>
where
    Complex<F>: Scalar,
    F: Clone + Neg<Output = F>,
{
    /// Complex conjugate of every element.
    pub fn conj(&self) -> Tensor<Complex<F>> {
        self.map(|value| Complex::new(value.re.clone(), -value.im.clone()))
    }
}

/// Multiplies every element of the tensor by the scalar on the left.
/// Same result as `tensor * k` for commutative scalars.
pub fn scale<T: Scalar>(k: T, tensor: &Tensor<T>) -> Tensor<T> {
    tensor.map(|&value| k * value)
}

macro_rules! impl_elementwise_op {
    ($trait:ident, $method:ident, $op:tt) => {
        impl<T: Scalar> $trait<&Tensor<T>> for &Tensor<T> {
            type Output = Result<Tensor<T>>;

            fn $method(self, rhs: &Tensor<T>) -> Self::Output {
                self.zip_with(rhs, |&a, &b| a $op b)
            }
        }

        impl<T: Scalar> $trait<&Tensor<T>> for Tensor<T> {
            type Output = Result<Tensor<T>>;

            fn $method(self, rhs: &Tensor<T>) -> Self::Output {
                (&self).$method(rhs)
            }
        }

        impl<T: Scalar> $trait<Tensor<T>> for Tensor<T> {
            type Output = Result<Tensor<T>>;

            fn $method(self, rhs: Tensor<T>) -> Self::Output {
                (&self).$method(&rhs)
            }
        }
    };
}

impl_elementwise_op!(Add, add, +);
impl_elementwise_op!(Sub, sub, -);

macro_rules! impl_scalar_op {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $op:tt) => {
        impl<T: Scalar> $trait<T> for &Tensor<T> {
            type Output = Tensor<T>;

            fn $method(self, rhs: T) -> Self::Output {
                self.map(|&value| value $op rhs)
            }
        }

        impl<T: Scalar> $trait<T> for Tensor<T> {
            type Output = Tensor<T>;

            fn $method(mut self, rhs: T) -> Self::Output {
                self.data.iter_mut().for_each(|value| *value = *value $op rhs);
                self
            }
        }

        impl<T: Scalar> $assign_trait<T> for Tensor<T> {
            fn $assign_method(&mut self, rhs: T) {
                self.data.iter_mut().for_each(|value| *value = *value $op rhs);
            }
        }
    };
}

impl_scalar_op!(Mul, mul, MulAssign, mul_assign, *);
impl_scalar_op!(Div, div, DivAssign, div_assign, /);

impl<T: Scalar> Neg for &Tensor<T> {
    type Output = Tensor<T>;

    fn neg(self) -> Self::Output {
        self.map(|&value| -value)
    }
}

impl<T: Scalar> Neg for Tensor<T> {
    type Output = Tensor<T>;

    fn neg(self) -> Self::Output {
        -&self
    }
}

macro_rules! impl_left_scalar_mul {
    ($($scalar:ty),+) => {
        $(
            impl Mul<&Tensor<$scalar>> for $scalar {
                type Output = Tensor<$scalar>;

                fn mul(self, rhs: &Tensor<$scalar>) -> Self::Output {
                    scale(self, rhs)
                }
            }

            impl Mul<Tensor<$scalar>> for $scalar {
                type Output = Tensor<$scalar>;

                fn mul(self, rhs: Tensor<$scalar>) -> Self::Output {
                    scale(self, &rhs)
                }
            }
        )+
    };
}

impl_left_scalar_mul!(f32, f64, Complex32, Complex64);
