use super::*;
use std::fmt;

impl<T: Scalar> Tensor<T> {
    /// Formats every element with [`Scalar::format_fixed`] in row-major order.
    /// Together with [`Tensor::shape`] this is everything a text renderer needs.
    pub fn formatted_elements(&self) -> Vec<String> {
        self.elements().map(Scalar::format_fixed).collect()
    }
}

impl<T: Scalar> fmt::Display for Tensor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tensor{:?} [{}]", self.shape, self.formatted_elements().join(","))
    }
}
