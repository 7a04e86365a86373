//! Library crate for tensor_algebra
//!

mod combining;
mod config;
mod constructive;
mod contraction;
mod display;
mod error;
mod iterator;
mod linalg;
mod math;
mod matrix;
mod misc;
mod scalar;
pub mod shape;
mod view;


pub use crate::config::{AlgebraConfig, SingularPolicy};
pub use crate::error::TensorError;
pub use crate::math::scale;
pub use crate::matrix::{MatrixView, VectorView};
pub use crate::scalar::Scalar;
pub use crate::view::INFER;

pub type Result<T> = std::result::Result<T, error::TensorError>;

/// Represents a dense multi-dimensional tensor over a scalar type T.
/// Supports shape-checked arithmetic, reshaping, concatenation, contraction and matrix algebra.
///
/// The tensor owns a contiguous row-major buffer: the last axis varies fastest. Every extent of the shape is
/// positive and the buffer length always equals the product of the extents. A rank-0 tensor has an empty shape
/// and holds exactly one element.
///
/// # Ownership
/// Every operation returns a newly allocated tensor: results never alias their operands. Mutation is limited to
/// explicit element assignment and compound assignment, both of which require exclusive access to the receiver.
///
/// # Performance
/// This implementation is not optimized for performance: there is no blocking, vectorization or parallelism.
/// It is intended for small dense problems such as transforms and small linear solves.
#[derive(Clone)]
pub struct Tensor<T> {
    data: Vec<T>,
    shape: Vec<usize>,
}
