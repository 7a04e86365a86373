use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Error)]
pub enum TensorError {
    #[error("Cast Error: {0}")]
    CastError(String),
    #[error("Index Out of Bounds: {0}")]
    IndexOutOfBounds(String),
    #[error("Shape Mismatch: {0}")]
    ShapeMismatch(String),
    #[error("Unsupported Operation: {0}")]
    UnsupportedOperation(String),
    #[error("Singular Matrix: {0}")]
    Singular(String),
}
