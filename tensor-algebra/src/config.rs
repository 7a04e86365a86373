/// What [`Tensor::inverse_with`](crate::Tensor::inverse_with) does when the determinant is zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SingularPolicy {
    /// Returns the identity matrix of the same size.
    #[default]
    Identity,
    /// Fails with [`TensorError::Singular`](crate::TensorError::Singular).
    Error,
}

/// Settings for the matrix algebra routines.
///
/// The default compares pivots and determinants against exact zero and falls back to the identity matrix
/// when inverting a singular matrix.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AlgebraConfig {
    pivot_tolerance: f64,
    singular: SingularPolicy,
}

impl AlgebraConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the magnitude at or below which a pivot or determinant is treated as zero.
    /// Negative values are clamped to zero (exact comparison).
    pub fn with_pivot_tolerance(mut self, tolerance: f64) -> Self {
        self.pivot_tolerance = tolerance.max(0.);
        self
    }

    /// Sets the behavior of inversion for singular input.
    pub fn with_singular_policy(mut self, policy: SingularPolicy) -> Self {
        self.singular = policy;
        self
    }

    pub fn pivot_tolerance(&self) -> f64 {
        self.pivot_tolerance
    }

    pub fn singular_policy(&self) -> SingularPolicy {
        self.singular
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn can_build_config() {
        let config = AlgebraConfig::new();
        assert_eq!(config.pivot_tolerance(), 0.);
        assert_eq!(config.singular_policy(), SingularPolicy::Identity);

        let config = AlgebraConfig::new()
            .with_pivot_tolerance(1e-12)
            .with_singular_policy(SingularPolicy::Error);
        assert_eq!(config.pivot_tolerance(), 1e-12);
        assert_eq!(config.singular_policy(), SingularPolicy::Error);
    }

    #[test]
    fn negative_tolerance_is_clamped() {
        let config = AlgebraConfig::new().with_pivot_tolerance(-1.);
        assert_eq!(config.pivot_tolerance(), 0.);
    }
}
