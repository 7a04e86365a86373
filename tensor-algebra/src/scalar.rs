use num_complex::{Complex32, Complex64};
use num_traits::{NumAssign, ToPrimitive};
use std::fmt;
use std::ops::Neg;

use crate::{Result, TensorError};

/// Element type of a [`Tensor`](crate::Tensor).
///
/// The engine only needs field arithmetic (through [`NumAssign`]), negation, a zero test and a way
/// to bring primitive numbers into the scalar domain. Real and complex scalars share one engine.
pub trait Scalar: NumAssign + Neg<Output = Self> + Copy + fmt::Debug + fmt::Display + Send + Sync {
    /// Converts a real number into this scalar type.
    fn from_f64(value: f64) -> Self;

    /// Absolute value (modulus for complex numbers).
    fn magnitude(&self) -> f64;

    /// Formats the value as a fixed-width string whose precision depends on its magnitude.
    fn format_fixed(&self) -> String;

    /// Checks whether the value should be treated as zero by pivoting and singularity tests.
    /// Zero tolerance means exact comparison.
    fn is_negligible(&self, tolerance: f64) -> bool {
        if tolerance > 0. {
            self.magnitude() <= tolerance
        } else {
            self.is_zero()
        }
    }

    /// Converts any primitive number into this scalar type.
    fn from_primitive<P: ToPrimitive + fmt::Debug>(value: P) -> Result<Self> {
        value
            .to_f64()
            .map(Self::from_f64)
            .ok_or_else(|| TensorError::CastError(format!("{value:?} is not representable as f64")))
    }
}

fn format_real(value: f64) -> String {
    if value >= 1000. {
        format!(" {value:.0} ")
    } else if value >= 100. {
        format!(" {value:.0}. ")
    } else if value >= 10. {
        format!(" {value:.1} ")
    } else if value == 0. {
        " 0.00 ".to_string()
    } else if value > 0. {
        format!(" {value:.2} ")
    } else if value > -10. {
        format!("{value:.2} ")
    } else if value > -100. {
        format!("{value:.1} ")
    } else if value > -1000. {
        format!("{value:.0}. ")
    } else {
        format!("{value:.0} ")
    }
}

fn format_complex(re: f64, im: f64) -> String {
    if im >= 0. {
        format!("{}+{}i", format_real(re), format_real(im))
    } else {
        format!("{}-{}i", format_real(re), format_real(-im))
    }
}

impl Scalar for f64 {
    fn from_f64(value: f64) -> Self {
        value
    }

    fn magnitude(&self) -> f64 {
        self.abs()
    }

    fn format_fixed(&self) -> String {
        format_real(*self)
    }
}

impl Scalar for f32 {
    fn from_f64(value: f64) -> Self {
        value as f32
    }

    fn magnitude(&self) -> f64 {
        self.abs() as f64
    }

    fn format_fixed(&self) -> String {
        format_real(*self as f64)
    }
}

impl Scalar for Complex64 {
    fn from_f64(value: f64) -> Self {
        Complex64::new(value, 0.)
    }

    fn magnitude(&self) -> f64 {
        self.norm()
    }

    fn format_fixed(&self) -> String {
        format_complex(self.re, self.im)
    }
}

impl Scalar for Complex32 {
    fn from_f64(value: f64) -> Self {
        Complex32::new(value as f32, 0.)
    }

    fn magnitude(&self) -> f64 {
        self.norm() as f64
    }

    fn format_fixed(&self) -> String {
        format_complex(self.re as f64, self.im as f64)
    }
}
