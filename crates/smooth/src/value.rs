//! Element types accepted by the smoother.

use std::ops::{Add, Mul};

use num_complex::Complex64;

/// A field element that can be smoothed.
///
/// Time smoothing runs in the complex domain; real elements are lifted with a
/// zero imaginary part and keep only the real part afterwards.
pub trait Smoothable:
    Copy + Default + Send + Sync + Add<Output = Self> + Mul<f64, Output = Self>
{
    /// Lifts the value into the complex plane.
    fn to_complex(self) -> Complex64;

    /// Projects a complex value back onto this type.
    fn from_complex(value: Complex64) -> Self;
}

impl Smoothable for f64 {
    fn to_complex(self) -> Complex64 {
        Complex64::new(self, 0.0)
    }

    fn from_complex(value: Complex64) -> Self {
        value.re
    }
}

impl Smoothable for Complex64 {
    fn to_complex(self) -> Complex64 {
        self
    }

    fn from_complex(value: Complex64) -> Self {
        value
    }
}
