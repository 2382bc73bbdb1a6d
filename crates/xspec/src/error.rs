//! Error types for the xwt-xspec crate.

use xwt_smooth::SmoothError;
use xwt_wavelet::WaveletError;

/// Error type for all fallible operations in the xwt-xspec crate.
///
/// Parameters and input lengths are checked once, before any transform runs.
/// Numerically degenerate input is not an error; it surfaces as non-finite
/// values in the result.
#[derive(Debug, Clone, thiserror::Error)]
pub enum XspecError {
    /// Returned when an analysis parameter is out of range.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// What is wrong with it.
        reason: String,
    },

    /// Returned when the reference and current traces differ in length.
    #[error("length mismatch: reference has {reference} samples, current has {current}")]
    LengthMismatch {
        /// Reference trace length.
        reference: usize,
        /// Current trace length.
        current: usize,
    },

    /// Returned when the wavelet transform yields a field of unexpected shape.
    #[error("transform shape mismatch: expected {expected:?}, got {got:?}")]
    TransformShape {
        /// Expected `(n_freqs, n_times)`.
        expected: (usize, usize),
        /// Shape actually returned.
        got: (usize, usize),
    },

    /// Wraps a failure of the wavelet transform.
    #[error("wavelet transform failed: {0}")]
    Wavelet(#[from] WaveletError),

    /// Wraps a failure of the smoother.
    #[error("smoothing failed: {0}")]
    Smooth(#[from] SmoothError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_invalid_parameter() {
        let err = XspecError::InvalidParameter {
            name: "vpo",
            reason: "must be even".to_string(),
        };
        assert_eq!(err.to_string(), "invalid parameter `vpo`: must be even");
    }

    #[test]
    fn display_length_mismatch() {
        let err = XspecError::LengthMismatch {
            reference: 1000,
            current: 999,
        };
        assert_eq!(
            err.to_string(),
            "length mismatch: reference has 1000 samples, current has 999"
        );
    }

    #[test]
    fn display_transform_shape() {
        let err = XspecError::TransformShape {
            expected: (50, 1000),
            got: (49, 1000),
        };
        assert_eq!(
            err.to_string(),
            "transform shape mismatch: expected (50, 1000), got (49, 1000)"
        );
    }

    #[test]
    fn from_wavelet_error() {
        let err: XspecError = WaveletError::NonFiniteData.into();
        assert!(matches!(err, XspecError::Wavelet(WaveletError::NonFiniteData)));
        assert!(err.to_string().contains("non-finite"));
    }

    #[test]
    fn from_smooth_error() {
        let err: XspecError = SmoothError::InvalidWindow { ns: 0 }.into();
        assert!(matches!(err, XspecError::Smooth(_)));
    }

    #[test]
    fn error_is_send_sync_and_std_error() {
        fn assert_bounds<T: Send + Sync + std::error::Error>() {}
        assert_bounds::<XspecError>();
    }
}
