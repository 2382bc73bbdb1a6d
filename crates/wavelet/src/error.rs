//! Error types for the xwt-wavelet crate.

/// Error type for all fallible operations in the xwt-wavelet crate.
///
/// Covers input validation and transform configuration problems.
#[derive(Debug, Clone, thiserror::Error)]
pub enum WaveletError {
    /// Returned when the input series is shorter than the minimum required length.
    #[error("series too short: got {len} observations, need at least {min}")]
    SeriesTooShort {
        /// Number of observations provided.
        len: usize,
        /// Minimum number of observations required.
        min: usize,
    },

    /// Returned when the input data contains non-finite values (NaN or infinity).
    #[error("input data contains non-finite values")]
    NonFiniteData,

    /// Returned when a transform parameter is out of range.
    #[error("invalid CWT configuration: {0}")]
    InvalidConfig(String),

    /// Returned when an entry of an explicit frequency grid is not a positive finite number.
    #[error("invalid frequency at index {index}: {value}")]
    InvalidFrequency {
        /// Position in the frequency grid.
        index: usize,
        /// Offending value.
        value: f64,
    },
}
