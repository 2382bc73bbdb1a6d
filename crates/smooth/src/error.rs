//! Error types for the xwt-smooth crate.

/// Error type for all fallible operations in the xwt-smooth crate.
///
/// The smoother only guards shapes and parameters; numerical degeneracies
/// (zero power, huge scales) flow through as non-finite or zero values.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SmoothError {
    /// Returned when the scale vector does not have one entry per field row.
    #[error("scale count mismatch: field has {rows} rows but {scales} scales were given")]
    ScaleCountMismatch {
        /// Number of rows in the field.
        rows: usize,
        /// Number of scales supplied.
        scales: usize,
    },

    /// Returned when the boxcar window length is zero.
    #[error("boxcar window must be at least 1, got {ns}")]
    InvalidWindow {
        /// Requested window length.
        ns: usize,
    },

    /// Returned when the Gaussian width is negative or not finite.
    #[error("gaussian width must be finite and >= 0, got {nt}")]
    InvalidWidth {
        /// Requested width.
        nt: f64,
    },

    /// Returned when the sampling interval is not a positive finite number.
    #[error("sampling interval must be finite and > 0, got {dt}")]
    InvalidDt {
        /// Requested sampling interval.
        dt: f64,
    },
}
