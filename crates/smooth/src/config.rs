//! Smoothing window parameters.

use crate::error::SmoothError;

/// Window parameters for [`smooth_field`](crate::smooth_field).
///
/// # Example
///
/// ```
/// use xwt_smooth::SmoothConfig;
///
/// let config = SmoothConfig::new(3, 0.25);
/// assert_eq!(config.ns(), 3);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothConfig {
    /// Boxcar length across scales (rows).
    ns: usize,
    /// Gaussian width factor along time.
    nt: f64,
}

impl SmoothConfig {
    /// Creates a configuration with boxcar length `ns` and Gaussian width `nt`.
    pub fn new(ns: usize, nt: f64) -> Self {
        Self { ns, nt }
    }

    /// Configuration that leaves a field unchanged (`ns = 1`, `nt = 0`).
    pub fn identity() -> Self {
        Self::new(1, 0.0)
    }

    /// Sets the boxcar length.
    pub fn with_ns(mut self, ns: usize) -> Self {
        self.ns = ns;
        self
    }

    /// Sets the Gaussian width.
    pub fn with_nt(mut self, nt: f64) -> Self {
        self.nt = nt;
        self
    }

    /// Returns the boxcar length.
    pub fn ns(&self) -> usize {
        self.ns
    }

    /// Returns the Gaussian width.
    pub fn nt(&self) -> f64 {
        self.nt
    }

    /// Validates this configuration.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`SmoothError::InvalidWindow`] | `ns == 0` |
    /// | [`SmoothError::InvalidWidth`] | `nt < 0` or not finite |
    pub fn validate(&self) -> Result<(), SmoothError> {
        if self.ns == 0 {
            return Err(SmoothError::InvalidWindow { ns: self.ns });
        }
        if !self.nt.is_finite() || self.nt < 0.0 {
            return Err(SmoothError::InvalidWidth { nt: self.nt });
        }
        Ok(())
    }
}

impl Default for SmoothConfig {
    /// `ns = 3`, `nt = 0.25`.
    fn default() -> Self {
        Self::new(3, 0.25)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = SmoothConfig::default();
        assert_eq!(config.ns(), 3);
        assert!((config.nt() - 0.25).abs() < f64::EPSILON);
    }

    #[test]
    fn builder_chaining() {
        let config = SmoothConfig::identity().with_ns(5).with_nt(1.5);
        assert_eq!(config, SmoothConfig::new(5, 1.5));
    }

    #[test]
    fn identity_is_valid() {
        assert!(SmoothConfig::identity().validate().is_ok());
    }

    #[test]
    fn zero_window_rejected() {
        let err = SmoothConfig::new(0, 0.25).validate().unwrap_err();
        assert_eq!(err, SmoothError::InvalidWindow { ns: 0 });
    }

    #[test]
    fn bad_width_rejected() {
        for nt in [-0.1, f64::NAN, f64::INFINITY] {
            let err = SmoothConfig::new(3, nt).validate().unwrap_err();
            assert!(matches!(err, SmoothError::InvalidWidth { .. }));
        }
    }
}
