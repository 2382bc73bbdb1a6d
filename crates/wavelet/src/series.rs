//! Validated input trace.

use crate::error::WaveletError;

/// Minimum number of samples accepted for a trace.
const MIN_LEN: usize = 2;

/// A validated, uniformly sampled trace of finite `f64` values.
///
/// Guarantees:
/// - length >= 2
/// - all values are finite (no NaN or infinity)
///
/// The sampling interval is not stored here; it travels with the transform
/// configuration.
///
/// # Example
///
/// ```
/// use xwt_wavelet::TimeSeries;
///
/// let ts = TimeSeries::new(vec![0.0, 1.0, 0.0, -1.0]).unwrap();
/// assert_eq!(ts.len(), 4);
/// ```
#[derive(Clone, Debug)]
pub struct TimeSeries {
    data: Vec<f64>,
}

impl TimeSeries {
    /// Creates a new `TimeSeries` after validating the samples.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`WaveletError::SeriesTooShort`] | `data.len() < 2` |
    /// | [`WaveletError::NonFiniteData`] | any sample is NaN or infinite |
    pub fn new(data: Vec<f64>) -> Result<Self, WaveletError> {
        if data.len() < MIN_LEN {
            return Err(WaveletError::SeriesTooShort {
                len: data.len(),
                min: MIN_LEN,
            });
        }
        if !data.iter().all(|v| v.is_finite()) {
            return Err(WaveletError::NonFiniteData);
        }
        Ok(Self { data })
    }

    /// Validates and copies a borrowed slice.
    ///
    /// # Errors
    ///
    /// Same as [`TimeSeries::new`].
    pub fn from_slice(data: &[f64]) -> Result<Self, WaveletError> {
        Self::new(data.to_vec())
    }

    /// Returns the samples as a slice.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Returns the number of samples.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always `false` for a validated series.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl AsRef<[f64]> for TimeSeries {
    fn as_ref(&self) -> &[f64] {
        &self.data
    }
}

impl TryFrom<Vec<f64>> for TimeSeries {
    type Error = WaveletError;

    fn try_from(data: Vec<f64>) -> Result<Self, Self::Error> {
        Self::new(data)
    }
}
