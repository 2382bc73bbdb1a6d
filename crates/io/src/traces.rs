//! Reference/current trace pair container.

use crate::error::IoError;
use crate::validate;

/// Two equally long, finite traces sampled on the same clock.
#[derive(Debug, Clone, PartialEq)]
pub struct TracePair {
    /// Reference trace.
    reference: Vec<f64>,
    /// Current trace, compared against the reference.
    current: Vec<f64>,
}

impl TracePair {
    /// Creates a new `TracePair` after validating inputs.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::Validation`] listing every failed check:
    /// - either trace is empty
    /// - the traces differ in length
    /// - either trace contains NaN or infinite samples
    pub fn new(reference: Vec<f64>, current: Vec<f64>) -> Result<Self, IoError> {
        let mut checks = validate::validate_lengths(reference.len(), current.len());
        checks.extend(validate::validate_finite("reference", &reference));
        checks.extend(validate::validate_finite("current", &current));
        checks.finish()?;

        Ok(Self { reference, current })
    }

    /// Returns the reference trace.
    pub fn reference(&self) -> &[f64] {
        &self.reference
    }

    /// Returns the current trace.
    pub fn current(&self) -> &[f64] {
        &self.current
    }

    /// Returns the number of samples per trace.
    pub fn len(&self) -> usize {
        self.reference.len()
    }

    /// Always `false`; a validated pair holds at least one sample.
    pub fn is_empty(&self) -> bool {
        self.reference.is_empty()
    }

    /// Consumes self and returns `(reference, current)`.
    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>) {
        (self.reference, self.current)
    }
}
