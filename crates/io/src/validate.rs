//! Accumulated validation utilities.
//!
//! [`ValidationCollector`] gathers every problem found in a trace pair into a
//! single [`IoError::Validation`], so a user fixing an input file sees all of
//! them at once.

use crate::error::IoError;

/// Offending indices listed individually before the rest are summarised.
const MAX_REPORTED: usize = 5;

/// Accumulates validation errors and converts them into a single
/// [`IoError::Validation`].
pub(crate) struct ValidationCollector {
    errors: Vec<String>,
}

impl ValidationCollector {
    /// Create an empty collector.
    pub(crate) fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Record one validation error.
    pub(crate) fn push(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    /// Move every error of `other` into this collector.
    pub(crate) fn extend(&mut self, other: ValidationCollector) {
        self.errors.extend(other.errors);
    }

    /// Returns the number of recorded errors.
    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.errors.len()
    }

    /// Consume the collector and return `Ok(())` if no errors were recorded,
    /// or `Err(IoError::Validation { count, details })` otherwise.
    ///
    /// The `details` string joins all messages with `"; "`.
    pub(crate) fn finish(self) -> Result<(), IoError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(IoError::Validation {
                count: self.errors.len(),
                details: self.errors.join("; "),
            })
        }
    }
}

/// Check that both traces are non-empty and equally long.
pub(crate) fn validate_lengths(reference_len: usize, current_len: usize) -> ValidationCollector {
    let mut c = ValidationCollector::new();

    if reference_len == 0 {
        c.push("reference trace is empty");
    }
    if current_len == 0 {
        c.push("current trace is empty");
    }
    if reference_len != current_len {
        c.push(format!(
            "current length {current_len} != reference length {reference_len}"
        ));
    }

    c
}

/// Check that every sample of `values` is finite.
///
/// The first few offending indices are listed; the remainder is counted in a
/// single trailing message.
pub(crate) fn validate_finite(name: &str, values: &[f64]) -> ValidationCollector {
    let mut c = ValidationCollector::new();

    let bad: Vec<(usize, f64)> = values
        .iter()
        .copied()
        .enumerate()
        .filter(|(_, v)| !v.is_finite())
        .collect();

    for &(i, v) in bad.iter().take(MAX_REPORTED) {
        c.push(format!("non-finite {name} sample at index {i}: {v}"));
    }
    if bad.len() > MAX_REPORTED {
        c.push(format!(
            "{} more non-finite {name} sample(s)",
            bad.len() - MAX_REPORTED
        ));
    }

    c
}
