//! # xwt-wavelet
//!
//! Continuous wavelet transform (Morlet) used as the time–scale front end of
//! the cross-spectrum estimator.
//!
//! ## Transform Pipeline
//!
//! ```mermaid
//! graph LR
//!     A["TimeSeries::new(data)?"] -->|"validate"| B["TimeSeries"]
//!     B -->|"MorletCwt.transform(&ts, &config)?"| C["CwtResult"]
//!     C --> D[".coefficients()"]
//!     C --> E[".scales() / .freqs()"]
//!     C --> F[".coi()"]
//!     C --> G[".spectrum()"]
//! ```
//!
//! The transform can be evaluated on its own geometric scale ladder
//! (`s0 * 2^(j * dj)`) or exactly at a caller-supplied frequency grid via
//! [`CwtConfig::with_freqs`].
//!
//! ## Quick Start
//!
//! ```ignore
//! use xwt_wavelet::{CwtConfig, MorletCwt, TimeSeries, WaveletTransform};
//!
//! let ts = TimeSeries::new(data)?;
//! let config = CwtConfig::new()
//!     .with_dt(0.01)
//!     .with_freqs(vec![10.0, 8.0, 6.0, 4.0, 2.0]);
//! let result = MorletCwt.transform(&ts, &config)?;
//! assert_eq!(result.coefficients().nrows(), 5);
//! ```

mod cwt;
mod error;
mod series;

pub use cwt::{CwtConfig, CwtResult, MorletCwt, WaveletTransform, fourier_factor};
pub use error::WaveletError;
pub use series::TimeSeries;
