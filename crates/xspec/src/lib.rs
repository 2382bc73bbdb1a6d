//! # xwt-xspec
//!
//! Frequency- and lapse-time-dependent phase and travel-time differences
//! between a reference and a current trace, from their wavelet
//! cross-spectrum (Mao et al., 2019; Torrence & Compo, 1998).
//!
//! ## Estimation Pipeline
//!
//! ```mermaid
//! graph TD
//!     A["reference, current"] -->|"Morlet CWT on the frequency grid"| B["W_ref, W_cur"]
//!     B -->|"abs(W)^2 / s, smoothed"| C["cfs1, cfs2"]
//!     B -->|"W_ref * conj(W_cur)"| D["cross"]
//!     D -->|"abs"| E["amplitude"]
//!     D -->|"/ s, smoothed"| F["smoothed cross"]
//!     F --> G["spectrum = S / sqrt(cfs1 cfs2)"]
//!     G --> H["phase"]
//!     H --> I["time shift = phase / 2 pi f"]
//!     F --> J["coherence = abs(S)^2 / (cfs1 cfs2)"]
//! ```
//!
//! The time shift is derived from the wrapped phase and therefore wraps at
//! `+-1/(2f)`. Callers needing unwrapped travel times must unwrap
//! [`CrossSpectrum::phase`] themselves.
//!
//! Degenerate inputs (for example an all-zero trace) are not rejected: the
//! affected entries of the spectrum, phase, coherence and time shift come
//! back as NaN or infinity.
//!
//! ## Quick Start
//!
//! ```ignore
//! use xwt_xspec::{XspecConfig, cross_spectrum};
//!
//! let config = XspecConfig::new(100.0, 1.0, 10.0)
//!     .with_ns(3)
//!     .with_nt(0.25)
//!     .with_vpo(12)
//!     .with_nptsfreq(50);
//! let result = cross_spectrum(&reference, &current, &config)?;
//! let dt = result.time_shift(); // (50, reference.len())
//! ```

mod coi;
mod config;
mod error;
mod estimator;
mod result;

pub use coi::{COI_SENTINEL, coi_mask, remap_coi};
pub use config::{MORLET_OMEGA0, XspecConfig, frequency_grid};
pub use error::XspecError;
pub use estimator::{cross_spectrum, cross_spectrum_with};
pub use result::CrossSpectrum;

pub use xwt_wavelet::{CwtConfig, CwtResult, MorletCwt, TimeSeries, WaveletTransform};
