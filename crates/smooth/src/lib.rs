//! # xwt-smooth
//!
//! Smoothing of time–scale fields, the operator `S` in the wavelet coherence
//! estimate `|S(W_xy / s)|^2 / (S(|W_x|^2 / s) * S(|W_y|^2 / s))`.
//!
//! ## Pipeline
//!
//! ```mermaid
//! graph LR
//!     A["Array2 (scales x times)"] -->|"Gaussian in Fourier domain, per row"| B["time-smoothed"]
//!     B -->|"boxcar of ns rows"| C["smoothed field"]
//! ```
//!
//! 1. **Time**: each row is zero-padded to the next power of two, transformed,
//!    multiplied by `exp(-nt * (scale/dt)^2 * omega^2)` and transformed back.
//!    The filter narrows as the scale grows, so the smoothing length follows
//!    the wavelet width.
//! 2. **Scale**: a length-`ns` moving average runs down every column with
//!    zero-padded edges and output of the same size.
//!
//! Real (`f64`) and complex ([`Complex64`](num_complex::Complex64)) fields
//! share the same code path through the [`Smoothable`] trait. Rows are
//! independent and are processed in parallel.
//!
//! ## Quick Start
//!
//! ```
//! use ndarray::Array2;
//! use xwt_smooth::{SmoothConfig, smooth_field};
//!
//! let field = Array2::<f64>::ones((4, 32));
//! let scales = [0.1, 0.2, 0.4, 0.8];
//! let config = SmoothConfig::new(3, 0.25);
//! let smoothed = smooth_field(field, &scales, 0.01, &config).unwrap();
//! assert_eq!(smoothed.dim(), (4, 32));
//! ```

mod config;
mod error;
mod frequency;
mod scale;
mod smooth;
mod time;
mod value;

pub use config::SmoothConfig;
pub use error::SmoothError;
pub use frequency::{angular_frequencies, gaussian_filter};
pub use smooth::smooth_field;
pub use value::Smoothable;
