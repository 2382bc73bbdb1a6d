//! # xwt-io
//!
//! Read reference/current trace pairs from Parquet and write
//! cross-spectrum results to Parquet and JSON. Bridges external file
//! formats into the `&[f64]` slice-based API of `xwt-xspec`.
//!
//! ## Output Layout
//!
//! Results are written in long format: one row per `(frequency, time)`
//! cell, frequency-major, highest frequency first. A small JSON summary
//! with the analysis parameters and the per-row and per-column axes is
//! written alongside.

mod error;
mod parquet_read;
mod parquet_write;
mod reader;
mod summary;
mod traces;
mod validate;
mod writer;

pub use error::IoError;
pub use reader::{ReaderConfig, read_traces};
pub use summary::{Summary, summary_path, write_summary};
pub use traces::TracePair;
pub use writer::{Compression, WriterConfig, write_parquet};
