//! Low-level Parquet column building.

use std::path::Path;
use std::sync::Arc;

use arrow::array::{ArrayRef, BooleanArray, Float64Array, RecordBatch, UInt32Array};
use arrow::datatypes::{DataType, Field, Schema};
use ndarray::ArrayView1;
use parquet::arrow::ArrowWriter;
use parquet::file::properties::WriterProperties;
use xwt_xspec::CrossSpectrum;

use crate::error::IoError;

/// Column names of the long-format output, in schema order.
pub(crate) const COLUMNS: [&str; 11] = [
    "freq_index",
    "time_index",
    "frequency",
    "time",
    "amplitude",
    "spectrum_re",
    "spectrum_im",
    "phase",
    "coherence",
    "time_shift",
    "reliable",
];

/// Builds the Arrow schema for long-format cross-spectrum output.
///
/// Every column is non-nullable; non-finite estimates are stored as NaN.
pub(crate) fn build_schema() -> Schema {
    let fields = COLUMNS
        .iter()
        .map(|&name| {
            let data_type = match name {
                "freq_index" | "time_index" => DataType::UInt32,
                "reliable" => DataType::Boolean,
                _ => DataType::Float64,
            };
            Field::new(name, data_type, false)
        })
        .collect::<Vec<_>>();
    Schema::new(fields)
}

/// Converts frequency row `k` of `result` into an Arrow [`RecordBatch`].
///
/// `reliable` is the matching row of [`CrossSpectrum::coi_mask`].
pub(crate) fn frequency_row_to_record_batch(
    result: &CrossSpectrum,
    k: usize,
    reliable: ArrayView1<'_, bool>,
    schema: &Arc<Schema>,
) -> Result<RecordBatch, IoError> {
    let n = result.n_times();
    let freq_index = u32::try_from(k).map_err(|_| IoError::Validation {
        count: 1,
        details: format!("frequency index {k} does not fit in u32"),
    })?;
    let time_index: Vec<u32> = (0..n)
        .map(|t| {
            u32::try_from(t).map_err(|_| IoError::Validation {
                count: 1,
                details: format!("time index {t} does not fit in u32"),
            })
        })
        .collect::<Result<_, _>>()?;

    let spectrum = result.spectrum().row(k);
    let columns: Vec<ArrayRef> = vec![
        Arc::new(UInt32Array::from(vec![freq_index; n])),
        Arc::new(UInt32Array::from(time_index)),
        Arc::new(Float64Array::from(vec![result.freqs()[k]; n])),
        Arc::new(Float64Array::from(result.times())),
        Arc::new(Float64Array::from(result.amplitude().row(k).to_vec())),
        Arc::new(Float64Array::from_iter_values(spectrum.iter().map(|c| c.re))),
        Arc::new(Float64Array::from_iter_values(spectrum.iter().map(|c| c.im))),
        Arc::new(Float64Array::from(result.phase().row(k).to_vec())),
        Arc::new(Float64Array::from(result.coherence().row(k).to_vec())),
        Arc::new(Float64Array::from(result.time_shift().row(k).to_vec())),
        Arc::new(BooleanArray::from(reliable.to_vec())),
    ];

    Ok(RecordBatch::try_new(schema.clone(), columns)?)
}

/// Writes a sequence of [`RecordBatch`]es to a Parquet file at `path`.
///
/// # Errors
///
/// Returns [`IoError::Parquet`] if file creation, batch writing, or file
/// finalisation fails.
pub(crate) fn write_batches(
    path: &Path,
    batches: impl IntoIterator<Item = Result<RecordBatch, IoError>>,
    schema: &Arc<Schema>,
    props: WriterProperties,
) -> Result<(), IoError> {
    let file = std::fs::File::create(path).map_err(|e| IoError::Parquet {
        reason: e.to_string(),
    })?;
    let mut writer = ArrowWriter::try_new(file, schema.clone(), Some(props))?;

    for batch in batches {
        writer.write(&batch?)?;
    }

    writer.close()?;
    Ok(())
}
