//! Low-level Parquet reading and column extraction.

use std::path::Path;

use arrow::array::{AsArray, RecordBatch};
use arrow::compute::cast;
use arrow::datatypes::{DataType, Float64Type, SchemaRef};
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;

use crate::error::IoError;

/// Reads the schema and all record batches from a Parquet file.
///
/// # Errors
///
/// Returns [`IoError::FileNotFound`] if the file does not exist, or
/// [`IoError::Parquet`] if the file cannot be opened or read.
pub(crate) fn read_batches(path: &Path) -> Result<(SchemaRef, Vec<RecordBatch>), IoError> {
    if !path.exists() {
        return Err(IoError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let file = std::fs::File::open(path).map_err(|e| IoError::Parquet {
        reason: e.to_string(),
    })?;

    let builder = ParquetRecordBatchReaderBuilder::try_new(file)?;
    let schema = builder.schema().clone();
    let reader = builder.build()?;

    let batches: Vec<RecordBatch> = reader.collect::<Result<Vec<_>, _>>()?;

    Ok((schema, batches))
}

/// Extracts column `name` from every batch as `f64`, in file order.
///
/// Any numeric Arrow type is accepted and widened to `Float64`.
///
/// # Errors
///
/// - [`IoError::MissingColumn`] if the schema has no column `name`
/// - [`IoError::ColumnType`] if the column is not numeric
/// - [`IoError::NullValues`] if the column contains nulls
pub(crate) fn column_values(
    schema: &SchemaRef,
    batches: &[RecordBatch],
    name: &str,
    path: &Path,
) -> Result<Vec<f64>, IoError> {
    let field = schema
        .field_with_name(name)
        .map_err(|_| IoError::MissingColumn {
            name: name.to_string(),
            path: path.to_path_buf(),
        })?;
    if !field.data_type().is_numeric() {
        return Err(IoError::ColumnType {
            name: name.to_string(),
            data_type: field.data_type().to_string(),
        });
    }

    let nulls: usize = batches
        .iter()
        .filter_map(|b| b.column_by_name(name))
        .map(|c| c.null_count())
        .sum();
    if nulls > 0 {
        return Err(IoError::NullValues {
            name: name.to_string(),
            count: nulls,
        });
    }

    let mut values = Vec::with_capacity(batches.iter().map(RecordBatch::num_rows).sum());
    for batch in batches {
        let column = batch
            .column_by_name(name)
            .ok_or_else(|| IoError::MissingColumn {
                name: name.to_string(),
                path: path.to_path_buf(),
            })?;
        let column = cast(column, &DataType::Float64)?;
        values.extend_from_slice(column.as_primitive::<Float64Type>().values());
    }

    Ok(values)
}
