//! Conversion from Polars frames to datasets.

use std::path::Path;

use polars::prelude::{AnyValue, DataFrame};
use rowmatch_model::{CellValue, Dataset};

use crate::csv::normalize_header;
use crate::error::{IngestError, Result};

/// Converts a Polars `AnyValue` into a [`CellValue`].
///
/// Integer types widen to `i64` (unsigned values beyond `i64::MAX` are kept
/// as text); unknown types fall back to their display form.
pub fn any_to_cell(value: AnyValue<'_>) -> CellValue {
    match value {
        AnyValue::Null => CellValue::Missing,
        AnyValue::Int8(v) => CellValue::Integer(i64::from(v)),
        AnyValue::Int16(v) => CellValue::Integer(i64::from(v)),
        AnyValue::Int32(v) => CellValue::Integer(i64::from(v)),
        AnyValue::Int64(v) => CellValue::Integer(v),
        AnyValue::UInt8(v) => CellValue::Integer(i64::from(v)),
        AnyValue::UInt16(v) => CellValue::Integer(i64::from(v)),
        AnyValue::UInt32(v) => CellValue::Integer(i64::from(v)),
        AnyValue::UInt64(v) => {
            i64::try_from(v).map_or_else(|_| CellValue::Text(v.to_string()), CellValue::Integer)
        }
        AnyValue::Float32(v) => CellValue::Float(f64::from(v)),
        AnyValue::Float64(v) => CellValue::Float(v),
        AnyValue::String(s) => CellValue::Text(s.to_string()),
        AnyValue::StringOwned(s) => CellValue::Text(s.to_string()),
        AnyValue::Boolean(b) => CellValue::Boolean(b),
        other => CellValue::Text(other.to_string()),
    }
}

/// Builds a dataset from a frame, named after the file it was read from.
///
/// Column names are trimmed; rows keep file order.
pub fn frame_to_dataset(df: &DataFrame, path: &Path) -> Result<Dataset> {
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .map_or_else(|| path.display().to_string(), ToString::to_string);
    let columns: Vec<String> = df
        .get_column_names()
        .into_iter()
        .map(|c| normalize_header(c))
        .collect();
    let schema_error = |source| IngestError::Schema {
        path: path.to_path_buf(),
        source,
    };

    let mut dataset = Dataset::new(name, columns).map_err(schema_error)?;
    let frame_columns = df.get_columns();
    for row_idx in 0..df.height() {
        let mut values = Vec::with_capacity(frame_columns.len());
        for column in frame_columns {
            values.push(any_to_cell(column.get(row_idx)?));
        }
        dataset.push_row(values).map_err(schema_error)?;
    }
    Ok(dataset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::{Column, IntoColumn, NamedFrom, Series};

    #[test]
    fn test_any_to_cell_scalars() {
        assert_eq!(any_to_cell(AnyValue::Null), CellValue::Missing);
        assert_eq!(any_to_cell(AnyValue::Int32(42)), CellValue::Integer(42));
        assert_eq!(any_to_cell(AnyValue::UInt64(7)), CellValue::Integer(7));
        assert_eq!(
            any_to_cell(AnyValue::UInt64(u64::MAX)),
            CellValue::Text(u64::MAX.to_string())
        );
        assert_eq!(any_to_cell(AnyValue::Float64(1.5)), CellValue::Float(1.5));
        assert_eq!(any_to_cell(AnyValue::Boolean(false)), CellValue::Boolean(false));
        assert_eq!(
            any_to_cell(AnyValue::String("Springfield")),
            CellValue::from("Springfield")
        );
    }

    #[test]
    fn test_frame_to_dataset() {
        let columns: Vec<Column> = vec![
            Series::new(" Name ".into(), &["Lincoln Elementary", "Adams"]).into_column(),
            Series::new("Id".into(), &[Some(1_i64), None]).into_column(),
        ];
        let df = DataFrame::new(columns).unwrap();
        let dataset = frame_to_dataset(&df, Path::new("/data/montage.csv")).unwrap();

        assert_eq!(dataset.name(), "montage.csv");
        assert_eq!(dataset.columns(), ["Name", "Id"]);
        assert_eq!(dataset.len(), 2);
        assert_eq!(
            dataset.value(0, "Name"),
            Some(&CellValue::from("Lincoln Elementary"))
        );
        assert_eq!(dataset.value(1, "Id"), Some(&CellValue::Missing));
    }
}
