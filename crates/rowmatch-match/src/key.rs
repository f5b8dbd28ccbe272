//! Composite key construction.

use rowmatch_model::{
    CellValue, ColumnSelection, Dataset, DatasetSide, MAX_KEY_COLUMNS, ModelError, Result, Row,
};

/// Joins values into a composite key.
///
/// Each value is rendered, trimmed and uppercased; the parts are joined with
/// a single space in the order given.
///
/// # Examples
///
/// ```
/// use rowmatch_match::composite_key;
/// use rowmatch_model::CellValue;
///
/// let values = [CellValue::from(" Lincoln Elementary"), CellValue::from("Springfield ")];
/// assert_eq!(composite_key(&values), "LINCOLN ELEMENTARY SPRINGFIELD");
/// ```
pub fn composite_key<'a>(values: impl IntoIterator<Item = &'a CellValue>) -> String {
    values
        .into_iter()
        .map(|value| value.render().trim().to_uppercase())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Builds composite keys for rows of one dataset.
///
/// The column selection is checked once, up front; key building itself
/// cannot fail.
#[derive(Debug, Clone)]
pub struct RowKeyBuilder {
    selection: ColumnSelection,
}

impl RowKeyBuilder {
    /// Resolves 1-3 key columns against the dataset schema.
    ///
    /// A column listed twice contributes its value twice.
    pub fn new(dataset: &Dataset, side: DatasetSide, columns: &[String]) -> Result<Self> {
        if columns.is_empty() || columns.len() > MAX_KEY_COLUMNS {
            return Err(ModelError::SchemaSelection {
                side,
                count: columns.len(),
                max: MAX_KEY_COLUMNS,
            });
        }
        let selection = dataset.resolve(side, columns)?;
        Ok(Self { selection })
    }

    pub fn columns(&self) -> &[String] {
        self.selection.names()
    }

    /// Composite key of one row.
    pub fn key(&self, row: &Row) -> String {
        composite_key(self.selection.values(row))
    }
}
