//! Datasets, rows and resolved column selections.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};
use crate::value::CellValue;

/// Which of the two inputs a dataset or selection belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DatasetSide {
    /// The dataset whose rows are looked up ("File1").
    Source,
    /// The dataset searched for the best match ("File2").
    Target,
}

impl DatasetSide {
    /// Label used in result headers and messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::Source => "File1",
            Self::Target => "File2",
        }
    }

    /// Result column header for a column of this side, e.g. `File1: Name`.
    pub fn output_header(self, column: &str) -> String {
        format!("{}: {column}", self.label())
    }
}

impl fmt::Display for DatasetSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One row of a dataset, stored positionally against the dataset schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    values: Vec<CellValue>,
}

impl Row {
    pub fn values(&self) -> &[CellValue] {
        &self.values
    }

    pub fn get(&self, index: usize) -> Option<&CellValue> {
        self.values.get(index)
    }
}

/// An ordered, read-only sequence of rows sharing one column schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    name: String,
    columns: Vec<String>,
    rows: Vec<Row>,
}

impl Dataset {
    /// Creates an empty dataset, validating the schema.
    pub fn new(name: impl Into<String>, columns: Vec<String>) -> Result<Self> {
        let name = name.into();
        let mut seen = BTreeSet::new();
        for (position, column) in columns.iter().enumerate() {
            if column.trim().is_empty() {
                return Err(ModelError::EmptyColumnName {
                    dataset: name,
                    position,
                });
            }
            if !seen.insert(column.as_str()) {
                return Err(ModelError::DuplicateColumn {
                    dataset: name,
                    column: column.clone(),
                });
            }
        }
        Ok(Self {
            name,
            columns,
            rows: Vec::new(),
        })
    }

    /// Builds a dataset from a schema and positional row values.
    pub fn from_rows<I, R>(name: impl Into<String>, columns: Vec<String>, rows: I) -> Result<Self>
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = CellValue>,
    {
        let mut dataset = Self::new(name, columns)?;
        for row in rows {
            dataset.push_row(row.into_iter().collect())?;
        }
        Ok(dataset)
    }

    /// Appends a row. The row must carry exactly one value per column.
    pub fn push_row(&mut self, values: Vec<CellValue>) -> Result<()> {
        if values.len() != self.columns.len() {
            return Err(ModelError::RowWidth {
                dataset: self.name.clone(),
                row: self.rows.len(),
                expected: self.columns.len(),
                actual: values.len(),
            });
        }
        self.rows.push(Row { values });
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of a column in the schema (exact, case-sensitive match).
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Value of a named column in a row.
    pub fn value(&self, row: usize, column: &str) -> Option<&CellValue> {
        let index = self.column_index(column)?;
        self.rows.get(row)?.get(index)
    }

    /// Resolves column names against the schema, preserving their order.
    ///
    /// Repeated names are kept once, at their first position.
    pub fn select(&self, side: DatasetSide, names: &[String]) -> Result<ColumnSelection> {
        let mut unique: Vec<String> = Vec::with_capacity(names.len());
        for name in names {
            if !unique.contains(name) {
                unique.push(name.clone());
            }
        }
        self.resolve(side, &unique)
    }

    /// Resolves column names against the schema in the order given.
    ///
    /// Repeated names are kept, so a column may appear more than once.
    pub fn resolve(&self, side: DatasetSide, names: &[String]) -> Result<ColumnSelection> {
        let indices = names
            .iter()
            .map(|name| {
                self.column_index(name)
                    .ok_or_else(|| ModelError::InvalidColumn {
                        side,
                        column: name.clone(),
                        dataset: self.name.clone(),
                    })
            })
            .collect::<Result<Vec<usize>>>()?;
        Ok(ColumnSelection {
            names: names.to_vec(),
            indices,
        })
    }
}

static MISSING: CellValue = CellValue::Missing;

/// Column names resolved to schema positions of one dataset.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ColumnSelection {
    names: Vec<String>,
    indices: Vec<usize>,
}

impl ColumnSelection {
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Selected values of a row, in selection order.
    pub fn values<'a>(&'a self, row: &'a Row) -> impl Iterator<Item = &'a CellValue> + 'a {
        self.indices
            .iter()
            .map(|&index| row.get(index).unwrap_or(&MISSING))
    }

    /// Clones the selected values of a row.
    pub fn project(&self, row: &Row) -> Vec<CellValue> {
        self.values(row).cloned().collect()
    }
}
