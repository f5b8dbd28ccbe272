//! Column summaries used to pick key and output columns.

use std::collections::BTreeSet;

use rowmatch_model::Dataset;

/// Overview of one dataset column.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSummary {
    pub name: String,
    /// Type of the non-missing values ("text", "integer", ..., or "mixed").
    pub value_type: &'static str,
    pub missing: usize,
    pub unique: usize,
    /// First non-missing value, rendered.
    pub sample: Option<String>,
}

impl ColumnSummary {
    /// Ratio of missing values to rows (0.0 to 1.0).
    pub fn missing_ratio(&self, rows: usize) -> f64 {
        if rows == 0 {
            0.0
        } else {
            self.missing as f64 / rows as f64
        }
    }
}

/// Summarizes every column of a dataset, in schema order.
pub fn summarize_columns(dataset: &Dataset) -> Vec<ColumnSummary> {
    dataset
        .columns()
        .iter()
        .enumerate()
        .map(|(index, name)| summarize_column(dataset, index, name))
        .collect()
}

fn summarize_column(dataset: &Dataset, index: usize, name: &str) -> ColumnSummary {
    let mut missing = 0usize;
    let mut uniques: BTreeSet<String> = BTreeSet::new();
    let mut value_type: Option<&'static str> = None;
    let mut sample = None;

    for row in dataset.rows() {
        let Some(value) = row.get(index).filter(|v| !v.is_missing()) else {
            missing += 1;
            continue;
        };
        let rendered = value.render();
        if sample.is_none() {
            sample = Some(rendered.clone());
        }
        uniques.insert(rendered);
        value_type = match value_type {
            None => Some(value.type_name()),
            Some(seen) if seen == value.type_name() => Some(seen),
            Some(_) => Some("mixed"),
        };
    }

    ColumnSummary {
        name: name.to_string(),
        value_type: value_type.unwrap_or("empty"),
        missing,
        unique: uniques.len(),
        sample,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rowmatch_model::CellValue;

    #[test]
    fn test_summarize_columns() {
        let dataset = Dataset::from_rows(
            "nces.csv",
            vec!["School".to_string(), "Id".to_string(), "Notes".to_string()],
            vec![
                vec![CellValue::from("LINCOLN ELEM"), CellValue::Integer(1), CellValue::Missing],
                vec![CellValue::from("ADAMS"), CellValue::Integer(1), CellValue::Missing],
                vec![CellValue::from("ADAMS"), CellValue::Float(2.5), CellValue::Missing],
            ],
        )
        .unwrap();

        let summaries = summarize_columns(&dataset);
        assert_eq!(summaries.len(), 3);

        assert_eq!(summaries[0].value_type, "text");
        assert_eq!(summaries[0].unique, 2);
        assert_eq!(summaries[0].sample.as_deref(), Some("LINCOLN ELEM"));

        assert_eq!(summaries[1].value_type, "mixed");

        assert_eq!(summaries[2].value_type, "empty");
        assert_eq!(summaries[2].missing, 3);
        assert!((summaries[2].missing_ratio(3) - 1.0).abs() < 1e-9);
        assert_eq!(summaries[2].sample, None);
    }
}
