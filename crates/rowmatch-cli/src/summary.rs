use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use rowmatch_ingest::ColumnSummary;
use rowmatch_model::{DatasetSide, ResultTable};

use crate::types::RunOutcome;

pub fn print_summary(outcome: &RunOutcome, preview: usize) {
    println!("Output: {}", outcome.output.display());
    println!("{}", summary_table(outcome));
    if let Some(table) = preview_table(&outcome.table, preview) {
        println!(
            "First {} of {} matches:",
            preview.min(outcome.table.len()),
            outcome.table.len()
        );
        println!("{table}");
    } else if outcome.table.is_empty() {
        println!("No rows reached the threshold of {}.", outcome.config.threshold);
    }
}

/// Per-file row counts, key columns and match totals.
pub fn summary_table(outcome: &RunOutcome) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("File"),
        header_cell("Path"),
        header_cell("Rows"),
        header_cell("Columns"),
        header_cell("Key columns"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    for (side, info) in [
        (DatasetSide::Source, &outcome.source),
        (DatasetSide::Target, &outcome.target),
    ] {
        table.add_row(vec![
            Cell::new(side.label()).add_attribute(Attribute::Bold),
            Cell::new(info.path.display()),
            Cell::new(info.rows),
            Cell::new(info.columns),
            Cell::new(outcome.config.key_columns(side).join(", ")),
        ]);
    }
    let mean = outcome
        .table
        .mean_score()
        .map_or_else(|| "-".to_string(), |mean| format!("{mean:.1}"));
    table.add_row(vec![
        Cell::new("MATCHED")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell(format!(
            "threshold {}, mean score {mean}, {:.2}s",
            outcome.config.threshold,
            outcome.duration.as_secs_f64()
        )),
        count_cell(outcome.table.len(), Color::Green),
        dim_cell("-"),
        dim_cell(format!("{} unmatched", outcome.unmatched())),
    ]);
    table
}

/// The first `rows` matches as they appear in the result file.
pub fn preview_table(results: &ResultTable, rows: usize) -> Option<Table> {
    if rows == 0 || results.is_empty() {
        return None;
    }
    let headers = results.headers();
    let score_column = headers.len() - 1;
    let mut table = Table::new();
    table.set_header(headers.iter().map(|h| header_cell(h)).collect::<Vec<_>>());
    apply_table_style(&mut table);
    align_column(&mut table, score_column, CellAlignment::Right);
    for record in results.rows().iter().take(rows) {
        table.add_row(record.render());
    }
    Some(table)
}

/// Column overview printed by the `columns` command.
pub fn columns_table(summaries: &[ColumnSummary], rows: usize) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Column"),
        header_cell("Type"),
        header_cell("Missing"),
        header_cell("Unique"),
        header_cell("Sample"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    for (index, summary) in summaries.iter().enumerate() {
        let missing = if summary.missing == 0 {
            dim_cell(0)
        } else {
            Cell::new(format!(
                "{} ({:.0}%)",
                summary.missing,
                summary.missing_ratio(rows) * 100.0
            ))
            .fg(Color::Yellow)
        };
        table.add_row(vec![
            dim_cell(index + 1),
            Cell::new(&summary.name).add_attribute(Attribute::Bold),
            Cell::new(summary.value_type),
            missing,
            Cell::new(summary.unique),
            summary
                .sample
                .as_deref()
                .map_or_else(|| dim_cell("-"), Cell::new),
        ]);
    }
    table
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rowmatch_model::{CellValue, MatchResult};

    fn results(count: usize) -> ResultTable {
        let mut table = ResultTable::new(vec!["Name".to_string()], vec!["School".to_string()]);
        for row in 0..count {
            table.push(MatchResult {
                source_row: row,
                target_row: row,
                source_values: vec![CellValue::from(format!("Source {row}"))],
                target_values: vec![CellValue::from(format!("TARGET {row}"))],
                score: 90,
            });
        }
        table
    }

    #[test]
    fn test_preview_is_limited() {
        let mut table = preview_table(&results(5), 2).unwrap();
        table.force_no_tty();
        let rendered = table.to_string();
        assert!(rendered.contains("File1: Name"));
        assert!(rendered.contains("Source 1"));
        assert!(!rendered.contains("Source 2"));
        assert_eq!(table.row_iter().count(), 2);
    }

    #[test]
    fn test_no_preview_for_empty_results() {
        assert!(preview_table(&results(0), 10).is_none());
        assert!(preview_table(&results(3), 0).is_none());
    }

    #[test]
    fn test_columns_table() {
        let summaries = vec![ColumnSummary {
            name: "School".to_string(),
            value_type: "text",
            missing: 1,
            unique: 3,
            sample: Some("LINCOLN ELEM".to_string()),
        }];
        let mut table = columns_table(&summaries, 4);
        table.force_no_tty();
        let rendered = table.to_string();
        assert!(rendered.contains("School"));
        assert!(rendered.contains("1 (25%)"));
        assert!(rendered.contains("LINCOLN ELEM"));
    }
}
