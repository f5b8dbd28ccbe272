//! Tests for rowmatch-model types.

use rowmatch_model::{
    CellValue, Dataset, DatasetSide, MatchConfig, MatchResult, ModelError, ResultTable,
};

fn names(values: &[&str]) -> Vec<String> {
    values.iter().map(ToString::to_string).collect()
}

#[test]
fn config_round_trips_through_toml() {
    let config = MatchConfig::new(names(&["Name", "City"]), names(&["School", "Town"]))
        .with_source_output(names(&["Name"]))
        .with_target_output(names(&["NCES_ID", "School"]))
        .with_threshold(72);
    let text = toml::to_string_pretty(&config).expect("serialize config");
    let parsed: MatchConfig = toml::from_str(&text).expect("parse config");
    assert_eq!(parsed, config);
}

#[test]
fn config_selection_errors_name_the_side() {
    let config = MatchConfig::new(names(&["A"]), names(&["W", "X", "Y", "Z"]));
    let err = config.validate().unwrap_err();
    assert_eq!(
        err.to_string(),
        "select between 1 and 3 columns for matching from File2 (got 4)"
    );
}

#[test]
fn dataset_select_reports_missing_output_column() {
    let dataset = Dataset::from_rows(
        "nces.csv",
        names(&["School", "Town"]),
        vec![vec![CellValue::from("LINCOLN ELEM"), CellValue::from("SPRINGFIELD")]],
    )
    .expect("build dataset");

    let err = dataset
        .select(DatasetSide::Target, &names(&["School", "NCES_ID"]))
        .unwrap_err();
    assert!(matches!(
        err,
        ModelError::InvalidColumn { ref column, .. } if column == "NCES_ID"
    ));
}

#[test]
fn result_table_serializes() {
    let mut table = ResultTable::new(names(&["Name"]), names(&["School"]));
    table.push(MatchResult {
        source_row: 0,
        target_row: 0,
        source_values: vec![CellValue::from("Lincoln Elementary")],
        target_values: vec![CellValue::from("LINCOLN ELEM")],
        score: 88,
    });
    let json = serde_json::to_string(&table).expect("serialize table");
    let round: ResultTable = serde_json::from_str(&json).expect("deserialize table");
    assert_eq!(round, table);
    assert_eq!(round.len(), 1);
}
