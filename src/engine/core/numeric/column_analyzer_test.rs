use std::collections::BTreeSet;

use crate::engine::core::numeric::column_analyzer::{
    SAMPLE_ROWS, apply_delta, classify_columns, resolve_delta,
};
use crate::engine::types::{Field, Row};

fn rows(data: &[&[&str]]) -> Vec<Row> {
    data.iter()
        .map(|r| r.iter().map(|c| c.to_string()).collect())
        .collect()
}

#[test]
fn classifies_mostly_numeric_columns() {
    let data = rows(&[
        &["id", "10", "x"],
        &["a", "12", "y"],
        &["b", "11", "z"],
        &["c", "15", "w"],
        &["d", "17", "v"],
    ]);
    // Column 1 is 5/5 numeric.
    assert_eq!(classify_columns(&data), BTreeSet::from([1]));
}

#[test]
fn header_row_does_not_disqualify_at_eighty_percent() {
    let data = rows(&[&["count"], &["1"], &["2"], &["3"], &["4"]]);
    // 4 of 5 sampled cells are numeric: exactly the threshold.
    assert_eq!(classify_columns(&data), BTreeSet::from([0]));

    let data = rows(&[&["count"], &["n/a"], &["2"], &["3"], &["4"]]);
    assert!(classify_columns(&data).is_empty());
}

#[test]
fn overflowing_difference_disqualifies_column() {
    let data = rows(&[&["1e308"], &["-1e308"], &["3"]]);
    assert!(classify_columns(&data).is_empty());
}

#[test]
fn only_first_sample_rows_are_inspected() {
    let mut data: Vec<Row> = (0..SAMPLE_ROWS).map(|i| vec![i.to_string()]).collect();
    data.extend((0..500).map(|i| vec![format!("label-{i}")]));
    assert_eq!(classify_columns(&data), BTreeSet::from([0]));
}

#[test]
fn empty_input_has_no_numeric_columns() {
    assert!(classify_columns(&[]).is_empty());
}

#[test]
fn delta_applies_when_it_shrinks_the_value() {
    let data = rows(&[&["10"], &["12"], &["11"], &["15"]]);
    let numeric = BTreeSet::from([0]);
    let fields = apply_delta(&data, &numeric);
    assert_eq!(
        fields,
        vec![
            vec![Field::Text("10".into())],
            vec![Field::Delta(2.0)],
            vec![Field::Delta(-1.0)],
            vec![Field::Delta(4.0)],
        ]
    );
}

#[test]
fn delta_skipped_when_not_smaller() {
    // 100 -> 1: delta -99 is not below 0.8 * 1.
    let data = rows(&[&["100"], &["1"]]);
    let fields = apply_delta(&data, &BTreeSet::from([0]));
    assert_eq!(fields[1], vec![Field::Text("1".into())]);
}

#[test]
fn delta_skipped_for_non_canonical_text() {
    // 10 -> "12.0" would print back as "12".
    let data = rows(&[&["10"], &["12.0"]]);
    let fields = apply_delta(&data, &BTreeSet::from([0]));
    assert_eq!(fields[1], vec![Field::Text("12.0".into())]);
}

#[test]
fn delta_only_touches_numeric_columns_and_existing_bases() {
    let data = rows(&[&["10", "10"], &["11", "11", "12"]]);
    let fields = apply_delta(&data, &BTreeSet::from([1, 2]));
    assert_eq!(
        fields[1],
        vec![
            Field::Text("11".into()),
            Field::Delta(1.0),
            // Previous row has no column 2.
            Field::Text("12".into()),
        ]
    );
}

#[test]
fn delta_uses_original_previous_row_not_encoded_one() {
    let data = rows(&[&["100"], &["102"], &["104"], &["106"]]);
    let fields = apply_delta(&data, &BTreeSet::from([0]));
    assert_eq!(
        fields[1..],
        [
            vec![Field::Delta(2.0)],
            vec![Field::Delta(2.0)],
            vec![Field::Delta(2.0)],
        ]
    );
}

#[test]
fn resolve_delta_prints_integral_results_without_fraction() {
    assert_eq!(resolve_delta("10", 2.0).as_deref(), Some("12"));
    assert_eq!(resolve_delta("1.5", 1.0).as_deref(), Some("2.5"));
    assert_eq!(resolve_delta("abc", 1.0), None);
}
