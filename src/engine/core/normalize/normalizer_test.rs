use crate::engine::core::normalize::normalizer::{normalize, normalize_lines, normalize_rows};
use crate::engine::types::{Content, Row};

fn rows(data: &[&[&str]]) -> Vec<Row> {
    data.iter()
        .map(|r| r.iter().map(|c| c.to_string()).collect())
        .collect()
}

fn lines(data: &[&str]) -> Vec<String> {
    data.iter().map(|s| s.to_string()).collect()
}

#[test]
fn removes_duplicate_rows_keeping_first_seen_order() {
    let (out, summary) = normalize_rows(rows(&[&["a", "1"], &["a", "1"], &["b", "2"]]));
    assert_eq!(out, rows(&[&["a", "1"], &["b", "2"]]));
    assert_eq!(summary.input_records, 3);
    assert_eq!(summary.kept_records, 2);
    assert_eq!(summary.duplicates_removed, 1);
    assert_eq!(summary.blank_removed, 0);
}

#[test]
fn trims_cells_and_strips_trailing_empties_before_comparing() {
    let (out, summary) = normalize_rows(rows(&[&[" a ", "1", "", ""], &["a", " 1"], &["c"]]));
    assert_eq!(out, rows(&[&["a", "1"], &["c"]]));
    assert_eq!(summary.duplicates_removed, 1);
}

#[test]
fn blank_rows_are_dropped_and_counted() {
    let (out, summary) = normalize_rows(rows(&[&["", "  "], &[], &["x"]]));
    assert_eq!(out, rows(&[&["x"]]));
    assert_eq!(summary.blank_removed, 2);
    assert_eq!(summary.removed(), 2);
}

#[test]
fn prunes_columns_empty_in_every_row() {
    let (out, summary) = normalize_rows(rows(&[
        &["a", "", "1", "", "z"],
        &["b", "", "2"],
        &["c", "", "", "", "y"],
    ]));
    assert_eq!(out, rows(&[&["a", "1", "z"], &["b", "2"], &["c", "", "y"]]));
    assert_eq!(summary.pruned_columns, vec![1, 3]);
}

#[test]
fn normalization_is_idempotent() {
    let input = rows(&[
        &["a", "", "1"],
        &[" a", "", "1 "],
        &["", "", ""],
        &["b", "", "", "q"],
    ]);
    let (once, _) = normalize_rows(input);
    let (twice, summary) = normalize_rows(once.clone());
    assert_eq!(once, twice);
    assert_eq!(summary.removed(), 0);
    assert!(summary.pruned_columns.is_empty());
}

#[test]
fn line_mode_trims_and_dedupes() {
    let (out, summary) = normalize_lines(lines(&["x", " x ", "", "y\r", "   ", "x"]));
    assert_eq!(out, lines(&["x", "y"]));
    assert_eq!(summary.duplicates_removed, 2);
    assert_eq!(summary.blank_removed, 2);
}

#[test]
fn normalize_preserves_content_kind() {
    let (out, _) = normalize(Content::Lines(lines(&["b", "a", "b"])));
    assert_eq!(out, Content::Lines(lines(&["b", "a"])));

    let (out, _) = normalize(Content::Rows(Vec::new()));
    assert_eq!(out, Content::Rows(Vec::new()));
}
