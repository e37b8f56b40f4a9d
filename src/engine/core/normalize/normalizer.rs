use indexmap::IndexSet;
use tracing::debug;

use crate::engine::types::{Content, Row};

/// What normalization removed from the input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizeSummary {
    pub input_records: usize,
    pub kept_records: usize,
    pub duplicates_removed: usize,
    pub blank_removed: usize,
    /// Original indices of columns that were empty in every kept row.
    pub pruned_columns: Vec<usize>,
}

impl NormalizeSummary {
    pub fn removed(&self) -> usize {
        self.duplicates_removed + self.blank_removed
    }
}

pub fn normalize(content: Content) -> (Content, NormalizeSummary) {
    match content {
        Content::Lines(lines) => {
            let (lines, summary) = normalize_lines(lines);
            (Content::Lines(lines), summary)
        }
        Content::Rows(rows) => {
            let (rows, summary) = normalize_rows(rows);
            (Content::Rows(rows), summary)
        }
    }
}

/// Trims lines, drops blank ones and keeps the first occurrence of each.
pub fn normalize_lines(lines: Vec<String>) -> (Vec<String>, NormalizeSummary) {
    let mut summary = NormalizeSummary {
        input_records: lines.len(),
        ..Default::default()
    };
    let mut seen: IndexSet<String> = IndexSet::with_capacity(lines.len());

    for line in lines {
        let cleaned = line.trim();
        if cleaned.is_empty() {
            summary.blank_removed += 1;
            continue;
        }
        if !seen.insert(cleaned.to_string()) {
            summary.duplicates_removed += 1;
        }
    }

    summary.kept_records = seen.len();
    log_summary(&summary);
    (seen.into_iter().collect(), summary)
}

/// Trims cells, strips trailing empty cells, drops blank rows, keeps the
/// first occurrence of each row and finally prunes all-empty columns.
pub fn normalize_rows(rows: Vec<Row>) -> (Vec<Row>, NormalizeSummary) {
    let mut summary = NormalizeSummary {
        input_records: rows.len(),
        ..Default::default()
    };
    let mut seen: IndexSet<Row> = IndexSet::with_capacity(rows.len());

    for row in rows {
        let mut cleaned: Row = row.iter().map(|cell| cell.trim().to_string()).collect();
        while cleaned.last().is_some_and(String::is_empty) {
            cleaned.pop();
        }
        if cleaned.is_empty() {
            summary.blank_removed += 1;
            continue;
        }
        if !seen.insert(cleaned) {
            summary.duplicates_removed += 1;
        }
    }

    let (rows, pruned) = prune_empty_columns(seen.into_iter().collect());
    summary.kept_records = rows.len();
    summary.pruned_columns = pruned;
    log_summary(&summary);
    (rows, summary)
}

fn prune_empty_columns(rows: Vec<Row>) -> (Vec<Row>, Vec<usize>) {
    let column_count = rows.iter().map(Vec::len).max().unwrap_or(0);
    let mut occupied = vec![false; column_count];
    for row in &rows {
        for (column, cell) in row.iter().enumerate() {
            if !cell.is_empty() {
                occupied[column] = true;
            }
        }
    }

    let pruned: Vec<usize> = (0..column_count).filter(|&c| !occupied[c]).collect();
    if pruned.is_empty() {
        return (rows, pruned);
    }

    let rows = rows
        .into_iter()
        .map(|row| {
            row.into_iter()
                .enumerate()
                .filter(|(column, _)| occupied[*column])
                .map(|(_, cell)| cell)
                .collect()
        })
        .collect();
    (rows, pruned)
}

fn log_summary(summary: &NormalizeSummary) {
    debug!(
        target: "normalize::normalize",
        input = summary.input_records,
        kept = summary.kept_records,
        duplicates = summary.duplicates_removed,
        blank = summary.blank_removed,
        pruned_columns = ?summary.pruned_columns,
        "Normalized content"
    );
}
