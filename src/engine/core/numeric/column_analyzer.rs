use std::collections::BTreeSet;

use tracing::debug;

use crate::engine::core::numeric::number_text::{format_float, parse_numeric};
use crate::engine::types::{Field, Row};

/// Rows inspected when classifying columns.
pub const SAMPLE_ROWS: usize = 100;
/// Minimum share of numeric cells in the sample for a column to qualify.
pub const NUMERIC_SHARE: f64 = 0.8;
/// A delta is kept only when `|delta| < DELTA_GAIN * |value|`.
pub const DELTA_GAIN: f64 = 0.8;

/// Returns the indices of columns eligible for delta encoding.
///
/// Only the first [`SAMPLE_ROWS`] rows are inspected. A column qualifies when
/// at least [`NUMERIC_SHARE`] of the sampled rows hold a number in it and the
/// difference between every consecutive pair of those numbers is finite.
pub fn classify_columns(rows: &[Row]) -> BTreeSet<usize> {
    let mut numeric = BTreeSet::new();
    let column_count = rows.iter().map(Vec::len).max().unwrap_or(0);
    let sample = &rows[..rows.len().min(SAMPLE_ROWS)];
    let required = sample.len() as f64 * NUMERIC_SHARE;

    for column in 0..column_count {
        let mut numeric_cells = 0usize;
        let mut previous: Option<f64> = None;
        let mut disqualified = false;

        for value in sample
            .iter()
            .filter_map(|row| row.get(column))
            .filter_map(|cell| parse_numeric(cell))
        {
            if let Some(prev) = previous {
                if !(value - prev).is_finite() {
                    disqualified = true;
                    break;
                }
            }
            numeric_cells += 1;
            previous = Some(value);
        }

        if !disqualified && numeric_cells > 0 && numeric_cells as f64 >= required {
            numeric.insert(column);
        }
    }

    debug!(
        target: "numeric::classify_columns",
        column_count,
        sampled = sample.len(),
        numeric = ?numeric,
        "Classified columns"
    );
    numeric
}

/// Replaces qualifying numeric cells by their difference to the same column
/// of the previous row.
pub fn apply_delta(rows: &[Row], numeric_columns: &BTreeSet<usize>) -> Vec<Vec<Field>> {
    let mut previous: Option<&Row> = None;
    let mut out = Vec::with_capacity(rows.len());

    for row in rows {
        let fields = row
            .iter()
            .enumerate()
            .map(|(column, cell)| {
                let base = previous
                    .filter(|_| numeric_columns.contains(&column))
                    .and_then(|prev| prev.get(column));
                match base.and_then(|base| delta_for(cell, base)) {
                    Some(delta) => Field::Delta(delta),
                    None => Field::Text(cell.clone()),
                }
            })
            .collect();
        out.push(fields);
        previous = Some(row);
    }

    out
}

/// Resolves a stored offset against the previous value of the same column.
pub fn resolve_delta(base: &str, offset: f64) -> Option<String> {
    parse_numeric(base).map(|b| format_float(b + offset))
}

fn delta_for(cell: &str, base: &str) -> Option<f64> {
    let value = parse_numeric(cell)?;
    let prev = parse_numeric(base)?;
    let delta = value - prev;
    if !(delta.abs() < value.abs() * DELTA_GAIN) {
        return None;
    }
    // The decoder rebuilds the text from `prev + delta`; only keep deltas
    // that print back to the original cell.
    (resolve_delta(base, delta).as_deref() == Some(cell)).then_some(delta)
}
