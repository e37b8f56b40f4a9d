pub mod column_analyzer;
pub mod number_text;

pub use column_analyzer::{
    DELTA_GAIN, NUMERIC_SHARE, SAMPLE_ROWS, apply_delta, classify_columns, resolve_delta,
};
pub use number_text::{canonical_float, canonical_int, format_float, format_int, parse_numeric};

#[cfg(test)]
mod column_analyzer_test;
