pub mod normalizer;

pub use normalizer::{NormalizeSummary, normalize, normalize_lines, normalize_rows};

#[cfg(test)]
mod normalizer_test;
