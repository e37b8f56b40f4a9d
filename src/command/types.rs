use std::path::PathBuf;

use crate::engine::EncodeStats;
use crate::engine::types::ContentKind;

/// Outcome of compressing one file.
#[derive(Debug, Clone, PartialEq)]
pub struct CompressReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub original_size: u64,
    pub compressed_size: u64,
    pub stats: EncodeStats,
}

impl CompressReport {
    /// Records dropped by normalization, duplicates and blanks together.
    pub fn records_removed(&self) -> usize {
        self.stats.normalize.removed()
    }

    /// Size saved as a percentage of the original; 0 for empty input.
    pub fn reduction_ratio(&self) -> f64 {
        if self.original_size == 0 {
            return 0.0;
        }
        (1.0 - self.compressed_size as f64 / self.original_size as f64) * 100.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DecompressReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub kind: ContentKind,
    pub records: usize,
}
