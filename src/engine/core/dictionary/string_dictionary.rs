use std::collections::HashMap;

use indexmap::IndexMap;
use tracing::debug;

use crate::engine::core::io::{BeSliceReader, write_varint};
use crate::engine::errors::CodecError;

/// A single occurrence is interned only when longer than this many bytes.
pub const REFERENCE_OVERHEAD: usize = 6;

/// Frequency-ordered string table. Index `i` is the position in `entries`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    entries: Vec<String>,
    index: HashMap<String, usize>,
}

impl Dictionary {
    /// Interns every non-empty value seen at least twice, or once when its
    /// UTF-8 length exceeds [`REFERENCE_OVERHEAD`]. More frequent values get
    /// smaller indices; ties keep first-seen order.
    pub fn build<'a, I>(values: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut counts: IndexMap<&'a str, usize> = IndexMap::new();
        for value in values {
            if !value.is_empty() {
                *counts.entry(value).or_insert(0) += 1;
            }
        }
        let distinct = counts.len();

        let mut ranked: Vec<(&str, usize)> = counts.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));

        let entries: Vec<String> = ranked
            .into_iter()
            .filter(|(value, count)| *count >= 2 || value.len() > REFERENCE_OVERHEAD)
            .map(|(value, _)| value.to_string())
            .collect();

        debug!(
            target: "dictionary::build",
            distinct,
            interned = entries.len(),
            "Built dictionary"
        );
        Self::from_entries(entries)
    }

    pub fn from_entries(entries: Vec<String>) -> Self {
        let index = entries
            .iter()
            .enumerate()
            .map(|(i, value)| (value.clone(), i))
            .collect();
        Self { entries, index }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn index_of(&self, value: &str) -> Option<usize> {
        self.index.get(value).copied()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    /// Writes the entry count followed by each length-prefixed entry.
    pub fn write_to(&self, buf: &mut Vec<u8>) -> Result<(), CodecError> {
        write_varint(buf, self.entries.len() as u64)?;
        for entry in &self.entries {
            write_varint(buf, entry.len() as u64)?;
            buf.extend_from_slice(entry.as_bytes());
        }
        Ok(())
    }

    pub fn read_from(reader: &mut BeSliceReader<'_>) -> Result<Self, CodecError> {
        let len = reader.read_len("dictionary size")?;
        let mut entries = Vec::with_capacity(len.min(reader.remaining()));
        for _ in 0..len {
            entries.push(reader.read_string("dictionary entry")?);
        }
        Ok(Self::from_entries(entries))
    }
}
