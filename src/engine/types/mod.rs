use std::fmt;

use serde::{Deserialize, Serialize};

use crate::engine::errors::FormatErrorKind;

pub type Row = Vec<String>;

/// Shape of a file's content, stored once in the container header.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentKind {
    Lines = 0,
    Rows = 1,
}

impl ContentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKind::Lines => "lines",
            ContentKind::Rows => "rows",
        }
    }
}

impl TryFrom<u8> for ContentKind {
    type Error = FormatErrorKind;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        match v {
            0 => Ok(ContentKind::Lines),
            1 => Ok(ContentKind::Rows),
            other => Err(FormatErrorKind::UnknownContentKind(other)),
        }
    }
}

impl From<ContentKind> for u8 {
    fn from(k: ContentKind) -> u8 {
        k as u8
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Container layout version.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum FormatVersion {
    /// Dictionary plus plain records; only Empty/RawString/DictRef cells.
    V1 = 1,
    /// Numeric columns, RLE markers and the full typed cell set.
    V2 = 2,
}

impl FormatVersion {
    pub const CURRENT: FormatVersion = FormatVersion::V2;
}

impl Default for FormatVersion {
    fn default() -> Self {
        Self::CURRENT
    }
}

impl TryFrom<u8> for FormatVersion {
    type Error = FormatErrorKind;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        match v {
            1 => Ok(FormatVersion::V1),
            2 => Ok(FormatVersion::V2),
            other => Err(FormatErrorKind::UnknownVersion(other)),
        }
    }
}

impl From<FormatVersion> for u8 {
    fn from(v: FormatVersion) -> u8 {
        v as u8
    }
}

impl fmt::Display for FormatVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", *self as u8)
    }
}

/// Whole-file content, either plain lines or rows of cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    Lines(Vec<String>),
    Rows(Vec<Row>),
}

impl Content {
    pub fn kind(&self) -> ContentKind {
        match self {
            Content::Lines(_) => ContentKind::Lines,
            Content::Rows(_) => ContentKind::Rows,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Content::Lines(lines) => lines.len(),
            Content::Rows(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn empty(kind: ContentKind) -> Self {
        match kind {
            ContentKind::Lines => Content::Lines(Vec::new()),
            ContentKind::Rows => Content::Rows(Vec::new()),
        }
    }
}

/// A row-mode value after delta analysis, before it is given a wire tag.
#[derive(Debug, Clone, PartialEq)]
pub enum Field {
    Text(String),
    Delta(f64),
}

impl Field {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Field::Text(s) => Some(s),
            Field::Delta(_) => None,
        }
    }
}

impl From<&str> for Field {
    fn from(s: &str) -> Self {
        Field::Text(s.to_string())
    }
}

impl From<String> for Field {
    fn from(s: String) -> Self {
        Field::Text(s)
    }
}
