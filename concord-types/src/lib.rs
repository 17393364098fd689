//! Core types for the concordance builder.
//!
//! This crate holds the values that cross crate boundaries:
//!
//! - **Records**: [`WordStat`], one summary per distinct word
//! - **Sort keys**: [`SortField`], [`SortDirection`] and the tagged [`SortKey`]
//! - **Errors**: [`ConcordError`], surfaced by the core and by the CLI
//!
//! Keeping them here lets the binary parse and validate a sort request
//! before any input is read.

#![warn(missing_docs)]

use core::fmt;
use core::str::FromStr;
use std::borrow::Cow;

use thiserror::Error;

/// Summary statistics for one distinct normalized word.
///
/// All numeric fields are unsigned and counted in *kept-word* units: tokens
/// that normalize to nothing or that are ignored do not occupy a position.
///
/// The word is kept as raw bytes. Input in a legacy single-byte encoding
/// therefore yields one record per distinct byte string, and only display
/// goes through a lossy UTF-8 conversion.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WordStat {
    /// Normalized bytes (ASCII lowercase, ASCII punctuation removed). Unique
    /// per concordance.
    pub word: Vec<u8>,
    /// Number of occurrences in the stream. Always at least 1.
    pub count: usize,
    /// Position of the first occurrence.
    pub first_position: usize,
    /// Average gap between consecutive occurrences.
    ///
    /// For words seen more than twice this is `sum_of_gaps / (count - 1)`
    /// with truncating division. Words seen once or twice carry the raw gap
    /// sum instead, which is `0` for a single occurrence and the only gap for
    /// two.
    pub avg_distance: usize,
}

impl WordStat {
    /// Creates a record for a word seen once at `first_position`.
    #[inline]
    pub fn new(word: impl Into<Vec<u8>>, first_position: usize) -> Self {
        Self {
            word: word.into(),
            count: 1,
            first_position,
            avg_distance: 0,
        }
    }

    /// The word as text, with invalid UTF-8 replaced by `U+FFFD`.
    #[inline]
    pub fn word_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.word)
    }
}

impl fmt::Display for WordStat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{ word:{}, count:{}, fstPosition:{}, avgDistance:{} }}",
            self.word_lossy(),
            self.count, self.first_position, self.avg_distance
        )
    }
}

/// Field of [`WordStat`] a concordance can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum SortField {
    /// Lexicographic byte order of the word.
    Word = 0,
    /// Occurrence count.
    Count = 1,
    /// Position of the first occurrence.
    FirstPosition = 2,
    /// Average inter-occurrence distance.
    AvgDistance = 3,
}

impl SortField {
    /// Every field, in declaration order.
    pub const ALL: [SortField; 4] = [
        SortField::Word,
        SortField::Count,
        SortField::FirstPosition,
        SortField::AvgDistance,
    ];

    /// Canonical name used on the command line and in output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            SortField::Word => "word",
            SortField::Count => "count",
            SortField::FirstPosition => "fstPosition",
            SortField::AvgDistance => "avgDistance",
        }
    }

    /// Looks up a field by name. `firstPosition` is accepted as an alias.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "word" => Some(SortField::Word),
            "count" => Some(SortField::Count),
            "fstPosition" | "firstPosition" => Some(SortField::FirstPosition),
            "avgDistance" => Some(SortField::AvgDistance),
            _ => None,
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordering direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum SortDirection {
    /// Smallest first.
    #[default]
    Asc = 0,
    /// Largest first.
    Desc = 1,
}

impl SortDirection {
    /// Canonical name, `asc` or `desc`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }

    /// Looks up a direction by name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "asc" => Some(SortDirection::Asc),
            "desc" => Some(SortDirection::Desc),
            _ => None,
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated `(field, direction)` pair.
///
/// Every combination of [`SortField`] and [`SortDirection`] is supported, so
/// holding a `SortKey` means the request can be served. Invalid requests are
/// rejected while parsing names, never while sorting.
///
/// ```
/// use concord_types::{SortDirection, SortField, SortKey};
///
/// let key = SortKey::parse("count", "desc").unwrap();
/// assert_eq!(key, SortKey::new(SortField::Count, SortDirection::Desc));
/// assert_eq!(key.to_string(), "count desc");
///
/// assert!(SortKey::parse("length", "asc").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SortKey {
    /// Field to compare.
    pub field: SortField,
    /// Direction of the comparison.
    pub direction: SortDirection,
}

impl Default for SortKey {
    fn default() -> Self {
        Self::new(SortField::Word, SortDirection::Asc)
    }
}

impl SortKey {
    /// Creates a key from already-validated parts.
    #[inline(always)]
    pub const fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Parses a field name and a direction name.
    ///
    /// # Errors
    ///
    /// Returns [`ConcordError::UnsupportedSortKey`] carrying both strings as
    /// given when either of them is not recognized.
    pub fn parse(field: &str, direction: &str) -> Result<Self, ConcordError> {
        match (SortField::from_name(field), SortDirection::from_name(direction)) {
            (Some(field), Some(direction)) => Ok(Self::new(field, direction)),
            _ => Err(ConcordError::UnsupportedSortKey {
                field: field.to_owned(),
                direction: direction.to_owned(),
            }),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.field, self.direction)
    }
}

/// Parses the `"<field> <direction>"` form produced by `Display`.
impl FromStr for SortKey {
    type Err = ConcordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let field = parts.next().unwrap_or_default();
        let direction = parts.next().unwrap_or_default();
        let extra: Vec<&str> = parts.collect();
        if !extra.is_empty() {
            return Err(ConcordError::UnsupportedSortKey {
                field: field.to_owned(),
                direction: format!("{direction} {}", extra.join(" ")),
            });
        }
        Self::parse(field, direction)
    }
}

/// Errors raised by the concordance core.
#[derive(Error, Debug)]
pub enum ConcordError {
    /// The requested `(field, direction)` combination is not supported.
    #[error("unsupported sort key: field \"{field}\", direction \"{direction}\"")]
    UnsupportedSortKey {
        /// Field name as requested.
        field: String,
        /// Direction name as requested.
        direction: String,
    },

    /// Reading the token source failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for concordance operations.
pub type Result<T, E = ConcordError> = std::result::Result<T, E>;
