//! Field-polymorphic ordering.
//!
//! A [`SortKey`] names one of four fields and one of two directions. Each of
//! the eight combinations maps to its own small comparator function, selected
//! by [`comparator`]. Names are validated before the collection is touched,
//! so a rejected request leaves the concordance exactly as it was.

use core::cmp::Ordering;

use concord_types::{ConcordError, SortDirection, SortField, SortKey, WordStat};
use tracing::debug;

use crate::concordance::types::Concordance;

/// Three-way comparison between two records.
pub type Comparator = fn(&WordStat, &WordStat) -> Ordering;

/// Returns the comparator for `key`.
///
/// `word` compares by byte-wise lexicographic order, numeric fields by
/// unsigned value.
#[must_use]
pub fn comparator(key: SortKey) -> Comparator {
    match (key.field, key.direction) {
        (SortField::Word, SortDirection::Asc) => word_asc,
        (SortField::Word, SortDirection::Desc) => word_desc,
        (SortField::Count, SortDirection::Asc) => count_asc,
        (SortField::Count, SortDirection::Desc) => count_desc,
        (SortField::FirstPosition, SortDirection::Asc) => first_position_asc,
        (SortField::FirstPosition, SortDirection::Desc) => first_position_desc,
        (SortField::AvgDistance, SortDirection::Asc) => avg_distance_asc,
        (SortField::AvgDistance, SortDirection::Desc) => avg_distance_desc,
    }
}

fn word_asc(a: &WordStat, b: &WordStat) -> Ordering {
    a.word.cmp(&b.word)
}

fn word_desc(a: &WordStat, b: &WordStat) -> Ordering {
    b.word.cmp(&a.word)
}

fn count_asc(a: &WordStat, b: &WordStat) -> Ordering {
    a.count.cmp(&b.count)
}

fn count_desc(a: &WordStat, b: &WordStat) -> Ordering {
    b.count.cmp(&a.count)
}

fn first_position_asc(a: &WordStat, b: &WordStat) -> Ordering {
    a.first_position.cmp(&b.first_position)
}

fn first_position_desc(a: &WordStat, b: &WordStat) -> Ordering {
    b.first_position.cmp(&a.first_position)
}

fn avg_distance_asc(a: &WordStat, b: &WordStat) -> Ordering {
    a.avg_distance.cmp(&b.avg_distance)
}

fn avg_distance_desc(a: &WordStat, b: &WordStat) -> Ordering {
    b.avg_distance.cmp(&a.avg_distance)
}

impl Concordance {
    /// Reorders the records by `key` and returns the same concordance.
    ///
    /// The sort is unstable: records that tie on a numeric field come out in
    /// no particular order.
    pub fn sort_by(&mut self, key: SortKey) -> &mut Self {
        debug!(%key, entries = self.entries.len(), "sorting concordance");
        self.entries.sort_unstable_by(comparator(key));
        self
    }

    /// Parses `field` and `direction` and sorts by them.
    ///
    /// # Errors
    ///
    /// Returns [`ConcordError::UnsupportedSortKey`] for an unknown field or
    /// direction. The concordance is left unchanged in that case.
    ///
    /// ```
    /// use concord_core::analyzer::IgnoreSet;
    /// use concord_core::concordance::build;
    ///
    /// let mut c = build("b a c a".split(' '), &IgnoreSet::empty());
    /// let words: Vec<&[u8]> = c
    ///     .sort_by_name("word", "asc")
    ///     .unwrap()
    ///     .iter()
    ///     .map(|s| s.word.as_slice())
    ///     .collect();
    /// assert_eq!(words, [&b"a"[..], &b"b"[..], &b"c"[..]]);
    ///
    /// assert!(c.sort_by_name("length", "asc").is_err());
    /// ```
    pub fn sort_by_name(
        &mut self,
        field: &str,
        direction: &str,
    ) -> Result<&mut Self, ConcordError> {
        let key = SortKey::parse(field, direction)?;
        Ok(self.sort_by(key))
    }
}
