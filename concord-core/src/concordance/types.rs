//! Concordance types.

use concord_types::WordStat;

/// Per-word state kept while the stream is being consumed.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Accumulator {
    pub first_position: usize,
    pub last_seen: usize,
    pub count: usize,
    pub distance_sum: usize,
}

impl Accumulator {
    #[inline(always)]
    pub const fn new(position: usize) -> Self {
        Self {
            first_position: position,
            last_seen: position,
            count: 1,
            distance_sum: 0,
        }
    }

    /// Records another occurrence at `position`.
    #[inline(always)]
    pub fn observe(&mut self, position: usize) {
        debug_assert!(position > self.last_seen);
        self.count += 1;
        self.distance_sum += position - self.last_seen;
        self.last_seen = position;
    }

    /// Average distance as reported in [`WordStat::avg_distance`].
    ///
    /// Only counts above two are divided; one or two occurrences report the
    /// raw gap sum.
    #[inline(always)]
    pub const fn avg_distance(&self) -> usize {
        if self.count > 2 {
            self.distance_sum / (self.count - 1)
        } else {
            self.distance_sum
        }
    }

    pub fn into_stat(self, word: Vec<u8>) -> WordStat {
        WordStat {
            word,
            count: self.count,
            first_position: self.first_position,
            avg_distance: self.avg_distance(),
        }
    }
}

/// Word concordance: one [`WordStat`] per distinct normalized word.
///
/// Produced by [`build`](crate::concordance::build) in unspecified order;
/// use [`sort_by`](Concordance::sort_by) to impose one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Concordance {
    pub(crate) entries: Vec<WordStat>,
}

impl Concordance {
    /// Creates an empty concordance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of distinct words.
    #[inline(always)]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no word was recorded.
    #[inline(always)]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Records in current order.
    #[inline(always)]
    pub fn as_slice(&self) -> &[WordStat] {
        &self.entries
    }

    /// Iterates records in current order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, WordStat> {
        self.entries.iter()
    }

    /// Finds the record for a normalized word.
    ///
    /// Linear scan; intended for inspection, not for hot paths.
    pub fn find(&self, word: impl AsRef<[u8]>) -> Option<&WordStat> {
        let word = word.as_ref();
        self.entries.iter().find(|stat| stat.word == word)
    }

    /// Sum of all counts, i.e. the number of kept tokens.
    pub fn total_count(&self) -> usize {
        self.entries.iter().map(|stat| stat.count).sum()
    }

    /// Consumes the concordance and returns its records.
    pub fn into_vec(self) -> Vec<WordStat> {
        self.entries
    }
}

impl From<Vec<WordStat>> for Concordance {
    fn from(entries: Vec<WordStat>) -> Self {
        Self { entries }
    }
}

impl<'a> IntoIterator for &'a Concordance {
    type Item = &'a WordStat;
    type IntoIter = std::slice::Iter<'a, WordStat>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl IntoIterator for Concordance {
    type Item = WordStat;
    type IntoIter = std::vec::IntoIter<WordStat>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
