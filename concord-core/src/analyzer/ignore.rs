//! Ignore-word filtering.

use rustc_hash::FxHashSet;

use crate::analyzer::normalizer::Normalizer;

/// Set of words excluded from the concordance.
///
/// Words are normalized on insertion with the same [`Normalizer`] the builder
/// applies to input tokens, so `"The,"` and `"THE"` both exclude `the`. Words
/// that normalize to nothing are dropped.
#[derive(Debug, Clone, Default)]
pub struct IgnoreSet {
    words: FxHashSet<Vec<u8>>,
}

impl IgnoreSet {
    /// Creates an empty set (nothing is ignored).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a set from a list of words.
    pub fn from_words<I>(words: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<[u8]>,
    {
        let mut set = Self::empty();
        set.extend(words);
        set
    }

    /// Creates a set from a whitespace-separated list, e.g. `"the a an"`.
    pub fn parse(list: &str) -> Self {
        Self::from_words(list.split_ascii_whitespace())
    }

    /// Adds a word. Returns `false` if it normalized to nothing or was
    /// already present.
    pub fn insert(&mut self, word: impl AsRef<[u8]>) -> bool {
        let normalized = Normalizer::new().normalize(word.as_ref());
        if normalized.is_empty() {
            return false;
        }
        self.words.insert(normalized)
    }

    /// Checks an already-normalized word.
    #[inline]
    pub fn contains(&self, normalized: impl AsRef<[u8]>) -> bool {
        !self.words.is_empty() && self.words.contains(normalized.as_ref())
    }

    /// Number of distinct ignored words.
    #[inline]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if nothing is ignored.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterates the normalized words in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &[u8]> {
        self.words.iter().map(Vec::as_slice)
    }
}

impl<S: AsRef<[u8]>> Extend<S> for IgnoreSet {
    fn extend<T: IntoIterator<Item = S>>(&mut self, iter: T) {
        for word in iter {
            self.insert(word);
        }
    }
}

impl<S: AsRef<[u8]>> FromIterator<S> for IgnoreSet {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self::from_words(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_ignores_nothing() {
        let set = IgnoreSet::empty();
        assert!(set.is_empty());
        assert!(!set.contains("the"));
    }

    #[test]
    fn words_are_normalized_on_insert() {
        let set = IgnoreSet::from_words(["The,", "AND", "don't"]);
        assert!(set.contains("the"));
        assert!(set.contains("and"));
        assert!(set.contains("dont"));
        assert!(!set.contains("The,"));
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn punctuation_only_words_are_dropped() {
        let mut set = IgnoreSet::empty();
        assert!(!set.insert("--"));
        assert!(!set.insert(""));
        assert!(set.is_empty());
    }

    #[test]
    fn duplicates_collapse() {
        let mut set = IgnoreSet::empty();
        assert!(set.insert("the"));
        assert!(!set.insert("THE"));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn parse_splits_on_whitespace() {
        let set = IgnoreSet::parse("  a an\tthe\n");
        let mut words: Vec<&[u8]> = set.iter().collect();
        words.sort_unstable();
        assert_eq!(words, [&b"a"[..], &b"an"[..], &b"the"[..]]);
    }

    #[test]
    fn non_utf8_words_stay_distinct() {
        let set = IgnoreSet::from_words([&b"caf\xe9"[..], &b"CAF\xe0,"[..]]);
        assert_eq!(set.len(), 2);
        assert!(set.contains(b"caf\xe9"));
        assert!(set.contains(b"caf\xe0"));
        assert!(!set.contains(b"caf\xe8"));
    }

    #[test]
    fn collect_and_extend() {
        let mut set: IgnoreSet = ["of", "to"].into_iter().collect();
        set.extend(vec![String::from("In")]);
        assert_eq!(set.len(), 3);
        assert!(set.contains("in"));
    }
}
