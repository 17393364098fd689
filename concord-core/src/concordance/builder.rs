//! Concordance building logic.

use std::io::Read;

use concord_types::ConcordError;
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::analyzer::{IgnoreSet, Normalizer, ReaderConfig, TokenReader};
use crate::concordance::stats::ConcordanceStats;
use crate::concordance::types::{Accumulator, Concordance};

/// Single-pass concordance accumulator.
///
/// Feed tokens in stream order with [`push`](Self::push), then call
/// [`finish`](Self::finish). Positions count *kept* words only: a token that
/// normalizes to nothing or is ignored does not advance the position.
///
/// Words are keyed by their normalized bytes, so tokens that are not valid
/// UTF-8 still get one record per distinct byte string.
///
/// ```
/// use concord_core::analyzer::IgnoreSet;
/// use concord_core::concordance::ConcordanceBuilder;
///
/// let ignore = IgnoreSet::empty();
/// let mut builder = ConcordanceBuilder::new(&ignore);
/// for token in "a b a".split(' ') {
///     builder.push(token);
/// }
/// let concordance = builder.finish();
/// let a = concordance.find("a").unwrap();
/// assert_eq!((a.count, a.first_position, a.avg_distance), (2, 0, 2));
/// ```
pub struct ConcordanceBuilder<'i> {
    ignore: &'i IgnoreSet,
    normalizer: Normalizer,
    words: FxHashMap<Vec<u8>, Accumulator>,
    next_position: usize,
    norm_buf: Vec<u8>,
    tokens_read: usize,
    skipped_empty: usize,
    skipped_ignored: usize,
}

impl<'i> ConcordanceBuilder<'i> {
    /// Creates a builder that excludes the words in `ignore`.
    pub fn new(ignore: &'i IgnoreSet) -> Self {
        Self {
            ignore,
            normalizer: Normalizer::new(),
            words: FxHashMap::default(),
            next_position: 0,
            norm_buf: Vec::with_capacity(64),
            tokens_read: 0,
            skipped_empty: 0,
            skipped_ignored: 0,
        }
    }

    /// Processes one whitespace-delimited token.
    pub fn push(&mut self, token: impl AsRef<[u8]>) {
        self.tokens_read += 1;

        self.normalizer.normalize_into(token.as_ref(), &mut self.norm_buf);
        if self.norm_buf.is_empty() {
            self.skipped_empty += 1;
            return;
        }
        if self.ignore.contains(&self.norm_buf) {
            self.skipped_ignored += 1;
            return;
        }

        let position = self.next_position;
        match self.words.get_mut(self.norm_buf.as_slice()) {
            Some(acc) => acc.observe(position),
            None => {
                self.words
                    .insert(self.norm_buf.clone(), Accumulator::new(position));
            }
        }
        self.next_position += 1;
    }

    /// Counters for the tokens pushed so far.
    pub fn stats(&self) -> ConcordanceStats {
        ConcordanceStats {
            tokens_read: self.tokens_read,
            tokens_kept: self.next_position,
            skipped_empty: self.skipped_empty,
            skipped_ignored: self.skipped_ignored,
            distinct_words: self.words.len(),
        }
    }

    /// Finalizes average distances and returns the concordance.
    ///
    /// Record order is the accumulator's iteration order and carries no
    /// meaning.
    pub fn finish(self) -> Concordance {
        let stats = self.stats();
        debug!(%stats, kept_ratio = stats.kept_ratio(), "concordance built");

        let entries = self
            .words
            .into_iter()
            .map(|(word, acc)| acc.into_stat(word))
            .collect();

        Concordance { entries }
    }
}

/// Builds a concordance from an already-split token sequence.
///
/// ```
/// use concord_core::analyzer::IgnoreSet;
/// use concord_core::concordance::build;
///
/// let text = "The cat sat. The cat ran!";
/// let concordance = build(text.split_whitespace(), &IgnoreSet::empty());
/// assert_eq!(concordance.len(), 4);
/// assert_eq!(concordance.find("the").unwrap().count, 2);
/// ```
pub fn build<I>(tokens: I, ignore: &IgnoreSet) -> Concordance
where
    I: IntoIterator,
    I::Item: AsRef<[u8]>,
{
    let mut builder = ConcordanceBuilder::new(ignore);
    for token in tokens {
        builder.push(token);
    }
    builder.finish()
}

/// Builds a concordance by streaming whitespace-delimited tokens from `reader`.
///
/// The reader is consumed to exhaustion. Input does not have to be UTF-8:
/// words are compared as bytes.
///
/// # Errors
///
/// Returns [`ConcordError::Io`] if reading fails.
pub fn build_from_reader<R: Read>(
    reader: R,
    ignore: &IgnoreSet,
) -> Result<Concordance, ConcordError> {
    build_from_reader_with(reader, ignore, ReaderConfig::default())
}

/// Same as [`build_from_reader`] with a custom reader configuration.
///
/// # Errors
///
/// Returns [`ConcordError::Io`] if reading fails.
pub fn build_from_reader_with<R: Read>(
    reader: R,
    ignore: &IgnoreSet,
    config: ReaderConfig,
) -> Result<Concordance, ConcordError> {
    let mut builder = ConcordanceBuilder::new(ignore);
    TokenReader::with_config(reader, config).for_each_token(|token| builder.push(token))?;
    Ok(builder.finish())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builder_for(text: &str, ignore: &IgnoreSet) -> ConcordanceStats {
        let mut builder = ConcordanceBuilder::new(ignore);
        text.split_whitespace().for_each(|t| builder.push(t));
        builder.stats()
    }

    #[test]
    fn first_occurrence_creates_record() {
        let c = build(["Hello"], &IgnoreSet::empty());
        assert_eq!(c.len(), 1);
        let stat = c.find("hello").unwrap();
        assert_eq!(stat.count, 1);
        assert_eq!(stat.first_position, 0);
        assert_eq!(stat.avg_distance, 0);
    }

    #[test]
    fn repeat_accumulates_gap() {
        let c = build(["x", "y", "y", "z", "x"], &IgnoreSet::empty());
        let x = c.find("x").unwrap();
        assert_eq!((x.count, x.first_position, x.avg_distance), (2, 0, 4));
        let y = c.find("y").unwrap();
        assert_eq!((y.count, y.first_position, y.avg_distance), (2, 1, 1));
    }

    #[test]
    fn more_than_two_occurrences_are_averaged() {
        // a at 0, 2, 4: gaps 2 + 2 = 4, divided by 2.
        let c = build("a b a b a".split(' '), &IgnoreSet::empty());
        let a = c.find("a").unwrap();
        assert_eq!((a.count, a.first_position, a.avg_distance), (3, 0, 2));
        // b at 1, 3: two occurrences keep the raw sum.
        let b = c.find("b").unwrap();
        assert_eq!((b.count, b.first_position, b.avg_distance), (2, 1, 2));
    }

    #[test]
    fn average_uses_truncating_division() {
        // w at 0, 1, 3: gaps 1 + 2 = 3, 3 / 2 = 1.
        let c = build(["w", "w", "q", "w"], &IgnoreSet::empty());
        let w = c.find("w").unwrap();
        assert_eq!((w.count, w.avg_distance), (3, 1));
    }

    #[test]
    fn empty_tokens_do_not_advance_position() {
        let c = build(["one", "--", "...", "two"], &IgnoreSet::empty());
        assert_eq!(c.find("two").unwrap().first_position, 1);
        assert_eq!(c.len(), 2);
    }

    #[test]
    fn ignored_tokens_do_not_advance_position() {
        let ignore = IgnoreSet::from_words(["skip"]);
        let c = build(["one", "Skip", "two", "skip.", "one"], &ignore);
        assert!(c.find("skip").is_none());
        assert_eq!(c.find("two").unwrap().first_position, 1);
        let one = c.find("one").unwrap();
        assert_eq!((one.count, one.avg_distance), (2, 2));
    }

    #[test]
    fn case_and_punctuation_variants_merge() {
        let c = build(["Cat", "cat,", "CAT!", "(cat)"], &IgnoreSet::empty());
        assert_eq!(c.len(), 1);
        assert_eq!(c.find("cat").unwrap().count, 4);
    }

    #[test]
    fn stats_partition_tokens() {
        let ignore = IgnoreSet::from_words(["the"]);
        let stats = builder_for("The cat sat. -- The cat ran! ...", &ignore);
        assert_eq!(stats.tokens_read, 8);
        assert_eq!(stats.skipped_empty, 2);
        assert_eq!(stats.skipped_ignored, 2);
        assert_eq!(stats.tokens_kept, 4);
        assert_eq!(stats.distinct_words, 3);
        assert_eq!(
            stats.tokens_read,
            stats.tokens_kept + stats.skipped_empty + stats.skipped_ignored
        );
    }

    #[test]
    fn reader_and_iterator_agree() {
        let text = "It was the best of times, it was the worst of times.\n".repeat(5);
        let ignore = IgnoreSet::parse("of");

        let mut from_iter = build(text.split_whitespace(), &ignore).into_vec();
        let mut from_reader = build_from_reader_with(
            text.as_bytes(),
            &ignore,
            ReaderConfig { buffer_size: 16 },
        )
        .unwrap()
        .into_vec();

        from_iter.sort_unstable_by(|a, b| a.word.cmp(&b.word));
        from_reader.sort_unstable_by(|a, b| a.word.cmp(&b.word));
        assert_eq!(from_iter, from_reader);
    }

    #[test]
    fn latin1_words_stay_distinct() {
        let input = b"caf\xe9 caf\xe0 CAF\xe9!";
        let c = build_from_reader(&input[..], &IgnoreSet::empty()).unwrap();
        assert_eq!(c.len(), 2);
        let e = c.find(b"caf\xe9").unwrap();
        assert_eq!((e.count, e.first_position, e.avg_distance), (2, 0, 2));
        let a = c.find(b"caf\xe0").unwrap();
        assert_eq!((a.count, a.first_position, a.avg_distance), (1, 1, 0));
    }

    #[test]
    fn latin1_ignore_words_match_bytes() {
        let ignore = IgnoreSet::from_words([&b"caf\xe9"[..]]);
        let c = build([&b"caf\xe9"[..], &b"caf\xe0"[..], &b"CAF\xe9."[..]], &ignore);
        assert_eq!(c.len(), 1);
        assert_eq!(c.find(b"caf\xe0").unwrap().first_position, 0);
    }

    #[test]
    fn empty_reader_yields_empty_concordance() {
        let c = build_from_reader(&b""[..], &IgnoreSet::empty()).unwrap();
        assert!(c.is_empty());
    }
}
