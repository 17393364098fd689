//! Statistics and ConcordanceStats.

/// Counters describing one build pass.
///
/// Every token read ends up in exactly one of `tokens_kept`, `skipped_empty`
/// or `skipped_ignored`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConcordanceStats {
    /// Whitespace-delimited tokens consumed.
    pub tokens_read: usize,
    /// Tokens counted in the concordance; equals the sum of all counts.
    pub tokens_kept: usize,
    /// Tokens that normalized to an empty word.
    pub skipped_empty: usize,
    /// Tokens whose normalized form is in the ignore set.
    pub skipped_ignored: usize,
    /// Distinct words recorded.
    pub distinct_words: usize,
}

impl ConcordanceStats {
    /// Share of read tokens that were kept, in `0.0..=1.0`.
    ///
    /// Returns `1.0` when nothing was read.
    pub fn kept_ratio(&self) -> f32 {
        if self.tokens_read == 0 {
            1.0
        } else {
            self.tokens_kept as f32 / self.tokens_read as f32
        }
    }
}

impl core::fmt::Display for ConcordanceStats {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{} tokens, {} kept, {} distinct",
            self.tokens_read, self.tokens_kept, self.distinct_words
        )?;

        if self.skipped_empty > 0 || self.skipped_ignored > 0 {
            write!(
                f,
                " (skipped {} empty, {} ignored)",
                self.skipped_empty, self.skipped_ignored
            )?;
        }

        Ok(())
    }
}
