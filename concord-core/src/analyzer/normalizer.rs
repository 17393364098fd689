//! Token normalization.
//!
//! Works on raw bytes so that input in any ASCII-compatible encoding keeps
//! its non-ASCII bytes intact: only ASCII punctuation is removed and only
//! ASCII letters are lowercased.

/// Marks a byte that the normalizer drops.
///
/// Non-ASCII bytes always map to themselves, so only ASCII entries of
/// [`FOLD_TABLE`] can hold this value as a drop marker.
const DROP: u8 = 0xFF;

/// Byte translation table: ASCII punctuation maps to [`DROP`], ASCII
/// uppercase maps to lowercase, every other byte maps to itself.
///
/// The punctuation class is the C-locale `ispunct` set: every printable
/// ASCII byte that is neither alphanumeric nor a space.
const FOLD_TABLE: [u8; 256] = build_fold_table();

const fn build_fold_table() -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut i = 0usize;
    while i < 256 {
        let b = i as u8;
        table[i] = if b.is_ascii_punctuation() {
            DROP
        } else {
            b.to_ascii_lowercase()
        };
        i += 1;
    }
    table
}

/// Word normalizer used for both input tokens and ignore words.
///
/// Performs the following operations on a single token:
/// - Removes every ASCII punctuation byte
/// - Lowercases ASCII letters
/// - Leaves non-ASCII bytes untouched
///
/// An empty result means the token carried no word and should be discarded.
///
/// # Examples
///
/// ```
/// use concord_core::analyzer::Normalizer;
///
/// let normalizer = Normalizer::default();
/// assert_eq!(normalizer.normalize(b"Hello,"), b"hello");
/// assert_eq!(normalizer.normalize(b"don't"), b"dont");
/// assert!(normalizer.normalize(b"--").is_empty());
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct Normalizer;

impl Normalizer {
    /// Creates a new normalizer.
    #[inline]
    pub const fn new() -> Self {
        Self
    }

    /// Normalizes a token into an existing buffer.
    ///
    /// Clears the buffer before writing and reuses its capacity.
    #[inline]
    pub fn normalize_into(&self, input: &[u8], out: &mut Vec<u8>) {
        out.clear();

        if input.iter().all(|&b| FOLD_TABLE[b as usize] == b) {
            out.extend_from_slice(input);
            return;
        }

        out.reserve(input.len());
        for &b in input {
            let folded = FOLD_TABLE[b as usize];
            if folded != DROP || b >= 0x80 {
                out.push(folded);
            }
        }
    }

    /// Normalizes a token and returns a new buffer.
    #[inline]
    pub fn normalize(&self, input: &[u8]) -> Vec<u8> {
        let mut out = Vec::with_capacity(input.len());
        self.normalize_into(input, &mut out);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn norm(input: &str) -> String {
        String::from_utf8(Normalizer::default().normalize(input.as_bytes()))
            .expect("normalizing UTF-8 yields UTF-8")
    }

    #[test]
    fn ascii_basic_lowercase() {
        assert_eq!(norm("HELLO"), "hello");
        assert_eq!(norm("HeLlO"), "hello");
        assert_eq!(norm("ABC123"), "abc123");
    }

    #[test]
    fn ascii_full_alphabet() {
        let upper: String = (b'A'..=b'Z').map(|b| b as char).collect();
        let lower: String = (b'a'..=b'z').map(|b| b as char).collect();
        assert_eq!(norm(&upper), lower);
    }

    #[test]
    fn trailing_punctuation_removed() {
        assert_eq!(norm("sat."), "sat");
        assert_eq!(norm("ran!"), "ran");
        assert_eq!(norm("\"quoted\""), "quoted");
    }

    #[test]
    fn inner_punctuation_removed() {
        assert_eq!(norm("don't"), "dont");
        assert_eq!(norm("foo-bar_baz"), "foobarbaz");
        assert_eq!(norm("e.g."), "eg");
    }

    #[test]
    fn every_ascii_punctuation_is_dropped() {
        let punct = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";
        assert_eq!(punct.len(), 32);
        assert_eq!(norm(punct), "");
    }

    #[test]
    fn punctuation_only_becomes_empty() {
        assert_eq!(norm("--"), "");
        assert_eq!(norm("..."), "");
        assert_eq!(norm("?!"), "");
    }

    #[test]
    fn digits_are_kept() {
        assert_eq!(norm("1984,"), "1984");
        assert_eq!(norm("3.14"), "314");
    }

    #[test]
    fn non_ascii_passes_through() {
        assert_eq!(norm("café"), "café");
        assert_eq!(norm("ÜBER"), "Über");
        assert_eq!(norm("ПРИВЕТ"), "ПРИВЕТ");
    }

    #[test]
    fn non_ascii_punctuation_is_kept() {
        // Only the C-locale (ASCII) punctuation class is stripped.
        assert_eq!(norm("«word»"), "«word»");
        assert_eq!(norm("wait…"), "wait…");
    }

    #[test]
    fn mixed_ascii_and_unicode() {
        assert_eq!(norm("Straße!"), "straße");
        assert_eq!(norm("(Müller)"), "müller");
    }

    #[test]
    fn output_always_valid_utf8() {
        let inputs = ["hello", "café!", "İstanbul,", "ΠΡΟΒΛΗΜΑ.", "こんにちは", "🌍-🌍"];
        for input in inputs {
            let out = norm(input);
            assert!(std::str::from_utf8(out.as_bytes()).is_ok());
        }
    }

    #[test]
    fn idempotent() {
        let n = Normalizer::default();
        for s in ["Hello,", "DON'T", "Café!", "x-y-z"] {
            let once = n.normalize(s.as_bytes());
            let twice = n.normalize(&once);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn latin1_bytes_pass_through() {
        let n = Normalizer::default();
        assert_eq!(n.normalize(b"CAF\xc9!"), b"caf\xc9");
        assert_eq!(n.normalize(b"caf\xe9"), b"caf\xe9");
        assert_ne!(n.normalize(b"caf\xe9"), n.normalize(b"caf\xe0"));
        assert_eq!(n.normalize(b"\xff\xfe."), b"\xff\xfe");
    }

    #[test]
    fn cp1251_bytes_pass_through() {
        // "Привет," in CP1251.
        let word = b"\xcf\xf0\xe8\xe2\xe5\xf2,";
        assert_eq!(Normalizer::default().normalize(word), &word[..6]);
    }

    #[test]
    fn output_never_contains_ascii_punct_or_upper() {
        let out = norm("A.b,C;d:E!f?G");
        assert!(!out.bytes().any(|b| b.is_ascii_punctuation()));
        assert!(!out.bytes().any(|b| b.is_ascii_uppercase()));
        assert_eq!(out, "abcdefg");
    }

    #[test]
    fn clean_token_fast_path() {
        assert_eq!(norm("already"), "already");
    }

    #[test]
    fn empty_input() {
        assert_eq!(norm(""), "");
    }

    #[test]
    fn control_chars_passthrough() {
        assert_eq!(norm("a\0b"), "a\0b");
        assert_eq!(norm("a\x01B"), "a\x01b");
    }

    #[test]
    fn normalize_into_reuses_capacity() {
        let normalizer = Normalizer::default();
        let mut buf = Vec::with_capacity(64);
        let cap = buf.capacity();

        normalizer.normalize_into(b"HELLO,", &mut buf);
        assert_eq!(buf, b"hello");
        assert_eq!(buf.capacity(), cap);

        normalizer.normalize_into(b"World!", &mut buf);
        assert_eq!(buf, b"world");
        assert_eq!(buf.capacity(), cap);
    }

    #[test]
    fn normalize_into_clears_previous_content() {
        let normalizer = Normalizer::default();
        let mut buf = b"stale".to_vec();
        normalizer.normalize_into(b"!!", &mut buf);
        assert!(buf.is_empty());
    }

    #[test]
    fn table_drops_exactly_punctuation() {
        for b in 0u8..128 {
            let dropped = FOLD_TABLE[b as usize] == DROP;
            assert_eq!(dropped, b.is_ascii_punctuation(), "byte {b:#04x}");
        }
        for b in 128u8..=255 {
            assert_eq!(FOLD_TABLE[b as usize], b);
        }
    }
}
