//! Whitespace tokenizer.
//!
//! Splits raw input bytes into whitespace-delimited tokens: runs of
//! C-locale whitespace (space, `\t`, `\n`, `\v`, `\f`, `\r`) separate tokens,
//! and empty tokens are never produced.
//!
//! Tokens are emitted via callback as slices of the input, so tokenizing
//! performs no allocation. Splitting happens on ASCII bytes only, which are
//! never part of a multi-byte UTF-8 sequence, so every emitted slice of valid
//! UTF-8 input is itself valid UTF-8.
//!
//! ```
//! use concord_core::analyzer::tokenizer::tokenize;
//!
//! let mut tokens = Vec::new();
//! tokenize(b"The cat\tsat.\n", |t| tokens.push(t));
//! let expected: Vec<&[u8]> = vec![&b"The"[..], &b"cat"[..], &b"sat."[..]];
//! assert_eq!(tokens, expected);
//! ```

use memchr::memchr3_iter;

/// C-locale `isspace`.
#[inline(always)]
pub const fn is_c_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r')
}

/// Whitespace bytes not covered by the `memchr3` fast path.
#[inline(always)]
const fn is_rare_space(b: u8) -> bool {
    matches!(b, 0x0b | 0x0c | b'\r')
}

/// Splits `input` on whitespace and emits every non-empty token in order.
///
/// Space, tab and newline are located with `memchr3`; the remaining
/// whitespace bytes are handled by a scalar scan inside each segment.
#[inline]
pub fn tokenize<'a, F>(input: &'a [u8], mut emit: F)
where
    F: FnMut(&'a [u8]),
{
    let mut start = 0usize;

    for i in memchr3_iter(b' ', b'\n', b'\t', input) {
        if start < i {
            split_segment(&input[start..i], &mut emit);
        }
        start = i + 1;
    }

    if start < input.len() {
        split_segment(&input[start..], &mut emit);
    }
}

#[inline(always)]
fn split_segment<'a, F>(segment: &'a [u8], emit: &mut F)
where
    F: FnMut(&'a [u8]),
{
    if !segment.iter().any(|&b| is_rare_space(b)) {
        emit(segment);
        return;
    }

    for token in segment.split(|&b| is_rare_space(b)) {
        if !token.is_empty() {
            emit(token);
        }
    }
}
