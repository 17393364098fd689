//! Streaming token source over any [`Read`].
//!
//! The reader keeps one buffer and hands complete tokens to a callback. After
//! every read the buffer is cut just past its last whitespace byte: everything
//! before the cut is tokenized, everything after it is an unfinished token
//! that is carried into the next read. Tokens therefore never straddle a
//! chunk boundary, and the buffer only grows while a single token is longer
//! than it.
//!
//! The carried-over bytes never contain whitespace, so after a read only the
//! newly filled part of the buffer is scanned for the cut.

use std::io::{ErrorKind, Read};

use tracing::trace;

use crate::analyzer::tokenizer::{is_c_space, tokenize};

/// Default read buffer size (64 KiB).
pub const DEFAULT_BUFFER_SIZE: usize = 64 * 1024;

/// Smallest buffer the reader will use.
const MIN_BUFFER_SIZE: usize = 16;

/// Configuration options for [`TokenReader`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReaderConfig {
    /// Initial size of the read buffer in bytes. Values below 16 are raised
    /// to 16.
    pub buffer_size: usize,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            buffer_size: DEFAULT_BUFFER_SIZE,
        }
    }
}

/// Pulls whitespace-delimited tokens out of a byte stream.
///
/// Tokens are handed out as raw byte slices of the internal buffer. Input
/// does not have to be UTF-8.
///
/// ```
/// use concord_core::analyzer::TokenReader;
///
/// let mut reader = TokenReader::new("one two\nthree".as_bytes());
/// let mut tokens = Vec::new();
/// reader.for_each_token(|t| tokens.push(t.to_vec())).unwrap();
/// assert_eq!(tokens, [&b"one"[..], &b"two"[..], &b"three"[..]]);
/// ```
pub struct TokenReader<R> {
    inner: R,
    buf: Vec<u8>,
    start: usize,
    end: usize,
}

impl<R: Read> TokenReader<R> {
    /// Wraps `inner` with the default configuration.
    pub fn new(inner: R) -> Self {
        Self::with_config(inner, ReaderConfig::default())
    }

    /// Wraps `inner` with a custom configuration.
    pub fn with_config(inner: R, config: ReaderConfig) -> Self {
        Self {
            inner,
            buf: vec![0; config.buffer_size.max(MIN_BUFFER_SIZE)],
            start: 0,
            end: 0,
        }
    }

    /// Reads the stream to exhaustion and calls `f` for every token in order.
    ///
    /// Returns the number of tokens emitted.
    ///
    /// # Errors
    ///
    /// Propagates any error from the underlying reader other than
    /// [`ErrorKind::Interrupted`], which is retried.
    pub fn for_each_token<F>(&mut self, mut f: F) -> std::io::Result<u64>
    where
        F: FnMut(&[u8]),
    {
        let mut emitted = 0u64;

        loop {
            self.make_room();

            let n = match self.inner.read(&mut self.buf[self.end..]) {
                Ok(n) => n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };

            if n == 0 {
                emitted += emit_tokens(&self.buf[self.start..self.end], &mut f);
                self.start = 0;
                self.end = 0;
                return Ok(emitted);
            }

            trace!(bytes = n, pending = self.end - self.start, "read chunk");
            let fresh = self.end;
            self.end += n;

            if let Some(last_space) = self.buf[fresh..self.end]
                .iter()
                .rposition(|&b| is_c_space(b))
            {
                let cut = fresh + last_space + 1;
                emitted += emit_tokens(&self.buf[self.start..cut], &mut f);
                self.start = cut;
            }

            if self.start == self.end {
                self.start = 0;
                self.end = 0;
            }
        }
    }

    /// Ensures there is free space after `end`, either by moving the
    /// unfinished token to the front or by doubling the buffer.
    fn make_room(&mut self) {
        if self.end < self.buf.len() {
            return;
        }

        if self.start > 0 {
            self.buf.copy_within(self.start..self.end, 0);
            self.end -= self.start;
            self.start = 0;
        } else {
            let grown = self.buf.len() * 2;
            trace!(size = grown, "growing token buffer");
            self.buf.resize(grown, 0);
        }
    }
}

fn emit_tokens<F>(bytes: &[u8], f: &mut F) -> u64
where
    F: FnMut(&[u8]),
{
    let mut emitted = 0u64;
    tokenize(bytes, |token| {
        f(token);
        emitted += 1;
    });
    emitted
}
