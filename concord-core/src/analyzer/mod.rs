//! Text analysis pipeline.
//!
//! This module provides the text processing components:
//! - **Tokenizer**: Splits raw bytes into whitespace-delimited tokens
//! - **Reader**: Streams tokens out of any `std::io::Read`
//! - **Normalizer**: Strips punctuation and lowercases a token
//! - **Ignore**: Holds the normalized words excluded from the concordance

pub mod ignore;
pub mod normalizer;
pub mod reader;
pub mod tokenizer;

pub use ignore::IgnoreSet;
pub use normalizer::Normalizer;
pub use reader::{ReaderConfig, TokenReader};
