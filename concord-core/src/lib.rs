//! Streaming word concordance.
//!
//! Reads whitespace-delimited text and records, for every distinct
//! normalized word, how often it occurs, where it first occurs and how far
//! apart its occurrences are on average.
//!
//! ```
//! use concord_core::analyzer::IgnoreSet;
//! use concord_core::concordance::{build_from_reader, write_concordance};
//! use concord_core::SortKey;
//!
//! let ignore = IgnoreSet::parse("the");
//! let mut concordance = build_from_reader("The cat sat. The cat ran!".as_bytes(), &ignore)?;
//! concordance.sort_by("count desc".parse::<SortKey>()?);
//!
//! let mut out = Vec::new();
//! write_concordance(&concordance, &mut out)?;
//! assert!(String::from_utf8(out)?.starts_with("{ word:cat, count:2,"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod analyzer;
pub mod concordance;

pub use concord_types::{ConcordError, Result, SortDirection, SortField, SortKey, WordStat};
pub use concordance::{build, build_from_reader, Concordance, ConcordanceBuilder};
