//! Concordance construction and ordering.
//!
//! A concordance is built in one forward pass over a token stream:
//!
//! 1. Each token is normalized; empty and ignored words are skipped.
//! 2. A hash map keyed by word tracks first position, last position, count
//!    and the running sum of gaps between consecutive occurrences.
//! 3. After the stream ends, gap sums are turned into averages and the map
//!    is drained into a [`Concordance`].
//!
//! Positions count kept words only. Ordering is applied afterwards with
//! [`Concordance::sort_by`], which dispatches on a tagged
//! [`SortKey`](concord_types::SortKey).
//!
//! Threading:
//! - Building is single-threaded and synchronous. The accumulator is owned by
//!   [`ConcordanceBuilder`] and never shared before [`ConcordanceBuilder::finish`].

mod builder;
mod render;
mod sort;
mod stats;
mod types;

pub use builder::{build, build_from_reader, build_from_reader_with, ConcordanceBuilder};
pub use render::write_concordance;
pub use sort::{comparator, Comparator};
pub use stats::ConcordanceStats;
pub use types::Concordance;
