//! Line-oriented output.

use std::io::{self, Write};

use crate::concordance::types::Concordance;

/// Writes one record per line, in the concordance's current order.
///
/// Each line has the form
/// `{ word:<w>, count:<c>, fstPosition:<p>, avgDistance:<d> }`.
/// The word is written as its raw bytes, so output keeps the input's
/// encoding. An empty concordance writes nothing. The writer is not flushed.
///
/// # Errors
///
/// Propagates any error from `out`.
pub fn write_concordance<W: Write>(concordance: &Concordance, mut out: W) -> io::Result<()> {
    for stat in concordance {
        out.write_all(b"{ word:")?;
        out.write_all(&stat.word)?;
        writeln!(
            out,
            ", count:{}, fstPosition:{}, avgDistance:{} }}",
            stat.count, stat.first_position, stat.avg_distance
        )?;
    }
    Ok(())
}
