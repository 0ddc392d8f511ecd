use crate::error::Error;
use crate::generator::Pair;
use std::io::{self, BufWriter, Write};

const BUFFER_CAPACITY: usize = 64 * 1024;

pub fn pair<W: Write>(w: &mut W, pair: &Pair) -> io::Result<()> {
    writeln!(w, "{},{}", pair.row, pair.col)
}

/// Writes every pair as one `row,col` line and flushes. Returns the number
/// of lines written.
pub fn pairs<W: Write, I: IntoIterator<Item = Pair>>(w: W, pairs: I) -> Result<u64, Error> {
    let mut writer = BufWriter::with_capacity(BUFFER_CAPACITY, w);
    let mut written = 0u64;
    for p in pairs {
        pair(&mut writer, &p)?;
        written += 1;
    }
    writer.flush()?;
    Ok(written)
}
