use crate::error::Error;
use crate::generator::Pair;
use std::io::BufRead;

fn field(value: Option<&str>, line: &str) -> Result<u64, Error> {
  match value {
    Some(v) if !v.is_empty() && v.bytes().all(|b| b.is_ascii_digit()) => v
      .parse()
      .map_err(|_| Error::invalid_argument(format!("integer out of range in line {:?}", line))),
    _ => Err(Error::invalid_argument(format!("malformed pair line {:?}", line)))
  }
}

/// Parses a single `row,col` line (without its terminator).
pub fn pair(line: &str) -> Result<Pair, Error> {
  let mut fields = line.split(',');
  let row = field(fields.next(), line)?;
  let col = field(fields.next(), line)?;
  if fields.next().is_some() {
    return Err(Error::invalid_argument(format!("malformed pair line {:?}", line)));
  }
  Ok(Pair { row: row, col: col })
}

pub fn pairs<R: BufRead>(reader: R) -> impl Iterator<Item = Result<Pair, Error>> {
  reader.lines().map(|line| pair(&line?))
}
