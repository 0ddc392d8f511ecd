//! Run parameters, parsed and validated once before anything is opened.

use crate::error::Error;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Where generated pairs go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    Stdout,
    File(PathBuf),
}

impl FromStr for Output {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" => Err(Error::invalid_argument("output_file must not be empty")),
            "-" => Ok(Output::Stdout),
            path => Ok(Output::File(PathBuf::from(path))),
        }
    }
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Output::Stdout => write!(f, "<stdout>"),
            Output::File(path) => write!(f, "{}", path.display()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Params {
    pub max_row_id: u64,
    pub max_col_id: u64,
    pub pair_count: u64,
    pub output: Output,
}

impl Params {
    pub fn new(max_row_id: u64, max_col_id: u64, pair_count: u64, output: Output) -> Result<Self, Error> {
        check_bound("max_row_id", max_row_id)?;
        check_bound("max_col_id", max_col_id)?;
        Ok(Params {
            max_row_id,
            max_col_id,
            pair_count,
            output,
        })
    }

    /// Builds parameters from the four positional arguments
    /// `max_row_id max_column_id pair_count output_file`.
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Result<Self, Error> {
        if args.len() != 4 {
            return Err(Error::invalid_argument(format!(
                "expected 4 arguments, got {}",
                args.len()
            )));
        }
        let max_row_id = parse_bound(args[0].as_ref())?;
        let max_col_id = parse_bound(args[1].as_ref())?;
        let pair_count = parse_count(args[2].as_ref())?;
        let output = args[3].as_ref().parse()?;
        Params::new(max_row_id, max_col_id, pair_count, output)
    }
}

fn check_bound(name: &str, value: u64) -> Result<(), Error> {
    if value == 0 {
        Err(Error::invalid_argument(format!("{} must be positive", name)))
    } else {
        Ok(())
    }
}

/// Parses a non-negative integer. `_` separators are ignored, so
/// `1_000_000` is accepted, as is a single leading `+`.
pub fn parse_count(s: &str) -> Result<u64, Error> {
    let digits = s.replace('_', "");
    if digits.starts_with('-') && digits.len() > 1 {
        return Err(Error::invalid_argument(format!("must not be negative: {}", s)));
    }
    let digits = digits.strip_prefix('+').unwrap_or(&digits);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::invalid_argument(format!("invalid integer: {}", s)));
    }
    digits
        .parse()
        .map_err(|_| Error::invalid_argument(format!("integer out of range: {}", s)))
}

/// Parses an exclusive upper bound, which must be at least 1.
pub fn parse_bound(s: &str) -> Result<u64, Error> {
    let digits = s.replace('_', "");
    if digits.starts_with('-') && digits.len() > 1 {
        return Err(Error::invalid_argument(format!("must be positive: {}", s)));
    }
    match parse_count(s)? {
        0 => Err(Error::invalid_argument(format!("must be positive: {}", s))),
        bound => Ok(bound),
    }
}
