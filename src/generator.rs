use crate::error::Error;
use crate::params::Params;
use rand::distributions::{Distribution, Uniform};
use rand_core::RngCore;
use std::convert::TryFrom;
use std::fmt;
#[cfg(feature = "serde1")] use serde::{Deserialize, Serialize};

/// One coordinate of the sparse matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
pub struct Pair {
    pub row: u64,
    pub col: u64,
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

/// Draws `pair_count` pairs uniformly from `[0, max_row_id) x [0, max_col_id)`,
/// with replacement.
#[derive(Debug, Clone)]
pub struct RandomGenerator<R: RngCore> {
    rng: R,
    rows: Uniform<u64>,
    cols: Uniform<u64>,
    remaining: u64,
}

impl<R: RngCore> RandomGenerator<R> {
    pub fn new(max_row_id: u64, max_col_id: u64, pair_count: u64, rng: R) -> Result<Self, Error> {
        if max_row_id == 0 {
            return Err(Error::invalid_argument("max_row_id must be positive"));
        }
        if max_col_id == 0 {
            return Err(Error::invalid_argument("max_col_id must be positive"));
        }
        Ok(RandomGenerator {
            rng,
            rows: Uniform::new(0, max_row_id),
            cols: Uniform::new(0, max_col_id),
            remaining: pair_count,
        })
    }

    pub fn from_params(params: &Params, rng: R) -> Result<Self, Error> {
        RandomGenerator::new(params.max_row_id, params.max_col_id, params.pair_count, rng)
    }

    pub fn remaining(&self) -> u64 {
        self.remaining
    }
}

impl<R: RngCore> Iterator for RandomGenerator<R> {
    type Item = Pair;

    fn next(&mut self) -> Option<Pair> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        // Row first, then column: keeps seeded output stable.
        let row = self.rows.sample(&mut self.rng);
        let col = self.cols.sample(&mut self.rng);
        Some(Pair { row, col })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

// Every u64 count fits in usize only on 64-bit targets; elsewhere the hint
// may be inexact and `len()` would panic.
#[cfg(target_pointer_width = "64")]
impl<R: RngCore> ExactSizeIterator for RandomGenerator<R> {}
