pub mod error;
pub mod generator;
pub mod logger;
pub mod params;
pub mod read;
pub mod rng;
pub mod write;

use error::Error;
use generator::RandomGenerator;
use params::{Output, Params};
use rand_core::RngCore;
use std::fs::File;
use std::io;
use std::time::Instant;

/// Generates `params.pair_count` pairs with `rng` and writes them to
/// `params.output`, truncating any existing file. Returns the number of
/// lines written.
pub fn run<R: RngCore>(params: &Params, rng: R) -> Result<u64, Error> {
    // Validate before the destination is touched.
    let pairs = RandomGenerator::from_params(params, rng)?;

    ftlog::info!(
        "Generating {} pairs in [0, {}) x [0, {}) to {}",
        params.pair_count,
        params.max_row_id,
        params.max_col_id,
        params.output
    );
    let start_time = Instant::now();

    let written = match &params.output {
        Output::Stdout => write::pairs(io::stdout().lock(), pairs)?,
        Output::File(path) => write::pairs(File::create(path)?, pairs)?,
    };

    ftlog::info!(
        "Wrote {} pairs in {:.3}s",
        written,
        start_time.elapsed().as_secs_f64()
    );
    Ok(written)
}
