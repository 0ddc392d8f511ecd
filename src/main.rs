use clap::error::ErrorKind;
use clap::Parser;
use pairgen::error::Error;
use pairgen::params::{self, Output, Params};
use pairgen::rng::Pcg32;
use pairgen::{logger, run};
use std::process::ExitCode;

/// Writes random (row, column) pairs, one `row,col` line each.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None, allow_negative_numbers = true)]
struct Cli {
    /// Exclusive upper bound on row ids
    #[arg(value_parser = params::parse_bound)]
    max_row_id: u64,
    /// Exclusive upper bound on column ids
    #[arg(value_parser = params::parse_bound)]
    max_column_id: u64,
    /// Number of pairs to write
    #[arg(value_parser = params::parse_count)]
    bit_count: u64,
    /// Destination file, truncated if it exists; `-` for stdout.
    ///
    /// Put `--` before a path that starts with `-` (e.g. `-- -v`).
    #[arg(value_parser = parse_output, allow_hyphen_values = true)]
    output_file: Output,
    /// Seed for the random number generator; random if omitted
    #[arg(short = 's', long = "seed")]
    seed: Option<u64>,
    /// Log progress to stderr
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

fn parse_output(s: &str) -> Result<Output, Error> {
    s.parse()
}

fn usage(program: &str) -> String {
    format!("Usage: {} max_row_id max_column_id bit_count output_file.csv", program)
}

fn main() -> ExitCode {
    let program = std::env::args().next().unwrap_or_else(|| "pairgen".to_string());
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            eprintln!("{}", usage(&program));
            let rendered = e.render().to_string();
            if let Some(reason) = rendered.lines().next() {
                eprintln!("{}", reason);
            }
            return ExitCode::FAILURE;
        }
    };

    // Dropped at the end of main, which flushes pending log lines.
    let _guard = match logger::configure(cli.verbose) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("warning: logging disabled: {}", e);
            None
        }
    };

    match execute(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn execute(cli: Cli) -> Result<(), Error> {
    let params = Params::new(cli.max_row_id, cli.max_column_id, cli.bit_count, cli.output_file)?;
    let seed = match cli.seed {
        Some(seed) => {
            ftlog::info!("Using seed {}", seed);
            seed
        }
        None => {
            // Must show at the default Warn level.
            let seed: u64 = rand::random();
            ftlog::warn!("No --seed given, using seed {}", seed);
            seed
        }
    };
    run(&params, Pcg32::new(seed))?;
    Ok(())
}
