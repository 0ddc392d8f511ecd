use ftlog::{LevelFilter, LoggerGuard};

/// Starts the async logger on stderr. Stdout is left alone since it may be
/// the output destination. Keep the guard alive until exit so queued lines
/// are flushed.
pub fn configure(verbose: bool) -> Result<LoggerGuard, String> {
    let level = if verbose { LevelFilter::Info } else { LevelFilter::Warn };
    ftlog::Builder::new()
        // no root appender: everything goes to stderr
        .max_log_level(level)
        .try_init()
        .map_err(|e| e.to_string())
}
