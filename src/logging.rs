//! Log output for the binary. The library only emits `tracing` events; nothing is printed unless a
//! subscriber is installed here.

use tracing_subscriber::filter::LevelFilter;

#[must_use]
/// Level for a `-v` count, or the configured level when no flag was given.
pub fn level_for(verbosity: u8, configured: &str) -> LevelFilter {
    match verbosity {
        0 => configured.parse().unwrap_or(LevelFilter::WARN),
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Install a stderr subscriber at the given level. A subscriber installed earlier is kept.
pub fn init(level: LevelFilter) {
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
#[path = "tests/logging.rs"]
mod tests;
