//! Logging initialization.

use tracing_subscriber::EnvFilter;

/// Install the global `fmt` subscriber writing to stderr.
///
/// `-v` flags win over `RUST_LOG`, which wins over the configured level.
pub fn init(verbose: u8, configured_level: &str) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(configured_level)),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
