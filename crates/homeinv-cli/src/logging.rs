// Tracing subscriber setup

use tracing_subscriber::{fmt, EnvFilter};

/// Install the fmt subscriber on stderr.
///
/// `RUST_LOG` wins over the configured level; `--verbose` raises the
/// configured level to debug.
pub fn init_logging(level: &str, verbose: bool) {
    let level = if verbose { "debug" } else { level };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    // A second init (tests) keeps the first subscriber
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
