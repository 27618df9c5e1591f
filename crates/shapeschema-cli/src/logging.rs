//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "shapeschema=warn";
const VERBOSE_LOG_FILTER: &str = "shapeschema=debug";

/// Install a stderr subscriber. `RUST_LOG` overrides the default filter.
pub fn init(verbose: bool) {
    let default = if verbose {
        VERBOSE_LOG_FILTER
    } else {
        DEFAULT_LOG_FILTER
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
