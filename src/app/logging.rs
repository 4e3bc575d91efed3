//! Diagnostic logging to stderr.
//!
//! Runner annotations (`::debug::`, `::error::`) go through the host; this
//! subscriber only carries the binary's own tracing output.

use tracing_subscriber::EnvFilter;

/// Whether the runner has step debug logging enabled.
pub fn runner_debug() -> bool {
    std::env::var("RUNNER_DEBUG").is_ok_and(|value| value == "1")
}

/// Install the global subscriber. `RUST_LOG` wins over the runner debug switch.
pub fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "dmno_action=debug,warn" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
