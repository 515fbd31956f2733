//! Log output for the CLI
//!
//! Logs go to stderr so `--json` summaries on stdout stay machine-readable.

use is_terminal::IsTerminal;
use tracing_subscriber::EnvFilter;

use crate::config::Verbosity;

/// Build the filter: `RUST_LOG` when set and valid, otherwise `verbosity`
pub fn env_filter(verbosity: Verbosity) -> EnvFilter {
    match std::env::var(EnvFilter::DEFAULT_ENV) {
        Ok(spec) if !spec.trim().is_empty() => EnvFilter::try_new(spec)
            .unwrap_or_else(|_| EnvFilter::new(verbosity.filter_directive())),
        _ => EnvFilter::new(verbosity.filter_directive()),
    }
}

/// Install the global subscriber; later calls are no-ops
pub fn init(verbosity: Verbosity) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbosity))
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .try_init();
}
