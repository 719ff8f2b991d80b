//! Diagnostic logging for the CLI.
//!
//! Session output goes to the writers passed to each command; `tracing`
//! events from the engine and the CLI go to stderr and are silent unless
//! `RUST_LOG` or `--verbose` asks for them.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "error";
const VERBOSE_FILTER: &str = "hilo_engine=debug,hilo_cli=debug";

/// Initialize logging for the application.
///
/// Safe to call more than once; only the first call installs a subscriber.
pub fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}
