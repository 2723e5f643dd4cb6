//! Diagnostic logging.
//!
//! Logs go to stderr: stdout carries command output (`extract` prints JSON)
//! and, for `serve`, the MCP transport itself.

use tracing_subscriber::EnvFilter;

/// Install the global subscriber. `RUST_LOG` takes precedence over `verbose`.
pub fn init(verbose: bool) {
    let default_directive = if verbose {
        "glot_migrate=debug"
    } else {
        "glot_migrate=warn"
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    // A second call (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
