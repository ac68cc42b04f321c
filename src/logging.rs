//! Diagnostic logging setup.
//!
//! Log events go to stderr through `tracing-subscriber`. `WAAAYBAR_LOG` takes
//! an `EnvFilter` directive; otherwise `-v` flags pick the level.

use tracing_subscriber::EnvFilter;

/// Env var holding an explicit filter directive (e.g. `waaaybar=debug`).
pub const LOG_ENV: &str = "WAAAYBAR_LOG";

/// Default filter directive for a `-v` count.
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber. Safe to call once per process.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
