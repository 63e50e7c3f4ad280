//! Logging setup
//!
//! Diagnostics go to stderr through a `tracing-subscriber` fmt layer. The level follows
//! the verbosity flags unless `SPYCE_LOG` holds an explicit filter directive.

use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

/// Environment variable overriding the verbosity flags
pub const LOG_ENV: &str = "SPYCE_LOG";

/// Level directive for a verbosity count
pub fn level_for(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber; later calls are ignored
pub fn init(verbose: u8, quiet: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(level_for(verbose, quiet)));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .try_init();
}
