//! Logging setup.
//!
//! `RUST_LOG` always wins. Otherwise the level comes from the CLI flags:
//! quiet = error, default = warn, `-v` = info, `-vv` = debug.
//! Set `CIVIC_LOG_FORMAT=json` for one JSON object per event.

use crate::error::{CivicError, Result};
use std::env;
use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

fn level_for(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Install the global subscriber. Logs go to stderr, or to `log_file` when set.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened or a subscriber is
/// already installed.
pub fn init_logging(verbose: u8, quiet: bool, log_file: Option<&Path>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_for(verbose, quiet)));
    let json = env::var("CIVIC_LOG_FORMAT").is_ok_and(|value| value.eq_ignore_ascii_case("json"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(verbose > 1);

    let installed = match (log_file, json) {
        (Some(path), _) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        (None, true) => builder.json().with_writer(io::stderr).try_init(),
        (None, false) => builder.with_writer(io::stderr).try_init(),
    };

    installed.map_err(|err| CivicError::Other(anyhow::anyhow!(err.to_string())))
}

/// Route logs through the test harness capture. Safe to call repeatedly.
pub fn init_test_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("civic_reports=debug"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}
