//! Version command implementation.

use crate::error::Result;
use serde::Serialize;

#[derive(Serialize)]
struct VersionOutput {
    name: &'static str,
    version: &'static str,
    build: &'static str,
}

const fn build_profile() -> &'static str {
    if cfg!(debug_assertions) {
        "dev"
    } else {
        "release"
    }
}

fn version_line() -> String {
    format!("civic version {} ({})", env!("CARGO_PKG_VERSION"), build_profile())
}

/// Execute the version command.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn execute(json: bool) -> Result<()> {
    if json {
        let output = VersionOutput {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            build: build_profile(),
        };
        println!("{}", serde_json::to_string(&output)?);
        return Ok(());
    }
    println!("{}", version_line());
    Ok(())
}
