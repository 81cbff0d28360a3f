//! Login page stub. There is no authentication; the page only explains that.

use super::{PageContext, heading};
use crate::config::CliOverrides;
use crate::error::Result;
use serde::Serialize;
use tracing::info;

#[derive(Serialize)]
struct LoginOutput<'a> {
    authenticated: bool,
    actor: &'a str,
    message: &'static str,
}

const MESSAGE: &str = "Sign-in is not available. Pass --actor or set `actor` in config to \
                       choose the name shown on your reports.";

/// Execute the login command.
///
/// # Errors
///
/// Returns an error if configuration cannot be loaded.
pub fn execute(json: bool, cli: &CliOverrides) -> Result<()> {
    run(&PageContext::load(json, cli)?)
}

/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn run(ctx: &PageContext) -> Result<()> {
    info!(actor = %ctx.settings.actor, "Rendering login page");
    if ctx.json {
        return ctx.emit_json(LoginOutput {
            authenticated: false,
            actor: &ctx.settings.actor,
            message: MESSAGE,
        });
    }

    let mut out = heading("Login");
    out.push_str(MESSAGE);
    out.push_str(&format!("\n\nCurrently browsing as: {}\n", ctx.settings.actor));
    ctx.print(&out);
    Ok(())
}
