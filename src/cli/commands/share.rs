//! Share command.

use super::PageContext;
use crate::config::CliOverrides;
use crate::error::Result;
use crate::routes::Route;
use crate::session::{self, Share};
use serde::Serialize;
use tracing::info;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ShareOutput<'a> {
    issue_id: &'a str,
    link: &'a str,
}

/// Execute the share command.
///
/// # Errors
///
/// Returns `IssueNotFound` if the issue does not exist.
pub fn execute(id: &str, json: bool, cli: &CliOverrides) -> Result<()> {
    let ctx = PageContext::load(json, cli)?;
    let shared = run(&ctx, id)?;
    if ctx.json {
        return ctx.emit_json(ShareOutput {
            issue_id: id.trim(),
            link: &shared.link,
        });
    }
    ctx.print(&shared.link);
    Ok(())
}

/// Build the link for an issue and raise the copy toast.
///
/// # Errors
///
/// Returns `IssueNotFound` if the issue does not exist.
pub fn run(ctx: &PageContext, id: &str) -> Result<Share> {
    let issue = ctx.require_issue(id)?;
    let shared = session::share(&ctx.settings.share_base_url, &Route::Issue(issue.id.clone()));
    info!(id = %issue.id, link = %shared.link, "Shared issue link");
    ctx.notify(&shared.notification);
    Ok(shared)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands::test_support;

    #[test]
    fn share_uses_configured_base_url() {
        crate::logging::init_test_logging();
        let ctx = test_support::context(true);
        let shared = run(&ctx, "2").unwrap();
        assert_eq!(shared.link, "https://cityreport.local/issue/2");
        assert_eq!(ctx.take_notifications()[0].title, "Link copied!");
    }
}
