//! Vote command: press the support button on an issue page.

use super::PageContext;
use crate::cli::VoteArgs;
use crate::config::CliOverrides;
use crate::error::Result;
use crate::format::pluralize;
use crate::session::VoteToggle;
use serde::Serialize;
use tracing::info;

#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VoteOutcome {
    pub issue_id: String,
    pub voted: bool,
    pub votes: u32,
}

/// Execute the vote command.
///
/// # Errors
///
/// Returns `IssueNotFound` if the issue does not exist.
pub fn execute(args: &VoteArgs, json: bool, cli: &CliOverrides) -> Result<()> {
    let ctx = PageContext::load(json, cli)?;
    let outcome = run(&ctx, args)?;

    if ctx.json {
        return ctx.emit_json(outcome);
    }
    ctx.print(&format!(
        "#{} now has {}",
        outcome.issue_id,
        pluralize(usize::try_from(outcome.votes).unwrap_or(usize::MAX), "vote")
    ));
    Ok(())
}

/// Toggle the vote `args.times` times, raising a toast for each press.
///
/// # Errors
///
/// Returns `IssueNotFound` if the issue does not exist.
pub fn run(ctx: &PageContext, args: &VoteArgs) -> Result<VoteOutcome> {
    let issue = ctx.require_issue(&args.id)?;
    let mut toggle = VoteToggle::default();
    for _ in 0..args.times {
        let notification = toggle.toggle();
        ctx.notify(&notification);
    }

    let votes = toggle.displayed_votes(issue.votes);
    info!(id = %issue.id, presses = args.times, voted = toggle.is_voted(), votes, "Vote");
    Ok(VoteOutcome {
        issue_id: issue.id.clone(),
        voted: toggle.is_voted(),
        votes,
    })
}
