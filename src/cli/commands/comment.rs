//! Comment command: post to the comment box on an issue page.
//!
//! The comment is not stored; posting only raises a toast.

use super::PageContext;
use crate::config::CliOverrides;
use crate::error::Result;
use crate::session::CommentDraft;
use serde::Serialize;
use tracing::{debug, info};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CommentOutput<'a> {
    issue_id: &'a str,
    author: &'a str,
    posted: bool,
}

/// Execute the comment command.
///
/// # Errors
///
/// Returns `IssueNotFound` if the issue does not exist.
pub fn execute(id: &str, text: &str, json: bool, cli: &CliOverrides) -> Result<()> {
    run(&PageContext::load(json, cli)?, id, text).map(|_| ())
}

/// # Errors
///
/// Returns `IssueNotFound` if the issue does not exist.
pub fn run(ctx: &PageContext, id: &str, text: &str) -> Result<bool> {
    let issue = ctx.require_issue(id)?;
    let mut draft = CommentDraft::new(text);
    let notification = draft.submit();
    let posted = notification.is_some();

    if let Some(notification) = &notification {
        info!(id = %issue.id, author = %ctx.settings.actor, "Comment posted");
        ctx.notify(notification);
    } else {
        debug!(id = %issue.id, "Blank comment ignored");
    }

    if ctx.json {
        ctx.emit_json(CommentOutput {
            issue_id: &issue.id,
            author: &ctx.settings.actor,
            posted,
        })?;
    } else if !posted {
        ctx.print("Nothing to post: the comment is empty.");
    }
    Ok(posted)
}
