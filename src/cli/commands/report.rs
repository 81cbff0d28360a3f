//! Report command: fill in and submit the report form.
//!
//! Nothing is stored. A successful submission raises a toast, pauses for the
//! redirect delay, then shows the issue every submission redirects to.

use super::{PageContext, parse_opt, show};
use crate::cli::ReportArgs;
use crate::config::CliOverrides;
use crate::error::Result;
use crate::format::IssueDetails;
use crate::routes::Route;
use crate::session::{Redirect, ReportDraft, SUBMISSION_TRACKING_ID};
use serde::Serialize;
use tracing::info;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ReportOutput {
    tracking_id: &'static str,
    redirect: Redirect,
    #[serde(skip_serializing_if = "Option::is_none")]
    issue: Option<IssueDetails>,
}

/// Execute the report command.
///
/// # Errors
///
/// Returns a validation error for missing fields or unknown category/severity.
pub fn execute(args: &ReportArgs, json: bool, cli: &CliOverrides) -> Result<()> {
    run(&PageContext::load(json, cli)?, args)
}

/// Build a draft from flag values.
///
/// # Errors
///
/// Returns `InvalidCategory` or `InvalidSeverity` for unknown values.
pub fn draft_from_args(args: &ReportArgs) -> Result<ReportDraft> {
    Ok(ReportDraft {
        title: args.title.clone().unwrap_or_default(),
        description: args.description.clone().unwrap_or_default(),
        category: parse_opt(args.category.as_deref())?,
        severity: parse_opt(args.severity.as_deref())?,
        location: args.location.clone().unwrap_or_default(),
        images: args.photos.clone(),
    })
}

/// # Errors
///
/// Returns a validation error for missing fields or unknown category/severity.
pub fn run(ctx: &PageContext, args: &ReportArgs) -> Result<()> {
    let draft = draft_from_args(args)?;
    let submission = draft.submit(ctx.settings.redirect_delay)?;
    info!(
        tracking_id = SUBMISSION_TRACKING_ID,
        redirect = %submission.redirect.to,
        "Report submitted"
    );

    ctx.notify(&submission.notification);
    submission.redirect.wait();

    let Route::Issue(target) = &submission.redirect.to else {
        return Ok(());
    };

    if ctx.json {
        let issue = ctx
            .require_issue(target)
            .ok()
            .map(|issue| IssueDetails::new(issue, false));
        return ctx.emit_json(ReportOutput {
            tracking_id: SUBMISSION_TRACKING_ID,
            redirect: submission.redirect.clone(),
            issue,
        });
    }

    show::run(ctx, target)
}
