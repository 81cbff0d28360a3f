//! Show command implementation.

use super::{PageContext, heading};
use crate::config::CliOverrides;
use crate::error::{CivicError, Result};
use crate::format::{
    IssueDetails, format_category_badge, format_datetime, format_severity_badge,
    format_status_label, pluralize,
};
use crate::model::{Comment, Issue};
use crate::view::{TimelineStep, get_issue_by_id, status_timeline};
use colored::Colorize;
use std::fmt::Write as _;
use tracing::{info, warn};

/// Execute the show command.
///
/// # Errors
///
/// Returns `IssueNotFound` if no issue has this ID.
pub fn execute(id: &str, json: bool, cli: &CliOverrides) -> Result<()> {
    run(&PageContext::load(json, cli)?, id)
}

/// Render the detail page for `id`, or the not-found view.
///
/// # Errors
///
/// Returns `IssueNotFound` after printing the not-found view.
pub fn run(ctx: &PageContext, id: &str) -> Result<()> {
    show_with_vote(ctx, id, false)
}

/// Render the detail page with the local vote state applied.
///
/// # Errors
///
/// Returns `IssueNotFound` after printing the not-found view.
pub fn show_with_vote(ctx: &PageContext, id: &str, voted: bool) -> Result<()> {
    let id = id.trim();
    let Some(issue) = get_issue_by_id(&ctx.store, id) else {
        warn!(id, "Issue not found");
        if !ctx.json {
            ctx.print(&render_not_found(id));
        }
        return Err(CivicError::IssueNotFound { id: id.to_string() });
    };

    info!(id, voted, "Showing issue");
    if ctx.json {
        return ctx.emit_json(IssueDetails::new(issue, voted));
    }

    ctx.print(&render_details(issue, voted, ctx.settings.use_color));
    Ok(())
}

pub(crate) fn render_not_found(id: &str) -> String {
    let mut out = heading("Issue Not Found");
    let _ = writeln!(out, "No issue with ID '{id}' exists.");
    out.push_str("\nBack to Issues: civic explore\n");
    out
}

/// Full detail text for one issue.
pub(crate) fn render_details(issue: &Issue, voted: bool, use_color: bool) -> String {
    let mut out = String::new();

    let title = if use_color {
        issue.title.bold().to_string()
    } else {
        issue.title.clone()
    };
    let _ = writeln!(out, "#{} {title}", issue.id);
    let _ = writeln!(
        out,
        "{} {} {}",
        format_severity_badge(issue.severity, use_color),
        format_category_badge(issue.category, use_color),
        format_status_label(issue.status, use_color),
    );

    let votes = issue.votes.saturating_add(u32::from(voted));
    let marker = if voted { " (you support this)" } else { "" };
    let _ = writeln!(
        out,
        "♥ {}{marker}\n",
        pluralize(usize::try_from(votes).unwrap_or(usize::MAX), "vote")
    );

    let _ = writeln!(out, "{}\n", issue.description);
    let _ = writeln!(out, "Location:    {}", issue.location.address);
    let _ = writeln!(
        out,
        "Coordinates: {:.4}, {:.4}",
        issue.location.lat, issue.location.lng
    );
    let _ = writeln!(out, "Reported by: {}", issue.reported_by);
    let _ = writeln!(out, "Reported:    {}", format_datetime(&issue.reported_at));
    let _ = writeln!(out, "Updated:     {}", format_datetime(&issue.updated_at));
    let _ = writeln!(out, "Category:    {}", issue.category);

    if !issue.images.is_empty() {
        let _ = writeln!(out, "\nPhotos ({})", issue.images.len());
        for image in &issue.images {
            let _ = writeln!(out, "  {image}");
        }
    }

    out.push('\n');
    out.push_str(&heading(&format!("Comments ({})", issue.comment_count())));
    if issue.comments.is_empty() {
        out.push_str("No comments yet. Be the first: civic comment ");
        let _ = writeln!(out, "{} \"...\"", issue.id);
    } else {
        for comment in &issue.comments {
            render_comment(&mut out, comment, 0);
        }
    }

    out.push('\n');
    out.push_str(&heading("Status Timeline"));
    render_timeline(&mut out, &status_timeline(issue));
    out
}

fn render_comment(out: &mut String, comment: &Comment, depth: usize) {
    let indent = "  ".repeat(depth);
    let _ = writeln!(
        out,
        "{indent}{} · {}",
        comment.author,
        format_datetime(&comment.timestamp)
    );
    let _ = writeln!(out, "{indent}  {}", comment.content);
    for reply in &comment.replies {
        render_comment(out, reply, depth + 1);
    }
}

fn render_timeline(out: &mut String, steps: &[TimelineStep]) {
    for step in steps {
        let dot = if step.completed { "●" } else { "○" };
        match step.date {
            Some(date) if step.completed => {
                let _ = writeln!(out, "{dot} {}  {}", step.status, format_datetime(&date));
            }
            _ => {
                let _ = writeln!(out, "{dot} {}", step.status);
            }
        }
    }
}
