//! Personal dashboard ("My Reports").
//!
//! Reports are the issues whose reporter matches the active actor.

use super::{PageContext, heading};
use crate::cli::{MineArgs, MineTab};
use crate::config::CliOverrides;
use crate::error::Result;
use crate::format::{
    IssueSummary, format_date, format_issue_line_with, format_issue_meta, pluralize,
};
use crate::model::Issue;
use crate::view::reported_by;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt::Write as _;
use tracing::info;

/// An update on one of the actor's issues.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Update {
    pub issue_id: String,
    pub message: String,
    pub at: DateTime<Utc>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ReportsOutput<'a> {
    actor: &'a str,
    count: usize,
    issues: Vec<IssueSummary>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ProfileOutput<'a> {
    actor: &'a str,
    reported: usize,
    resolved: usize,
    votes_received: u64,
}

#[derive(Serialize)]
struct NotificationsOutput<'a> {
    actor: &'a str,
    updates: Vec<Update>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SettingsOutput<'a> {
    actor: &'a str,
    redirect_delay_ms: u64,
    color: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    explore_limit: Option<usize>,
    share_base_url: &'a str,
}

/// Execute the mine command.
///
/// # Errors
///
/// Returns an error if configuration cannot be loaded.
pub fn execute(args: &MineArgs, json: bool, cli: &CliOverrides) -> Result<()> {
    run(&PageContext::load(json, cli)?, args)
}

/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn run(ctx: &PageContext, args: &MineArgs) -> Result<()> {
    let actor = ctx.settings.actor.as_str();
    let mine = reported_by(&ctx.store, actor);
    info!(actor, tab = ?args.tab, count = mine.len(), "My reports");

    match args.tab {
        MineTab::Reports => {
            if ctx.json {
                return ctx.emit_json(ReportsOutput {
                    actor,
                    count: mine.len(),
                    issues: mine.iter().copied().map(IssueSummary::from).collect(),
                });
            }
            ctx.print(&render_reports(ctx, &mine));
        }
        MineTab::Profile => {
            let resolved = mine.iter().filter(|i| i.status.is_resolved()).count();
            let votes_received = mine.iter().map(|i| u64::from(i.votes)).sum();
            if ctx.json {
                return ctx.emit_json(ProfileOutput {
                    actor,
                    reported: mine.len(),
                    resolved,
                    votes_received,
                });
            }
            let mut out = heading("Profile");
            let _ = writeln!(out, "Name:           {actor}");
            let _ = writeln!(out, "Reported:       {}", mine.len());
            let _ = writeln!(out, "Resolved:       {resolved}");
            let _ = writeln!(out, "Votes received: {votes_received}");
            ctx.print(&out);
        }
        MineTab::Notifications => {
            let updates = updates_for(actor, &mine);
            if ctx.json {
                return ctx.emit_json(NotificationsOutput { actor, updates });
            }
            ctx.print(&render_updates(&updates));
        }
        MineTab::Settings => {
            let settings = &ctx.settings;
            if ctx.json {
                return ctx.emit_json(SettingsOutput {
                    actor,
                    redirect_delay_ms: u64::try_from(settings.redirect_delay.as_millis())
                        .unwrap_or(u64::MAX),
                    color: settings.use_color,
                    explore_limit: settings.explore_limit,
                    share_base_url: &settings.share_base_url,
                });
            }
            let mut out = heading("Settings");
            let _ = writeln!(out, "Actor:          {actor}");
            let _ = writeln!(
                out,
                "Redirect delay: {} ms",
                settings.redirect_delay.as_millis()
            );
            let _ = writeln!(out, "Color:          {}", settings.use_color);
            let limit = settings
                .explore_limit
                .map_or_else(|| "unlimited".to_string(), |limit| limit.to_string());
            let _ = writeln!(out, "Explore limit:  {limit}");
            let _ = writeln!(out, "Share base URL: {}", settings.share_base_url);
            ctx.print(&out);
        }
    }
    Ok(())
}

fn render_reports(ctx: &PageContext, mine: &[&Issue]) -> String {
    let mut out = heading("Your Reported Issues");
    let _ = writeln!(
        out,
        "You have reported {} ({})\n",
        pluralize(mine.len(), "issue"),
        ctx.settings.actor
    );
    if mine.is_empty() {
        out.push_str("Report New Issue: civic report\n");
        return out;
    }
    let options = ctx.text_options();
    for issue in mine {
        let _ = writeln!(out, "{}", format_issue_line_with(issue, options));
        let _ = writeln!(out, "    {}", format_issue_meta(issue, options.use_color));
    }
    out
}

/// Status changes and comments by other people on the actor's issues, newest first.
#[must_use]
pub fn updates_for(actor: &str, mine: &[&Issue]) -> Vec<Update> {
    let mut updates = Vec::new();
    for issue in mine {
        if issue.updated_at > issue.reported_at {
            updates.push(Update {
                issue_id: issue.id.clone(),
                message: format!("Status is now {}", issue.status),
                at: issue.updated_at,
            });
        }
        for comment in &issue.comments {
            if !comment.author.trim().eq_ignore_ascii_case(actor.trim()) {
                updates.push(Update {
                    issue_id: issue.id.clone(),
                    message: format!("{} commented", comment.author),
                    at: comment.timestamp,
                });
            }
        }
    }
    updates.sort_by(|a, b| b.at.cmp(&a.at));
    updates
}

fn render_updates(updates: &[Update]) -> String {
    let mut out = heading("Notifications");
    if updates.is_empty() {
        out.push_str("No notifications yet\n");
        return out;
    }
    for update in updates {
        let _ = writeln!(
            out,
            "{}  #{} {}",
            format_date(&update.at),
            update.issue_id,
            update.message
        );
    }
    out
}
