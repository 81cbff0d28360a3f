//! Admin panel: dashboard, issue table, analytics and moderation tabs.
//!
//! The status pickers of the web panel never saved anything, so the panel is
//! read-only here.

use super::{PageContext, heading, parse_filter};
use crate::cli::{AdminArgs, AdminTab};
use crate::config::CliOverrides;
use crate::error::Result;
use crate::format::{
    IssueSummary, format_severity_label, format_status_label, truncate_title,
};
use crate::model::Issue;
use crate::view::{DashboardStats, IssueFilter, recent};
use serde::Serialize;
use std::fmt::Write as _;
use tracing::info;
use unicode_width::UnicodeWidthStr;

/// Issues shown under "Recent Issues Requiring Attention".
const RECENT_COUNT: usize = 3;
/// Widest bar in the analytics charts.
const BAR_WIDTH: usize = 20;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DashboardOutput {
    stats: DashboardStats,
    recent: Vec<IssueSummary>,
}

#[derive(Serialize)]
struct IssuesOutput {
    matched: usize,
    total: usize,
    issues: Vec<IssueSummary>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ModerationOutput {
    pending_items: usize,
}

/// Execute the admin command.
///
/// # Errors
///
/// Returns an error if the status filter is invalid.
pub fn execute(args: &AdminArgs, json: bool, cli: &CliOverrides) -> Result<()> {
    run(&PageContext::load(json, cli)?, args)
}

/// # Errors
///
/// Returns an error if the status filter is invalid or JSON serialization fails.
pub fn run(ctx: &PageContext, args: &AdminArgs) -> Result<()> {
    info!(tab = ?args.tab, "Admin panel");

    match args.tab {
        AdminTab::Dashboard => {
            let stats = DashboardStats::compute(&ctx.store);
            let recent = recent(&ctx.store, RECENT_COUNT);
            if ctx.json {
                return ctx.emit_json(DashboardOutput {
                    stats,
                    recent: recent.into_iter().map(IssueSummary::from).collect(),
                });
            }
            ctx.print(&render_dashboard(&stats, &recent, ctx.settings.use_color));
        }
        AdminTab::Issues => {
            let filter = IssueFilter {
                search: args.search.clone(),
                status: parse_filter(args.status.as_deref())?,
                ..IssueFilter::default()
            };
            let rows = filter.apply(&ctx.store);
            if ctx.json {
                return ctx.emit_json(IssuesOutput {
                    matched: rows.len(),
                    total: ctx.store.len(),
                    issues: rows.into_iter().map(IssueSummary::from).collect(),
                });
            }
            ctx.print(&render_issue_table(&rows));
        }
        AdminTab::Analytics => {
            let stats = DashboardStats::compute(&ctx.store);
            if ctx.json {
                return ctx.emit_json(&stats);
            }
            ctx.print(&render_analytics(&stats));
        }
        AdminTab::Moderation => {
            if ctx.json {
                return ctx.emit_json(ModerationOutput { pending_items: 0 });
            }
            let mut out = heading("Content Moderation");
            out.push_str("No Items Requiring Moderation\n");
            out.push_str("All reported content has been reviewed and approved\n");
            ctx.print(&out);
        }
    }
    Ok(())
}

fn render_dashboard(stats: &DashboardStats, recent: &[&Issue], use_color: bool) -> String {
    let mut out = heading("Admin Panel");
    let _ = writeln!(out, "Total Issues  {:>4}", stats.total);
    let _ = writeln!(out, "Pending       {:>4}", stats.pending);
    let _ = writeln!(out, "Resolved      {:>4}", stats.resolved);
    let _ = writeln!(out, "Critical      {:>4}", stats.critical);

    out.push('\n');
    out.push_str(&heading("Recent Issues Requiring Attention"));
    for issue in recent {
        let _ = writeln!(
            out,
            "#{} {}\n    {} · {} · {}",
            issue.id,
            issue.title,
            issue.location.address,
            format_severity_label(issue.severity, use_color),
            format_status_label(issue.status, use_color),
        );
    }
    out
}

/// Left-align `text` in `width` display columns, truncating if needed.
fn cell(text: &str, width: usize) -> String {
    let text = truncate_title(text, width);
    let pad = width.saturating_sub(UnicodeWidthStr::width(text.as_str()));
    format!("{text}{}", " ".repeat(pad))
}

fn render_issue_table(rows: &[&Issue]) -> String {
    const COLUMNS: [(&str, usize); 6] = [
        ("ID", 4),
        ("Issue", 32),
        ("Category", 24),
        ("Severity", 8),
        ("Status", 12),
        ("Reporter", 16),
    ];

    let mut out = heading("All Issues");
    let header: Vec<String> = COLUMNS.iter().map(|(name, w)| cell(name, *w)).collect();
    let _ = writeln!(out, "{}", header.join(" ").trim_end());

    if rows.is_empty() {
        out.push_str("No issues found\n");
        return out;
    }

    for issue in rows {
        let values = [
            issue.id.as_str(),
            issue.title.as_str(),
            issue.category.as_str(),
            issue.severity.as_str(),
            issue.status.as_str(),
            issue.reported_by.as_str(),
        ];
        let line: Vec<String> = values
            .iter()
            .zip(COLUMNS)
            .map(|(value, (_, width))| cell(value, width))
            .collect();
        let _ = writeln!(out, "{}", line.join(" ").trim_end());
    }
    out
}

fn bar(count: usize, max: usize) -> String {
    if max == 0 {
        return String::new();
    }
    "█".repeat((count * BAR_WIDTH).div_ceil(max))
}

fn render_analytics(stats: &DashboardStats) -> String {
    let mut out = heading("Issues by Status");
    let max = stats.by_status.iter().map(|s| s.count).max().unwrap_or(0);
    for entry in &stats.by_status {
        let _ = writeln!(
            out,
            "{} {:>3} {}",
            cell(entry.status.as_str(), 14),
            entry.count,
            bar(entry.count, max)
        );
    }

    out.push('\n');
    out.push_str(&heading("Issues by Category"));
    let max = stats.by_category.iter().map(|c| c.count).max().unwrap_or(0);
    for entry in &stats.by_category {
        let _ = writeln!(
            out,
            "{} {:>3} {}",
            cell(entry.category.as_str(), 26),
            entry.count,
            bar(entry.count, max)
        );
    }
    out
}
