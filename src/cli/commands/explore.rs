//! Explore page: filtered issue list or the map stub.

use super::{PageContext, heading, parse_filter};
use crate::cli::{ExploreArgs, ViewMode};
use crate::config::CliOverrides;
use crate::error::Result;
use crate::format::{
    ExploreView, IssueSummary, TextFormatOptions, format_issue_line_with, format_issue_meta,
};
use crate::model::Issue;
use crate::view::IssueFilter;
use std::fmt::Write as _;
use tracing::{debug, info};

/// Execute the explore command.
///
/// # Errors
///
/// Returns an error if a filter value is invalid or configuration fails to load.
pub fn execute(args: &ExploreArgs, json: bool, cli: &CliOverrides) -> Result<()> {
    run(&PageContext::load(json, cli)?, args)
}

/// Build the filter from flag values.
///
/// # Errors
///
/// Returns `InvalidCategory`, `InvalidStatus` or `InvalidSeverity`.
pub fn filter_from_args(args: &ExploreArgs) -> Result<IssueFilter> {
    Ok(IssueFilter {
        search: args.search.clone(),
        category: parse_filter(args.category.as_deref())?,
        status: parse_filter(args.status.as_deref())?,
        severity: parse_filter(args.severity.as_deref())?,
        reporter: None,
    })
}

/// # Errors
///
/// Returns an error if a filter value is invalid or JSON serialization fails.
pub fn run(ctx: &PageContext, args: &ExploreArgs) -> Result<()> {
    let filter = filter_from_args(args)?;
    let matched = filter.apply(&ctx.store);
    let matched_count = matched.len();

    let limit = args
        .limit
        .or(ctx.settings.explore_limit)
        .filter(|limit| *limit > 0);
    let shown: Vec<&Issue> = match limit {
        Some(limit) => matched.into_iter().take(limit).collect(),
        None => matched,
    };

    info!(
        matched = matched_count,
        shown = shown.len(),
        total = ctx.store.len(),
        view = args.view.as_str(),
        "Explore"
    );
    debug!(?filter, "Explore filter");

    if ctx.json {
        return ctx.emit_json(ExploreView {
            view: args.view.as_str(),
            matched: matched_count,
            total: ctx.store.len(),
            filtered: !filter.is_empty(),
            issues: shown.iter().copied().map(IssueSummary::from).collect(),
        });
    }

    let text = match args.view {
        ViewMode::List => render_list(&shown, ctx.store.len(), ctx.text_options()),
        ViewMode::Map => render_map(&shown),
    };
    ctx.print(&text);
    Ok(())
}

fn render_list(issues: &[&Issue], total: usize, options: TextFormatOptions) -> String {
    let mut out = heading("Explore Issues");
    let _ = writeln!(out, "Showing {} of {total} issues\n", issues.len());

    if issues.is_empty() {
        out.push_str("No issues found\nTry adjusting your search criteria or filters\n");
        return out;
    }

    for issue in issues {
        let _ = writeln!(out, "{}", format_issue_line_with(issue, options));
        let _ = writeln!(out, "    {}", format_issue_meta(issue, options.use_color));
    }
    out
}

fn render_map(issues: &[&Issue]) -> String {
    let mut out = heading("Explore Issues");
    out.push_str("Interactive Map Coming Soon\n");
    out.push_str("Map view will show all issues with interactive pins and clustering\n\n");
    for issue in issues {
        let _ = writeln!(
            out,
            "  #{:<3} {:>9.4}, {:>9.4}  {}",
            issue.id, issue.location.lat, issue.location.lng, issue.location.address
        );
    }
    out
}
