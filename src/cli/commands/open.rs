//! Open a page by route path.

use super::{PageContext, about, admin, explore, heading, home, login, mine, show};
use crate::cli::{AdminArgs, ExploreArgs, MineArgs};
use crate::config::CliOverrides;
use crate::error::Result;
use crate::model::{Category, Severity};
use crate::routes::Route;
use serde::Serialize;
use std::fmt::Write as _;
use tracing::{info, warn};

#[derive(Serialize)]
struct NotFoundOutput<'a> {
    route: &'static str,
    path: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ReportFormOutput {
    required: [&'static str; 5],
    optional: [&'static str; 1],
    categories: Vec<&'static str>,
    severities: Vec<&'static str>,
}

const REQUIRED_FIELDS: [&str; 5] = ["title", "description", "category", "severity", "location"];

/// Execute the open command.
///
/// # Errors
///
/// Returns whatever the target page returns.
pub fn execute(path: &str, json: bool, cli: &CliOverrides) -> Result<()> {
    run(&PageContext::load(json, cli)?, path)
}

/// Resolve `path` and render the matching page.
///
/// Unknown paths render the 404 page and succeed.
///
/// # Errors
///
/// Returns whatever the target page returns, e.g. `IssueNotFound` for
/// `/issue/<missing>`.
pub fn run(ctx: &PageContext, path: &str) -> Result<()> {
    let route = Route::parse(path);
    info!(path, route = %route.path(), page = route.title(), "Opening page");

    match route {
        Route::Home => home::run(ctx),
        Route::Report => render_report_form(ctx),
        Route::Explore => explore::run(ctx, &ExploreArgs::default()),
        Route::Issue(id) => show::run(ctx, &id),
        Route::MyReports => mine::run(ctx, &MineArgs::default()),
        Route::Admin => admin::run(ctx, &AdminArgs::default()),
        Route::Login => login::run(ctx),
        Route::About => about::run(ctx),
        Route::NotFound(path) => {
            warn!(path = %path, "No page at this path");
            if ctx.json {
                return ctx.emit_json(NotFoundOutput {
                    route: "notFound",
                    path: &path,
                });
            }
            ctx.print(&render_not_found());
            Ok(())
        }
    }
}

fn render_not_found() -> String {
    let mut out = heading("Page Not Found");
    out.push_str("The page you're looking for doesn't exist.\n\n");
    out.push_str("Return to Home: civic home\n");
    out
}

fn render_report_form(ctx: &PageContext) -> Result<()> {
    let categories: Vec<&'static str> = Category::ALL.iter().map(Category::as_str).collect();
    let severities: Vec<&'static str> = Severity::ALL.iter().map(Severity::as_str).collect();

    if ctx.json {
        return ctx.emit_json(ReportFormOutput {
            required: REQUIRED_FIELDS,
            optional: ["photo"],
            categories,
            severities,
        });
    }

    let mut out = heading("Report an Issue");
    out.push_str("Help improve your community by reporting issues that need attention.\n\n");
    out.push_str("Usage: civic report --title <TITLE> --description <TEXT> \\\n");
    out.push_str("         --category <CATEGORY> --severity <SEVERITY> --location <ADDRESS> \\\n");
    out.push_str("         [--photo <FILE>]...\n\n");
    let _ = writeln!(out, "Categories: {}", categories.join(", "));
    let _ = writeln!(out, "Severities: {}", severities.join(", "));
    ctx.print(&out);
    Ok(())
}
