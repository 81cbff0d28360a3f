//! Home page.

use super::{PageContext, heading};
use crate::config::CliOverrides;
use crate::error::Result;
use crate::routes::Route;
use crate::view::DashboardStats;
use serde::Serialize;
use std::fmt::Write as _;
use tracing::info;

const FEATURES: [(&str, &str); 6] = [
    (
        "Easy Reporting",
        "Report issues with photos, location pins, and detailed descriptions in just a few clicks.",
    ),
    (
        "Track Progress",
        "Follow your reports from submission to resolution with real-time status updates.",
    ),
    (
        "Community Driven",
        "Vote on issues that matter to you and engage with your neighbors to prioritize solutions.",
    ),
    (
        "Direct to City",
        "Reports go directly to the appropriate city departments for faster response times.",
    ),
    (
        "Data Insights",
        "Help city officials make data-driven decisions with comprehensive issue analytics.",
    ),
    (
        "Location Based",
        "Interactive maps show issues in your area and help you stay informed about your community.",
    ),
];

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct HomeOutput {
    route: String,
    total_issues: usize,
    resolved_issues: usize,
    navigation: Vec<NavLink>,
    features: Vec<Feature>,
}

#[derive(Serialize)]
struct NavLink {
    title: &'static str,
    path: String,
}

#[derive(Serialize)]
struct Feature {
    title: &'static str,
    description: &'static str,
}

/// Execute the home command.
///
/// # Errors
///
/// Returns an error if configuration cannot be loaded.
pub fn execute(json: bool, cli: &CliOverrides) -> Result<()> {
    run(&PageContext::load(json, cli)?)
}

/// Render the home page.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn run(ctx: &PageContext) -> Result<()> {
    let stats = DashboardStats::compute(&ctx.store);
    info!(total = stats.total, resolved = stats.resolved, "Rendering home page");

    if ctx.json {
        return ctx.emit_json(HomeOutput {
            route: Route::Home.path(),
            total_issues: stats.total,
            resolved_issues: stats.resolved,
            navigation: Route::navigation()
                .iter()
                .map(|route| NavLink {
                    title: route.title(),
                    path: route.path(),
                })
                .collect(),
            features: FEATURES
                .iter()
                .map(|&(title, description)| Feature { title, description })
                .collect(),
        });
    }

    ctx.print(&render_home(&stats));
    Ok(())
}

/// Navigation bar titles joined on one line.
fn nav_bar() -> String {
    Route::navigation()
        .iter()
        .map(Route::title)
        .collect::<Vec<_>>()
        .join(" | ")
}

fn render_home(stats: &DashboardStats) -> String {
    let mut out = nav_bar();
    out.push_str("\n\n");
    out.push_str("Make Your City Smarter.\nReport Issues. Track Progress.\n\n");
    out.push_str(
        "Join thousands of citizens working together to create better, more responsive \
         communities through civic engagement.\n\n",
    );
    out.push_str("  Report an Issue    civic report\n");
    out.push_str("  Explore Issues     civic explore\n\n");

    out.push_str(&heading("How CityReport Works"));
    for (title, description) in FEATURES {
        let _ = writeln!(out, "• {title}: {description}");
    }

    out.push('\n');
    let _ = writeln!(out, "{:>6}  Issues Reported", stats.total);
    let _ = writeln!(out, "{:>6}  Issues Resolved", stats.resolved);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::IssueStore;

    #[test]
    fn home_shows_store_totals() {
        crate::logging::init_test_logging();
        let stats = DashboardStats::compute(&IssueStore::sample());
        let text = render_home(&stats);
        assert!(text.contains("Report Issues. Track Progress."));
        assert!(text.contains("     5  Issues Reported"));
        assert!(text.contains("     1  Issues Resolved"));
        assert_eq!(text.matches('•').count(), FEATURES.len());
    }

    #[test]
    fn home_starts_with_navigation_bar() {
        crate::logging::init_test_logging();
        let text = render_home(&DashboardStats::compute(&IssueStore::sample()));
        assert_eq!(
            text.lines().next(),
            Some("Home | Report Issue | Explore Issues | My Reports | Admin Panel | About")
        );
    }
}
