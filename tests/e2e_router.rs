//! E2E tests for `civic open <path>`.

mod common;

use common::cli::{CivicWorkspace, run_civic};

#[test]
fn e2e_open_dispatches_known_routes() {
    let _log = common::test_log("e2e_open_dispatches_known_routes");
    let workspace = CivicWorkspace::new();

    let home = run_civic(&workspace, ["open", "/"], "open_home");
    assert!(home.stdout.contains("Report Issues. Track Progress."));

    let issue = run_civic(&workspace, ["open", "/issue/4?ref=share"], "open_issue");
    assert!(issue.status.success(), "open failed: {}", issue.stderr);
    assert!(issue.stdout.contains("Water main break on Pine Avenue"));

    let explore = run_civic(&workspace, ["open", "explore/"], "open_explore");
    assert!(explore.stdout.contains("Showing 5 of 5 issues"));

    let report = run_civic(&workspace, ["open", "/report"], "open_report");
    assert!(report.stdout.contains("civic report --title"));
}

#[test]
fn e2e_open_unknown_path_renders_404() {
    let _log = common::test_log("e2e_open_unknown_path_renders_404");
    let workspace = CivicWorkspace::new();

    let missing = run_civic(&workspace, ["open", "/settings"], "open_404");
    assert!(missing.status.success());
    assert!(missing.stdout.contains("Page Not Found"));
    assert!(missing.stdout.contains("civic home"));

    let empty_id = run_civic(&workspace, ["open", "/issue/", "--json"], "open_empty_id").json();
    assert_eq!(empty_id["route"], "notFound");
}

#[test]
fn e2e_open_missing_issue_exits_not_found() {
    let _log = common::test_log("e2e_open_missing_issue_exits_not_found");
    let workspace = CivicWorkspace::new();

    let missing = run_civic(&workspace, ["open", "/issue/12"], "open_missing_issue");
    assert_eq!(missing.code(), Some(3));
    assert!(missing.stdout.contains("Issue Not Found"));
}
