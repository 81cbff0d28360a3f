//! Property-based tests for view derivation.
//!
//! Uses proptest to verify that:
//! - Filters keep store order and return exactly the matching issues
//! - Combined filters equal the intersection of single-field filters
//! - Search ignores case and only an empty query matches everything
//! - Dashboard counts add up
//! - Route paths resolve back to the same route

use proptest::prelude::*;

use civic_reports::format::truncate_title;
use civic_reports::model::{Category, Issue, Severity, Status};
use civic_reports::routes::Route;
use civic_reports::store::IssueStore;
use civic_reports::view::{DashboardStats, IssueFilter, issues_by_status, search};
use unicode_width::UnicodeWidthStr;

fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("info")
        .with_test_writer()
        .try_init();
}

/// Template record; generated issues vary the enumerated fields and text.
fn template() -> Issue {
    IssueStore::sample().issues()[0].clone()
}

const REPORTERS: [&str; 3] = ["Sarah Johnson", "Mike Chen", "Jennifer Lopez"];

fn issue_strategy() -> impl Strategy<Value = (usize, usize, usize, usize, String)> {
    (
        0..Category::ALL.len(),
        0..Severity::ALL.len(),
        0..Status::ALL.len(),
        0..REPORTERS.len(),
        "[a-zA-Z ]{1,24}",
    )
}

fn store_strategy() -> impl Strategy<Value = IssueStore> {
    prop::collection::vec(issue_strategy(), 0..20).prop_map(|rows| {
        let issues = rows
            .into_iter()
            .enumerate()
            .map(|(index, (category, severity, status, reporter, title))| Issue {
                id: (index + 1).to_string(),
                title: format!("Issue {title}"),
                category: Category::ALL[category],
                severity: Severity::ALL[severity],
                status: Status::ALL[status],
                reported_by: REPORTERS[reporter].to_string(),
                ..template()
            })
            .collect();
        IssueStore::from_issues(issues).expect("generated ids are unique")
    })
}

fn filter_strategy() -> impl Strategy<Value = IssueFilter> {
    (
        prop::option::of("[a-zA-Z ]{0,3}"),
        prop::option::of(0..Category::ALL.len()),
        prop::option::of(0..Severity::ALL.len()),
        prop::option::of(0..Status::ALL.len()),
        prop::option::of(0..REPORTERS.len()),
    )
        .prop_map(|(search, category, severity, status, reporter)| IssueFilter {
            search,
            category: category.map(|i| Category::ALL[i]),
            severity: severity.map(|i| Severity::ALL[i]),
            status: status.map(|i| Status::ALL[i]),
            reporter: reporter.map(|i| REPORTERS[i].to_lowercase()),
        })
}

fn ids(issues: &[&Issue]) -> Vec<String> {
    issues.iter().map(|issue| issue.id.clone()).collect()
}

/// Field-by-field check written without `IssueFilter::matches`.
fn expected_match(issue: &Issue, filter: &IssueFilter) -> bool {
    let text = format!(
        "{}\n{}\n{}",
        issue.title, issue.description, issue.location.address
    )
    .to_lowercase();
    filter
        .search
        .as_ref()
        .is_none_or(|needle| text.contains(&needle.to_lowercase()))
        && filter.category.is_none_or(|c| issue.category == c)
        && filter.severity.is_none_or(|s| issue.severity == s)
        && filter.status.is_none_or(|s| issue.status == s)
        && filter
            .reporter
            .as_ref()
            .is_none_or(|name| issue.reported_by.to_lowercase() == *name)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn filter_keeps_order_and_matches(store in store_strategy(), filter in filter_strategy()) {
        init_test_logging();
        let result = ids(&filter.apply(&store));
        let expected: Vec<String> = store
            .issues()
            .iter()
            .filter(|issue| expected_match(issue, &filter))
            .map(|issue| issue.id.clone())
            .collect();
        prop_assert_eq!(result, expected);
    }

    #[test]
    fn status_filter_is_status_subset(store in store_strategy(), status in 0..Status::ALL.len()) {
        init_test_logging();
        let status = Status::ALL[status];
        let filtered = ids(&issues_by_status(&store, status));
        let expected: Vec<String> = store
            .issues()
            .iter()
            .filter(|i| i.status == status)
            .map(|i| i.id.clone())
            .collect();
        prop_assert_eq!(filtered, expected);
    }

    #[test]
    fn combined_filter_is_intersection(store in store_strategy(), filter in filter_strategy()) {
        init_test_logging();
        let combined = ids(&filter.apply(&store));
        let single = |narrowed: IssueFilter| ids(&narrowed.apply(&store));
        let by_category = single(IssueFilter {
            category: filter.category,
            ..IssueFilter::default()
        });
        let by_severity = single(IssueFilter {
            severity: filter.severity,
            ..IssueFilter::default()
        });
        let by_status = single(IssueFilter {
            status: filter.status,
            ..IssueFilter::default()
        });
        let by_reporter = single(IssueFilter {
            reporter: filter.reporter.clone(),
            ..IssueFilter::default()
        });
        let by_search = match &filter.search {
            Some(needle) => ids(&search(&store, needle)),
            None => ids(&store.issues().iter().collect::<Vec<_>>()),
        };

        let intersection: Vec<String> = by_category
            .into_iter()
            .filter(|id| {
                by_severity.contains(id)
                    && by_status.contains(id)
                    && by_reporter.contains(id)
                    && by_search.contains(id)
            })
            .collect();
        prop_assert_eq!(combined, intersection);
    }

    #[test]
    fn search_ignores_case(store in store_strategy(), needle in "[a-zA-Z]{1,6}") {
        init_test_logging();
        let lower = ids(&search(&store, &needle.to_lowercase()));
        let upper = ids(&search(&store, &needle.to_uppercase()));
        prop_assert_eq!(lower, upper);
    }

    #[test]
    fn empty_search_matches_everything(store in store_strategy()) {
        init_test_logging();
        prop_assert_eq!(search(&store, "").len(), store.len());
    }

    #[test]
    fn whitespace_search_is_literal(store in store_strategy(), blank in "[ \t]{1,4}") {
        init_test_logging();
        let filter = IssueFilter {
            search: Some(blank.clone()),
            ..IssueFilter::default()
        };
        let expected = store
            .issues()
            .iter()
            .filter(|issue| expected_match(issue, &filter))
            .count();
        prop_assert_eq!(search(&store, &blank).len(), expected);
        prop_assert!(!filter.is_empty());
    }

    #[test]
    fn dashboard_counts_add_up(store in store_strategy()) {
        init_test_logging();
        let stats = DashboardStats::compute(&store);
        prop_assert_eq!(stats.total, store.len());
        prop_assert_eq!(stats.pending + stats.resolved, stats.total);
        prop_assert_eq!(stats.by_status.iter().map(|s| s.count).sum::<usize>(), stats.total);
        prop_assert_eq!(stats.by_category.iter().map(|c| c.count).sum::<usize>(), stats.total);
        prop_assert!(stats.critical <= stats.total);
    }

    #[test]
    fn issue_route_path_resolves_back(id in "[a-z0-9]{1,8}") {
        init_test_logging();
        let route = Route::Issue(id);
        prop_assert_eq!(Route::parse(&route.path()), route);
    }

    #[test]
    fn truncated_title_fits(title in "[a-zA-Z0-9 éü中日]{0,60}", max in 0usize..40) {
        init_test_logging();
        let truncated = truncate_title(&title, max);
        prop_assert!(UnicodeWidthStr::width(truncated.as_str()) <= max);
    }
}
