//! View derivation over the issue store.
//!
//! Every function here is pure and preserves store insertion order. Absence
//! is never an error: lookups return `None` and filters return an empty `Vec`.

mod stats;
mod timeline;

pub use stats::{CategoryCount, DashboardStats, StatusCount};
pub use timeline::{TimelineStep, status_timeline};

use crate::model::{Category, Issue, Severity, Status};
use crate::store::IssueStore;

/// Find an issue by exact ID.
#[must_use]
pub fn get_issue_by_id<'a>(store: &'a IssueStore, id: &str) -> Option<&'a Issue> {
    store.issues().iter().find(|issue| issue.id == id)
}

/// Issues whose status equals `status`.
#[must_use]
pub fn issues_by_status(store: &IssueStore, status: Status) -> Vec<&Issue> {
    IssueFilter {
        status: Some(status),
        ..IssueFilter::default()
    }
    .apply(store)
}

/// Issues whose category equals `category`.
#[must_use]
pub fn issues_by_category(store: &IssueStore, category: Category) -> Vec<&Issue> {
    IssueFilter {
        category: Some(category),
        ..IssueFilter::default()
    }
    .apply(store)
}

/// Case-insensitive substring search over title, description and address.
///
/// The query is not trimmed: only a zero-length query matches every issue.
#[must_use]
pub fn search<'a>(store: &'a IssueStore, text: &str) -> Vec<&'a Issue> {
    IssueFilter {
        search: Some(text.to_string()),
        ..IssueFilter::default()
    }
    .apply(store)
}

/// Issues filed by `name` (case-insensitive, surrounding whitespace ignored).
#[must_use]
pub fn reported_by<'a>(store: &'a IssueStore, name: &str) -> Vec<&'a Issue> {
    IssueFilter {
        reporter: Some(name.to_string()),
        ..IssueFilter::default()
    }
    .apply(store)
}

/// The first `n` issues in store order.
#[must_use]
pub fn recent(store: &IssueStore, n: usize) -> Vec<&Issue> {
    store.issues().iter().take(n).collect()
}

/// Simultaneously active filters, combined with AND semantics.
///
/// `None` on any field means "all".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IssueFilter {
    pub search: Option<String>,
    pub category: Option<Category>,
    pub status: Option<Status>,
    pub severity: Option<Severity>,
    pub reporter: Option<String>,
}

impl IssueFilter {
    /// True if no field narrows the result.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.search.as_deref().is_none_or(str::is_empty)
            && self.category.is_none()
            && self.status.is_none()
            && self.severity.is_none()
            && self.reporter.is_none()
    }

    #[must_use]
    pub fn matches(&self, issue: &Issue) -> bool {
        if let Some(category) = self.category {
            if issue.category != category {
                return false;
            }
        }
        if let Some(status) = self.status {
            if issue.status != status {
                return false;
            }
        }
        if let Some(severity) = self.severity {
            if issue.severity != severity {
                return false;
            }
        }
        if let Some(reporter) = &self.reporter {
            if !issue
                .reported_by
                .trim()
                .eq_ignore_ascii_case(reporter.trim())
            {
                return false;
            }
        }
        if let Some(needle) = &self.search {
            let needle = needle.to_lowercase();
            if !needle.is_empty() && !text_matches(issue, &needle) {
                return false;
            }
        }
        true
    }

    /// Apply the filter to the store, keeping insertion order.
    #[must_use]
    pub fn apply<'a>(&self, store: &'a IssueStore) -> Vec<&'a Issue> {
        store
            .issues()
            .iter()
            .filter(|issue| self.matches(issue))
            .collect()
    }
}

/// `needle` must already be lowercased.
fn text_matches(issue: &Issue, needle: &str) -> bool {
    issue.title.to_lowercase().contains(needle)
        || issue.description.to_lowercase().contains(needle)
        || issue.location.address.to_lowercase().contains(needle)
}
