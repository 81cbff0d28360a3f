//! Aggregate counts for the admin dashboard and analytics tabs.

use crate::model::{Category, Severity, Status};
use crate::store::IssueStore;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusCount {
    pub status: Status,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub category: Category,
    pub count: usize,
}

/// Dashboard summary.
///
/// `by_status` follows `Status::ALL` and `by_category` follows
/// `Category::ALL`; zero counts are kept so charts have stable axes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total: usize,
    /// Anything not yet resolved.
    pub pending: usize,
    pub resolved: usize,
    pub critical: usize,
    pub total_votes: u64,
    pub by_status: Vec<StatusCount>,
    pub by_category: Vec<CategoryCount>,
}

impl DashboardStats {
    #[must_use]
    pub fn compute(store: &IssueStore) -> Self {
        let issues = store.issues();
        let resolved = issues.iter().filter(|i| i.status.is_resolved()).count();

        let by_status = Status::ALL
            .into_iter()
            .map(|status| StatusCount {
                status,
                count: issues.iter().filter(|i| i.status == status).count(),
            })
            .collect();

        let by_category = Category::ALL
            .into_iter()
            .map(|category| CategoryCount {
                category,
                count: issues.iter().filter(|i| i.category == category).count(),
            })
            .collect();

        Self {
            total: issues.len(),
            pending: issues.len() - resolved,
            resolved,
            critical: issues
                .iter()
                .filter(|i| i.severity == Severity::Critical)
                .count(),
            total_votes: issues.iter().map(|i| u64::from(i.votes)).sum(),
            by_status,
            by_category,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_dashboard() {
        let stats = DashboardStats::compute(&IssueStore::sample());
        assert_eq!(stats.total, 5);
        assert_eq!(stats.pending, 4);
        assert_eq!(stats.resolved, 1);
        assert_eq!(stats.critical, 1);
        assert_eq!(stats.total_votes, 66);

        let status_counts: Vec<usize> = stats.by_status.iter().map(|s| s.count).collect();
        assert_eq!(status_counts, vec![1, 1, 2, 1]);

        assert_eq!(stats.by_category.len(), 8);
        let parks = stats
            .by_category
            .iter()
            .find(|c| c.category == Category::ParksRecreation)
            .expect("parks row");
        assert_eq!(parks.count, 0);
        let total: usize = stats.by_category.iter().map(|c| c.count).sum();
        assert_eq!(total, 5);
    }

    #[test]
    fn empty_store_dashboard() {
        let store = IssueStore::from_issues(Vec::new()).expect("empty");
        let stats = DashboardStats::compute(&store);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.pending, 0);
        assert!(stats.by_status.iter().all(|s| s.count == 0));
    }
}
