//! In-memory issue store.
//!
//! The store is an ordered, immutable sequence of [`Issue`] records. It is
//! built once at process start (normally from [`IssueStore::sample`]) and never
//! mutated afterwards; page-level state lives in [`crate::session`].

mod sample;

use crate::error::{CivicError, Result};
use crate::model::Issue;
use std::collections::HashSet;
use tracing::debug;

/// Ordered collection of issues with unique IDs.
#[derive(Debug, Clone, PartialEq)]
pub struct IssueStore {
    issues: Vec<Issue>,
}

impl IssueStore {
    /// Build a store from records, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateId` if two records share an ID, or `Validation` if a
    /// record has an empty ID or title.
    pub fn from_issues(issues: Vec<Issue>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(issues.len());
        for issue in &issues {
            if issue.id.trim().is_empty() {
                return Err(CivicError::validation("id", "issue id cannot be empty"));
            }
            if issue.title.trim().is_empty() {
                return Err(CivicError::validation(
                    "title",
                    format!("issue {} has an empty title", issue.id),
                ));
            }
            if !seen.insert(issue.id.as_str()) {
                return Err(CivicError::DuplicateId {
                    id: issue.id.clone(),
                });
            }
        }

        debug!(count = issues.len(), "Built issue store");
        Ok(Self { issues })
    }

    /// The five sample issues every session starts with.
    #[must_use]
    pub fn sample() -> Self {
        Self {
            issues: sample::sample_issues(),
        }
    }

    /// All issues in insertion order.
    #[must_use]
    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.issues.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// IDs in insertion order.
    #[must_use]
    pub fn ids(&self) -> Vec<String> {
        self.issues.iter().map(|issue| issue.id.clone()).collect()
    }
}

impl Default for IssueStore {
    fn default() -> Self {
        Self::sample()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Status;

    #[test]
    fn sample_has_five_issues_in_order() {
        let store = IssueStore::sample();
        assert_eq!(store.len(), 5);
        assert_eq!(store.ids(), vec!["1", "2", "3", "4", "5"]);
        assert_eq!(store.issues()[0].title, "Large pothole on Main Street");
        assert_eq!(store.issues()[4].status, Status::Resolved);
    }

    #[test]
    fn sample_passes_validation() {
        let rebuilt = IssueStore::from_issues(IssueStore::sample().issues().to_vec())
            .expect("sample is valid");
        assert_eq!(rebuilt, IssueStore::sample());
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut issues = IssueStore::sample().issues().to_vec();
        let mut copy = issues[1].clone();
        copy.title = "Another streetlight".to_string();
        issues.push(copy);

        let err = IssueStore::from_issues(issues).unwrap_err();
        assert!(matches!(err, CivicError::DuplicateId { id } if id == "2"));
    }

    #[test]
    fn empty_title_is_rejected() {
        let mut issues = IssueStore::sample().issues().to_vec();
        issues[2].title = "   ".to_string();
        let err = IssueStore::from_issues(issues).unwrap_err();
        assert!(matches!(err, CivicError::Validation { field, .. } if field == "title"));
    }

    #[test]
    fn empty_store_is_allowed() {
        let store = IssueStore::from_issues(Vec::new()).expect("empty store");
        assert!(store.is_empty());
    }
}
