use crate::model::Issue;
use crate::session::Notification;
use crate::view::{TimelineStep, status_timeline};
use serde::Serialize;

/// Issue with derived counts for list views (explore, my reports, admin).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueSummary {
    #[serde(flatten)]
    pub issue: Issue,
    pub comment_count: usize,
}

impl From<&Issue> for IssueSummary {
    fn from(issue: &Issue) -> Self {
        Self {
            issue: issue.clone(),
            comment_count: issue.comment_count(),
        }
    }
}

/// Issue with derived timeline for the detail view.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueDetails {
    #[serde(flatten)]
    pub issue: Issue,
    pub comment_count: usize,
    /// Vote count after any local toggle.
    pub displayed_votes: u32,
    pub voted: bool,
    pub timeline: Vec<TimelineStep>,
}

impl IssueDetails {
    #[must_use]
    pub fn new(issue: &Issue, voted: bool) -> Self {
        Self {
            issue: issue.clone(),
            comment_count: issue.comment_count(),
            displayed_votes: issue.votes.saturating_add(u32::from(voted)),
            voted,
            timeline: status_timeline(issue),
        }
    }
}

/// Explore page payload.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExploreView {
    /// "list" or "map".
    pub view: &'static str,
    /// Issues matching the filters, before any limit.
    pub matched: usize,
    /// Issues in the store.
    pub total: usize,
    /// True when at least one filter narrows the list.
    pub filtered: bool,
    pub issues: Vec<IssueSummary>,
}

/// Page payload plus the toasts raised while producing it.
#[derive(Debug, Clone, Serialize)]
pub struct WithNotifications<T: Serialize> {
    #[serde(flatten)]
    pub body: T,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub notifications: Vec<Notification>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::IssueStore;

    fn sample_issue(index: usize) -> Issue {
        IssueStore::sample().issues()[index].clone()
    }

    #[test]
    fn summary_serializes_comment_count_in_camel_case() {
        let summary = IssueSummary::from(&sample_issue(0));
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["commentCount"], 2);
        assert_eq!(json["reportedBy"], "Sarah Johnson");
        assert_eq!(json["status"], "In Progress");
    }

    #[test]
    fn details_include_timeline_and_vote_state() {
        let details = IssueDetails::new(&sample_issue(3), true);
        assert_eq!(details.displayed_votes, 26);

        let json = serde_json::to_value(&details).unwrap();
        let timeline = json["timeline"].as_array().unwrap();
        assert_eq!(timeline.len(), 4);
        assert_eq!(timeline[2]["completed"], true);
        assert_eq!(timeline[3]["completed"], false);
        assert_eq!(json["voted"], true);
    }

    #[test]
    fn notifications_are_omitted_when_empty() {
        let page = WithNotifications {
            body: IssueSummary::from(&sample_issue(1)),
            notifications: Vec::new(),
        };
        let json = serde_json::to_value(&page).unwrap();
        assert!(json.get("notifications").is_none());
        assert_eq!(json["id"], "2");
    }

    #[test]
    fn notifications_are_embedded_when_present() {
        let page = WithNotifications {
            body: IssueSummary::from(&sample_issue(1)),
            notifications: vec![Notification::new("Vote added", "Thanks")],
        };
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json["notifications"][0]["title"], "Vote added");
    }
}
