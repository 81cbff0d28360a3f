//! Status timeline shown beside an issue.

use crate::model::{Issue, Status};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// One lifecycle stage of an issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelineStep {
    pub status: Status,
    pub completed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,
}

/// Build the four-step timeline for `issue`.
///
/// A step is completed when the issue has reached it. The first step is dated
/// with `reported_at`; the step matching the current status (when it is not
/// the first) is dated with `updated_at`.
#[must_use]
pub fn status_timeline(issue: &Issue) -> Vec<TimelineStep> {
    let current = issue.status.stage();

    Status::ALL
        .into_iter()
        .enumerate()
        .map(|(index, status)| {
            let completed = current >= index;
            let date = if index == 0 {
                Some(issue.reported_at)
            } else if completed && status == issue.status {
                Some(issue.updated_at)
            } else {
                None
            };
            TimelineStep {
                status,
                completed,
                date,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::IssueStore;
    use crate::view::get_issue_by_id;

    #[test]
    fn in_progress_timeline() {
        let store = IssueStore::sample();
        let issue = get_issue_by_id(&store, "1").expect("issue 1");
        let steps = status_timeline(issue);

        let completed: Vec<bool> = steps.iter().map(|s| s.completed).collect();
        assert_eq!(completed, vec![true, true, true, false]);
        assert_eq!(steps[0].date, Some(issue.reported_at));
        assert_eq!(steps[1].date, None);
        assert_eq!(steps[2].date, Some(issue.updated_at));
        assert_eq!(steps[3].date, None);
    }

    #[test]
    fn reported_timeline_has_single_date() {
        let store = IssueStore::sample();
        let issue = get_issue_by_id(&store, "3").expect("issue 3");
        let steps = status_timeline(issue);

        assert!(steps[0].completed);
        assert!(steps[1..].iter().all(|s| !s.completed && s.date.is_none()));
        assert_eq!(steps.iter().filter(|s| s.date.is_some()).count(), 1);
    }

    #[test]
    fn resolved_timeline_is_complete() {
        let store = IssueStore::sample();
        let issue = get_issue_by_id(&store, "5").expect("issue 5");
        let steps = status_timeline(issue);
        assert!(steps.iter().all(|s| s.completed));
        assert_eq!(steps[3].date, Some(issue.updated_at));
    }
}
