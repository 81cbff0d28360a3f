//! Local, per-command transient state.
//!
//! Forms, votes and shares never write back to the [`IssueStore`]. Each action
//! yields a [`Notification`] for the toast surface and, for report
//! submission, a delayed [`Redirect`].
//!
//! [`IssueStore`]: crate::store::IssueStore

mod notify;

pub use notify::{Notification, Notifier, RecordingNotifier, TerminalNotifier};

use crate::error::{CivicError, Result};
use crate::model::{Category, Severity};
use crate::routes::Route;
use serde::Serialize;
use std::time::Duration;
use tracing::debug;

/// Delay before navigating away after a report is submitted.
pub const DEFAULT_REDIRECT_DELAY: Duration = Duration::from_millis(1500);

/// Tracking number shown to the citizen after every submission.
pub const SUBMISSION_TRACKING_ID: &str = "001234";

/// Issue every submission redirects to.
pub const SUBMISSION_REDIRECT_ID: &str = "1";

/// A pending client-side navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Redirect {
    #[serde(serialize_with = "serialize_route")]
    pub to: Route,
    #[serde(rename = "delayMs", serialize_with = "serialize_millis")]
    pub delay: Duration,
}

impl Redirect {
    /// Block for the redirect delay.
    pub fn wait(&self) {
        if !self.delay.is_zero() {
            debug!(delay_ms = self.delay.as_millis(), to = %self.to, "Waiting before redirect");
            std::thread::sleep(self.delay);
        }
    }
}

fn serialize_route<S: serde::Serializer>(
    route: &Route,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(&route.path())
}

fn serialize_millis<S: serde::Serializer>(
    delay: &Duration,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_u64(u64::try_from(delay.as_millis()).unwrap_or(u64::MAX))
}

/// Buffer behind the report form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportDraft {
    pub title: String,
    pub description: String,
    pub category: Option<Category>,
    pub severity: Option<Severity>,
    pub location: String,
    /// Names of attached photos; they are counted, never uploaded.
    pub images: Vec<String>,
}

/// Outcome of a successful report submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Submission {
    pub notification: Notification,
    pub redirect: Redirect,
}

impl ReportDraft {
    /// Check the required inputs in form order. Photos are optional.
    ///
    /// # Errors
    ///
    /// Returns `Validation` naming the first missing required field.
    pub fn validate(&self) -> Result<()> {
        let missing = [
            ("title", self.title.trim().is_empty()),
            ("description", self.description.trim().is_empty()),
            ("category", self.category.is_none()),
            ("severity", self.severity.is_none()),
            ("location", self.location.trim().is_empty()),
        ];
        match missing.into_iter().find(|(_, missing)| *missing) {
            Some((field, _)) => Err(CivicError::validation(field, "this field is required")),
            None => Ok(()),
        }
    }

    /// Validate and "submit" the draft. Nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns the validation error if a required field is blank.
    pub fn submit(&self, delay: Duration) -> Result<Submission> {
        self.validate()?;
        debug!(
            title = %self.title,
            category = ?self.category,
            severity = ?self.severity,
            images = self.images.len(),
            "Report draft submitted"
        );

        Ok(Submission {
            notification: Notification::new(
                "Issue Reported Successfully!",
                format!(
                    "Your issue has been submitted and assigned ID #{SUBMISSION_TRACKING_ID}. \
                     You'll receive updates via email."
                ),
            ),
            redirect: Redirect {
                to: Route::Issue(SUBMISSION_REDIRECT_ID.to_string()),
                delay,
            },
        })
    }
}

/// Buffer behind the comment box on an issue page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentDraft {
    pub text: String,
}

impl CommentDraft {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Post the comment. A blank buffer is ignored and stays as it was.
    pub fn submit(&mut self) -> Option<Notification> {
        if self.text.trim().is_empty() {
            return None;
        }
        self.text.clear();
        Some(Notification::new(
            "Comment posted!",
            "Your comment has been added to the issue",
        ))
    }
}

/// Support button on an issue page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VoteToggle {
    voted: bool,
}

impl VoteToggle {
    #[must_use]
    pub const fn is_voted(&self) -> bool {
        self.voted
    }

    pub fn toggle(&mut self) -> Notification {
        self.voted = !self.voted;
        if self.voted {
            Notification::new("Vote added", "Thank you for supporting this issue!")
        } else {
            Notification::new("Vote removed", "Your support has been removed")
        }
    }

    /// Count to display given the stored count.
    #[must_use]
    pub fn displayed_votes(&self, base: u32) -> u32 {
        base.saturating_add(u32::from(self.voted))
    }
}

/// A share action: the link plus the toast it produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Share {
    pub link: String,
    pub notification: Notification,
}

/// Share a page link.
///
/// There is no native share surface, so this always takes the clipboard
/// fallback.
#[must_use]
pub fn share(base_url: &str, route: &Route) -> Share {
    let base = base_url.trim_end_matches('/');
    Share {
        link: format!("{base}{}", route.path()),
        notification: Notification::new("Link copied!", "Issue link has been copied to clipboard"),
    }
}
