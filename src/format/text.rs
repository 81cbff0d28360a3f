//! Text formatting functions for `civic_reports`.
//!
//! Provides plain and coloured terminal output:
//! - Status icons (○ ◔ ◐ ✓)
//! - Severity and status labels
//! - Issue line and meta line formatting
//! - Date rendering for lists and detail pages

use crate::model::{Category, Issue, Severity, Status};
use chrono::{DateTime, Utc};
use colored::Colorize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Status icon characters.
pub mod icons {
    /// Reported - waiting for review (hollow circle).
    pub const REPORTED: &str = "○";
    /// Under review - acknowledged (quarter circle).
    pub const UNDER_REVIEW: &str = "◔";
    /// In progress - crews assigned (half-filled).
    pub const IN_PROGRESS: &str = "◐";
    /// Resolved (checkmark).
    pub const RESOLVED: &str = "✓";
}

/// Formatting options for text output.
#[derive(Debug, Clone, Copy)]
pub struct TextFormatOptions {
    pub use_color: bool,
    pub max_width: Option<usize>,
}

impl TextFormatOptions {
    #[must_use]
    pub const fn plain() -> Self {
        Self {
            use_color: false,
            max_width: None,
        }
    }
}

/// Return the icon character for a status.
#[must_use]
pub const fn format_status_icon(status: Status) -> &'static str {
    match status {
        Status::Reported => icons::REPORTED,
        Status::UnderReview => icons::UNDER_REVIEW,
        Status::InProgress => icons::IN_PROGRESS,
        Status::Resolved => icons::RESOLVED,
    }
}

/// Format status label with optional color.
#[must_use]
pub fn format_status_label(status: Status, use_color: bool) -> String {
    let label = status.as_str();
    if !use_color {
        return label.to_string();
    }

    match status {
        Status::Reported => label.blue().to_string(),
        Status::UnderReview => label.yellow().to_string(),
        Status::InProgress => label.magenta().to_string(),
        Status::Resolved => label.green().to_string(),
    }
}

/// Format status icon with optional color.
#[must_use]
pub fn format_status_icon_colored(status: Status, use_color: bool) -> String {
    let icon = format_status_icon(status);
    if !use_color {
        return icon.to_string();
    }

    match status {
        Status::Reported => icon.blue().to_string(),
        Status::UnderReview => icon.yellow().to_string(),
        Status::InProgress => icon.magenta().to_string(),
        Status::Resolved => icon.green().to_string(),
    }
}

/// Format severity label with optional color.
#[must_use]
pub fn format_severity_label(severity: Severity, use_color: bool) -> String {
    let label = severity.as_str();
    if !use_color {
        return label.to_string();
    }

    match severity {
        Severity::Critical => label.red().bold().to_string(),
        Severity::High => label.red().to_string(),
        Severity::Medium => label.yellow().to_string(),
        Severity::Low => label.green().to_string(),
    }
}

/// Format severity as a bracketed badge.
#[must_use]
pub fn format_severity_badge(severity: Severity, use_color: bool) -> String {
    format!("[{}]", format_severity_label(severity, use_color))
}

/// Format category as a bracketed badge.
#[must_use]
pub fn format_category_badge(category: Category, use_color: bool) -> String {
    let label = category.as_str();
    if use_color {
        format!("[{}]", label.cyan())
    } else {
        format!("[{label}]")
    }
}

/// List date, e.g. "Jan 15, 2024".
#[must_use]
pub fn format_date(at: &DateTime<Utc>) -> String {
    at.format("%b %-d, %Y").to_string()
}

/// Detail date, e.g. "Monday, January 15, 2024 at 10:30 AM".
#[must_use]
pub fn format_datetime(at: &DateTime<Utc>) -> String {
    at.format("%A, %B %-d, %Y at %-I:%M %p").to_string()
}

/// Singular or plural noun for a count, e.g. "1 vote", "3 votes".
#[must_use]
pub fn pluralize(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

/// Determine terminal width from environment (falls back to 80).
#[must_use]
pub fn terminal_width() -> usize {
    if let Ok(columns) = std::env::var("COLUMNS") {
        if let Ok(value) = columns.trim().parse::<usize>() {
            if value > 0 {
                return value;
            }
        }
    }
    80
}

/// Truncate a title to fit within `max_len` visible columns.
///
/// Handles wide characters (emojis, CJK) correctly using `unicode-width`.
#[must_use]
pub fn truncate_title(title: &str, max_len: usize) -> String {
    if max_len == 0 {
        return String::new();
    }
    if UnicodeWidthStr::width(title) <= max_len {
        return title.to_string();
    }

    let (budget, ellipsis) = if max_len <= 3 {
        (max_len, "")
    } else {
        (max_len - 3, "...")
    };

    let mut width = 0;
    let mut out = String::new();
    for c in title.chars() {
        let cw = UnicodeWidthChar::width(c).unwrap_or(0);
        if width + cw > budget {
            break;
        }
        width += cw;
        out.push(c);
    }
    out.push_str(ellipsis);
    out
}

/// Format a single-line issue summary with options.
///
/// Format: `{icon} #{id} [{severity}] [{category}] {title}`
#[must_use]
pub fn format_issue_line_with(issue: &Issue, options: TextFormatOptions) -> String {
    let id = format!("#{}", issue.id);
    let prefix_len = UnicodeWidthStr::width(format_status_icon(issue.status))
        + 1
        + UnicodeWidthStr::width(id.as_str())
        + 1
        + issue.severity.as_str().len()
        + 3
        + issue.category.as_str().len()
        + 3;

    let title = options.max_width.map_or_else(
        || issue.title.clone(),
        |width| truncate_title(&issue.title, width.saturating_sub(prefix_len)),
    );

    let icon = format_status_icon_colored(issue.status, options.use_color);
    let severity = format_severity_badge(issue.severity, options.use_color);
    let category = format_category_badge(issue.category, options.use_color);
    let id = if options.use_color {
        id.bold().to_string()
    } else {
        id
    };

    format!("{icon} {id} {severity} {category} {title}")
}

/// Format a single-line issue summary.
#[must_use]
pub fn format_issue_line(issue: &Issue) -> String {
    format_issue_line_with(issue, TextFormatOptions::plain())
}

/// Second line under an issue in lists: status, address, date and counts.
#[must_use]
pub fn format_issue_meta(issue: &Issue, use_color: bool) -> String {
    format!(
        "{} · {} · {} · {} · {}",
        format_status_label(issue.status, use_color),
        issue.location.address,
        format_date(&issue.reported_at),
        pluralize(usize::try_from(issue.votes).unwrap_or(usize::MAX), "vote"),
        pluralize(issue.comment_count(), "comment"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::IssueStore;
    use chrono::TimeZone;

    fn first_issue() -> Issue {
        IssueStore::sample().issues()[0].clone()
    }

    #[test]
    fn test_status_icons() {
        assert_eq!(format_status_icon(Status::Reported), "○");
        assert_eq!(format_status_icon(Status::UnderReview), "◔");
        assert_eq!(format_status_icon(Status::InProgress), "◐");
        assert_eq!(format_status_icon(Status::Resolved), "✓");
    }

    #[test]
    fn test_plain_labels() {
        assert_eq!(format_status_label(Status::UnderReview, false), "Under Review");
        assert_eq!(format_severity_badge(Severity::Critical, false), "[Critical]");
        assert_eq!(
            format_category_badge(Category::WaterUtilities, false),
            "[Water & Utilities]"
        );
    }

    #[test]
    fn test_dates() {
        let at = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
        assert_eq!(format_date(&at), "Jan 15, 2024");
        assert_eq!(format_datetime(&at), "Monday, January 15, 2024 at 10:30 AM");

        let evening = Utc.with_ymd_and_hms(2024, 1, 18, 19, 45, 0).unwrap();
        assert_eq!(format_datetime(&evening), "Thursday, January 18, 2024 at 7:45 PM");
    }

    #[test]
    fn test_format_issue_line() {
        let line = format_issue_line(&first_issue());
        assert_eq!(
            line,
            "◐ #1 [High] [Road & Infrastructure] Large pothole on Main Street"
        );
    }

    #[test]
    fn test_format_issue_meta() {
        let meta = format_issue_meta(&first_issue(), false);
        assert_eq!(
            meta,
            "In Progress · 123 Main Street, Downtown · Jan 15, 2024 · 15 votes · 2 comments"
        );
    }

    #[test]
    fn test_pluralize() {
        assert_eq!(pluralize(1, "comment"), "1 comment");
        assert_eq!(pluralize(0, "comment"), "0 comments");
    }

    #[test]
    fn test_truncate_title_adds_ellipsis() {
        assert_eq!(truncate_title("This is a long title", 10), "This is...");
        assert_eq!(truncate_title("Short", 10), "Short");
        assert_eq!(truncate_title("Longer", 2), "Lo");
    }

    #[test]
    fn test_truncate_wide_characters() {
        // Each CJK character is two columns wide.
        assert_eq!(truncate_title("道路の穴があります", 7), "道路...");
    }

    #[test]
    fn test_format_issue_line_with_truncation() {
        let options = TextFormatOptions {
            use_color: false,
            max_width: Some(50),
        };
        let line = format_issue_line_with(&first_issue(), options);
        assert!(line.ends_with("..."));
        assert!(UnicodeWidthStr::width(line.as_str()) <= 50);
    }
}
