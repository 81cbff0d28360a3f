//! Output formatting for `civic_reports`.
//!
//! Supports human-readable text output and machine-parseable JSON.
//! JSON mode sends clean payloads to stdout with diagnostics to stderr.
//!
//! # Output Types
//!
//! - [`IssueSummary`] - Issue with comment count (explore, mine, admin)
//! - [`IssueDetails`] - Issue with timeline and vote state (show)
//! - [`ExploreView`] - Filtered list with counts (explore)
//! - [`WithNotifications`] - Any payload plus raised toasts

mod output;
mod text;

pub use output::{ExploreView, IssueDetails, IssueSummary, WithNotifications};
pub use text::{
    TextFormatOptions, format_category_badge, format_date, format_datetime, format_issue_line,
    format_issue_line_with, format_issue_meta, format_severity_badge, format_severity_label,
    format_status_icon, format_status_icon_colored, format_status_label, pluralize,
    terminal_width, truncate_title,
};
