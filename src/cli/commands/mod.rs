//! Page command implementations.

pub mod about;
pub mod admin;
pub mod comment;
pub mod completions;
pub mod explore;
pub mod home;
pub mod login;
pub mod mine;
pub mod open;
pub mod report;
pub mod schema;
pub mod share;
pub mod show;
pub mod version;
pub mod vote;

use crate::config::{self, CliOverrides, Settings};
use crate::error::{CivicError, Result};
use crate::format::{TextFormatOptions, WithNotifications, terminal_width};
use crate::model::Issue;
use crate::session::{Notification, Notifier, RecordingNotifier, TerminalNotifier};
use crate::store::IssueStore;
use crate::view;
use serde::Serialize;

/// Where toasts go for this run.
#[derive(Debug)]
enum NotifySink {
    Terminal(TerminalNotifier),
    Recording(RecordingNotifier),
}

/// Everything a page needs: the store, resolved settings and output mode.
#[derive(Debug)]
pub struct PageContext {
    pub store: IssueStore,
    pub settings: Settings,
    pub json: bool,
    sink: NotifySink,
}

impl PageContext {
    #[must_use]
    pub fn new(store: IssueStore, settings: Settings, json: bool) -> Self {
        let sink = if json {
            NotifySink::Recording(RecordingNotifier::new())
        } else {
            NotifySink::Terminal(TerminalNotifier::new(settings.use_color, settings.quiet))
        };
        Self {
            store,
            settings,
            json,
            sink,
        }
    }

    /// Load settings and the sample store for a command run.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load(json: bool, cli: &CliOverrides) -> Result<Self> {
        let settings = config::load_settings(cli)?;
        Ok(Self::new(IssueStore::sample(), settings, json))
    }

    pub fn notify(&self, notification: &Notification) {
        match &self.sink {
            NotifySink::Terminal(notifier) => notifier.notify(notification),
            NotifySink::Recording(notifier) => notifier.notify(notification),
        }
    }

    /// Toasts recorded so far (JSON mode only).
    #[must_use]
    pub fn take_notifications(&self) -> Vec<Notification> {
        match &self.sink {
            NotifySink::Terminal(_) => Vec::new(),
            NotifySink::Recording(notifier) => notifier.take(),
        }
    }

    /// Print a JSON payload with any recorded toasts attached.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn emit_json<T: Serialize>(&self, body: T) -> Result<()> {
        let payload = WithNotifications {
            body,
            notifications: self.take_notifications(),
        };
        println!("{}", serde_json::to_string_pretty(&payload)?);
        Ok(())
    }

    /// Print page text unless quiet.
    pub fn print(&self, text: &str) {
        if !self.settings.quiet {
            println!("{}", text.trim_end_matches('\n'));
        }
    }

    /// Look up an issue or fail with `IssueNotFound`.
    ///
    /// # Errors
    ///
    /// Returns `IssueNotFound` when no issue has this ID.
    pub fn require_issue(&self, id: &str) -> Result<&Issue> {
        view::get_issue_by_id(&self.store, id.trim()).ok_or_else(|| CivicError::IssueNotFound {
            id: id.trim().to_string(),
        })
    }

    #[must_use]
    pub fn text_options(&self) -> TextFormatOptions {
        TextFormatOptions {
            use_color: self.settings.use_color,
            max_width: Some(terminal_width()),
        }
    }
}

/// Parse an optional flag value with the type's `FromStr`.
pub(crate) fn parse_opt<T>(value: Option<&str>) -> Result<Option<T>>
where
    T: std::str::FromStr<Err = CivicError>,
{
    value
        .map(str::trim)
        .filter(|raw| !raw.is_empty())
        .map(str::parse)
        .transpose()
}

/// Like [`parse_opt`] for filter flags, where `all` means no filter.
pub(crate) fn parse_filter<T>(value: Option<&str>) -> Result<Option<T>>
where
    T: std::str::FromStr<Err = CivicError>,
{
    parse_opt(value.filter(|raw| !raw.trim().eq_ignore_ascii_case("all")))
}

/// Underlined section heading.
pub(crate) fn heading(title: &str) -> String {
    format!("{title}\n{}\n", "─".repeat(title.chars().count()))
}
