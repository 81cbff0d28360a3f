//! Toast notifications.

use colored::Colorize;
use serde::Serialize;
use std::cell::RefCell;

/// A fire-and-forget message for the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
}

impl Notification {
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// One-way notification surface. Delivery can't fail and returns nothing.
pub trait Notifier {
    fn notify(&self, notification: &Notification);
}

/// Prints toasts to stderr so stdout stays clean for page output.
#[derive(Debug, Clone, Copy)]
pub struct TerminalNotifier {
    use_color: bool,
    quiet: bool,
}

impl TerminalNotifier {
    #[must_use]
    pub const fn new(use_color: bool, quiet: bool) -> Self {
        Self { use_color, quiet }
    }

    #[must_use]
    pub fn render(&self, notification: &Notification) -> String {
        let title = if self.use_color {
            notification.title.green().bold().to_string()
        } else {
            notification.title.clone()
        };
        format!("» {title}\n  {}", notification.description)
    }
}

impl Notifier for TerminalNotifier {
    fn notify(&self, notification: &Notification) {
        if !self.quiet {
            eprintln!("{}", self.render(notification));
        }
    }
}

/// Keeps every toast in memory; used by JSON output and tests.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    seen: RefCell<Vec<Notification>>,
}

impl RecordingNotifier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn take(&self) -> Vec<Notification> {
        self.seen.take()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.seen.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.seen.borrow().is_empty()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: &Notification) {
        self.seen.borrow_mut().push(notification.clone());
    }
}
