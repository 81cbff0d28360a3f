//! Structured error output.
//!
//! Provides machine-parseable error information with:
//! - Error codes for categorization
//! - Hints for self-correction
//! - Retryability flags
//! - Context for debugging
//!
//! Intent detection maps common synonyms ("done", "wip", "urgent") onto the
//! enumerated values, and edit distance suggests near-miss issue IDs.

#![allow(clippy::option_if_let_else)]

use crate::error::CivicError;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::collections::HashMap;
use std::sync::LazyLock;

/// Machine-readable error codes.
///
/// Format: `SCREAMING_SNAKE_CASE` for easy parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // === Issue Errors (exit code 3) ===
    /// Issue with specified ID not found
    IssueNotFound,
    /// Two records share one ID
    DuplicateId,

    // === Validation Errors (exit code 4) ===
    /// Field validation failed
    ValidationFailed,
    /// Invalid status value
    InvalidStatus,
    /// Invalid severity value
    InvalidSeverity,
    /// Invalid category value
    InvalidCategory,

    // === Config Errors (exit code 7) ===
    /// Configuration error
    ConfigError,

    // === I/O Errors (exit code 8) ===
    /// File I/O error
    IoError,
    /// JSON serialization error
    JsonError,
    /// YAML parsing error
    YamlError,

    // === Internal Errors (exit code 1) ===
    /// Unexpected internal error
    InternalError,
}

impl ErrorCode {
    /// Get the string representation for JSON output.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::IssueNotFound => "ISSUE_NOT_FOUND",
            Self::DuplicateId => "DUPLICATE_ID",
            Self::ValidationFailed => "VALIDATION_FAILED",
            Self::InvalidStatus => "INVALID_STATUS",
            Self::InvalidSeverity => "INVALID_SEVERITY",
            Self::InvalidCategory => "INVALID_CATEGORY",
            Self::ConfigError => "CONFIG_ERROR",
            Self::IoError => "IO_ERROR",
            Self::JsonError => "JSON_ERROR",
            Self::YamlError => "YAML_ERROR",
            Self::InternalError => "INTERNAL_ERROR",
        }
    }

    /// Whether fixing the input and retrying can succeed.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::ValidationFailed
                | Self::InvalidStatus
                | Self::InvalidSeverity
                | Self::InvalidCategory
        )
    }

    /// Get the exit code for this error category.
    ///
    /// - 1: Internal/unknown errors
    /// - 3: Issue errors
    /// - 4: Validation errors
    /// - 7: Config errors
    /// - 8: I/O errors
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::IssueNotFound | Self::DuplicateId => 3,
            Self::ValidationFailed
            | Self::InvalidStatus
            | Self::InvalidSeverity
            | Self::InvalidCategory => 4,
            Self::ConfigError => 7,
            Self::IoError | Self::JsonError | Self::YamlError => 8,
            Self::InternalError => 1,
        }
    }
}

/// Structured error for machine-parseable output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructuredError {
    /// Machine-readable error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Optional hint for fixing the error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    /// Whether the operation can be retried
    pub retryable: bool,
    /// Additional context data
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<Value>,
}

impl StructuredError {
    /// Create a new structured error from a `CivicError`.
    #[must_use]
    pub fn from_error(err: &CivicError) -> Self {
        let (code, context) = Self::extract_code_and_context(err);
        let hint = Self::generate_hint(err);

        Self {
            code,
            message: err.to_string(),
            hint,
            retryable: code.is_retryable(),
            context,
        }
    }

    /// Create a structured error with similar ID suggestions.
    #[must_use]
    pub fn issue_not_found(searched_id: &str, existing_ids: &[String]) -> Self {
        let similar = find_similar_ids(searched_id, existing_ids, 3);

        let hint = if similar.is_empty() {
            Some("Run 'civic explore' to see available issues.".to_string())
        } else if similar.len() == 1 {
            Some(format!("Did you mean '{}'?", similar[0]))
        } else {
            Some(format!("Did you mean one of: {}?", similar.join(", ")))
        };

        let context = json!({
            "searched_id": searched_id,
            "similar_ids": similar,
        });

        Self {
            code: ErrorCode::IssueNotFound,
            message: format!("Issue not found: {searched_id}"),
            hint,
            retryable: false,
            context: Some(context),
        }
    }

    /// Serialize to JSON value.
    #[must_use]
    pub fn to_json(&self) -> Value {
        json!({
            "error": {
                "code": self.code.as_str(),
                "message": self.message,
                "hint": self.hint,
                "retryable": self.retryable,
                "context": self.context,
            }
        })
    }

    /// Format for human-readable output.
    #[must_use]
    pub fn to_human(&self, color: bool) -> String {
        let mut output = String::new();

        if color {
            output.push_str("\x1b[31mError:\x1b[0m ");
        } else {
            output.push_str("Error: ");
        }

        output.push_str(&self.message);

        if let Some(hint) = &self.hint {
            output.push('\n');
            if color {
                output.push_str("\x1b[33mHint:\x1b[0m ");
            } else {
                output.push_str("Hint: ");
            }
            output.push_str(hint);
        }

        output
    }

    fn extract_code_and_context(err: &CivicError) -> (ErrorCode, Option<Value>) {
        match err {
            CivicError::IssueNotFound { id } => {
                (ErrorCode::IssueNotFound, Some(json!({"searched_id": id})))
            }
            CivicError::DuplicateId { id } => (ErrorCode::DuplicateId, Some(json!({"id": id}))),
            CivicError::Validation { field, reason } => (
                ErrorCode::ValidationFailed,
                Some(json!({"field": field, "reason": reason})),
            ),
            CivicError::InvalidStatus { status } => (
                ErrorCode::InvalidStatus,
                Some(json!({"provided": status, "valid_values": VALID_STATUSES})),
            ),
            CivicError::InvalidSeverity { severity } => (
                ErrorCode::InvalidSeverity,
                Some(json!({"provided": severity, "valid_values": VALID_SEVERITIES})),
            ),
            CivicError::InvalidCategory { category } => (
                ErrorCode::InvalidCategory,
                Some(json!({"provided": category})),
            ),
            CivicError::Config(_) => (ErrorCode::ConfigError, None),
            CivicError::Io(_) => (ErrorCode::IoError, None),
            CivicError::Json(_) => (ErrorCode::JsonError, None),
            CivicError::Yaml(_) => (ErrorCode::YamlError, None),
            CivicError::Other(_) => (ErrorCode::InternalError, None),
        }
    }

    fn generate_hint(err: &CivicError) -> Option<String> {
        match err {
            CivicError::InvalidStatus { status } => match detect_status_intent(status) {
                Some(detected) => Some(format!("Did you mean --status \"{detected}\"?")),
                None => err.suggestion().map(str::to_string),
            },
            CivicError::InvalidSeverity { severity } => match detect_severity_intent(severity) {
                Some(detected) => Some(format!("Did you mean --severity {detected}?")),
                None => err.suggestion().map(str::to_string),
            },
            CivicError::IssueNotFound { .. } => {
                Some("Run 'civic explore' to see available issues.".to_string())
            }
            _ => err.suggestion().map(str::to_string),
        }
    }
}

const VALID_STATUSES: [&str; 4] = ["Reported", "Under Review", "In Progress", "Resolved"];

const VALID_SEVERITIES: [&str; 4] = ["Low", "Medium", "High", "Critical"];

/// Status synonyms for intent detection.
static STATUS_SYNONYMS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    [
        ("new", "Reported"),
        ("open", "Reported"),
        ("submitted", "Reported"),
        ("pending", "Under Review"),
        ("triage", "Under Review"),
        ("reviewing", "Under Review"),
        ("wip", "In Progress"),
        ("active", "In Progress"),
        ("started", "In Progress"),
        ("working", "In Progress"),
        ("done", "Resolved"),
        ("fixed", "Resolved"),
        ("closed", "Resolved"),
        ("complete", "Resolved"),
        ("completed", "Resolved"),
    ]
    .into_iter()
    .collect()
});

/// Severity synonyms for intent detection.
static SEVERITY_SYNONYMS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    [
        ("urgent", "Critical"),
        ("emergency", "Critical"),
        ("severe", "High"),
        ("important", "High"),
        ("normal", "Medium"),
        ("moderate", "Medium"),
        ("minor", "Low"),
        ("trivial", "Low"),
    ]
    .into_iter()
    .collect()
});

fn detect_status_intent(input: &str) -> Option<&'static str> {
    let lower = input.trim().to_lowercase();
    STATUS_SYNONYMS.get(lower.as_str()).copied()
}

fn detect_severity_intent(input: &str) -> Option<&'static str> {
    let lower = input.trim().to_lowercase();
    SEVERITY_SYNONYMS.get(lower.as_str()).copied()
}

/// Find existing IDs within a small edit distance of `target`.
fn find_similar_ids(target: &str, existing: &[String], limit: usize) -> Vec<String> {
    let needle = target.trim().to_lowercase();
    let max_distance = (needle.chars().count() / 2).max(1);

    let mut scored: Vec<(usize, &String)> = existing
        .iter()
        .map(|id| (levenshtein(&needle, &id.to_lowercase()), id))
        .filter(|(distance, _)| *distance <= max_distance)
        .collect();
    scored.sort_by_key(|(distance, _)| *distance);

    scored
        .into_iter()
        .take(limit)
        .map(|(_, id)| id.clone())
        .collect()
}

fn levenshtein(a: &str, b: &str) -> usize {
    let b_chars: Vec<char> = b.chars().collect();
    let mut prev: Vec<usize> = (0..=b_chars.len()).collect();
    let mut curr = vec![0; b_chars.len() + 1];

    for (i, ca) in a.chars().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b_chars.iter().enumerate() {
            let cost = usize::from(ca != *cb);
            curr[j + 1] = (prev[j] + cost).min(prev[j + 1] + 1).min(curr[j] + 1);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b_chars.len()]
}
