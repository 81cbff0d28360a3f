//! Error types and handling for `civic_reports`.
//!
//! # Design
//!
//! - Uses `thiserror` for derive-based error types
//! - Wraps `anyhow` errors through `Other`
//! - Provides recovery hints for user-facing errors
//! - Provides structured JSON output via [`StructuredError`]

mod structured;

pub use structured::{ErrorCode, StructuredError};

use thiserror::Error;

/// Primary error type for `civic_reports` operations.
#[derive(Error, Debug)]
pub enum CivicError {
    // === Issue Errors ===
    /// No issue with this ID exists in the store.
    #[error("Issue not found: {id}")]
    IssueNotFound { id: String },

    /// Two records share the same ID.
    #[error("Duplicate issue ID: {id}")]
    DuplicateId { id: String },

    // === Validation Errors ===
    /// Field validation failed.
    #[error("Validation failed: {field}: {reason}")]
    Validation { field: String, reason: String },

    /// Invalid status value.
    #[error("Invalid status: {status}")]
    InvalidStatus { status: String },

    /// Invalid severity value.
    #[error("Invalid severity: {severity}")]
    InvalidSeverity { severity: String },

    /// Invalid category value.
    #[error("Invalid category: {category}")]
    InvalidCategory { category: String },

    // === Configuration Errors ===
    /// Configuration file or value error.
    #[error("Configuration error: {0}")]
    Config(String),

    // === I/O Errors ===
    /// File system I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parsing error.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Wrapped anyhow error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CivicError {
    /// Can the user fix this without code changes?
    #[must_use]
    pub const fn is_user_recoverable(&self) -> bool {
        matches!(
            self,
            Self::IssueNotFound { .. }
                | Self::Validation { .. }
                | Self::InvalidStatus { .. }
                | Self::InvalidSeverity { .. }
                | Self::InvalidCategory { .. }
                | Self::Config(_)
        )
    }

    /// Human-friendly suggestion for fixing this error.
    #[must_use]
    pub const fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::InvalidStatus { .. } => {
                Some("Valid statuses: Reported, Under Review, In Progress, Resolved")
            }
            Self::InvalidSeverity { .. } => Some("Valid severities: Low, Medium, High, Critical"),
            Self::InvalidCategory { .. } => Some(
                "Valid categories: Road & Infrastructure, Street Lighting, Public Safety, \
                 Waste Management, Water & Utilities, Parks & Recreation, \
                 Traffic & Transportation, Other",
            ),
            _ => None,
        }
    }

    /// Create a validation error for a specific field.
    #[must_use]
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Result type using `CivicError`.
pub type Result<T> = std::result::Result<T, CivicError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CivicError::IssueNotFound {
            id: "42".to_string(),
        };
        assert_eq!(err.to_string(), "Issue not found: 42");
    }

    #[test]
    fn test_validation_error() {
        let err = CivicError::validation("title", "cannot be empty");
        assert_eq!(err.to_string(), "Validation failed: title: cannot be empty");
    }

    #[test]
    fn test_user_recoverable() {
        assert!(CivicError::validation("location", "required").is_user_recoverable());

        let not_recoverable = CivicError::Io(std::io::Error::other("disk gone"));
        assert!(!not_recoverable.is_user_recoverable());
    }

    #[test]
    fn test_suggestion() {
        let err = CivicError::InvalidStatus {
            status: "closed".to_string(),
        };
        assert_eq!(
            err.suggestion(),
            Some("Valid statuses: Reported, Under Review, In Progress, Resolved")
        );
        assert_eq!(
            CivicError::IssueNotFound {
                id: "x".to_string()
            }
            .suggestion(),
            None
        );
    }
}
