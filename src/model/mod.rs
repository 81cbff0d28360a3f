//! Core data types for `civic_reports`.
//!
//! This module defines the fundamental types used throughout the application:
//! - `Issue` - A reported civic problem
//! - `Category` - The eight fixed issue categories
//! - `Severity` - Four-level urgency classification
//! - `Status` - Four-stage lifecycle label
//! - `Location` - Street address plus coordinates
//! - `Comment` - Issue comments with optional nested replies

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CivicError;

/// Reduce a label to a comparison key: lowercase words, `and` dropped.
///
/// `"Road & Infrastructure"`, `"road_and_infrastructure"` and
/// `"road-infrastructure"` all reduce to `"roadinfrastructure"`.
fn label_key(s: &str) -> String {
    s.split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty() && !word.eq_ignore_ascii_case("and"))
        .map(str::to_lowercase)
        .collect()
}

/// Issue category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Category {
    #[serde(rename = "Road & Infrastructure")]
    RoadInfrastructure,
    #[serde(rename = "Street Lighting")]
    StreetLighting,
    #[serde(rename = "Public Safety")]
    PublicSafety,
    #[serde(rename = "Waste Management")]
    WasteManagement,
    #[serde(rename = "Water & Utilities")]
    WaterUtilities,
    #[serde(rename = "Parks & Recreation")]
    ParksRecreation,
    #[serde(rename = "Traffic & Transportation")]
    TrafficTransportation,
    Other,
}

impl Category {
    pub const ALL: [Self; 8] = [
        Self::RoadInfrastructure,
        Self::StreetLighting,
        Self::PublicSafety,
        Self::WasteManagement,
        Self::WaterUtilities,
        Self::ParksRecreation,
        Self::TrafficTransportation,
        Self::Other,
    ];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::RoadInfrastructure => "Road & Infrastructure",
            Self::StreetLighting => "Street Lighting",
            Self::PublicSafety => "Public Safety",
            Self::WasteManagement => "Waste Management",
            Self::WaterUtilities => "Water & Utilities",
            Self::ParksRecreation => "Parks & Recreation",
            Self::TrafficTransportation => "Traffic & Transportation",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CivicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = label_key(s);
        if let Some(category) = Self::ALL
            .into_iter()
            .find(|category| label_key(category.as_str()) == key)
        {
            return Ok(category);
        }

        match key.as_str() {
            "road" | "roads" | "infrastructure" | "pothole" => Ok(Self::RoadInfrastructure),
            "lighting" | "streetlight" | "streetlights" | "light" => Ok(Self::StreetLighting),
            "safety" => Ok(Self::PublicSafety),
            "waste" | "trash" | "garbage" => Ok(Self::WasteManagement),
            "water" | "utilities" => Ok(Self::WaterUtilities),
            "parks" | "park" | "recreation" => Ok(Self::ParksRecreation),
            "traffic" | "transportation" | "transit" => Ok(Self::TrafficTransportation),
            _ => Err(CivicError::InvalidCategory {
                category: s.trim().to_string(),
            }),
        }
    }
}

/// Issue severity.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    pub const ALL: [Self; 4] = [Self::Low, Self::Medium, Self::High, Self::Critical];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Critical => "Critical",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = CivicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match label_key(s).as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            "critical" => Ok(Self::Critical),
            _ => Err(CivicError::InvalidSeverity {
                severity: s.trim().to_string(),
            }),
        }
    }
}

/// Issue lifecycle status.
///
/// No transition rules are enforced; the order only drives the timeline view.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
pub enum Status {
    Reported,
    #[serde(rename = "Under Review")]
    UnderReview,
    #[serde(rename = "In Progress")]
    InProgress,
    Resolved,
}

impl Status {
    pub const ALL: [Self; 4] = [
        Self::Reported,
        Self::UnderReview,
        Self::InProgress,
        Self::Resolved,
    ];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Reported => "Reported",
            Self::UnderReview => "Under Review",
            Self::InProgress => "In Progress",
            Self::Resolved => "Resolved",
        }
    }

    /// Zero-based position in the lifecycle.
    #[must_use]
    pub const fn stage(&self) -> usize {
        match self {
            Self::Reported => 0,
            Self::UnderReview => 1,
            Self::InProgress => 2,
            Self::Resolved => 3,
        }
    }

    #[must_use]
    pub const fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = CivicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match label_key(s).as_str() {
            "reported" => Ok(Self::Reported),
            "underreview" | "review" => Ok(Self::UnderReview),
            "inprogress" | "progress" => Ok(Self::InProgress),
            "resolved" => Ok(Self::Resolved),
            _ => Err(CivicError::InvalidStatus {
                status: s.trim().to_string(),
            }),
        }
    }
}

/// Where an issue was reported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Location {
    pub address: String,
    pub lat: f64,
    pub lng: f64,
}

/// A comment on an issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Comment {
    pub id: String,
    pub author: String,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub replies: Vec<Comment>,
}

impl Comment {
    /// Number of comments in this thread, the comment itself included.
    #[must_use]
    pub fn thread_len(&self) -> usize {
        1 + self.replies.iter().map(Self::thread_len).sum::<usize>()
    }
}

/// A single reported civic problem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    /// Unique ID within the store (e.g., "4").
    pub id: String,

    pub title: String,

    pub description: String,

    pub category: Category,

    pub severity: Severity,

    pub status: Status,

    pub location: Location,

    /// Image URLs in display order.
    #[serde(default)]
    pub images: Vec<String>,

    /// Display name of the citizen who filed the report.
    pub reported_by: String,

    pub reported_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,

    /// Community support count.
    #[serde(default)]
    pub votes: u32,

    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl Issue {
    /// Total comments including nested replies.
    #[must_use]
    pub fn comment_count(&self) -> usize {
        self.comments.iter().map(Comment::thread_len).sum()
    }
}
