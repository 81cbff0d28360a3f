//! Sample data loaded at every start.

use crate::model::{Category, Comment, Issue, Location, Severity, Status};
use chrono::{DateTime, NaiveDate, Utc};

const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

/// UTC timestamp from calendar parts. Out-of-range parts yield the epoch.
fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, minute, 0))
        .map(|naive| naive.and_utc())
        .unwrap_or_default()
}

fn images(count: usize) -> Vec<String> {
    vec![PLACEHOLDER_IMAGE.to_string(); count]
}

fn comment(id: &str, author: &str, content: &str, timestamp: DateTime<Utc>) -> Comment {
    Comment {
        id: id.to_string(),
        author: author.to_string(),
        content: content.to_string(),
        timestamp,
        replies: Vec::new(),
    }
}

#[allow(clippy::too_many_lines)]
pub(super) fn sample_issues() -> Vec<Issue> {
    vec![
        Issue {
            id: "1".to_string(),
            title: "Large pothole on Main Street".to_string(),
            description: "There is a significant pothole on Main Street near the intersection \
                          with Oak Avenue. It's causing damage to vehicles and is a safety hazard."
                .to_string(),
            category: Category::RoadInfrastructure,
            severity: Severity::High,
            status: Status::InProgress,
            location: Location {
                address: "123 Main Street, Downtown".to_string(),
                lat: 40.7128,
                lng: -74.0060,
            },
            images: images(2),
            reported_by: "Sarah Johnson".to_string(),
            reported_at: at(2024, 1, 15, 10, 30),
            updated_at: at(2024, 1, 20, 14, 15),
            votes: 15,
            comments: vec![
                comment(
                    "c1",
                    "Mike Chen",
                    "I hit this pothole yesterday and damaged my tire. This needs immediate attention!",
                    at(2024, 1, 16, 9, 20),
                ),
                comment(
                    "c2",
                    "City Works Dept",
                    "Thank you for reporting this issue. We have scheduled repairs for next week.",
                    at(2024, 1, 18, 11, 45),
                ),
            ],
        },
        Issue {
            id: "2".to_string(),
            title: "Broken streetlight on Elm Street".to_string(),
            description: "The streetlight at the corner of Elm Street and 2nd Avenue has been \
                          flickering for weeks and now appears to be completely out."
                .to_string(),
            category: Category::StreetLighting,
            severity: Severity::Medium,
            status: Status::UnderReview,
            location: Location {
                address: "456 Elm Street, Riverside".to_string(),
                lat: 40.7589,
                lng: -73.9851,
            },
            images: images(1),
            reported_by: "Robert Martinez".to_string(),
            reported_at: at(2024, 1, 18, 19, 45),
            updated_at: at(2024, 1, 19, 8, 30),
            votes: 8,
            comments: vec![comment(
                "c3",
                "Lisa Wang",
                "This area is very dark at night. Safety concern for pedestrians.",
                at(2024, 1, 19, 7, 15),
            )],
        },
        Issue {
            id: "3".to_string(),
            title: "Overflowing trash bins in Central Park".to_string(),
            description: "Multiple trash bins in the central area of the park are overflowing. \
                          There's litter scattered around and it's attracting pests."
                .to_string(),
            category: Category::WasteManagement,
            severity: Severity::Medium,
            status: Status::Reported,
            location: Location {
                address: "Central Park, Recreation Area".to_string(),
                lat: 40.7829,
                lng: -73.9654,
            },
            images: images(3),
            reported_by: "Emily Davis".to_string(),
            reported_at: at(2024, 1, 20, 12, 15),
            updated_at: at(2024, 1, 20, 12, 15),
            votes: 12,
            comments: Vec::new(),
        },
        Issue {
            id: "4".to_string(),
            title: "Water main break on Pine Avenue".to_string(),
            description: "Large water main break causing flooding and road closure. \
                          Water pressure is low in surrounding area."
                .to_string(),
            category: Category::WaterUtilities,
            severity: Severity::Critical,
            status: Status::InProgress,
            location: Location {
                address: "789 Pine Avenue, Westside".to_string(),
                lat: 40.7505,
                lng: -73.9934,
            },
            images: images(1),
            reported_by: "David Kim".to_string(),
            reported_at: at(2024, 1, 21, 6, 30),
            updated_at: at(2024, 1, 21, 8, 0),
            votes: 25,
            comments: vec![comment(
                "c4",
                "Emergency Services",
                "Emergency crews are on site. Road will remain closed until repairs are complete.",
                at(2024, 1, 21, 7, 45),
            )],
        },
        Issue {
            id: "5".to_string(),
            title: "Vandalized bus stop shelter".to_string(),
            description: "Bus stop shelter on Commerce Street has been vandalized with graffiti \
                          and one of the glass panels is broken."
                .to_string(),
            category: Category::PublicSafety,
            severity: Severity::Low,
            status: Status::Resolved,
            location: Location {
                address: "321 Commerce Street, Business District".to_string(),
                lat: 40.7282,
                lng: -74.0776,
            },
            images: images(1),
            reported_by: "Jennifer Lopez".to_string(),
            reported_at: at(2024, 1, 10, 16, 20),
            updated_at: at(2024, 1, 22, 10, 30),
            votes: 6,
            comments: vec![comment(
                "c5",
                "Maintenance Team",
                "Shelter has been cleaned and glass panel replaced. Thank you for the report!",
                at(2024, 1, 22, 10, 30),
            )],
        },
    ]
}
