//! Client-side route table.
//!
//! The set of paths is fixed. Anything that does not match a known page
//! resolves to [`Route::NotFound`] rather than an error.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Report,
    Explore,
    Issue(String),
    MyReports,
    Admin,
    Login,
    About,
    NotFound(String),
}

impl Route {
    /// Resolve a path such as `/issue/4?ref=share` to a route.
    ///
    /// Trailing slashes, query strings and fragments are ignored. A missing
    /// leading slash is tolerated.
    #[must_use]
    pub fn parse(path: &str) -> Self {
        let trimmed = path.trim();
        let without_query = trimmed
            .split(['?', '#'])
            .next()
            .unwrap_or_default();
        let segments: Vec<&str> = without_query
            .split('/')
            .filter(|segment| !segment.is_empty())
            .collect();

        match segments.as_slice() {
            [] => Self::Home,
            ["report"] => Self::Report,
            ["explore"] => Self::Explore,
            ["issue", id] => Self::Issue((*id).to_string()),
            ["my-reports"] => Self::MyReports,
            ["admin"] => Self::Admin,
            ["login"] => Self::Login,
            ["about"] => Self::About,
            _ => Self::NotFound(trimmed.to_string()),
        }
    }

    /// Canonical path for this route.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::Report => "/report".to_string(),
            Self::Explore => "/explore".to_string(),
            Self::Issue(id) => format!("/issue/{id}"),
            Self::MyReports => "/my-reports".to_string(),
            Self::Admin => "/admin".to_string(),
            Self::Login => "/login".to_string(),
            Self::About => "/about".to_string(),
            Self::NotFound(path) => path.clone(),
        }
    }

    /// Label used in the navigation bar.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Report => "Report Issue",
            Self::Explore => "Explore Issues",
            Self::Issue(_) => "Issue Details",
            Self::MyReports => "My Reports",
            Self::Admin => "Admin Panel",
            Self::Login => "Login",
            Self::About => "About",
            Self::NotFound(_) => "Page Not Found",
        }
    }

    /// Pages listed in the navigation bar, in display order.
    #[must_use]
    pub fn navigation() -> Vec<Self> {
        vec![
            Self::Home,
            Self::Report,
            Self::Explore,
            Self::MyReports,
            Self::Admin,
            Self::About,
        ]
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
