//! Status shared by goals and plans.
//!
//! Four names are canonical. Clients may send any other string; it is kept
//! verbatim as [`Status::Other`].

use std::{convert::Infallible, str::FromStr};

use serde::{Deserialize, Serialize};

/// Progress of a goal or plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(from = "String", into = "String")]
pub enum Status {
    /// Work has not begun
    #[default]
    NotStarted,

    /// Work is underway
    InProgress,

    /// Work finished successfully
    Completed,

    /// Work was abandoned or missed its deadline
    Fail,

    /// Any name outside the canonical four, stored as sent
    Other(String),
}

impl From<&str> for Status {
    /// Canonical names match leniently (case, spaces, `_` and `-` ignored).
    fn from(s: &str) -> Self {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .collect::<String>()
            .to_lowercase();
        match normalized.as_str() {
            "notstarted" => Status::NotStarted,
            "inprogress" => Status::InProgress,
            "completed" => Status::Completed,
            "fail" => Status::Fail,
            _ => Status::Other(s.to_string()),
        }
    }
}

impl From<String> for Status {
    fn from(s: String) -> Self {
        Status::from(s.as_str())
    }
}

impl From<Status> for String {
    fn from(status: Status) -> Self {
        match status {
            Status::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl FromStr for Status {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Status::from(s))
    }
}

impl Status {
    /// The canonical statuses, in lifecycle order.
    pub const ALL: [Status; 4] = [
        Status::NotStarted,
        Status::InProgress,
        Status::Completed,
        Status::Fail,
    ];

    /// Name used both on the wire and in the database.
    pub fn as_str(&self) -> &str {
        match self {
            Status::NotStarted => "Not Started",
            Status::InProgress => "In Progress",
            Status::Completed => "Completed",
            Status::Fail => "Fail",
            Status::Other(name) => name,
        }
    }

    /// Get status with consistent icon formatting for display.
    ///
    /// ```rust
    /// use waypoint_core::models::Status;
    ///
    /// assert_eq!(Status::Completed.with_icon(), "✓ Completed");
    /// assert_eq!(Status::NotStarted.with_icon(), "○ Not Started");
    /// assert_eq!(Status::from("Blocked").with_icon(), "• Blocked");
    /// ```
    pub fn with_icon(&self) -> String {
        let icon = match self {
            Status::NotStarted => "○",
            Status::InProgress => "➤",
            Status::Completed => "✓",
            Status::Fail => "✗",
            Status::Other(_) => "•",
        };
        format!("{icon} {}", self.as_str())
    }
}
