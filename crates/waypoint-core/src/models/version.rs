//! Version model definition.

use std::{fmt, str::FromStr};

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Goal, Plan};

/// A `major.minor.patch` version number.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct VersionNumber {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl VersionNumber {
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }
}

impl FromStr for VersionNumber {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let body = trimmed.strip_prefix('v').unwrap_or(trimmed);
        let parts: Vec<&str> = body.split('.').collect();
        let [major, minor, patch] = parts.as_slice() else {
            return Err(format!("Invalid version number: {s}"));
        };
        let component = |part: &str| {
            part.parse::<u32>()
                .map_err(|_| format!("Invalid version number: {s}"))
        };
        Ok(Self::new(
            component(major)?,
            component(minor)?,
            component(patch)?,
        ))
    }
}

impl fmt::Display for VersionNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// The goal and its plans as they stood when a version was taken.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Snapshot {
    pub goal: Goal,
    #[serde(default)]
    pub plans: Vec<Plan>,
}

/// A point-in-time snapshot of a goal and its descendant plans and tasks.
///
/// Version numbers are recorded as given; nothing checks that they increase.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Version {
    /// Unique identifier for the version
    pub id: Uuid,

    /// ID of the goal the snapshot was taken from
    pub goal_id: Uuid,

    /// Plan the version was recorded against, if any
    pub plan_id: Option<Uuid>,

    /// Task the version was recorded against, if any
    pub task_id: Option<Uuid>,

    /// Version number
    pub version: VersionNumber,

    /// Timestamp when the version was created (UTC)
    pub created_at: Timestamp,

    /// User who recorded the version
    pub created_by: String,

    /// The version this one supersedes
    pub previous_version: Option<Uuid>,

    /// Captured goal and plans
    pub snapshot: Snapshot,
}

impl Version {
    /// Name used in errors and confirmations.
    pub const KIND: &'static str = "Version";
}
