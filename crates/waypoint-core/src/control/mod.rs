//! Controllers translate wire requests into domain records and back.
//!
//! Creates get a fresh v4 UUID from the operating system's randomness source
//! and parse date and time strings with fixed formats. Status names are never
//! rejected; unknown ones are stored as sent. Updates follow
//! one policy for every entity: the current record is fetched, each field
//! present in the request replaces the stored value, absent fields are kept,
//! and `updated_at` is refreshed where the entity has one.

use jiff::civil::{Date, Time};
use rand::{rngs::OsRng, RngCore};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Result, WaypointError};

pub mod goal;
pub mod plan;
pub mod planner;
pub mod task;
pub mod version;


pub use goal::{CreateGoalRequest, GoalController, GoalList, UpdateGoalRequest};
pub use plan::{CreatePlanRequest, PlanController, PlanList, UpdatePlanRequest};
pub use planner::{CreatePlannerRequest, PlannerController, PlannerList, UpdatePlannerRequest};
pub use task::{CreateTaskRequest, TaskController, TaskList, UpdateTaskRequest};
pub use version::{CreateVersionRequest, UpdateVersionRequest, VersionController, VersionList};

/// `strftime` format accepted for dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Response to every create: the identifier the server assigned.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreatedId {
    pub id: Uuid,
}

/// Generates a random (version 4) UUID.
///
/// Failure of the OS randomness source is reported, never retried.
pub fn new_id() -> Result<Uuid> {
    let mut bytes = [0u8; 16];
    OsRng
        .try_fill_bytes(&mut bytes)
        .map_err(|source| WaypointError::IdGeneration { source })?;
    Ok(uuid::Builder::from_random_bytes(bytes).into_uuid())
}

/// Parses a `YYYY-MM-DD` date. Month and day need both digits.
pub fn parse_date(field: &str, value: &str) -> Result<Date> {
    let invalid = |detail: String| {
        WaypointError::invalid_input(field)
            .with_reason(format!("expected YYYY-MM-DD, got '{value}'{detail}"))
    };

    let bytes = value.as_bytes();
    let shaped = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !shaped {
        return Err(invalid(String::new()));
    }

    Date::strptime(DATE_FORMAT, value).map_err(|e| invalid(format!(": {e}")))
}

/// Parses an `HH:MM` time of day (24-hour clock).
pub fn parse_time(field: &str, value: &str) -> Result<Time> {
    let invalid = || {
        WaypointError::invalid_input(field).with_reason(format!("expected HH:MM, got '{value}'"))
    };

    let (hour, minute) = value.split_once(':').ok_or_else(invalid)?;
    let two_digits = |part: &str| part.len() == 2 && part.bytes().all(|b| b.is_ascii_digit());
    if !two_digits(hour) || !two_digits(minute) {
        return Err(invalid());
    }

    let hour: i8 = hour.parse().map_err(|_| invalid())?;
    let minute: i8 = minute.parse().map_err(|_| invalid())?;
    Time::new(hour, minute, 0, 0).map_err(|_| invalid())
}
