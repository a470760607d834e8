//! Goal model definition.

use jiff::{civil::Date, Timestamp};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Status;

/// An objective with a deadline, grouped under a planner.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Goal {
    /// Unique identifier for the goal
    pub id: Uuid,

    /// What the goal sets out to achieve
    pub objective: String,

    /// Progress of the goal
    #[serde(default)]
    pub status: Status,

    /// Day by which the goal should be reached
    pub deadline: Date,

    /// Timestamp when the goal was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the goal was last modified (UTC)
    pub updated_at: Timestamp,

    /// ID of the planner this goal belongs to
    pub planner_id: Uuid,
}

impl Goal {
    /// Name used in errors and confirmations.
    pub const KIND: &'static str = "Goal";
}
