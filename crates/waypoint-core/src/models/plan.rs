//! Plan model definition.

use jiff::{
    civil::{Date, Time},
    Timestamp,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Status, Task};

/// A scheduled activity belonging to a goal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Plan {
    /// Unique identifier for the plan
    pub id: Uuid,

    /// Short name of the plan
    pub name: String,

    /// Detailed description of the plan
    #[serde(default)]
    pub description: String,

    /// Day the plan is scheduled for
    pub date: Date,

    /// Time of day the plan is scheduled for
    pub time: Time,

    /// Progress of the plan
    #[serde(default)]
    pub status: Status,

    /// Timestamp when the plan was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the plan was last modified (UTC)
    pub updated_at: Timestamp,

    /// ID of the goal this plan belongs to
    pub goal_id: Uuid,

    /// Tasks embedded in the plan; stored with the plan, not as task rows
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl Plan {
    /// Name used in errors and confirmations.
    pub const KIND: &'static str = "Plan";
}
