//! Task model definition.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A standalone unit of work.
///
/// `started` and `completed` are independent flags; a task may be completed
/// without ever having been marked as started.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    /// Unique identifier for the task
    pub id: Uuid,

    /// Brief title of the task
    pub title: String,

    /// Free-form description
    #[serde(default)]
    pub description: String,

    /// User the task belongs to
    #[serde(default)]
    pub owner: String,

    /// Whether work on the task has begun
    #[serde(default)]
    pub started: bool,

    /// Whether the task is finished
    #[serde(default)]
    pub completed: bool,

    /// Timestamp when the task was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the task was last modified (UTC)
    pub updated_at: Timestamp,
}

impl Task {
    /// Name used in errors and confirmations.
    pub const KIND: &'static str = "Task";
}
