//! Planner model definition.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Top-level container owned by a user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Planner {
    /// Unique identifier, immutable after creation
    pub id: Uuid,

    /// Title of the planner
    pub title: String,

    /// User who owns the planner
    pub owner: String,
}

impl Planner {
    /// Name used in errors and confirmations.
    pub const KIND: &'static str = "Planner";
}
