//! Data models for planners, goals, plans, tasks and versions.
//!
//! Ownership runs by reference, not containment: a [`Goal`] names its
//! [`Planner`] through `planner_id` and a [`Plan`] names its [`Goal`] through
//! `goal_id`. The only nesting is [`Plan::tasks`], which is persisted with
//! the plan itself. Display implementations for these models live in
//! [`crate::display`].
//!
//! # Examples
//!
//! ```rust
//! use jiff::{civil::date, Timestamp};
//! use uuid::Uuid;
//! use waypoint_core::models::{Goal, Status};
//!
//! let goal = Goal {
//!     id: Uuid::new_v4(),
//!     objective: "Run a marathon".to_string(),
//!     status: Status::InProgress,
//!     deadline: date(2026, 4, 20),
//!     created_at: Timestamp::now(),
//!     updated_at: Timestamp::now(),
//!     planner_id: Uuid::new_v4(),
//! };
//! println!("{}", goal); // ➤ In Progress
//! ```

pub mod goal;
pub mod plan;
pub mod planner;
pub mod status;
pub mod task;
pub mod version;

#[cfg(test)]
mod tests;

pub use goal::Goal;
pub use plan::Plan;
pub use planner::Planner;
pub use status::Status;
pub use task::Task;
pub use version::{Snapshot, Version, VersionNumber};
