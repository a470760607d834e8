//! Core library for the Waypoint planning application.
//!
//! Waypoint keeps planners, the goals grouped under them, the plans that
//! work toward each goal (with their embedded tasks), standalone tasks, and
//! versioned snapshots of goals.
//!
//! # Layers
//!
//! ```text
//! ┌──────────────┐    ┌──────────────┐    ┌──────────────┐
//! │   control    │───▶│   service    │───▶│    store     │
//! │ (requests,   │    │ (one per     │    │ (traits; db/ │
//! │  ids, dates) │    │  entity)     │    │  and memory) │
//! └──────────────┘    └──────────────┘    └──────────────┘
//! ```
//!
//! - [`control`]: turns wire requests into records, generating identifiers
//!   and timestamps and parsing date, time, status and version strings
//! - [`service`]: forwards to a store trait object
//! - [`store`]: persistence contracts, implemented by [`Database`] (SQLite)
//!   and [`MemoryStore`]
//! - [`display`]: markdown `Display` impls for terminal output
//!
//! Everything below the transport is synchronous; async callers run it on a
//! blocking thread.
//!
//! # Quick Start
//!
//! ```rust
//! use waypoint_core::{control::CreatePlannerRequest, WaypointBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let waypoint = WaypointBuilder::new()
//!     .with_database_path(Some("waypoint.db"))
//!     .build()
//!     .await?;
//!
//! let created = waypoint.planners.create_planner(CreatePlannerRequest {
//!     title: "Home".to_string(),
//!     owner: "alice".to_string(),
//! })?;
//! println!("{}", waypoint.planners.get_planner(created.id)?);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod control;
pub mod db;
pub mod display;
pub mod error;
pub mod models;
pub mod service;
pub mod store;
pub mod waypoint;

// Re-export commonly used types
pub use config::{Config, StorageBackend};
pub use control::CreatedId;
pub use db::Database;
pub use display::{Created, Deleted, Listing, LocalDateTime, Updated};
pub use error::{Result, WaypointError};
pub use models::{Goal, Plan, Planner, Snapshot, Status, Task, Version, VersionNumber};
pub use store::{MemoryStore, Store};
pub use waypoint::{Waypoint, WaypointBuilder};
