//! Wiring of stores, services and controllers.
//!
//! [`Waypoint`] bundles one controller per entity kind over a single shared
//! backend. [`WaypointBuilder`] opens the SQLite file the application uses;
//! [`Waypoint::from_store`] accepts any other [`Store`], such as
//! [`MemoryStore`](crate::MemoryStore) in tests.
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use waypoint_core::{control::CreatePlannerRequest, MemoryStore, Waypoint};
//!
//! # fn main() -> waypoint_core::Result<()> {
//! let waypoint = Waypoint::from_store(Arc::new(MemoryStore::new()));
//! let created = waypoint.planners.create_planner(CreatePlannerRequest {
//!     title: "Fitness".to_string(),
//!     owner: "alice".to_string(),
//! })?;
//! assert_eq!(waypoint.planners.get_planner(created.id)?.owner, "alice");
//! # Ok(())
//! # }
//! ```

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use log::info;
use tokio::task;

use crate::{
    control::{GoalController, PlanController, PlannerController, TaskController, VersionController},
    db::Database,
    error::{Result, WaypointError},
    service::{GoalService, PlanService, PlannerService, TaskService, VersionService},
    store::Store,
};

/// One controller per entity kind, all sharing one backend.
#[derive(Clone)]
pub struct Waypoint {
    pub tasks: TaskController,
    pub goals: GoalController,
    pub plans: PlanController,
    pub planners: PlannerController,
    pub versions: VersionController,
}

impl Waypoint {
    /// Builds the service and controller layers over `store`.
    pub fn from_store<S: Store + 'static>(store: Arc<S>) -> Self {
        let goals = GoalService::new(store.clone());
        let plans = PlanService::new(store.clone());

        Self {
            tasks: TaskController::new(TaskService::new(store.clone())),
            goals: GoalController::new(goals.clone()),
            plans: PlanController::new(plans.clone()),
            planners: PlannerController::new(PlannerService::new(store.clone())),
            versions: VersionController::new(VersionService::new(store), goals, plans),
        }
    }
}

/// Builder that opens the SQLite database behind a [`Waypoint`].
#[derive(Debug, Clone)]
pub struct WaypointBuilder {
    database_path: Option<PathBuf>,
}

impl WaypointBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            database_path: None,
        }
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/waypoint/waypoint.db` or
    /// `~/.local/share/waypoint/waypoint.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Opens the database, creating the file and schema when missing.
    ///
    /// # Errors
    ///
    /// Returns `WaypointError::FileSystem` if the parent directory cannot be
    /// created, and `WaypointError::Database` if the file cannot be opened or
    /// initialized.
    pub async fn build(self) -> Result<Waypoint> {
        let db_path = match self.database_path {
            Some(path) => path,
            None => Self::default_database_path()?,
        };

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| WaypointError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        info!("Opening database at {}", db_path.display());
        let database = task::spawn_blocking(move || Database::new(&db_path))
            .await
            .map_err(|e| WaypointError::Configuration {
                message: format!("Task join error: {e}"),
            })??;

        Ok(Waypoint::from_store(Arc::new(database)))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    pub fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("waypoint")
            .place_data_file("waypoint.db")
            .map_err(|e| WaypointError::XdgDirectory(e.to_string()))
    }
}

impl Default for WaypointBuilder {
    fn default() -> Self {
        Self::new()
    }
}
