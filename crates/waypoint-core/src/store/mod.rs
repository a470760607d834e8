//! Persistence contracts, one trait per entity kind.
//!
//! Every store offers create, update, delete, get and list plus a few
//! single-field lookups. `update`, `delete` and `get` report a missing ID as
//! [`WaypointError::NotFound`](crate::WaypointError::NotFound); `update`
//! never inserts. `create` with an existing ID reports
//! [`WaypointError::Duplicate`](crate::WaypointError::Duplicate). Listings
//! come back in insertion order.
//!
//! [`Database`](crate::Database) implements every trait against SQLite and
//! [`MemoryStore`] implements them in memory for tests.

use uuid::Uuid;

use crate::{
    error::Result,
    models::{Goal, Plan, Planner, Task, Version},
};

pub mod memory;

pub use memory::MemoryStore;

/// Persistence for [`Task`] records.
pub trait TaskStore: Send + Sync {
    fn create_task(&self, task: &Task) -> Result<()>;
    fn update_task(&self, task: &Task) -> Result<()>;
    fn delete_task(&self, id: Uuid) -> Result<()>;
    fn get_task(&self, id: Uuid) -> Result<Task>;
    fn list_tasks(&self) -> Result<Vec<Task>>;
    fn get_tasks_by_owner(&self, owner: &str) -> Result<Vec<Task>>;
}

/// Persistence for [`Goal`] records.
pub trait GoalStore: Send + Sync {
    fn create_goal(&self, goal: &Goal) -> Result<()>;
    fn update_goal(&self, goal: &Goal) -> Result<()>;
    fn delete_goal(&self, id: Uuid) -> Result<()>;
    fn get_goal(&self, id: Uuid) -> Result<Goal>;
    fn list_goals(&self) -> Result<Vec<Goal>>;
    fn get_goals_by_objective(&self, objective: &str) -> Result<Vec<Goal>>;
    fn get_goals_by_planner_id(&self, planner_id: Uuid) -> Result<Vec<Goal>>;
}

/// Persistence for [`Plan`] records, including their embedded tasks.
pub trait PlanStore: Send + Sync {
    fn create_plan(&self, plan: &Plan) -> Result<()>;
    fn update_plan(&self, plan: &Plan) -> Result<()>;
    fn delete_plan(&self, id: Uuid) -> Result<()>;
    fn get_plan(&self, id: Uuid) -> Result<Plan>;
    fn list_plans(&self) -> Result<Vec<Plan>>;
    fn get_plans_by_name(&self, name: &str) -> Result<Vec<Plan>>;
    fn get_plans_by_goal_id(&self, goal_id: Uuid) -> Result<Vec<Plan>>;
}

/// Persistence for [`Planner`] records.
pub trait PlannerStore: Send + Sync {
    fn create_planner(&self, planner: &Planner) -> Result<()>;
    fn update_planner(&self, planner: &Planner) -> Result<()>;
    fn delete_planner(&self, id: Uuid) -> Result<()>;
    fn get_planner(&self, id: Uuid) -> Result<Planner>;
    fn list_planners(&self) -> Result<Vec<Planner>>;
    fn get_planners_by_title(&self, title: &str) -> Result<Vec<Planner>>;
    fn get_planners_by_owner(&self, owner: &str) -> Result<Vec<Planner>>;
}

/// Persistence for [`Version`] snapshots.
pub trait VersionStore: Send + Sync {
    fn create_version(&self, version: &Version) -> Result<()>;
    fn update_version(&self, version: &Version) -> Result<()>;
    fn delete_version(&self, id: Uuid) -> Result<()>;
    fn get_version(&self, id: Uuid) -> Result<Version>;
    fn list_versions(&self) -> Result<Vec<Version>>;
    fn get_versions_by_goal_id(&self, goal_id: Uuid) -> Result<Vec<Version>>;
}

/// A backend that stores every entity kind.
pub trait Store: TaskStore + GoalStore + PlanStore + PlannerStore + VersionStore {}

impl<T> Store for T where T: TaskStore + GoalStore + PlanStore + PlannerStore + VersionStore {}
