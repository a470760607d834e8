//! Non-persistent store keeping every table in a `Vec` behind a mutex.

use std::sync::{Mutex, MutexGuard};

use uuid::Uuid;

use super::{GoalStore, PlanStore, PlannerStore, TaskStore, VersionStore};
use crate::{
    error::{Result, WaypointError},
    models::{Goal, Plan, Planner, Task, Version},
};

/// Records of one kind in insertion order.
struct Table<T> {
    kind: &'static str,
    rows: Mutex<Vec<T>>,
}

impl<T: Clone> Table<T> {
    fn new(kind: &'static str) -> Self {
        Self {
            kind,
            rows: Mutex::new(Vec::new()),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<T>>> {
        self.rows.lock().map_err(|_| WaypointError::LockPoisoned)
    }

    fn insert(&self, record: &T, id: impl Fn(&T) -> Uuid) -> Result<()> {
        let mut rows = self.lock()?;
        let key = id(record);
        if rows.iter().any(|row| id(row) == key) {
            return Err(WaypointError::Duplicate {
                kind: self.kind,
                id: key,
            });
        }
        rows.push(record.clone());
        Ok(())
    }

    fn replace(&self, record: &T, id: impl Fn(&T) -> Uuid) -> Result<()> {
        let mut rows = self.lock()?;
        let key = id(record);
        let slot = rows
            .iter_mut()
            .find(|row| id(&**row) == key)
            .ok_or(WaypointError::NotFound {
                kind: self.kind,
                id: key,
            })?;
        *slot = record.clone();
        Ok(())
    }

    fn remove(&self, key: Uuid, id: impl Fn(&T) -> Uuid) -> Result<()> {
        let mut rows = self.lock()?;
        let position = rows
            .iter()
            .position(|row| id(row) == key)
            .ok_or(WaypointError::NotFound {
                kind: self.kind,
                id: key,
            })?;
        rows.remove(position);
        Ok(())
    }

    fn get(&self, key: Uuid, id: impl Fn(&T) -> Uuid) -> Result<T> {
        self.lock()?
            .iter()
            .find(|row| id(*row) == key)
            .cloned()
            .ok_or(WaypointError::NotFound {
                kind: self.kind,
                id: key,
            })
    }

    fn filter(&self, predicate: impl Fn(&T) -> bool) -> Result<Vec<T>> {
        Ok(self
            .lock()?
            .iter()
            .filter(|row| predicate(*row))
            .cloned()
            .collect())
    }
}

/// In-memory implementation of every store trait.
///
/// Behaves like [`Database`](crate::Database) for all store operations
/// but keeps nothing across process restarts.
pub struct MemoryStore {
    tasks: Table<Task>,
    goals: Table<Goal>,
    plans: Table<Plan>,
    planners: Table<Planner>,
    versions: Table<Version>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            tasks: Table::new(Task::KIND),
            goals: Table::new(Goal::KIND),
            plans: Table::new(Plan::KIND),
            planners: Table::new(Planner::KIND),
            versions: Table::new(Version::KIND),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskStore for MemoryStore {
    fn create_task(&self, task: &Task) -> Result<()> {
        self.tasks.insert(task, |t| t.id)
    }

    fn update_task(&self, task: &Task) -> Result<()> {
        self.tasks.replace(task, |t| t.id)
    }

    fn delete_task(&self, id: Uuid) -> Result<()> {
        self.tasks.remove(id, |t| t.id)
    }

    fn get_task(&self, id: Uuid) -> Result<Task> {
        self.tasks.get(id, |t| t.id)
    }

    fn list_tasks(&self) -> Result<Vec<Task>> {
        self.tasks.filter(|_| true)
    }

    fn get_tasks_by_owner(&self, owner: &str) -> Result<Vec<Task>> {
        self.tasks.filter(|t| t.owner == owner)
    }
}

impl GoalStore for MemoryStore {
    fn create_goal(&self, goal: &Goal) -> Result<()> {
        self.goals.insert(goal, |g| g.id)
    }

    fn update_goal(&self, goal: &Goal) -> Result<()> {
        self.goals.replace(goal, |g| g.id)
    }

    fn delete_goal(&self, id: Uuid) -> Result<()> {
        self.goals.remove(id, |g| g.id)
    }

    fn get_goal(&self, id: Uuid) -> Result<Goal> {
        self.goals.get(id, |g| g.id)
    }

    fn list_goals(&self) -> Result<Vec<Goal>> {
        self.goals.filter(|_| true)
    }

    fn get_goals_by_objective(&self, objective: &str) -> Result<Vec<Goal>> {
        self.goals.filter(|g| g.objective == objective)
    }

    fn get_goals_by_planner_id(&self, planner_id: Uuid) -> Result<Vec<Goal>> {
        self.goals.filter(|g| g.planner_id == planner_id)
    }
}

impl PlanStore for MemoryStore {
    fn create_plan(&self, plan: &Plan) -> Result<()> {
        self.plans.insert(plan, |p| p.id)
    }

    fn update_plan(&self, plan: &Plan) -> Result<()> {
        self.plans.replace(plan, |p| p.id)
    }

    fn delete_plan(&self, id: Uuid) -> Result<()> {
        self.plans.remove(id, |p| p.id)
    }

    fn get_plan(&self, id: Uuid) -> Result<Plan> {
        self.plans.get(id, |p| p.id)
    }

    fn list_plans(&self) -> Result<Vec<Plan>> {
        self.plans.filter(|_| true)
    }

    fn get_plans_by_name(&self, name: &str) -> Result<Vec<Plan>> {
        self.plans.filter(|p| p.name == name)
    }

    fn get_plans_by_goal_id(&self, goal_id: Uuid) -> Result<Vec<Plan>> {
        self.plans.filter(|p| p.goal_id == goal_id)
    }
}

impl PlannerStore for MemoryStore {
    fn create_planner(&self, planner: &Planner) -> Result<()> {
        self.planners.insert(planner, |p| p.id)
    }

    fn update_planner(&self, planner: &Planner) -> Result<()> {
        self.planners.replace(planner, |p| p.id)
    }

    fn delete_planner(&self, id: Uuid) -> Result<()> {
        self.planners.remove(id, |p| p.id)
    }

    fn get_planner(&self, id: Uuid) -> Result<Planner> {
        self.planners.get(id, |p| p.id)
    }

    fn list_planners(&self) -> Result<Vec<Planner>> {
        self.planners.filter(|_| true)
    }

    fn get_planners_by_title(&self, title: &str) -> Result<Vec<Planner>> {
        self.planners.filter(|p| p.title == title)
    }

    fn get_planners_by_owner(&self, owner: &str) -> Result<Vec<Planner>> {
        self.planners.filter(|p| p.owner == owner)
    }
}

impl VersionStore for MemoryStore {
    fn create_version(&self, version: &Version) -> Result<()> {
        self.versions.insert(version, |v| v.id)
    }

    fn update_version(&self, version: &Version) -> Result<()> {
        self.versions.replace(version, |v| v.id)
    }

    fn delete_version(&self, id: Uuid) -> Result<()> {
        self.versions.remove(id, |v| v.id)
    }

    fn get_version(&self, id: Uuid) -> Result<Version> {
        self.versions.get(id, |v| v.id)
    }

    fn list_versions(&self) -> Result<Vec<Version>> {
        self.versions.filter(|_| true)
    }

    fn get_versions_by_goal_id(&self, goal_id: Uuid) -> Result<Vec<Version>> {
        self.versions.filter(|v| v.goal_id == goal_id)
    }
}
