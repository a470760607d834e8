//! Services sit between the controllers and the stores.
//!
//! Each service forwards its arguments unchanged to a store trait object and
//! returns the result verbatim, so controllers never depend on a concrete
//! backend.

use std::sync::Arc;

use uuid::Uuid;

use crate::{
    error::Result,
    models::{Goal, Plan, Planner, Task, Version},
    store::{GoalStore, PlanStore, PlannerStore, TaskStore, VersionStore},
};

/// Task operations backed by a [`TaskStore`].
#[derive(Clone)]
pub struct TaskService {
    store: Arc<dyn TaskStore>,
}

impl TaskService {
    pub fn new(store: Arc<dyn TaskStore>) -> Self {
        Self { store }
    }

    pub fn create_task(&self, task: &Task) -> Result<()> {
        self.store.create_task(task)
    }

    pub fn update_task(&self, task: &Task) -> Result<()> {
        self.store.update_task(task)
    }

    pub fn delete_task(&self, id: Uuid) -> Result<()> {
        self.store.delete_task(id)
    }

    pub fn get_task(&self, id: Uuid) -> Result<Task> {
        self.store.get_task(id)
    }

    pub fn list_tasks(&self) -> Result<Vec<Task>> {
        self.store.list_tasks()
    }

    pub fn get_tasks_by_owner(&self, owner: &str) -> Result<Vec<Task>> {
        self.store.get_tasks_by_owner(owner)
    }
}

/// Goal operations backed by a [`GoalStore`].
#[derive(Clone)]
pub struct GoalService {
    store: Arc<dyn GoalStore>,
}

impl GoalService {
    pub fn new(store: Arc<dyn GoalStore>) -> Self {
        Self { store }
    }

    pub fn create_goal(&self, goal: &Goal) -> Result<()> {
        self.store.create_goal(goal)
    }

    pub fn update_goal(&self, goal: &Goal) -> Result<()> {
        self.store.update_goal(goal)
    }

    pub fn delete_goal(&self, id: Uuid) -> Result<()> {
        self.store.delete_goal(id)
    }

    pub fn get_goal(&self, id: Uuid) -> Result<Goal> {
        self.store.get_goal(id)
    }

    pub fn list_goals(&self) -> Result<Vec<Goal>> {
        self.store.list_goals()
    }

    pub fn get_goals_by_objective(&self, objective: &str) -> Result<Vec<Goal>> {
        self.store.get_goals_by_objective(objective)
    }

    pub fn get_goals_by_planner_id(&self, planner_id: Uuid) -> Result<Vec<Goal>> {
        self.store.get_goals_by_planner_id(planner_id)
    }
}

/// Plan operations backed by a [`PlanStore`].
#[derive(Clone)]
pub struct PlanService {
    store: Arc<dyn PlanStore>,
}

impl PlanService {
    pub fn new(store: Arc<dyn PlanStore>) -> Self {
        Self { store }
    }

    pub fn create_plan(&self, plan: &Plan) -> Result<()> {
        self.store.create_plan(plan)
    }

    pub fn update_plan(&self, plan: &Plan) -> Result<()> {
        self.store.update_plan(plan)
    }

    pub fn delete_plan(&self, id: Uuid) -> Result<()> {
        self.store.delete_plan(id)
    }

    pub fn get_plan(&self, id: Uuid) -> Result<Plan> {
        self.store.get_plan(id)
    }

    pub fn list_plans(&self) -> Result<Vec<Plan>> {
        self.store.list_plans()
    }

    pub fn get_plans_by_name(&self, name: &str) -> Result<Vec<Plan>> {
        self.store.get_plans_by_name(name)
    }

    pub fn get_plans_by_goal_id(&self, goal_id: Uuid) -> Result<Vec<Plan>> {
        self.store.get_plans_by_goal_id(goal_id)
    }
}

/// Planner operations backed by a [`PlannerStore`].
#[derive(Clone)]
pub struct PlannerService {
    store: Arc<dyn PlannerStore>,
}

impl PlannerService {
    pub fn new(store: Arc<dyn PlannerStore>) -> Self {
        Self { store }
    }

    pub fn create_planner(&self, planner: &Planner) -> Result<()> {
        self.store.create_planner(planner)
    }

    pub fn update_planner(&self, planner: &Planner) -> Result<()> {
        self.store.update_planner(planner)
    }

    pub fn delete_planner(&self, id: Uuid) -> Result<()> {
        self.store.delete_planner(id)
    }

    pub fn get_planner(&self, id: Uuid) -> Result<Planner> {
        self.store.get_planner(id)
    }

    pub fn list_planners(&self) -> Result<Vec<Planner>> {
        self.store.list_planners()
    }

    pub fn get_planners_by_title(&self, title: &str) -> Result<Vec<Planner>> {
        self.store.get_planners_by_title(title)
    }

    pub fn get_planners_by_owner(&self, owner: &str) -> Result<Vec<Planner>> {
        self.store.get_planners_by_owner(owner)
    }
}

/// Version operations backed by a [`VersionStore`].
#[derive(Clone)]
pub struct VersionService {
    store: Arc<dyn VersionStore>,
}

impl VersionService {
    pub fn new(store: Arc<dyn VersionStore>) -> Self {
        Self { store }
    }

    pub fn create_version(&self, version: &Version) -> Result<()> {
        self.store.create_version(version)
    }

    pub fn update_version(&self, version: &Version) -> Result<()> {
        self.store.update_version(version)
    }

    pub fn delete_version(&self, id: Uuid) -> Result<()> {
        self.store.delete_version(id)
    }

    pub fn get_version(&self, id: Uuid) -> Result<Version> {
        self.store.get_version(id)
    }

    pub fn list_versions(&self) -> Result<Vec<Version>> {
        self.store.list_versions()
    }

    pub fn get_versions_by_goal_id(&self, goal_id: Uuid) -> Result<Vec<Version>> {
        self.store.get_versions_by_goal_id(goal_id)
    }
}
