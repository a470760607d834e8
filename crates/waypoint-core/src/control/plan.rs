//! Plan controller and its wire types.

use jiff::Timestamp;
use log::debug;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{new_id, parse_date, parse_time, CreateTaskRequest, CreatedId};
use crate::{
    error::Result,
    models::{Plan, Status},
    service::PlanService,
};

/// Body of `POST /plans`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatePlanRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// `YYYY-MM-DD`
    pub date: String,
    /// `HH:MM`
    pub time: String,
    /// Status name; `Not Started` when omitted
    #[serde(default)]
    pub status: Option<String>,
    pub goal_id: Uuid,
    /// Tasks to embed; each receives its own identifier
    #[serde(default)]
    pub tasks: Vec<CreateTaskRequest>,
}

/// Body of `PUT /plans/{id}`; absent fields, including the embedded tasks,
/// keep their stored values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePlanRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub status: Option<String>,
    pub goal_id: Option<Uuid>,
}

impl UpdatePlanRequest {
    fn apply_to(self, plan: &mut Plan) -> Result<()> {
        if let Some(date) = self.date.as_deref() {
            plan.date = parse_date("date", date)?;
        }
        if let Some(time) = self.time.as_deref() {
            plan.time = parse_time("time", time)?;
        }
        if let Some(status) = self.status.as_deref() {
            plan.status = Status::from(status);
        }
        if let Some(name) = self.name {
            plan.name = name;
        }
        if let Some(description) = self.description {
            plan.description = description;
        }
        if let Some(goal_id) = self.goal_id {
            plan.goal_id = goal_id;
        }
        Ok(())
    }
}

/// Response of `GET /plans` and the plan lookups.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanList {
    pub plans: Vec<Plan>,
}

#[derive(Clone)]
pub struct PlanController {
    service: PlanService,
}

impl PlanController {
    pub fn new(service: PlanService) -> Self {
        Self { service }
    }

    pub fn create_plan(&self, request: CreatePlanRequest) -> Result<CreatedId> {
        let date = parse_date("date", &request.date)?;
        let time = parse_time("time", &request.time)?;
        let status = request.status.as_deref().map(Status::from).unwrap_or_default();
        let now = Timestamp::now();
        let tasks = request
            .tasks
            .into_iter()
            .map(|task| task.into_task(now))
            .collect::<Result<Vec<_>>>()?;

        let plan = Plan {
            id: new_id()?,
            name: request.name,
            description: request.description,
            date,
            time,
            status,
            created_at: now,
            updated_at: now,
            goal_id: request.goal_id,
            tasks,
        };
        debug!(
            "Creating plan {} for goal {} with {} tasks",
            plan.id,
            plan.goal_id,
            plan.tasks.len()
        );
        self.service.create_plan(&plan)?;
        Ok(CreatedId { id: plan.id })
    }

    pub fn update_plan(&self, id: Uuid, request: UpdatePlanRequest) -> Result<()> {
        let mut plan = self.service.get_plan(id)?;
        request.apply_to(&mut plan)?;
        plan.updated_at = Timestamp::now();
        self.service.update_plan(&plan)
    }

    pub fn delete_plan(&self, id: Uuid) -> Result<()> {
        self.service.delete_plan(id)
    }

    pub fn get_plan(&self, id: Uuid) -> Result<Plan> {
        self.service.get_plan(id)
    }

    pub fn list_plans(&self) -> Result<PlanList> {
        let plans = self.service.list_plans()?;
        Ok(PlanList { plans })
    }

    pub fn get_plans_by_name(&self, name: &str) -> Result<PlanList> {
        let plans = self.service.get_plans_by_name(name)?;
        Ok(PlanList { plans })
    }

    pub fn get_plans_by_goal_id(&self, goal_id: Uuid) -> Result<PlanList> {
        let plans = self.service.get_plans_by_goal_id(goal_id)?;
        Ok(PlanList { plans })
    }
}
