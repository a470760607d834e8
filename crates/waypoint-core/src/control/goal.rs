//! Goal controller and its wire types.

use jiff::Timestamp;
use log::debug;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{new_id, parse_date, CreatedId};
use crate::{
    error::Result,
    models::{Goal, Status},
    service::GoalService,
};

/// Body of `POST /goals`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateGoalRequest {
    pub objective: String,
    /// Status name; `Not Started` when omitted
    #[serde(default)]
    pub status: Option<String>,
    /// `YYYY-MM-DD`
    pub deadline: String,
    pub planner_id: Uuid,
}

/// Body of `PUT /goals/{id}`; absent fields keep their stored values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateGoalRequest {
    pub objective: Option<String>,
    pub status: Option<String>,
    pub deadline: Option<String>,
    pub planner_id: Option<Uuid>,
}

impl UpdateGoalRequest {
    fn apply_to(self, goal: &mut Goal) -> Result<()> {
        if let Some(status) = self.status.as_deref() {
            goal.status = Status::from(status);
        }
        if let Some(deadline) = self.deadline.as_deref() {
            goal.deadline = parse_date("deadline", deadline)?;
        }
        if let Some(objective) = self.objective {
            goal.objective = objective;
        }
        if let Some(planner_id) = self.planner_id {
            goal.planner_id = planner_id;
        }
        Ok(())
    }
}

/// Response of `GET /goals` and the goal lookups.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GoalList {
    pub goals: Vec<Goal>,
}

#[derive(Clone)]
pub struct GoalController {
    service: GoalService,
}

impl GoalController {
    pub fn new(service: GoalService) -> Self {
        Self { service }
    }

    pub fn create_goal(&self, request: CreateGoalRequest) -> Result<CreatedId> {
        let status = request.status.as_deref().map(Status::from).unwrap_or_default();
        let deadline = parse_date("deadline", &request.deadline)?;
        let now = Timestamp::now();
        let goal = Goal {
            id: new_id()?,
            objective: request.objective,
            status,
            deadline,
            created_at: now,
            updated_at: now,
            planner_id: request.planner_id,
        };
        debug!("Creating goal {} for planner {}", goal.id, goal.planner_id);
        self.service.create_goal(&goal)?;
        Ok(CreatedId { id: goal.id })
    }

    pub fn update_goal(&self, id: Uuid, request: UpdateGoalRequest) -> Result<()> {
        let mut goal = self.service.get_goal(id)?;
        request.apply_to(&mut goal)?;
        goal.updated_at = Timestamp::now();
        self.service.update_goal(&goal)
    }

    pub fn delete_goal(&self, id: Uuid) -> Result<()> {
        self.service.delete_goal(id)
    }

    pub fn get_goal(&self, id: Uuid) -> Result<Goal> {
        self.service.get_goal(id)
    }

    pub fn list_goals(&self) -> Result<GoalList> {
        let goals = self.service.list_goals()?;
        Ok(GoalList { goals })
    }

    pub fn get_goals_by_objective(&self, objective: &str) -> Result<GoalList> {
        let goals = self.service.get_goals_by_objective(objective)?;
        Ok(GoalList { goals })
    }

    pub fn get_goals_by_planner_id(&self, planner_id: Uuid) -> Result<GoalList> {
        let goals = self.service.get_goals_by_planner_id(planner_id)?;
        Ok(GoalList { goals })
    }
}
