//! Planner controller and its wire types.

use log::debug;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{new_id, CreatedId};
use crate::{error::Result, models::Planner, service::PlannerService};

/// Body of `POST /planners`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatePlannerRequest {
    pub title: String,
    pub owner: String,
}

/// Body of `PUT /planners/{id}`; absent fields keep their stored values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePlannerRequest {
    pub title: Option<String>,
    pub owner: Option<String>,
}

/// Response of `GET /planners` and the planner lookups.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlannerList {
    pub planners: Vec<Planner>,
}

#[derive(Clone)]
pub struct PlannerController {
    service: PlannerService,
}

impl PlannerController {
    pub fn new(service: PlannerService) -> Self {
        Self { service }
    }

    pub fn create_planner(&self, request: CreatePlannerRequest) -> Result<CreatedId> {
        let planner = Planner {
            id: new_id()?,
            title: request.title,
            owner: request.owner,
        };
        debug!("Creating planner {} for {}", planner.id, planner.owner);
        self.service.create_planner(&planner)?;
        Ok(CreatedId { id: planner.id })
    }

    pub fn update_planner(&self, id: Uuid, request: UpdatePlannerRequest) -> Result<()> {
        let mut planner = self.service.get_planner(id)?;
        if let Some(title) = request.title {
            planner.title = title;
        }
        if let Some(owner) = request.owner {
            planner.owner = owner;
        }
        self.service.update_planner(&planner)
    }

    pub fn delete_planner(&self, id: Uuid) -> Result<()> {
        self.service.delete_planner(id)
    }

    pub fn get_planner(&self, id: Uuid) -> Result<Planner> {
        self.service.get_planner(id)
    }

    pub fn list_planners(&self) -> Result<PlannerList> {
        let planners = self.service.list_planners()?;
        Ok(PlannerList { planners })
    }

    pub fn get_planners_by_title(&self, title: &str) -> Result<PlannerList> {
        let planners = self.service.get_planners_by_title(title)?;
        Ok(PlannerList { planners })
    }

    pub fn get_planners_by_owner(&self, owner: &str) -> Result<PlannerList> {
        let planners = self.service.get_planners_by_owner(owner)?;
        Ok(PlannerList { planners })
    }
}
