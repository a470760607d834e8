//! Version controller and its wire types.
//!
//! Creating a version captures the goal and every plan currently pointing at
//! it, so later edits to the goal do not change the snapshot.

use jiff::Timestamp;
use log::debug;
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use super::{new_id, CreatedId};
use crate::{
    error::{Result, WaypointError},
    models::{Snapshot, Version, VersionNumber},
    service::{GoalService, PlanService, VersionService},
};

/// Body of `POST /versions`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateVersionRequest {
    pub goal_id: Uuid,
    #[serde(default)]
    pub plan_id: Option<Uuid>,
    #[serde(default)]
    pub task_id: Option<Uuid>,
    /// `major.minor.patch`
    pub version: String,
    pub created_by: String,
    #[serde(default)]
    pub previous_version: Option<Uuid>,
}

/// Body of `PUT /versions/{id}`; absent fields keep their stored values.
///
/// The snapshot itself is never rewritten.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateVersionRequest {
    pub version: Option<String>,
    pub created_by: Option<String>,
    /// Absent keeps the stored link, `null` clears it, an id replaces it.
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub previous_version: Option<Option<Uuid>>,
}

/// Marks a field that appeared in the body, even as `null`.
fn present<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// Response of `GET /versions` and the version lookups.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VersionList {
    pub versions: Vec<Version>,
}

fn parse_version_number(value: &str) -> Result<VersionNumber> {
    value
        .parse::<VersionNumber>()
        .map_err(|reason| WaypointError::invalid_input("version").with_reason(reason))
}

#[derive(Clone)]
pub struct VersionController {
    service: VersionService,
    goals: GoalService,
    plans: PlanService,
}

impl VersionController {
    pub fn new(service: VersionService, goals: GoalService, plans: PlanService) -> Self {
        Self {
            service,
            goals,
            plans,
        }
    }

    pub fn create_version(&self, request: CreateVersionRequest) -> Result<CreatedId> {
        let number = parse_version_number(&request.version)?;
        let goal = self.goals.get_goal(request.goal_id)?;
        let plans = self.plans.get_plans_by_goal_id(request.goal_id)?;

        let version = Version {
            id: new_id()?,
            goal_id: request.goal_id,
            plan_id: request.plan_id,
            task_id: request.task_id,
            version: number,
            created_at: Timestamp::now(),
            created_by: request.created_by,
            previous_version: request.previous_version,
            snapshot: Snapshot { goal, plans },
        };
        debug!(
            "Creating version {} ({}) of goal {}",
            version.id, version.version, version.goal_id
        );
        self.service.create_version(&version)?;
        Ok(CreatedId { id: version.id })
    }

    pub fn update_version(&self, id: Uuid, request: UpdateVersionRequest) -> Result<()> {
        let mut version = self.service.get_version(id)?;
        if let Some(number) = request.version.as_deref() {
            version.version = parse_version_number(number)?;
        }
        if let Some(created_by) = request.created_by {
            version.created_by = created_by;
        }
        if let Some(previous) = request.previous_version {
            version.previous_version = previous;
        }
        self.service.update_version(&version)
    }

    pub fn delete_version(&self, id: Uuid) -> Result<()> {
        self.service.delete_version(id)
    }

    pub fn get_version(&self, id: Uuid) -> Result<Version> {
        self.service.get_version(id)
    }

    pub fn list_versions(&self) -> Result<VersionList> {
        let versions = self.service.list_versions()?;
        Ok(VersionList { versions })
    }

    pub fn get_versions_by_goal_id(&self, goal_id: Uuid) -> Result<VersionList> {
        let versions = self.service.get_versions_by_goal_id(goal_id)?;
        Ok(VersionList { versions })
    }
}
