//! Task controller and its wire types.

use jiff::Timestamp;
use log::debug;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{new_id, CreatedId};
use crate::{error::Result, models::Task, service::TaskService};

/// Body of `POST /tasks`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateTaskRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub owner: String,
}

impl CreateTaskRequest {
    /// Builds a fresh, unstarted task with a new identifier.
    pub(crate) fn into_task(self, now: Timestamp) -> Result<Task> {
        Ok(Task {
            id: new_id()?,
            title: self.title,
            description: self.description,
            owner: self.owner,
            started: false,
            completed: false,
            created_at: now,
            updated_at: now,
        })
    }
}

/// Body of `PUT /tasks/{id}`; absent fields keep their stored values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTaskRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub owner: Option<String>,
    pub started: Option<bool>,
    pub completed: Option<bool>,
}

impl UpdateTaskRequest {
    fn apply_to(self, task: &mut Task) {
        if let Some(title) = self.title {
            task.title = title;
        }
        if let Some(description) = self.description {
            task.description = description;
        }
        if let Some(owner) = self.owner {
            task.owner = owner;
        }
        if let Some(started) = self.started {
            task.started = started;
        }
        if let Some(completed) = self.completed {
            task.completed = completed;
        }
    }
}

/// Response of `GET /tasks` and the task lookups.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TaskList {
    pub tasks: Vec<Task>,
}

#[derive(Clone)]
pub struct TaskController {
    service: TaskService,
}

impl TaskController {
    pub fn new(service: TaskService) -> Self {
        Self { service }
    }

    pub fn create_task(&self, request: CreateTaskRequest) -> Result<CreatedId> {
        let task = request.into_task(Timestamp::now())?;
        debug!("Creating task {} ({})", task.id, task.title);
        self.service.create_task(&task)?;
        Ok(CreatedId { id: task.id })
    }

    pub fn update_task(&self, id: Uuid, request: UpdateTaskRequest) -> Result<()> {
        let mut task = self.service.get_task(id)?;
        request.apply_to(&mut task);
        task.updated_at = Timestamp::now();
        self.service.update_task(&task)
    }

    /// Marks the task as started.
    pub fn start_task(&self, id: Uuid) -> Result<()> {
        self.update_task(
            id,
            UpdateTaskRequest {
                started: Some(true),
                ..Default::default()
            },
        )
    }

    /// Marks the task as completed.
    pub fn complete_task(&self, id: Uuid) -> Result<()> {
        self.update_task(
            id,
            UpdateTaskRequest {
                completed: Some(true),
                ..Default::default()
            },
        )
    }

    pub fn delete_task(&self, id: Uuid) -> Result<()> {
        self.service.delete_task(id)
    }

    pub fn get_task(&self, id: Uuid) -> Result<Task> {
        self.service.get_task(id)
    }

    pub fn list_tasks(&self) -> Result<TaskList> {
        let tasks = self.service.list_tasks()?;
        Ok(TaskList { tasks })
    }

    pub fn get_tasks_by_owner(&self, owner: &str) -> Result<TaskList> {
        let tasks = self.service.get_tasks_by_owner(owner)?;
        Ok(TaskList { tasks })
    }
}
