//! Task CRUD operations and queries.

use log::debug;
use rusqlite::{params, OptionalExtension, Row};
use uuid::Uuid;

use super::utils::{ensure_affected, insert_error, parse_text, query_all};
use crate::{
    error::{DatabaseResultExt, Result, WaypointError},
    models::Task,
    store::TaskStore,
};

const INSERT_TASK_SQL: &str = "INSERT INTO tasks (id, title, description, owner, started, completed, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)";
const UPDATE_TASK_SQL: &str = "UPDATE tasks SET title = ?2, description = ?3, owner = ?4, started = ?5, completed = ?6, created_at = ?7, updated_at = ?8 WHERE id = ?1";
const DELETE_TASK_SQL: &str = "DELETE FROM tasks WHERE id = ?1";
const SELECT_TASK_SQL: &str = "SELECT id, title, description, owner, started, completed, created_at, updated_at FROM tasks WHERE id = ?1";
const LIST_TASKS_SQL: &str = "SELECT id, title, description, owner, started, completed, created_at, updated_at FROM tasks ORDER BY rowid";
const SELECT_TASKS_BY_OWNER_SQL: &str = "SELECT id, title, description, owner, started, completed, created_at, updated_at FROM tasks WHERE owner = ?1 ORDER BY rowid";

fn task_from_row(row: &Row<'_>) -> rusqlite::Result<Task> {
    Ok(Task {
        id: parse_text(row, 0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        owner: row.get(3)?,
        started: row.get(4)?,
        completed: row.get(5)?,
        created_at: parse_text(row, 6)?,
        updated_at: parse_text(row, 7)?,
    })
}

impl TaskStore for super::Database {
    fn create_task(&self, task: &Task) -> Result<()> {
        debug!("create_task: {}", task.id);
        self.with_connection(|connection| {
            connection
                .execute(
                    INSERT_TASK_SQL,
                    params![
                        task.id.to_string(),
                        task.title,
                        task.description,
                        task.owner,
                        task.started,
                        task.completed,
                        task.created_at.to_string(),
                        task.updated_at.to_string(),
                    ],
                )
                .map_err(|e| insert_error(Task::KIND, task.id, "Failed to insert task", e))?;
            Ok(())
        })
    }

    fn update_task(&self, task: &Task) -> Result<()> {
        debug!("update_task: {}", task.id);
        self.with_connection(|connection| {
            let rows = connection
                .execute(
                    UPDATE_TASK_SQL,
                    params![
                        task.id.to_string(),
                        task.title,
                        task.description,
                        task.owner,
                        task.started,
                        task.completed,
                        task.created_at.to_string(),
                        task.updated_at.to_string(),
                    ],
                )
                .db_context("Failed to update task")?;
            ensure_affected(rows, Task::KIND, task.id)
        })
    }

    fn delete_task(&self, id: Uuid) -> Result<()> {
        debug!("delete_task: {id}");
        self.with_connection(|connection| {
            let rows = connection
                .execute(DELETE_TASK_SQL, params![id.to_string()])
                .db_context("Failed to delete task")?;
            ensure_affected(rows, Task::KIND, id)
        })
    }

    fn get_task(&self, id: Uuid) -> Result<Task> {
        self.with_connection(|connection| {
            connection
                .query_row(SELECT_TASK_SQL, params![id.to_string()], task_from_row)
                .optional()
                .db_context("Failed to query task")?
                .ok_or(WaypointError::NotFound {
                    kind: Task::KIND,
                    id,
                })
        })
    }

    fn list_tasks(&self) -> Result<Vec<Task>> {
        self.with_connection(|connection| {
            query_all(connection, LIST_TASKS_SQL, [], task_from_row, "Failed to list tasks")
        })
    }

    fn get_tasks_by_owner(&self, owner: &str) -> Result<Vec<Task>> {
        self.with_connection(|connection| {
            query_all(
                connection,
                SELECT_TASKS_BY_OWNER_SQL,
                params![owner],
                task_from_row,
                "Failed to query tasks by owner",
            )
        })
    }
}
