//! Plan CRUD operations and queries.
//!
//! A plan's embedded tasks are stored as a JSON array in the `tasks` column.

use log::debug;
use rusqlite::{params, OptionalExtension, Row};
use uuid::Uuid;

use super::utils::{ensure_affected, insert_error, parse_json, parse_text, query_all};
use crate::{
    error::{DatabaseResultExt, Result, WaypointError},
    models::Plan,
    store::PlanStore,
};

const INSERT_PLAN_SQL: &str = "INSERT INTO plans (id, name, description, plan_date, plan_time, status, created_at, updated_at, goal_id, tasks) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)";
const UPDATE_PLAN_SQL: &str = "UPDATE plans SET name = ?2, description = ?3, plan_date = ?4, plan_time = ?5, status = ?6, created_at = ?7, updated_at = ?8, goal_id = ?9, tasks = ?10 WHERE id = ?1";
const DELETE_PLAN_SQL: &str = "DELETE FROM plans WHERE id = ?1";
const SELECT_PLAN_SQL: &str = "SELECT id, name, description, plan_date, plan_time, status, created_at, updated_at, goal_id, tasks FROM plans WHERE id = ?1";
const LIST_PLANS_SQL: &str = "SELECT id, name, description, plan_date, plan_time, status, created_at, updated_at, goal_id, tasks FROM plans ORDER BY rowid";
const SELECT_PLANS_BY_NAME_SQL: &str = "SELECT id, name, description, plan_date, plan_time, status, created_at, updated_at, goal_id, tasks FROM plans WHERE name = ?1 ORDER BY rowid";
const SELECT_PLANS_BY_GOAL_SQL: &str = "SELECT id, name, description, plan_date, plan_time, status, created_at, updated_at, goal_id, tasks FROM plans WHERE goal_id = ?1 ORDER BY rowid";

fn plan_from_row(row: &Row<'_>) -> rusqlite::Result<Plan> {
    Ok(Plan {
        id: parse_text(row, 0)?,
        name: row.get(1)?,
        description: row.get(2)?,
        date: parse_text(row, 3)?,
        time: parse_text(row, 4)?,
        status: parse_text(row, 5)?,
        created_at: parse_text(row, 6)?,
        updated_at: parse_text(row, 7)?,
        goal_id: parse_text(row, 8)?,
        tasks: parse_json(row, 9)?,
    })
}

impl PlanStore for super::Database {
    fn create_plan(&self, plan: &Plan) -> Result<()> {
        debug!("create_plan: {}", plan.id);
        let tasks = serde_json::to_string(&plan.tasks)?;
        self.with_connection(|connection| {
            connection
                .execute(
                    INSERT_PLAN_SQL,
                    params![
                        plan.id.to_string(),
                        plan.name,
                        plan.description,
                        plan.date.to_string(),
                        plan.time.to_string(),
                        plan.status.as_str(),
                        plan.created_at.to_string(),
                        plan.updated_at.to_string(),
                        plan.goal_id.to_string(),
                        tasks,
                    ],
                )
                .map_err(|e| insert_error(Plan::KIND, plan.id, "Failed to insert plan", e))?;
            Ok(())
        })
    }

    fn update_plan(&self, plan: &Plan) -> Result<()> {
        debug!("update_plan: {}", plan.id);
        let tasks = serde_json::to_string(&plan.tasks)?;
        self.with_connection(|connection| {
            let rows = connection
                .execute(
                    UPDATE_PLAN_SQL,
                    params![
                        plan.id.to_string(),
                        plan.name,
                        plan.description,
                        plan.date.to_string(),
                        plan.time.to_string(),
                        plan.status.as_str(),
                        plan.created_at.to_string(),
                        plan.updated_at.to_string(),
                        plan.goal_id.to_string(),
                        tasks,
                    ],
                )
                .db_context("Failed to update plan")?;
            ensure_affected(rows, Plan::KIND, plan.id)
        })
    }

    fn delete_plan(&self, id: Uuid) -> Result<()> {
        debug!("delete_plan: {id}");
        self.with_connection(|connection| {
            let rows = connection
                .execute(DELETE_PLAN_SQL, params![id.to_string()])
                .db_context("Failed to delete plan")?;
            ensure_affected(rows, Plan::KIND, id)
        })
    }

    fn get_plan(&self, id: Uuid) -> Result<Plan> {
        self.with_connection(|connection| {
            connection
                .query_row(SELECT_PLAN_SQL, params![id.to_string()], plan_from_row)
                .optional()
                .db_context("Failed to query plan")?
                .ok_or(WaypointError::NotFound {
                    kind: Plan::KIND,
                    id,
                })
        })
    }

    fn list_plans(&self) -> Result<Vec<Plan>> {
        self.with_connection(|connection| {
            query_all(connection, LIST_PLANS_SQL, [], plan_from_row, "Failed to list plans")
        })
    }

    fn get_plans_by_name(&self, name: &str) -> Result<Vec<Plan>> {
        self.with_connection(|connection| {
            query_all(
                connection,
                SELECT_PLANS_BY_NAME_SQL,
                params![name],
                plan_from_row,
                "Failed to query plans by name",
            )
        })
    }

    fn get_plans_by_goal_id(&self, goal_id: Uuid) -> Result<Vec<Plan>> {
        self.with_connection(|connection| {
            query_all(
                connection,
                SELECT_PLANS_BY_GOAL_SQL,
                params![goal_id.to_string()],
                plan_from_row,
                "Failed to query plans by goal",
            )
        })
    }
}
