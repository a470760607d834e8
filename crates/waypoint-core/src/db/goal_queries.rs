//! Goal CRUD operations and queries.

use log::debug;
use rusqlite::{params, OptionalExtension, Row};
use uuid::Uuid;

use super::utils::{ensure_affected, insert_error, parse_text, query_all};
use crate::{
    error::{DatabaseResultExt, Result, WaypointError},
    models::Goal,
    store::GoalStore,
};

const INSERT_GOAL_SQL: &str = "INSERT INTO goals (id, objective, status, deadline, created_at, updated_at, planner_id) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)";
const UPDATE_GOAL_SQL: &str = "UPDATE goals SET objective = ?2, status = ?3, deadline = ?4, created_at = ?5, updated_at = ?6, planner_id = ?7 WHERE id = ?1";
const DELETE_GOAL_SQL: &str = "DELETE FROM goals WHERE id = ?1";
const SELECT_GOAL_SQL: &str = "SELECT id, objective, status, deadline, created_at, updated_at, planner_id FROM goals WHERE id = ?1";
const LIST_GOALS_SQL: &str = "SELECT id, objective, status, deadline, created_at, updated_at, planner_id FROM goals ORDER BY rowid";
const SELECT_GOALS_BY_OBJECTIVE_SQL: &str = "SELECT id, objective, status, deadline, created_at, updated_at, planner_id FROM goals WHERE objective = ?1 ORDER BY rowid";
const SELECT_GOALS_BY_PLANNER_SQL: &str = "SELECT id, objective, status, deadline, created_at, updated_at, planner_id FROM goals WHERE planner_id = ?1 ORDER BY rowid";

fn goal_from_row(row: &Row<'_>) -> rusqlite::Result<Goal> {
    Ok(Goal {
        id: parse_text(row, 0)?,
        objective: row.get(1)?,
        status: parse_text(row, 2)?,
        deadline: parse_text(row, 3)?,
        created_at: parse_text(row, 4)?,
        updated_at: parse_text(row, 5)?,
        planner_id: parse_text(row, 6)?,
    })
}

impl GoalStore for super::Database {
    fn create_goal(&self, goal: &Goal) -> Result<()> {
        debug!("create_goal: {}", goal.id);
        self.with_connection(|connection| {
            connection
                .execute(
                    INSERT_GOAL_SQL,
                    params![
                        goal.id.to_string(),
                        goal.objective,
                        goal.status.as_str(),
                        goal.deadline.to_string(),
                        goal.created_at.to_string(),
                        goal.updated_at.to_string(),
                        goal.planner_id.to_string(),
                    ],
                )
                .map_err(|e| insert_error(Goal::KIND, goal.id, "Failed to insert goal", e))?;
            Ok(())
        })
    }

    fn update_goal(&self, goal: &Goal) -> Result<()> {
        debug!("update_goal: {}", goal.id);
        self.with_connection(|connection| {
            let rows = connection
                .execute(
                    UPDATE_GOAL_SQL,
                    params![
                        goal.id.to_string(),
                        goal.objective,
                        goal.status.as_str(),
                        goal.deadline.to_string(),
                        goal.created_at.to_string(),
                        goal.updated_at.to_string(),
                        goal.planner_id.to_string(),
                    ],
                )
                .db_context("Failed to update goal")?;
            ensure_affected(rows, Goal::KIND, goal.id)
        })
    }

    fn delete_goal(&self, id: Uuid) -> Result<()> {
        debug!("delete_goal: {id}");
        self.with_connection(|connection| {
            let rows = connection
                .execute(DELETE_GOAL_SQL, params![id.to_string()])
                .db_context("Failed to delete goal")?;
            ensure_affected(rows, Goal::KIND, id)
        })
    }

    fn get_goal(&self, id: Uuid) -> Result<Goal> {
        self.with_connection(|connection| {
            connection
                .query_row(SELECT_GOAL_SQL, params![id.to_string()], goal_from_row)
                .optional()
                .db_context("Failed to query goal")?
                .ok_or(WaypointError::NotFound {
                    kind: Goal::KIND,
                    id,
                })
        })
    }

    fn list_goals(&self) -> Result<Vec<Goal>> {
        self.with_connection(|connection| {
            query_all(connection, LIST_GOALS_SQL, [], goal_from_row, "Failed to list goals")
        })
    }

    fn get_goals_by_objective(&self, objective: &str) -> Result<Vec<Goal>> {
        self.with_connection(|connection| {
            query_all(
                connection,
                SELECT_GOALS_BY_OBJECTIVE_SQL,
                params![objective],
                goal_from_row,
                "Failed to query goals by objective",
            )
        })
    }

    fn get_goals_by_planner_id(&self, planner_id: Uuid) -> Result<Vec<Goal>> {
        self.with_connection(|connection| {
            query_all(
                connection,
                SELECT_GOALS_BY_PLANNER_SQL,
                params![planner_id.to_string()],
                goal_from_row,
                "Failed to query goals by planner",
            )
        })
    }
}
