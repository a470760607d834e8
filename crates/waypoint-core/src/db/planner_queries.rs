//! Planner CRUD operations and queries.

use log::debug;
use rusqlite::{params, OptionalExtension, Row};
use uuid::Uuid;

use super::utils::{ensure_affected, insert_error, parse_text, query_all};
use crate::{
    error::{DatabaseResultExt, Result, WaypointError},
    models::Planner,
    store::PlannerStore,
};

const INSERT_PLANNER_SQL: &str = "INSERT INTO planners (id, title, owner) VALUES (?1, ?2, ?3)";
const UPDATE_PLANNER_SQL: &str = "UPDATE planners SET title = ?2, owner = ?3 WHERE id = ?1";
const DELETE_PLANNER_SQL: &str = "DELETE FROM planners WHERE id = ?1";
const SELECT_PLANNER_SQL: &str = "SELECT id, title, owner FROM planners WHERE id = ?1";
const LIST_PLANNERS_SQL: &str = "SELECT id, title, owner FROM planners ORDER BY rowid";
const SELECT_PLANNERS_BY_TITLE_SQL: &str =
    "SELECT id, title, owner FROM planners WHERE title = ?1 ORDER BY rowid";
const SELECT_PLANNERS_BY_OWNER_SQL: &str =
    "SELECT id, title, owner FROM planners WHERE owner = ?1 ORDER BY rowid";

fn planner_from_row(row: &Row<'_>) -> rusqlite::Result<Planner> {
    Ok(Planner {
        id: parse_text(row, 0)?,
        title: row.get(1)?,
        owner: row.get(2)?,
    })
}

impl PlannerStore for super::Database {
    fn create_planner(&self, planner: &Planner) -> Result<()> {
        debug!("create_planner: {}", planner.id);
        self.with_connection(|connection| {
            connection
                .execute(
                    INSERT_PLANNER_SQL,
                    params![planner.id.to_string(), planner.title, planner.owner],
                )
                .map_err(|e| {
                    insert_error(Planner::KIND, planner.id, "Failed to insert planner", e)
                })?;
            Ok(())
        })
    }

    fn update_planner(&self, planner: &Planner) -> Result<()> {
        debug!("update_planner: {}", planner.id);
        self.with_connection(|connection| {
            let rows = connection
                .execute(
                    UPDATE_PLANNER_SQL,
                    params![planner.id.to_string(), planner.title, planner.owner],
                )
                .db_context("Failed to update planner")?;
            ensure_affected(rows, Planner::KIND, planner.id)
        })
    }

    fn delete_planner(&self, id: Uuid) -> Result<()> {
        debug!("delete_planner: {id}");
        self.with_connection(|connection| {
            let rows = connection
                .execute(DELETE_PLANNER_SQL, params![id.to_string()])
                .db_context("Failed to delete planner")?;
            ensure_affected(rows, Planner::KIND, id)
        })
    }

    fn get_planner(&self, id: Uuid) -> Result<Planner> {
        self.with_connection(|connection| {
            connection
                .query_row(SELECT_PLANNER_SQL, params![id.to_string()], planner_from_row)
                .optional()
                .db_context("Failed to query planner")?
                .ok_or(WaypointError::NotFound {
                    kind: Planner::KIND,
                    id,
                })
        })
    }

    fn list_planners(&self) -> Result<Vec<Planner>> {
        self.with_connection(|connection| {
            query_all(
                connection,
                LIST_PLANNERS_SQL,
                [],
                planner_from_row,
                "Failed to list planners",
            )
        })
    }

    fn get_planners_by_title(&self, title: &str) -> Result<Vec<Planner>> {
        self.with_connection(|connection| {
            query_all(
                connection,
                SELECT_PLANNERS_BY_TITLE_SQL,
                params![title],
                planner_from_row,
                "Failed to query planners by title",
            )
        })
    }

    fn get_planners_by_owner(&self, owner: &str) -> Result<Vec<Planner>> {
        self.with_connection(|connection| {
            query_all(
                connection,
                SELECT_PLANNERS_BY_OWNER_SQL,
                params![owner],
                planner_from_row,
                "Failed to query planners by owner",
            )
        })
    }
}
