//! Version CRUD operations and queries.

use log::debug;
use rusqlite::{params, OptionalExtension, Row};
use uuid::Uuid;

use super::utils::{
    ensure_affected, insert_error, parse_json, parse_optional_text, parse_text, query_all,
};
use crate::{
    error::{DatabaseResultExt, Result, WaypointError},
    models::{Version, VersionNumber},
    store::VersionStore,
};

const INSERT_VERSION_SQL: &str = "INSERT INTO versions (id, goal_id, plan_id, task_id, major, minor, patch, created_at, created_by, previous_version, snapshot) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)";
const UPDATE_VERSION_SQL: &str = "UPDATE versions SET goal_id = ?2, plan_id = ?3, task_id = ?4, major = ?5, minor = ?6, patch = ?7, created_at = ?8, created_by = ?9, previous_version = ?10, snapshot = ?11 WHERE id = ?1";
const DELETE_VERSION_SQL: &str = "DELETE FROM versions WHERE id = ?1";
const SELECT_VERSION_SQL: &str = "SELECT id, goal_id, plan_id, task_id, major, minor, patch, created_at, created_by, previous_version, snapshot FROM versions WHERE id = ?1";
const LIST_VERSIONS_SQL: &str = "SELECT id, goal_id, plan_id, task_id, major, minor, patch, created_at, created_by, previous_version, snapshot FROM versions ORDER BY rowid";
const SELECT_VERSIONS_BY_GOAL_SQL: &str = "SELECT id, goal_id, plan_id, task_id, major, minor, patch, created_at, created_by, previous_version, snapshot FROM versions WHERE goal_id = ?1 ORDER BY rowid";

fn version_from_row(row: &Row<'_>) -> rusqlite::Result<Version> {
    Ok(Version {
        id: parse_text(row, 0)?,
        goal_id: parse_text(row, 1)?,
        plan_id: parse_optional_text(row, 2)?,
        task_id: parse_optional_text(row, 3)?,
        version: VersionNumber::new(row.get(4)?, row.get(5)?, row.get(6)?),
        created_at: parse_text(row, 7)?,
        created_by: row.get(8)?,
        previous_version: parse_optional_text(row, 9)?,
        snapshot: parse_json(row, 10)?,
    })
}

impl VersionStore for super::Database {
    fn create_version(&self, version: &Version) -> Result<()> {
        debug!("create_version: {}", version.id);
        let snapshot = serde_json::to_string(&version.snapshot)?;
        self.with_connection(|connection| {
            connection
                .execute(
                    INSERT_VERSION_SQL,
                    params![
                        version.id.to_string(),
                        version.goal_id.to_string(),
                        version.plan_id.map(|id| id.to_string()),
                        version.task_id.map(|id| id.to_string()),
                        version.version.major,
                        version.version.minor,
                        version.version.patch,
                        version.created_at.to_string(),
                        version.created_by,
                        version.previous_version.map(|id| id.to_string()),
                        snapshot,
                    ],
                )
                .map_err(|e| {
                    insert_error(Version::KIND, version.id, "Failed to insert version", e)
                })?;
            Ok(())
        })
    }

    fn update_version(&self, version: &Version) -> Result<()> {
        debug!("update_version: {}", version.id);
        let snapshot = serde_json::to_string(&version.snapshot)?;
        self.with_connection(|connection| {
            let rows = connection
                .execute(
                    UPDATE_VERSION_SQL,
                    params![
                        version.id.to_string(),
                        version.goal_id.to_string(),
                        version.plan_id.map(|id| id.to_string()),
                        version.task_id.map(|id| id.to_string()),
                        version.version.major,
                        version.version.minor,
                        version.version.patch,
                        version.created_at.to_string(),
                        version.created_by,
                        version.previous_version.map(|id| id.to_string()),
                        snapshot,
                    ],
                )
                .db_context("Failed to update version")?;
            ensure_affected(rows, Version::KIND, version.id)
        })
    }

    fn delete_version(&self, id: Uuid) -> Result<()> {
        debug!("delete_version: {id}");
        self.with_connection(|connection| {
            let rows = connection
                .execute(DELETE_VERSION_SQL, params![id.to_string()])
                .db_context("Failed to delete version")?;
            ensure_affected(rows, Version::KIND, id)
        })
    }

    fn get_version(&self, id: Uuid) -> Result<Version> {
        self.with_connection(|connection| {
            connection
                .query_row(SELECT_VERSION_SQL, params![id.to_string()], version_from_row)
                .optional()
                .db_context("Failed to query version")?
                .ok_or(WaypointError::NotFound {
                    kind: Version::KIND,
                    id,
                })
        })
    }

    fn list_versions(&self) -> Result<Vec<Version>> {
        self.with_connection(|connection| {
            query_all(
                connection,
                LIST_VERSIONS_SQL,
                [],
                version_from_row,
                "Failed to list versions",
            )
        })
    }

    fn get_versions_by_goal_id(&self, goal_id: Uuid) -> Result<Vec<Version>> {
        self.with_connection(|connection| {
            query_all(
                connection,
                SELECT_VERSIONS_BY_GOAL_SQL,
                params![goal_id.to_string()],
                version_from_row,
                "Failed to query versions by goal",
            )
        })
    }
}
