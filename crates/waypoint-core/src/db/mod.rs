//! Database operations and SQLite management.
//!
//! [`Database`] owns the single connection to the database file. Each
//! `*_queries` module implements one store trait from [`crate::store`] on it,
//! so the same handle serves every entity kind.

use std::{path::Path, sync::Mutex};

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result, WaypointError};

pub mod goal_queries;
pub mod migrations;
pub mod plan_queries;
pub mod planner_queries;
pub mod task_queries;
pub mod utils;
pub mod version_queries;

/// Database connection and operations handler.
///
/// `rusqlite::Connection` is not `Sync`; the mutex only serializes access to
/// the connection and SQLite's own locking governs everything else.
pub struct Database {
    connection: Mutex<Connection>,
}

impl Database {
    /// Opens (or creates) the database file and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;
        Self::from_connection(connection)
    }

    /// Opens a private in-memory database, used by tests.
    pub fn in_memory() -> Result<Self> {
        let connection =
            Connection::open_in_memory().db_context("Failed to open in-memory database")?;
        Self::from_connection(connection)
    }

    fn from_connection(connection: Connection) -> Result<Self> {
        migrations::initialize_schema(&connection)?;
        Ok(Self {
            connection: Mutex::new(connection),
        })
    }

    /// Runs `f` with exclusive access to the connection.
    pub(crate) fn with_connection<T>(
        &self,
        f: impl FnOnce(&mut Connection) -> Result<T>,
    ) -> Result<T> {
        let mut connection = self
            .connection
            .lock()
            .map_err(|_| WaypointError::LockPoisoned)?;
        f(&mut connection)
    }
}
