//! Database schema initialization and migrations.

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result, WaypointError};

/// Schema revision stamped into `PRAGMA user_version`.
pub const SCHEMA_VERSION: i64 = 1;

/// Initializes the database schema using the embedded SQL file.
pub(super) fn initialize_schema(connection: &Connection) -> Result<()> {
    let current: i64 = connection
        .query_row("PRAGMA user_version", [], |row| row.get(0))
        .db_context("Failed to read schema version")?;

    if current > SCHEMA_VERSION {
        return Err(WaypointError::Configuration {
            message: format!(
                "Database schema version {current} is newer than supported version {SCHEMA_VERSION}"
            ),
        });
    }

    let schema_sql = include_str!("../../assets/schema.sql");
    connection
        .execute_batch(schema_sql)
        .db_context("Failed to initialize database schema")?;

    if current < SCHEMA_VERSION {
        log::debug!("Migrating database schema from version {current} to {SCHEMA_VERSION}");
        connection
            .execute_batch(&format!("PRAGMA user_version = {SCHEMA_VERSION}"))
            .db_context("Failed to record schema version")?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_version_is_recorded() {
        let connection = Connection::open_in_memory().unwrap();
        initialize_schema(&connection).unwrap();

        let version: i64 = connection
            .query_row("PRAGMA user_version", [], |row| row.get(0))
            .unwrap();
        assert_eq!(version, SCHEMA_VERSION);
    }

    #[test]
    fn test_initialize_twice_is_harmless() {
        let connection = Connection::open_in_memory().unwrap();
        initialize_schema(&connection).unwrap();
        initialize_schema(&connection).unwrap();
    }

    #[test]
    fn test_newer_schema_is_rejected() {
        let connection = Connection::open_in_memory().unwrap();
        connection
            .execute_batch(&format!("PRAGMA user_version = {}", SCHEMA_VERSION + 1))
            .unwrap();

        let err = initialize_schema(&connection).unwrap_err();
        assert!(matches!(err, WaypointError::Configuration { .. }));
    }
}
