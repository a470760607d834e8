//! Error types for the waypoint library.

use std::path::PathBuf;

use thiserror::Error;
use uuid::Uuid;

/// Comprehensive error type for all waypoint operations.
#[derive(Error, Debug)]
pub enum WaypointError {
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// No record of the given kind exists for the ID
    #[error("{kind} with ID {id} not found")]
    NotFound { kind: &'static str, id: Uuid },
    /// A record of the given kind already exists for the ID
    #[error("{kind} with ID {id} already exists")]
    Duplicate { kind: &'static str, id: Uuid },
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// The operating system could not supply randomness for a new identifier
    #[error("Failed to generate identifier: {source}")]
    IdGeneration {
        #[source]
        source: rand::Error,
    },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
    /// The database handle was poisoned by a panicking writer
    #[error("Database handle is poisoned")]
    LockPoisoned,
}

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    /// Create a new database error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> WaypointError {
        WaypointError::Database {
            message: self.message,
            source,
        }
    }
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> WaypointError {
        WaypointError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl WaypointError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Whether the error was caused by malformed client input rather than by
    /// storage or the runtime.
    pub fn is_client_error(&self) -> bool {
        matches!(self, WaypointError::InvalidInput { .. })
    }

    /// Whether the error reports a missing record.
    pub fn is_not_found(&self) -> bool {
        matches!(self, WaypointError::NotFound { .. })
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| WaypointError::database(message).with_source(e))
    }
}

/// Result type alias for waypoint operations
pub type Result<T> = std::result::Result<T, WaypointError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_is_client_error() {
        let err = WaypointError::invalid_input("deadline").with_reason("expected YYYY-MM-DD");
        assert!(err.is_client_error());
        assert_eq!(
            err.to_string(),
            "Invalid input for field 'deadline': expected YYYY-MM-DD"
        );
    }

    #[test]
    fn test_not_found_is_server_error() {
        let err = WaypointError::NotFound {
            kind: "Task",
            id: Uuid::nil(),
        };
        assert!(!err.is_client_error());
        assert!(err.is_not_found());
        assert_eq!(
            err.to_string(),
            "Task with ID 00000000-0000-0000-0000-000000000000 not found"
        );
    }

    #[test]
    fn test_db_context_wraps_source() {
        let result: std::result::Result<(), rusqlite::Error> =
            Err(rusqlite::Error::QueryReturnedNoRows);
        let err = result.db_context("Failed to query task").unwrap_err();
        assert!(matches!(err, WaypointError::Database { .. }));
        assert_eq!(err.to_string(), "Database error: Failed to query task");
    }
}
