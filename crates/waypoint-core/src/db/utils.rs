//! Row decoding and error mapping shared by the query modules.

use std::{fmt, io, str::FromStr};

use rusqlite::{types::Type, Connection, ErrorCode, Params, Row};
use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::error::{DatabaseResultExt, Result, WaypointError};

fn conversion_error(idx: usize, message: String) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(
        idx,
        Type::Text,
        Box::new(io::Error::new(io::ErrorKind::InvalidData, message)),
    )
}

/// Reads a TEXT column and parses it with `FromStr`.
pub(crate) fn parse_text<T>(row: &Row<'_>, idx: usize) -> rusqlite::Result<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    let raw: String = row.get(idx)?;
    raw.parse::<T>()
        .map_err(|e| conversion_error(idx, format!("Invalid value '{raw}': {e}")))
}

/// Reads a nullable TEXT column and parses it with `FromStr`.
pub(crate) fn parse_optional_text<T>(row: &Row<'_>, idx: usize) -> rusqlite::Result<Option<T>>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    let raw: Option<String> = row.get(idx)?;
    raw.map(|raw| {
        raw.parse::<T>()
            .map_err(|e| conversion_error(idx, format!("Invalid value '{raw}': {e}")))
    })
    .transpose()
}

/// Reads a TEXT column holding JSON.
pub(crate) fn parse_json<T: DeserializeOwned>(row: &Row<'_>, idx: usize) -> rusqlite::Result<T> {
    let raw: String = row.get(idx)?;
    serde_json::from_str(&raw)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

/// Maps an INSERT failure, reporting primary key collisions as duplicates.
pub(crate) fn insert_error(
    kind: &'static str,
    id: Uuid,
    message: &str,
    source: rusqlite::Error,
) -> WaypointError {
    match &source {
        rusqlite::Error::SqliteFailure(err, _) if err.code == ErrorCode::ConstraintViolation => {
            WaypointError::Duplicate { kind, id }
        }
        _ => WaypointError::database(message).with_source(source),
    }
}

/// Turns a zero row count from UPDATE or DELETE into a not-found error.
pub(crate) fn ensure_affected(rows: usize, kind: &'static str, id: Uuid) -> Result<()> {
    if rows == 0 {
        return Err(WaypointError::NotFound { kind, id });
    }
    Ok(())
}

/// Runs a query and collects every mapped row.
pub(crate) fn query_all<T, P, F>(
    connection: &Connection,
    sql: &str,
    params: P,
    map: F,
    message: &str,
) -> Result<Vec<T>>
where
    P: Params,
    F: FnMut(&Row<'_>) -> rusqlite::Result<T>,
{
    let mut stmt = connection
        .prepare(sql)
        .db_context("Failed to prepare query")?;
    let rows = stmt.query_map(params, map).db_context(message)?;
    rows.collect::<std::result::Result<Vec<_>, _>>()
        .db_context(message)
}
