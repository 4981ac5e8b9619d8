//! Table access shared by every entity. Stateless; each function borrows the
//! session's connection for a single call.

use crate::core::mapper::{read_row, RecordMapper};
use crate::core::query::{self, BoundQuery, Insert, Predicate, Update};
use crate::utils::error::{AppError, Result};
use rusqlite::{params, params_from_iter, Connection, OptionalExtension};

/// Rows matching every clause of `predicate`, in the order the store returns them.
pub fn search<E: RecordMapper>(conn: &Connection, predicate: &Predicate) -> Result<Vec<E>> {
    let BoundQuery { sql, params } = query::select(E::TABLE, E::COLUMNS, predicate);
    tracing::debug!("search {}: {} ({} params)", E::ENTITY, sql, params.len());

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map(params_from_iter(params), |row| read_row(row, E::COLUMNS.len()))?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    rows.into_iter().map(E::from_values).collect()
}

pub fn find_by_id<E: RecordMapper>(conn: &Connection, id: i64) -> Result<Option<E>> {
    let sql = format!(
        "SELECT {} FROM {} WHERE {} = ?1",
        E::COLUMNS.join(", "),
        E::TABLE,
        E::id_column()
    );
    let values = conn
        .query_row(&sql, params![id], |row| read_row(row, E::COLUMNS.len()))
        .optional()?;

    values.map(E::from_values).transpose()
}

pub fn exists<E: RecordMapper>(conn: &Connection, id: i64) -> Result<bool> {
    let sql = format!(
        "SELECT EXISTS(SELECT 1 FROM {} WHERE {} = ?1)",
        E::TABLE,
        E::id_column()
    );
    let exists: bool = conn.query_row(&sql, params![id], |row| row.get(0))?;
    Ok(exists)
}

/// One more than the largest key in use, or 1 for an empty table.
///
/// Keys freed by deleted rows are never handed out again, which a
/// row count would do.
pub fn next_id<E: RecordMapper>(conn: &Connection) -> Result<i64> {
    let sql = format!("SELECT MAX({}) FROM {}", E::id_column(), E::TABLE);
    let max: Option<i64> = conn.query_row(&sql, [], |row| row.get(0))?;
    max.unwrap_or(0)
        .checked_add(1)
        .ok_or_else(|| AppError::ConstraintViolation {
            message: format!("no primary key left in {}", E::TABLE),
        })
}

pub fn update<E: RecordMapper>(conn: &Connection, id: i64, record: E) -> Result<usize> {
    let statement = E::mutable_columns()
        .iter()
        .zip(record.into_values().into_iter().skip(1))
        .fold(Update::new(E::TABLE, E::id_column(), id), |update, (column, value)| {
            update.set(*column, value)
        })
        .build();

    execute_write(conn, statement)
}

pub fn insert<E: RecordMapper>(conn: &Connection, id: i64, record: E) -> Result<usize> {
    let statement = E::mutable_columns()
        .iter()
        .zip(record.into_values().into_iter().skip(1))
        .fold(Insert::new(E::TABLE, E::id_column(), id), |insert, (column, value)| {
            insert.value(*column, value)
        })
        .build();

    execute_write(conn, statement)
}

fn execute_write(conn: &Connection, statement: BoundQuery) -> Result<usize> {
    tracing::debug!("write: {}", statement.sql);
    conn.execute(&statement.sql, params_from_iter(statement.params))
        .map_err(AppError::from_write)
}

/// Updates the row when the record's key exists, otherwise inserts it under
/// `next_id`. Returns the row as stored after the write.
pub fn save<E: RecordMapper>(conn: &Connection, record: E) -> Result<E> {
    let id = match record.id() {
        Some(id) if exists::<E>(conn, id)? => {
            update(conn, id, record)?;
            tracing::debug!("updated {} {}", E::ENTITY, id);
            id
        }
        _ => {
            let id = next_id::<E>(conn)?;
            insert(conn, id, record)?;
            tracing::debug!("inserted {} {}", E::ENTITY, id);
            id
        }
    };

    find_by_id::<E>(conn, id)?.ok_or(AppError::NotFound {
        entity: E::ENTITY,
        id,
    })
}
