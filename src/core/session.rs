use crate::domain::ports::ConfigProvider;
use crate::utils::error::{AppError, Result};
use rusqlite::{Connection, OpenFlags};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// An open airport database. Only the engine owns one; handlers borrow the
/// connection for the duration of a single request.
#[derive(Debug)]
pub struct Session {
    conn: Connection,
    path: PathBuf,
}

impl Session {
    /// Opens `path` and checks that it is an SQLite file holding every
    /// required table. The file is never created.
    pub fn open<C: ConfigProvider>(path: &Path, config: &C) -> Result<Self> {
        let shown = path.display().to_string();
        let not_a_database = |e: rusqlite::Error| AppError::NotADatabase {
            path: shown.clone(),
            message: e.to_string(),
        };

        // The bundled library reads any name starting with `file:` as a URI.
        let target = if path.to_string_lossy().starts_with("file:") {
            Path::new(".").join(path)
        } else {
            path.to_path_buf()
        };

        let conn = Connection::open_with_flags(
            &target,
            OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .map_err(not_a_database)?;

        let integrity: String = conn
            .query_row("PRAGMA integrity_check", [], |row| row.get(0))
            .map_err(not_a_database)?;
        if integrity != "ok" {
            return Err(AppError::NotADatabase {
                path: shown,
                message: integrity,
            });
        }

        if config.foreign_keys() {
            conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        }

        let missing = missing_tables(&conn, config.required_tables())?;
        if !missing.is_empty() {
            return Err(AppError::NotAnAirportDatabase {
                path: shown,
                missing,
            });
        }

        tracing::info!("Opened airport database {}", shown);
        Ok(Self {
            conn,
            path: path.to_path_buf(),
        })
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Releases the connection. A failed close is logged; the handle is
    /// dropped either way.
    pub fn close(self) {
        let path = self.path;
        match self.conn.close() {
            Ok(()) => tracing::info!("Closed airport database {}", path.display()),
            Err((_conn, e)) => {
                tracing::warn!("Closing {} reported an error: {}", path.display(), e)
            }
        }
    }
}

/// Required tables absent from `sqlite_master`, in the order they were listed.
fn missing_tables(conn: &Connection, required: &[String]) -> Result<Vec<String>> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type = 'table'")?;
    let present = stmt
        .query_map([], |row| row.get::<_, String>(0))?
        .collect::<std::result::Result<HashSet<_>, _>>()?;

    Ok(required
        .iter()
        .filter(|table| !present.contains(table.as_str()))
        .cloned()
        .collect())
}
