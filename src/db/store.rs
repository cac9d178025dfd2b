//! Storage accessor for the imaging metadata store.
//!
//! The store is populated and owned by an external ingestion process;
//! this side only ever reads. `Store` holds the configured database path
//! and opens a fresh read-only connection per request — dropping the
//! connection at the end of the request scope closes it on every exit
//! path. `connect` is the single acquisition seam, so a connection pool
//! could replace the per-call open without changing any caller.

use std::path::{Path, PathBuf};

use rusqlite::{Connection, OpenFlags};

use super::DatabaseError;

/// Handle to the configured SQLite store.
#[derive(Debug, Clone)]
pub struct Store {
    db_path: PathBuf,
}

impl Store {
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
        }
    }

    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    /// Open a read-only connection scoped to one request.
    pub fn connect(&self) -> Result<Connection, DatabaseError> {
        let conn = Connection::open_with_flags(
            &self.db_path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .map_err(|e| DatabaseError::Unavailable {
            path: self.db_path.display().to_string(),
            reason: e.to_string(),
        })?;
        conn.execute_batch("PRAGMA foreign_keys=ON;")?;
        Ok(conn)
    }
}
