pub mod repository;
pub mod store;

#[cfg(test)]
pub mod fixtures;

pub use store::Store;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("cannot open database at {path}: {reason}")]
    Unavailable { path: String, reason: String },
}
