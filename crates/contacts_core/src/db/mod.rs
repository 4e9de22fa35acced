//! SQLite bootstrap and the query execution facility used by repositories.
//!
//! # Responsibility
//! - Open and configure SQLite connections, applying the `contacts` schema
//!   migrations before the connection is handed out.
//! - Define [`QueryExecutor`], the read/write seam the contact store runs on.
//!
//! # Invariants
//! - Migration version is tracked via `PRAGMA user_version`.
//! - Every executor failure is reported as a [`DbError`]; the SQLite cause
//!   is reachable through `source()` and never repeated in `Display`.

use rusqlite::ErrorCode;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod executor;
pub mod migrations;
mod open;

pub use executor::QueryExecutor;
pub use open::{open_db, open_db_in_memory};

pub type DbResult<T> = Result<T, DbError>;

/// Failure opening, migrating or querying a contacts database.
#[derive(Debug)]
pub enum DbError {
    /// A statement or connection call failed inside SQLite.
    Sqlite(rusqlite::Error),
    /// The file was written by a build with newer migrations.
    UnsupportedSchemaVersion {
        db_version: u32,
        latest_supported: u32,
    },
}

impl DbError {
    /// Primary SQLite result code, when the failure came from SQLite itself.
    pub fn sqlite_code(&self) -> Option<ErrorCode> {
        match self {
            Self::Sqlite(err) => err.sqlite_error_code(),
            Self::UnsupportedSchemaVersion { .. } => None,
        }
    }

    /// Message for log lines: the SQLite text when there is one.
    pub(crate) fn log_text(&self) -> String {
        match self {
            Self::Sqlite(err) => err.to_string(),
            Self::UnsupportedSchemaVersion { .. } => self.to_string(),
        }
    }
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(_) => f.write_str("sqlite call failed"),
            Self::UnsupportedSchemaVersion {
                db_version,
                latest_supported,
            } => write!(
                f,
                "contacts schema version {db_version} is newer than supported {latest_supported}"
            ),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::UnsupportedSchemaVersion { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
