//! Data access for a contacts list.
//!
//! Contacts are read back ordered by last name and appended through a
//! [`ContactStore`] running on any [`db::QueryExecutor`].

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;

pub use db::{DbError, DbResult, QueryExecutor};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::contact::{Contact, ContactId};
pub use repo::contact_repo::{
    map_contact_row, ContactOperation, ContactRepository, ContactStore, DataAccessError,
    DataAccessResult,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
