//! Contact repository contract and the executor-backed store.
//!
//! # Responsibility
//! - Load every stored contact ordered by last name.
//! - Append new contacts, letting the database assign ids.
//!
//! # Invariants
//! - The store keeps no contact state between calls.
//! - Failures are surfaced unchanged as `DataAccessError`; nothing is retried.

use crate::db::{DbError, QueryExecutor};
use crate::model::contact::Contact;
use log::{error, info};
use rusqlite::Row;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

const CONTACT_SELECT_SQL: &str = "SELECT
    id,
    firstName,
    lastName,
    phoneNumber,
    emailAddress
FROM contacts
ORDER BY lastName ASC;";

const CONTACT_INSERT_SQL: &str = "INSERT INTO contacts (
    firstName,
    lastName,
    phoneNumber,
    emailAddress
) VALUES (?1, ?2, ?3, ?4);";

pub type DataAccessResult<T> = Result<T, DataAccessError>;

/// Repository operation that produced a [`DataAccessError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactOperation {
    ListAll,
    Save,
}

impl ContactOperation {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ListAll => "list_all",
            Self::Save => "save",
        }
    }
}

/// Any failure reading from or writing to the contacts store.
#[derive(Debug)]
pub struct DataAccessError {
    operation: ContactOperation,
    source: DbError,
}

impl DataAccessError {
    pub fn new(operation: ContactOperation, source: DbError) -> Self {
        Self { operation, source }
    }

    pub fn operation(&self) -> ContactOperation {
        self.operation
    }

    /// Underlying database error.
    pub fn db_error(&self) -> &DbError {
        &self.source
    }
}

impl Display for DataAccessError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "contacts {} failed", self.operation.as_str())
    }
}

impl Error for DataAccessError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.source)
    }
}

/// Repository interface for contact persistence.
pub trait ContactRepository {
    fn list_all(&self) -> DataAccessResult<Vec<Contact>>;
    fn save(&self, contact: &Contact) -> DataAccessResult<()>;
}

/// Contact store running on an injected [`QueryExecutor`].
///
/// Pass `&Connection` to borrow an open database, or any other executor.
pub struct ContactStore<E: QueryExecutor> {
    executor: E,
}

impl<E: QueryExecutor> ContactStore<E> {
    pub fn new(executor: E) -> Self {
        Self { executor }
    }

    pub fn executor(&self) -> &E {
        &self.executor
    }
}

impl<E: QueryExecutor> ContactRepository for ContactStore<E> {
    fn list_all(&self) -> DataAccessResult<Vec<Contact>> {
        let started_at = Instant::now();
        match self
            .executor
            .query(CONTACT_SELECT_SQL, &[], map_contact_row)
        {
            Ok(contacts) => {
                info!(
                    "event=contacts_list module=repo status=ok count={} duration_ms={}",
                    contacts.len(),
                    started_at.elapsed().as_millis()
                );
                Ok(contacts)
            }
            Err(err) => {
                error!(
                    "event=contacts_list module=repo status=error duration_ms={} sqlite_code={:?} error={}",
                    started_at.elapsed().as_millis(),
                    err.sqlite_code(),
                    err.log_text()
                );
                Err(DataAccessError::new(ContactOperation::ListAll, err))
            }
        }
    }

    fn save(&self, contact: &Contact) -> DataAccessResult<()> {
        let started_at = Instant::now();
        let result = self.executor.update(
            CONTACT_INSERT_SQL,
            &[
                &contact.first_name,
                &contact.last_name,
                &contact.phone_number,
                &contact.email_address,
            ],
        );

        match result {
            Ok(_) => {
                info!(
                    "event=contacts_save module=repo status=ok duration_ms={}",
                    started_at.elapsed().as_millis()
                );
                Ok(())
            }
            Err(err) => {
                error!(
                    "event=contacts_save module=repo status=error duration_ms={} sqlite_code={:?} error={}",
                    started_at.elapsed().as_millis(),
                    err.sqlite_code(),
                    err.log_text()
                );
                Err(DataAccessError::new(ContactOperation::Save, err))
            }
        }
    }
}

/// Maps one `contacts` row, in select-list order, to a [`Contact`].
pub fn map_contact_row(row: &Row<'_>) -> rusqlite::Result<Contact> {
    Ok(Contact {
        id: Some(row.get(0)?),
        first_name: row.get(1)?,
        last_name: row.get(2)?,
        phone_number: row.get(3)?,
        email_address: row.get(4)?,
    })
}
