//! Contact domain model.
//!
//! # Invariants
//! - `id` is `None` until the database assigns one on insert.
//! - A persisted `id` is positive and never reused for another contact.

use serde::{Deserialize, Serialize};

/// Database-assigned contact identifier.
pub type ContactId = i64;

/// A person's stored name, phone and email record.
///
/// Field names serialize in camelCase to mirror the `contacts` columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ContactId>,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub email_address: String,
}

impl Contact {
    /// Creates a contact that has not been saved yet.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        phone_number: impl Into<String>,
        email_address: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            first_name: first_name.into(),
            last_name: last_name.into(),
            phone_number: phone_number.into(),
            email_address: email_address.into(),
        }
    }

    /// Returns whether the database has assigned this contact an id.
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    /// `"First Last"`, trimmed when either part is empty.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}
