//! Repository layer over the contacts table.
//!
//! # Responsibility
//! - Define the data access contract callers depend on.
//! - Keep SQL text and row mapping inside the core crate.

pub mod contact_repo;
