//! Domain records shared by the repository layer and its callers.

pub mod contact;
