//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - `Deserialize` update DTOs for the status-mutation endpoints

pub mod advertisement;
pub mod business;
pub mod franchise;
pub mod inquiry;
pub mod listing;
