//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A safe `Serialize` response struct where the row carries credentials

pub mod booking;
pub mod elderly;
pub mod service_offering;
pub mod volunteer;
