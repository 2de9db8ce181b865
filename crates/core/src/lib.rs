//! Pure domain types for the Wellness Wings backend.
//!
//! No I/O lives here: the storage layer is `wings-db` and the HTTP surface is
//! `wings-api`. This crate holds the shared ID/timestamp aliases, the error
//! taxonomy, the booking status rules, and well-known service-type constants.

pub mod booking;
pub mod error;
pub mod services;
pub mod types;
