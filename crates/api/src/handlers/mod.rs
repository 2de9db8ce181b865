//! HTTP request handlers, one module per resource.

pub mod bookings;
pub mod elderly;
pub mod services;
pub mod volunteer;
