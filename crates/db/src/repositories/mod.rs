//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod booking_repo;
pub mod elderly_repo;
pub mod service_offering_repo;
pub mod volunteer_repo;

pub use booking_repo::BookingRepo;
pub use elderly_repo::ElderlyRepo;
pub use service_offering_repo::ServiceOfferingRepo;
pub use volunteer_repo::VolunteerRepo;
