//! Booking model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use wings_core::types::{DbId, Timestamp};

/// Full booking row from the `bookings` table.
///
/// `status` is stored as free text; see `wings_core::booking::BookingStatus`
/// for the values this system itself produces.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Booking {
    pub id: DbId,
    pub volunteer_id: DbId,
    pub elderly_id: DbId,
    pub service_type: String,
    pub description: String,
    pub is_emergency: bool,
    pub status: String,
    pub booking_time: Timestamp,
    /// Stamped once, when the status is first set to `completed`. Never
    /// cleared, even if the status later changes again.
    pub completed_at: Option<Timestamp>,
}

/// DTO for creating a new booking. Defaults (`description = ""`,
/// `is_emergency = false`) are applied by the caller before this is built.
#[derive(Debug, Deserialize)]
pub struct CreateBooking {
    pub volunteer_id: DbId,
    pub elderly_id: DbId,
    pub service_type: String,
    pub description: String,
    pub is_emergency: bool,
}

/// A booking joined with the requesting elderly user's contact details,
/// as shown on a volunteer's schedule.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct VolunteerBooking {
    pub id: DbId,
    pub booking_time: Timestamp,
    pub status: String,
    pub service_type: String,
    pub description: String,
    pub is_emergency: bool,
    pub elderly_name: String,
    pub elderly_phone: String,
    pub elderly_address: Option<String>,
}
