//! Repository for the `bookings` table.

use sqlx::PgPool;
use wings_core::booking::BookingStatus;
use wings_core::types::DbId;

use crate::models::booking::{Booking, CreateBooking, VolunteerBooking};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, volunteer_id, elderly_id, service_type, description, \
                       is_emergency, status, booking_time, completed_at";

/// Provides booking creation, status updates, and the per-volunteer listing.
pub struct BookingRepo;

impl BookingRepo {
    /// Insert a new booking, returning the created row.
    ///
    /// The database stamps `booking_time`; the row always starts `pending`.
    pub async fn create(pool: &PgPool, input: &CreateBooking) -> Result<Booking, sqlx::Error> {
        let query = format!(
            "INSERT INTO bookings \
                 (volunteer_id, elderly_id, service_type, description, is_emergency, \
                  status, booking_time) \
             VALUES ($1, $2, $3, $4, $5, 'pending', NOW()) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Booking>(&query)
            .bind(input.volunteer_id)
            .bind(input.elderly_id)
            .bind(&input.service_type)
            .bind(&input.description)
            .bind(input.is_emergency)
            .fetch_one(pool)
            .await
    }

    /// Set a booking's status to the given value, verbatim.
    ///
    /// Stamps `completed_at = NOW()` iff the new status parses as
    /// `completed`; any other value leaves `completed_at` untouched,
    /// including moves away from `completed`. Returns `None` if no row with
    /// the given `id` exists.
    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        status: &str,
    ) -> Result<Option<Booking>, sqlx::Error> {
        let stamp = BookingStatus::parse(status).is_completed();
        let query = format!(
            "UPDATE bookings \
             SET status = $2, \
                 completed_at = CASE WHEN $3 THEN NOW() ELSE completed_at END \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Booking>(&query)
            .bind(id)
            .bind(status)
            .bind(stamp)
            .fetch_optional(pool)
            .await
    }

    /// List a volunteer's bookings, newest first, joined with the
    /// requesting elderly user's contact details.
    pub async fn list_for_volunteer(
        pool: &PgPool,
        volunteer_id: DbId,
    ) -> Result<Vec<VolunteerBooking>, sqlx::Error> {
        sqlx::query_as::<_, VolunteerBooking>(
            "SELECT b.id, b.booking_time, b.status, b.service_type, b.description, \
                    b.is_emergency, \
                    e.full_name AS elderly_name, \
                    e.phone_number AS elderly_phone, \
                    e.address AS elderly_address \
             FROM bookings b \
             JOIN elderly_users e ON b.elderly_id = e.id \
             WHERE b.volunteer_id = $1 \
             ORDER BY b.booking_time DESC",
        )
        .bind(volunteer_id)
        .fetch_all(pool)
        .await
    }
}
