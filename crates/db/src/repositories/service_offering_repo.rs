//! Repository for the `volunteer_services` table and the availability match.

use sqlx::PgPool;
use wings_core::services::HOSPITAL_VISIT;
use wings_core::types::DbId;

use crate::models::service_offering::{AvailableVolunteer, Offering, ServiceOffering};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, volunteer_id, service_type, is_available";

/// Volunteer columns selected by the availability match (everything except
/// the password hash).
const MATCH_COLUMNS: &str = "v.id, v.full_name, v.gender, v.email, v.phone_number, \
                             v.has_experience, v.experience_details, v.id_card_path, \
                             v.profile_picture, v.place, v.state, v.country, \
                             v.price_per_hour, v.interview_answers, v.created_at, \
                             v.updated_at, vs.service_type, vs.is_available";

/// Provides offering replacement, listing, and the availability match.
pub struct ServiceOfferingRepo;

impl ServiceOfferingRepo {
    /// List a volunteer's current offerings. Returns an empty vec for an
    /// unknown volunteer; existence is the caller's concern.
    pub async fn list_for_volunteer(
        pool: &PgPool,
        volunteer_id: DbId,
    ) -> Result<Vec<ServiceOffering>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM volunteer_services WHERE volunteer_id = $1 ORDER BY id");
        sqlx::query_as::<_, ServiceOffering>(&query)
            .bind(volunteer_id)
            .fetch_all(pool)
            .await
    }

    /// Replace a volunteer's offering set with `offerings`, atomically.
    ///
    /// Runs DELETE-then-INSERT in one transaction: on any insert failure the
    /// transaction drop rolls the delete back too, so the prior set survives
    /// intact and no reader ever observes the deleted-but-not-reinserted gap.
    pub async fn replace_for_volunteer(
        pool: &PgPool,
        volunteer_id: DbId,
        offerings: &[Offering],
    ) -> Result<(), sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("DELETE FROM volunteer_services WHERE volunteer_id = $1")
            .bind(volunteer_id)
            .execute(&mut *tx)
            .await?;

        for offering in offerings {
            sqlx::query(
                "INSERT INTO volunteer_services (volunteer_id, service_type, is_available) \
                 VALUES ($1, $2, $3)",
            )
            .bind(volunteer_id)
            .bind(&offering.service_type)
            .bind(offering.is_available)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await
    }

    /// Find volunteers currently offering `service_type`, one row per
    /// volunteer.
    ///
    /// When `emergency` is set, volunteers who have published a
    /// `Hospital Visit` offering with `is_available = false` are excluded
    /// even though they match on the requested type. Ordering is
    /// `(v.id, v.full_name)` so repeated queries return the same row per
    /// volunteer.
    pub async fn find_available(
        pool: &PgPool,
        service_type: &str,
        emergency: bool,
    ) -> Result<Vec<AvailableVolunteer>, sqlx::Error> {
        let mut query = format!(
            "SELECT DISTINCT ON (v.id) {MATCH_COLUMNS} \
             FROM volunteer_users v \
             INNER JOIN volunteer_services vs ON v.id = vs.volunteer_id \
             WHERE vs.service_type = $1 AND vs.is_available = true"
        );
        if emergency {
            query.push_str(
                " AND NOT EXISTS (\
                     SELECT 1 FROM volunteer_services opt_out \
                     WHERE opt_out.volunteer_id = v.id \
                       AND opt_out.service_type = $2 \
                       AND opt_out.is_available = false)",
            );
        }
        query.push_str(" ORDER BY v.id, v.full_name ASC");

        let mut q = sqlx::query_as::<_, AvailableVolunteer>(&query).bind(service_type);
        if emergency {
            q = q.bind(HOSPITAL_VISIT);
        }
        q.fetch_all(pool).await
    }
}
