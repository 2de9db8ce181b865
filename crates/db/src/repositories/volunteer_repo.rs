//! Repository for the `volunteer_users` table.

use sqlx::PgPool;
use wings_core::types::DbId;

use crate::models::volunteer::{CreateVolunteer, UpdateVolunteerProfile, Volunteer, VolunteerSummary};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, full_name, gender, email, phone_number, password_hash, \
                       has_experience, experience_details, id_card_path, profile_picture, \
                       place, state, country, price_per_hour, interview_answers, \
                       created_at, updated_at";

/// Provides CRUD operations for volunteer accounts.
pub struct VolunteerRepo;

impl VolunteerRepo {
    /// Insert a new volunteer, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateVolunteer) -> Result<Volunteer, sqlx::Error> {
        let query = format!(
            "INSERT INTO volunteer_users \
                 (full_name, gender, email, phone_number, password_hash, has_experience, \
                  experience_details, id_card_path, profile_picture, place, state, country, \
                  price_per_hour, interview_answers) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Volunteer>(&query)
            .bind(&input.full_name)
            .bind(&input.gender)
            .bind(&input.email)
            .bind(&input.phone_number)
            .bind(&input.password_hash)
            .bind(input.has_experience)
            .bind(&input.experience_details)
            .bind(&input.id_card_path)
            .bind(&input.profile_picture)
            .bind(&input.place)
            .bind(&input.state)
            .bind(&input.country)
            .bind(input.price_per_hour)
            .bind(&input.interview_answers)
            .fetch_one(pool)
            .await
    }

    /// Find a volunteer by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Volunteer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM volunteer_users WHERE id = $1");
        sqlx::query_as::<_, Volunteer>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a volunteer by email (case-sensitive; callers lowercase first).
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<Volunteer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM volunteer_users WHERE email = $1");
        sqlx::query_as::<_, Volunteer>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// Whether a volunteer with the given ID exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let (exists,): (bool,) =
            sqlx::query_as("SELECT EXISTS (SELECT 1 FROM volunteer_users WHERE id = $1)")
                .bind(id)
                .fetch_one(pool)
                .await?;
        Ok(exists)
    }

    /// Update a volunteer's profile. Only non-`None` fields in `input` are
    /// applied; `updated_at` is always advanced.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update_profile(
        pool: &PgPool,
        id: DbId,
        input: &UpdateVolunteerProfile,
    ) -> Result<Option<Volunteer>, sqlx::Error> {
        let query = format!(
            "UPDATE volunteer_users SET \
                full_name = COALESCE($2, full_name), \
                gender = COALESCE($3, gender), \
                phone_number = COALESCE($4, phone_number), \
                has_experience = COALESCE($5, has_experience), \
                experience_details = COALESCE($6, experience_details), \
                id_card_path = COALESCE($7, id_card_path), \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Volunteer>(&query)
            .bind(id)
            .bind(&input.full_name)
            .bind(&input.gender)
            .bind(&input.phone_number)
            .bind(input.has_experience)
            .bind(&input.experience_details)
            .bind(&input.id_card_path)
            .fetch_optional(pool)
            .await
    }

    /// Delete a volunteer account. Offerings cascade; returns `true` if a
    /// row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM volunteer_users WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// List every volunteer's directory summary, oldest account first.
    pub async fn list_summaries(pool: &PgPool) -> Result<Vec<VolunteerSummary>, sqlx::Error> {
        sqlx::query_as::<_, VolunteerSummary>(
            "SELECT id, full_name, gender, phone_number, has_experience \
             FROM volunteer_users ORDER BY id",
        )
        .fetch_all(pool)
        .await
    }
}
