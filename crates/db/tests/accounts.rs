//! Integration tests for the account repositories:
//! - Volunteer create / find / exists / partial profile update / delete
//! - Elderly create / phone lookup / first contact
//! - Unique constraint violations on email and phone number

use sqlx::PgPool;
use wings_db::models::elderly::CreateElderly;
use wings_db::models::volunteer::{CreateVolunteer, UpdateVolunteerProfile};
use wings_db::repositories::{ElderlyRepo, VolunteerRepo};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_volunteer(name: &str, email: &str, phone: &str) -> CreateVolunteer {
    CreateVolunteer {
        full_name: name.to_string(),
        gender: "female".to_string(),
        email: email.to_string(),
        phone_number: phone.to_string(),
        password_hash: "$argon2id$v=19$m=19456,t=2,p=1$testsalt$testhash".to_string(),
        has_experience: false,
        experience_details: None,
        id_card_path: None,
        profile_picture: None,
        place: "Eugene".to_string(),
        state: "Oregon".to_string(),
        country: "USA".to_string(),
        price_per_hour: 10.0,
        interview_answers: Some(serde_json::json!({"why": "community"})),
    }
}

fn new_elderly(name: &str, email: &str, phone: &str) -> CreateElderly {
    CreateElderly {
        full_name: name.to_string(),
        gender: "male".to_string(),
        email: email.to_string(),
        password_hash: "$argon2id$v=19$m=19456,t=2,p=1$testsalt$testhash".to_string(),
        phone_number: phone.to_string(),
        address: Some("7 Birch Street".to_string()),
    }
}

// ---------------------------------------------------------------------------
// Test: Volunteer create and lookups
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn test_volunteer_create_and_find(pool: PgPool) {
    let created = VolunteerRepo::create(&pool, &new_volunteer("Quinn", "quinn@example.com", "555-0301"))
        .await
        .unwrap();
    assert_eq!(created.full_name, "Quinn");
    assert_eq!(
        created.interview_answers,
        Some(serde_json::json!({"why": "community"}))
    );

    let by_id = VolunteerRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .expect("Should find by id");
    assert_eq!(by_id.email, "quinn@example.com");

    let by_email = VolunteerRepo::find_by_email(&pool, "quinn@example.com")
        .await
        .unwrap()
        .expect("Should find by email");
    assert_eq!(by_email.id, created.id);

    assert!(VolunteerRepo::exists(&pool, created.id).await.unwrap());
    assert!(!VolunteerRepo::exists(&pool, 999_999).await.unwrap());
}

// ---------------------------------------------------------------------------
// Test: Duplicate email and phone rejected
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn test_volunteer_unique_constraints(pool: PgPool) {
    VolunteerRepo::create(&pool, &new_volunteer("Rita", "rita@example.com", "555-0302"))
        .await
        .unwrap();

    let same_email = VolunteerRepo::create(&pool, &new_volunteer("Sam", "rita@example.com", "555-0303")).await;
    assert!(same_email.is_err(), "Duplicate email should fail");

    let same_phone = VolunteerRepo::create(&pool, &new_volunteer("Sam", "sam@example.com", "555-0302")).await;
    assert!(same_phone.is_err(), "Duplicate phone number should fail");
}

// ---------------------------------------------------------------------------
// Test: Partial profile update applies only provided fields
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn test_volunteer_partial_profile_update(pool: PgPool) {
    let created = VolunteerRepo::create(&pool, &new_volunteer("Tess", "tess@example.com", "555-0304"))
        .await
        .unwrap();

    let updated = VolunteerRepo::update_profile(
        &pool,
        created.id,
        &UpdateVolunteerProfile {
            full_name: None,
            gender: None,
            phone_number: Some("555-0399".to_string()),
            has_experience: Some(true),
            experience_details: Some("Hospice volunteering".to_string()),
            id_card_path: None,
        },
    )
    .await
    .unwrap()
    .expect("Update should return the row");

    assert_eq!(updated.full_name, "Tess", "Untouched field preserved");
    assert_eq!(updated.phone_number, "555-0399");
    assert!(updated.has_experience);
    assert_eq!(updated.experience_details.as_deref(), Some("Hospice volunteering"));
    assert!(updated.updated_at >= created.updated_at);
}

// ---------------------------------------------------------------------------
// Test: Update and delete on non-existent volunteers
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn test_volunteer_update_nonexistent_returns_none(pool: PgPool) {
    let result = VolunteerRepo::update_profile(
        &pool,
        999_999,
        &UpdateVolunteerProfile {
            full_name: Some("Ghost".to_string()),
            gender: None,
            phone_number: None,
            has_experience: None,
            experience_details: None,
            id_card_path: None,
        },
    )
    .await
    .unwrap();
    assert!(result.is_none());
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_volunteer_delete(pool: PgPool) {
    let created = VolunteerRepo::create(&pool, &new_volunteer("Uma", "uma@example.com", "555-0305"))
        .await
        .unwrap();

    assert!(VolunteerRepo::delete(&pool, created.id).await.unwrap());
    assert!(!VolunteerRepo::delete(&pool, created.id).await.unwrap());
    assert!(VolunteerRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .is_none());
}

// ---------------------------------------------------------------------------
// Test: Summary listing carries the directory fields, oldest first
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn test_volunteer_summaries(pool: PgPool) {
    VolunteerRepo::create(&pool, &new_volunteer("Vera", "vera@example.com", "555-0306"))
        .await
        .unwrap();
    VolunteerRepo::create(&pool, &new_volunteer("Walt", "walt@example.com", "555-0307"))
        .await
        .unwrap();

    let summaries = VolunteerRepo::list_summaries(&pool).await.unwrap();
    assert_eq!(summaries.len(), 2);
    assert_eq!(summaries[0].full_name, "Vera");
    assert_eq!(summaries[1].full_name, "Walt");
    assert_eq!(summaries[0].phone_number, "555-0306");
}

// ---------------------------------------------------------------------------
// Test: Elderly create, phone lookup, first contact
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn test_elderly_create_and_find_by_phone(pool: PgPool) {
    let created = ElderlyRepo::create(&pool, &new_elderly("Xena", "xena@example.com", "555-0308"))
        .await
        .unwrap();
    assert_eq!(created.full_name, "Xena");

    let found = ElderlyRepo::find_by_phone(&pool, "555-0308")
        .await
        .unwrap()
        .expect("Should find by phone");
    assert_eq!(found.id, created.id);

    assert!(ElderlyRepo::find_by_phone(&pool, "555-9999")
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_elderly_duplicate_email_rejected(pool: PgPool) {
    ElderlyRepo::create(&pool, &new_elderly("Yuri", "yuri@example.com", "555-0309"))
        .await
        .unwrap();
    let result = ElderlyRepo::create(&pool, &new_elderly("Zoe", "yuri@example.com", "555-0310")).await;
    assert!(result.is_err(), "Duplicate email should fail");
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_elderly_first_contact(pool: PgPool) {
    assert!(ElderlyRepo::first_contact(&pool).await.unwrap().is_none());

    ElderlyRepo::create(&pool, &new_elderly("Abe", "abe@example.com", "555-0311"))
        .await
        .unwrap();
    ElderlyRepo::create(&pool, &new_elderly("Bea", "bea@example.com", "555-0312"))
        .await
        .unwrap();

    let contact = ElderlyRepo::first_contact(&pool)
        .await
        .unwrap()
        .expect("Should return the earliest account");
    assert_eq!(contact.full_name, "Abe");
    assert_eq!(contact.phone_number, "555-0311");
    assert_eq!(contact.address.as_deref(), Some("7 Birch Street"));
}
