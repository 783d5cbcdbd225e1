//! Repository and store tests against a real PostgreSQL database.
//!
//! Each test gets a fresh database with migrations applied. They need
//! `DATABASE_URL` pointing at a server the test user can create databases on.

use catalog_core::catalog::ProfileFilter;
use catalog_core::error::CoreError;
use catalog_core::models::{NewAccount, ProfileChanges};
use catalog_core::service;
use catalog_db::models::profile::CreateProfile;
use catalog_db::models::title::CreateTitle;
use catalog_db::repositories::{AccountRepo, ProfileRepo, TitleRepo};
use catalog_db::PgCatalogStore;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_title(name: &str) -> CreateTitle {
    CreateTitle {
        name: name.to_string(),
        description: Some(format!("{name} department")),
        color: None,
    }
}

fn new_profile(first: &str, last: &str, username: &str, title_id: Option<i64>) -> CreateProfile {
    CreateProfile {
        user_id: None,
        first_name: first.to_string(),
        last_name: last.to_string(),
        email: format!("{username}@example.com"),
        username: username.to_string(),
        phone_numbers: Vec::new(),
        title_id,
    }
}

fn new_account(email: &str, username: &str) -> NewAccount {
    NewAccount {
        email: email.to_string(),
        first_name: "Cy".to_string(),
        last_name: "Doe".to_string(),
        username: username.to_string(),
        phone: Some("+15550001111".to_string()),
        external_id: Some("user_cy".to_string()),
    }
}

// ---------------------------------------------------------------------------
// Listing and enrichment
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn listing_filters_and_enriches(pool: PgPool) {
    let engineer = TitleRepo::create(&pool, &new_title("Engineer")).await.unwrap();
    ProfileRepo::create(&pool, &new_profile("Ann", "Lee", "annlee", Some(engineer.id)))
        .await
        .unwrap();
    ProfileRepo::create(&pool, &new_profile("Bob", "Ray", "bobray", None))
        .await
        .unwrap();

    let store = PgCatalogStore::new(pool);

    let all = service::list_profiles(&store, &ProfileFilter::default())
        .await
        .unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].title.as_ref().map(|t| t.name.as_str()), Some("Engineer"));
    assert_eq!(all[1].title, None);

    let by_title = ProfileFilter {
        search_term: None,
        title_id: Some(engineer.id),
    };
    let filtered = service::list_profiles(&store, &by_title).await.unwrap();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].username, "annlee");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn username_lookup_ignores_case(pool: PgPool) {
    ProfileRepo::create(&pool, &new_profile("Ann", "Lee", "annlee", None))
        .await
        .unwrap();
    let store = PgCatalogStore::new(pool);

    let found = service::get_profile_by_username(&store, "AnnLee").await.unwrap();
    assert_eq!(found.map(|p| p.username), Some("annlee".to_string()));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn usernames_collide_case_insensitively(pool: PgPool) {
    ProfileRepo::create(&pool, &new_profile("Ann", "Lee", "annlee", None))
        .await
        .unwrap();

    let mut dup = new_profile("Ann", "Other", "ANNLEE", None);
    dup.email = "other@example.com".to_string();
    let err = ProfileRepo::create(&pool, &dup).await.unwrap_err();

    match err {
        sqlx::Error::Database(db_err) => {
            assert_eq!(db_err.code().as_deref(), Some("23505"));
        }
        other => panic!("expected unique violation, got {other:?}"),
    }
}

// ---------------------------------------------------------------------------
// Provisioning and updates
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn provisioning_is_idempotent(pool: PgPool) {
    let input = new_account("cy@example.com", "cydoe");

    let first = AccountRepo::provision(&pool, &input).await.unwrap();
    let second = AccountRepo::provision(&pool, &input).await.unwrap();
    assert_eq!(first, second);

    let account = AccountRepo::find_by_email(&pool, "cy@example.com")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(account.name, "Cy Doe");

    let profile = ProfileRepo::find_by_email(&pool, "cy@example.com")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(profile.user_id, Some(first));
    assert_eq!(profile.phone_numbers, vec!["+15550001111".to_string()]);
    assert_eq!(profile.title_id, None);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn provisioning_links_existing_profile(pool: PgPool) {
    let existing = ProfileRepo::create(&pool, &new_profile("Cy", "Doe", "cy", None))
        .await
        .unwrap();

    let account_id = AccountRepo::provision(&pool, &new_account("cy@example.com", "cy"))
        .await
        .unwrap();

    let linked = ProfileRepo::find_by_email(&pool, "cy@example.com")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(linked.id, existing.id);
    assert_eq!(linked.user_id, Some(account_id));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_applies_only_given_fields(pool: PgPool) {
    let profile = ProfileRepo::create(&pool, &new_profile("Ann", "Lee", "annlee", None))
        .await
        .unwrap();

    let changes = ProfileChanges {
        short_bio: Some("Builds things.".to_string()),
        phone_numbers: Some(vec!["+15551112222".to_string()]),
        ..Default::default()
    };
    let updated = ProfileRepo::update(&pool, profile.id, &changes)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.first_name, "Ann");
    assert_eq!(updated.short_bio.as_deref(), Some("Builds things."));
    assert_eq!(updated.phone_numbers, vec!["+15551112222".to_string()]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn store_reports_email_conflicts(pool: PgPool) {
    ProfileRepo::create(&pool, &new_profile("Ann", "Lee", "annlee", None))
        .await
        .unwrap();
    let bob = ProfileRepo::create(&pool, &new_profile("Bob", "Ray", "bobray", None))
        .await
        .unwrap();

    let store = PgCatalogStore::new(pool);
    let changes = ProfileChanges {
        email: Some("annlee@example.com".to_string()),
        ..Default::default()
    };
    let result = catalog_core::store::CatalogStore::update_profile(&store, bob.id, &changes).await;
    assert!(matches!(result, Err(CoreError::Conflict(_))));
}
