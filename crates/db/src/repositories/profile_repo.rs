//! Repository for the `profiles` table.

use catalog_core::models::ProfileChanges;
use catalog_core::types::DbId;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::profile::{CreateProfile, Profile};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, first_name, last_name, email, profile_image, \
                       phone_numbers, username, title_id, links, short_bio, projects, \
                       created_at, updated_at";

/// Provides queries over profiles.
pub struct ProfileRepo;

impl ProfileRepo {
    /// Insert a new profile, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateProfile) -> Result<Profile, sqlx::Error> {
        let query = format!(
            "INSERT INTO profiles
                (user_id, first_name, last_name, email, username, phone_numbers, title_id)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Profile>(&query)
            .bind(input.user_id)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.email)
            .bind(&input.username)
            .bind(&input.phone_numbers)
            .bind(input.title_id)
            .fetch_one(pool)
            .await
    }

    /// List profiles in insertion order, optionally only those with `title_id`.
    pub async fn list(pool: &PgPool, title_id: Option<DbId>) -> Result<Vec<Profile>, sqlx::Error> {
        match title_id {
            Some(title_id) => {
                let query =
                    format!("SELECT {COLUMNS} FROM profiles WHERE title_id = $1 ORDER BY id");
                sqlx::query_as::<_, Profile>(&query)
                    .bind(title_id)
                    .fetch_all(pool)
                    .await
            }
            None => {
                let query = format!("SELECT {COLUMNS} FROM profiles ORDER BY id");
                sqlx::query_as::<_, Profile>(&query).fetch_all(pool).await
            }
        }
    }

    /// Find a profile by username (case-insensitive, via the `lower(username)` index).
    pub async fn find_by_username(
        pool: &PgPool,
        username: &str,
    ) -> Result<Option<Profile>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM profiles WHERE lower(username) = lower($1)");
        sqlx::query_as::<_, Profile>(&query)
            .bind(username)
            .fetch_optional(pool)
            .await
    }

    /// Find a profile by email (case-sensitive).
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<Profile>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM profiles WHERE email = $1");
        sqlx::query_as::<_, Profile>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// Update a profile. Only non-`None` fields in `changes` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        changes: &ProfileChanges,
    ) -> Result<Option<Profile>, sqlx::Error> {
        let query = format!(
            "UPDATE profiles SET
                first_name = COALESCE($2, first_name),
                last_name = COALESCE($3, last_name),
                email = COALESCE($4, email),
                phone_numbers = COALESCE($5, phone_numbers),
                title_id = COALESCE($6, title_id),
                short_bio = COALESCE($7, short_bio),
                profile_image = COALESCE($8, profile_image),
                links = COALESCE($9, links),
                projects = COALESCE($10, projects)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Profile>(&query)
            .bind(id)
            .bind(&changes.first_name)
            .bind(&changes.last_name)
            .bind(&changes.email)
            .bind(&changes.phone_numbers)
            .bind(changes.title_id)
            .bind(&changes.short_bio)
            .bind(&changes.profile_image)
            .bind(changes.links.as_ref().map(Json))
            .bind(changes.projects.as_ref().map(Json))
            .fetch_optional(pool)
            .await
    }
}
