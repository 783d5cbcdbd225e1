//! Profile model and DTOs.
//!
//! `links` and `projects` are JSONB columns decoded through `sqlx::types::Json`.

use catalog_core::models::{Profile as ProfileRecord, ProfileLink, Project};
use catalog_core::types::{DbId, Timestamp};
use sqlx::types::Json;
use sqlx::FromRow;

/// A row from the `profiles` table.
#[derive(Debug, Clone, FromRow)]
pub struct Profile {
    pub id: DbId,
    pub user_id: Option<DbId>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub profile_image: Option<String>,
    pub phone_numbers: Vec<String>,
    pub username: String,
    pub title_id: Option<DbId>,
    pub links: Json<Vec<ProfileLink>>,
    pub short_bio: Option<String>,
    pub projects: Json<Vec<Project>>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<Profile> for ProfileRecord {
    fn from(row: Profile) -> Self {
        ProfileRecord {
            id: row.id,
            user_id: row.user_id,
            first_name: row.first_name,
            last_name: row.last_name,
            email: row.email,
            profile_image: row.profile_image,
            phone_numbers: row.phone_numbers,
            username: row.username,
            title_id: row.title_id,
            links: row.links.0,
            short_bio: row.short_bio,
            projects: row.projects.0,
        }
    }
}

/// DTO for inserting a profile. `username` must already be lowercased.
#[derive(Debug, Clone)]
pub struct CreateProfile {
    pub user_id: Option<DbId>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub username: String,
    pub phone_numbers: Vec<String>,
    pub title_id: Option<DbId>,
}
