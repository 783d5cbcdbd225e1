//! Title model and DTOs.

use catalog_core::models::Title as TitleRecord;
use catalog_core::types::{DbId, Timestamp};
use serde::Deserialize;
use sqlx::FromRow;

/// A row from the `titles` table.
#[derive(Debug, Clone, FromRow)]
pub struct Title {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub color: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<Title> for TitleRecord {
    fn from(row: Title) -> Self {
        TitleRecord {
            id: row.id,
            name: row.name,
            description: row.description,
            color: row.color,
        }
    }
}

/// DTO for creating a title (seeding and admin tooling).
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTitle {
    pub name: String,
    pub description: Option<String>,
    pub color: Option<String>,
}
