//! Repository for the `titles` table.

use catalog_core::types::DbId;
use sqlx::PgPool;

use crate::models::title::{CreateTitle, Title};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, color, created_at, updated_at";

/// Read access to the title directory, plus creation for seeding.
pub struct TitleRepo;

impl TitleRepo {
    /// Insert a new title, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateTitle) -> Result<Title, sqlx::Error> {
        let query = format!(
            "INSERT INTO titles (name, description, color)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Title>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.color)
            .fetch_one(pool)
            .await
    }

    /// Find a title by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Title>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM titles WHERE id = $1");
        sqlx::query_as::<_, Title>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every title in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Title>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM titles ORDER BY id");
        sqlx::query_as::<_, Title>(&query).fetch_all(pool).await
    }
}
