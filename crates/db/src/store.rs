//! PostgreSQL implementation of [`CatalogStore`].

use async_trait::async_trait;
use catalog_core::error::CoreError;
use catalog_core::models::{NewAccount, Profile, ProfileChanges, Title};
use catalog_core::store::CatalogStore;
use catalog_core::types::DbId;

use crate::repositories::{AccountRepo, ProfileRepo, TitleRepo};
use crate::DbPool;

/// PostgreSQL error code for unique constraint violations.
const UNIQUE_VIOLATION: &str = "23505";

/// Catalog store over a PostgreSQL pool. Cheap to clone.
#[derive(Debug, Clone)]
pub struct PgCatalogStore {
    pool: DbPool,
}

impl PgCatalogStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

/// Map a sqlx error onto the domain taxonomy.
///
/// Unique violations become [`CoreError::Conflict`] naming the constraint;
/// everything else is logged and reported as [`CoreError::Internal`].
fn classify(err: sqlx::Error) -> CoreError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.code().as_deref() == Some(UNIQUE_VIOLATION) {
            let constraint = db_err.constraint().unwrap_or("unknown");
            return CoreError::Conflict(format!(
                "Duplicate value violates unique constraint: {constraint}"
            ));
        }
    }
    tracing::error!(error = %err, "Database error");
    CoreError::Internal(format!("database error: {err}"))
}

#[async_trait]
impl CatalogStore for PgCatalogStore {
    async fn ping(&self) -> Result<(), CoreError> {
        crate::health_check(&self.pool).await.map_err(classify)
    }

    async fn get_title(&self, id: DbId) -> Result<Option<Title>, CoreError> {
        let row = TitleRepo::find_by_id(&self.pool, id).await.map_err(classify)?;
        Ok(row.map(Title::from))
    }

    async fn list_titles(&self) -> Result<Vec<Title>, CoreError> {
        let rows = TitleRepo::list(&self.pool).await.map_err(classify)?;
        Ok(rows.into_iter().map(Title::from).collect())
    }

    async fn list_profiles(&self, title_id: Option<DbId>) -> Result<Vec<Profile>, CoreError> {
        let rows = ProfileRepo::list(&self.pool, title_id)
            .await
            .map_err(classify)?;
        Ok(rows.into_iter().map(Profile::from).collect())
    }

    async fn find_profile_by_username(
        &self,
        username: &str,
    ) -> Result<Option<Profile>, CoreError> {
        let row = ProfileRepo::find_by_username(&self.pool, username)
            .await
            .map_err(classify)?;
        Ok(row.map(Profile::from))
    }

    async fn find_profile_by_email(&self, email: &str) -> Result<Option<Profile>, CoreError> {
        let row = ProfileRepo::find_by_email(&self.pool, email)
            .await
            .map_err(classify)?;
        Ok(row.map(Profile::from))
    }

    async fn provision_account(&self, account: &NewAccount) -> Result<DbId, CoreError> {
        AccountRepo::provision(&self.pool, account)
            .await
            .map_err(classify)
    }

    async fn update_profile(
        &self,
        id: DbId,
        changes: &ProfileChanges,
    ) -> Result<Option<Profile>, CoreError> {
        let row = ProfileRepo::update(&self.pool, id, changes)
            .await
            .map_err(classify)?;
        Ok(row.map(Profile::from))
    }
}
