//! Repository for the `accounts` table and account provisioning.

use catalog_core::models::NewAccount;
use catalog_core::types::DbId;
use sqlx::PgPool;

use crate::models::account::Account;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, email, name, phone, external_id, created_at, updated_at";

/// Provides account queries and the provisioning upsert.
pub struct AccountRepo;

impl AccountRepo {
    /// Find an account by email (case-sensitive).
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<Account>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM accounts WHERE email = $1");
        sqlx::query_as::<_, Account>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// Idempotent provisioning keyed by email, in one transaction.
    ///
    /// - An existing account with the email is returned untouched.
    /// - Otherwise the account is inserted, and the profile with the same
    ///   email is linked to it, or created when there is none.
    pub async fn provision(pool: &PgPool, input: &NewAccount) -> Result<DbId, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let inserted: Option<DbId> = sqlx::query_scalar(
            "INSERT INTO accounts (email, name, phone, external_id)
             VALUES ($1, $2, $3, $4)
             ON CONFLICT (email) DO NOTHING
             RETURNING id",
        )
        .bind(&input.email)
        .bind(input.display_name())
        .bind(&input.phone)
        .bind(&input.external_id)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(account_id) = inserted else {
            let existing: DbId = sqlx::query_scalar("SELECT id FROM accounts WHERE email = $1")
                .bind(&input.email)
                .fetch_one(&mut *tx)
                .await?;
            tx.commit().await?;
            return Ok(existing);
        };

        let linked = sqlx::query("UPDATE profiles SET user_id = $1 WHERE email = $2")
            .bind(account_id)
            .bind(&input.email)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        if linked == 0 {
            let phone_numbers: Vec<String> = input.phone.iter().cloned().collect();
            sqlx::query(
                "INSERT INTO profiles
                    (user_id, first_name, last_name, email, username, phone_numbers)
                 VALUES ($1, $2, $3, $4, $5, $6)",
            )
            .bind(account_id)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.email)
            .bind(&input.username)
            .bind(&phone_numbers)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        tracing::debug!(account_id, linked_existing = linked > 0, "Account row written");
        Ok(account_id)
    }
}
