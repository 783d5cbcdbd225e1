//! Storage seam for the catalog.
//!
//! Backends expose a handful of primitives (point get, indexed lookup,
//! collect-all with an optional equality filter, and two writes). All
//! filtering beyond title equality and all enrichment happen in
//! [`crate::service`] on top of these.

use async_trait::async_trait;

use crate::error::CoreError;
use crate::models::{NewAccount, Profile, ProfileChanges, Title};
use crate::types::DbId;

#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Whether the backing storage is reachable.
    async fn ping(&self) -> Result<(), CoreError> {
        Ok(())
    }

    /// Point lookup of a title.
    async fn get_title(&self, id: DbId) -> Result<Option<Title>, CoreError>;

    /// Every title, in the store's natural order.
    async fn list_titles(&self) -> Result<Vec<Title>, CoreError>;

    /// Every profile, or only those whose `title_id` equals `title_id`.
    async fn list_profiles(&self, title_id: Option<DbId>) -> Result<Vec<Profile>, CoreError>;

    /// Lookup by username. `username` is already lowercased.
    async fn find_profile_by_username(&self, username: &str)
        -> Result<Option<Profile>, CoreError>;

    async fn find_profile_by_email(&self, email: &str) -> Result<Option<Profile>, CoreError>;

    /// Create the account for `account.email` if missing and make sure a
    /// profile exists and is linked to it. Returns the account id.
    ///
    /// Calling this again with the same email returns the existing id and
    /// changes nothing.
    async fn provision_account(&self, account: &NewAccount) -> Result<DbId, CoreError>;

    /// Apply `changes` to the profile. `None` if the profile does not exist.
    async fn update_profile(
        &self,
        id: DbId,
        changes: &ProfileChanges,
    ) -> Result<Option<Profile>, CoreError>;
}
