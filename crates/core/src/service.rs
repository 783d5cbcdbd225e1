//! Catalog operations built on the [`CatalogStore`] primitives.
//!
//! Reads never fail for "no match": listings come back empty and single
//! lookups return `None`. The only precondition treated as an error is a
//! missing identity on current-user operations.

use futures::future::try_join_all;

use crate::catalog::{
    apply_search_term, normalize_username, resolve_title_id, CatalogPage, EmptyState,
    ProfileFilter,
};
use crate::error::CoreError;
use crate::identity::Identity;
use crate::models::{EnrichedProfile, NewAccount, Profile, Title};
use crate::store::CatalogStore;
use crate::types::DbId;
use crate::validation::ProfileUpdate;

// ---------------------------------------------------------------------------
// Enrichment
// ---------------------------------------------------------------------------

/// Resolve a profile's title reference. A dangling reference yields `None`.
async fn enrich(store: &dyn CatalogStore, profile: Profile) -> Result<EnrichedProfile, CoreError> {
    let title = match profile.title_id {
        Some(title_id) => {
            let title = store.get_title(title_id).await?;
            if title.is_none() {
                tracing::debug!(
                    profile_id = profile.id,
                    title_id,
                    "Profile references a missing title"
                );
            }
            title
        }
        None => None,
    };
    Ok(profile.enrich(title))
}

/// Enrich every profile, issuing the title lookups concurrently.
async fn enrich_all(
    store: &dyn CatalogStore,
    profiles: Vec<Profile>,
) -> Result<Vec<EnrichedProfile>, CoreError> {
    try_join_all(profiles.into_iter().map(|p| enrich(store, p))).await
}

// ---------------------------------------------------------------------------
// Reads
// ---------------------------------------------------------------------------

/// List profiles matching `filter`, each with its title resolved.
///
/// The title filter is pushed down to the store; the search term is matched
/// case-insensitively against full name and email. Order is the store's.
pub async fn list_profiles(
    store: &dyn CatalogStore,
    filter: &ProfileFilter,
) -> Result<Vec<EnrichedProfile>, CoreError> {
    let candidates = store.list_profiles(filter.title_id).await?;
    let candidate_count = candidates.len();
    let matched = apply_search_term(candidates, filter);

    tracing::debug!(
        search_term = ?filter.search_term,
        title_id = ?filter.title_id,
        candidates = candidate_count,
        matched = matched.len(),
        "Profiles listed"
    );

    enrich_all(store, matched).await
}

/// Look up a profile by username, case-insensitively.
pub async fn get_profile_by_username(
    store: &dyn CatalogStore,
    username: &str,
) -> Result<Option<EnrichedProfile>, CoreError> {
    let normalized = normalize_username(username);
    match store.find_profile_by_username(&normalized).await? {
        Some(profile) => Ok(Some(enrich(store, profile).await?)),
        None => Ok(None),
    }
}

/// The full title directory.
pub async fn list_titles(store: &dyn CatalogStore) -> Result<Vec<Title>, CoreError> {
    store.list_titles().await
}

/// The caller's own profile, looked up by the identity's email.
///
/// Fails with [`CoreError::Unauthenticated`] when there is no identity.
pub async fn get_current_user_profile(
    store: &dyn CatalogStore,
    identity: Option<&Identity>,
) -> Result<Option<EnrichedProfile>, CoreError> {
    let identity = require_identity(identity)?;
    match store.find_profile_by_email(&identity.email).await? {
        Some(profile) => Ok(Some(enrich(store, profile).await?)),
        None => Ok(None),
    }
}

/// Assemble the catalog page: listing, role options and empty-state text.
///
/// `role` is a title name; an unknown or empty role applies no title filter.
pub async fn catalog_page(
    store: &dyn CatalogStore,
    query: Option<&str>,
    role: Option<&str>,
) -> Result<CatalogPage, CoreError> {
    let titles = list_titles(store).await?;
    let title_id = role.and_then(|r| resolve_title_id(&titles, r));

    let filter = ProfileFilter {
        search_term: query.map(str::to_string),
        title_id,
    };
    let profiles = list_profiles(store, &filter).await?;

    let empty_state = profiles.is_empty().then(|| EmptyState::for_query(query));

    Ok(CatalogPage {
        profiles,
        titles,
        empty_state,
    })
}

// ---------------------------------------------------------------------------
// Writes
// ---------------------------------------------------------------------------

/// Create (or find) the catalog account for an identity-provider user.
///
/// Keyed by email; repeated calls return the same account id.
pub async fn provision_account(
    store: &dyn CatalogStore,
    account: &NewAccount,
) -> Result<DbId, CoreError> {
    let account_id = store.provision_account(account).await?;
    tracing::info!(account_id, username = %account.username, "Account provisioned");
    Ok(account_id)
}

/// Apply a settings update to the caller's own profile.
pub async fn update_current_user_profile(
    store: &dyn CatalogStore,
    identity: Option<&Identity>,
    update: ProfileUpdate,
) -> Result<EnrichedProfile, CoreError> {
    let identity = require_identity(identity)?;
    let changes = update.into_changes()?;

    if let Some(title_id) = changes.title_id {
        if store.get_title(title_id).await?.is_none() {
            return Err(CoreError::Validation(format!(
                "title_id: title {title_id} does not exist"
            )));
        }
    }

    let profile = store
        .find_profile_by_email(&identity.email)
        .await?
        .ok_or_else(|| CoreError::NotFoundByKey {
            entity: "Profile",
            key: identity.email.clone(),
        })?;

    let updated = store
        .update_profile(profile.id, &changes)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Profile",
            id: profile.id,
        })?;

    tracing::info!(profile_id = updated.id, "Profile updated");

    enrich(store, updated).await
}

fn require_identity(identity: Option<&Identity>) -> Result<&Identity, CoreError> {
    identity.ok_or_else(|| CoreError::Unauthenticated("No identity present".into()))
}
