//! Catalog search and filter helpers.
//!
//! Pure functions shared by every store backend: username normalization,
//! the search-term predicate, role-name resolution and the empty-state
//! message shown when a listing comes back empty.

use serde::{Deserialize, Deserializer, Serialize};

use crate::models::{EnrichedProfile, Profile, Title};
use crate::types::DbId;

/// Headline shown when a catalog listing is empty.
pub const EMPTY_HEADLINE: &str = "No profiles found.";

/// Detail shown when the catalog itself has no profiles to list.
pub const EMPTY_CATALOG_DETAIL: &str =
    "It looks like there are no professionals in our catalog yet.";

// ---------------------------------------------------------------------------
// Filters
// ---------------------------------------------------------------------------

/// Optional filters for a profile listing. Both absent means "everything".
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ProfileFilter {
    /// Free-text term matched against full name and email.
    #[serde(default, alias = "q")]
    pub search_term: Option<String>,
    /// Exact title id. An empty value (`?title_id=`) means no filter.
    #[serde(default, deserialize_with = "empty_as_none")]
    pub title_id: Option<DbId>,
}

/// Query strings send an unset select as an empty value; treat it as absent.
fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<DbId>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value
            .parse()
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("invalid title_id: {value:?}"))),
    }
}

impl ProfileFilter {
    /// The lowercased search term, or `None` if absent or empty.
    pub fn normalized_term(&self) -> Option<String> {
        self.search_term
            .as_deref()
            .filter(|t| !t.is_empty())
            .map(str::to_lowercase)
    }
}

/// Lowercase a username for lookup against the case-insensitive index.
pub fn normalize_username(username: &str) -> String {
    username.to_lowercase()
}

/// Whether `profile` matches an already-lowercased search term.
///
/// Substring match on the lowercased `"<first> <last>"` or email.
pub fn matches_search_term(profile: &Profile, term_lower: &str) -> bool {
    profile.full_name().to_lowercase().contains(term_lower)
        || profile.email.to_lowercase().contains(term_lower)
}

/// Keep only the profiles matching the filter's search term.
///
/// The title filter is applied by the store; this only handles the text part.
pub fn apply_search_term(profiles: Vec<Profile>, filter: &ProfileFilter) -> Vec<Profile> {
    match filter.normalized_term() {
        Some(term) => profiles
            .into_iter()
            .filter(|p| matches_search_term(p, &term))
            .collect(),
        None => profiles,
    }
}

/// Resolve a human-readable role name to its title id.
///
/// Case-insensitive exact match on `name`. An empty role resolves to `None`.
pub fn resolve_title_id(titles: &[Title], role: &str) -> Option<DbId> {
    if role.is_empty() {
        return None;
    }
    let role_lower = role.to_lowercase();
    titles
        .iter()
        .find(|t| t.name.to_lowercase() == role_lower)
        .map(|t| t.id)
}

// ---------------------------------------------------------------------------
// Catalog page
// ---------------------------------------------------------------------------

/// Message pair rendered in place of an empty listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmptyState {
    pub headline: String,
    pub detail: String,
}

impl EmptyState {
    /// Distinguishes "no results for the query" from "catalog is empty".
    pub fn for_query(query: Option<&str>) -> Self {
        let detail = match query.filter(|q| !q.is_empty()) {
            Some(q) => format!("No results found for \"{q}\""),
            None => EMPTY_CATALOG_DETAIL.to_string(),
        };
        Self {
            headline: EMPTY_HEADLINE.to_string(),
            detail,
        }
    }
}

/// Everything the catalog page renders: the listing, the role options and
/// an empty-state message when the listing is empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogPage {
    pub profiles: Vec<EnrichedProfile>,
    pub titles: Vec<Title>,
    pub empty_state: Option<EmptyState>,
}
