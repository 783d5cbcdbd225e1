//! Request payloads that carry user input into the catalog, and the rules
//! they must satisfy before anything is written.
//!
//! Field-level rules use `validator` derives; cross-field rules are checked
//! in the `into_*` conversions.

use serde::Deserialize;
use validator::{Validate, ValidateEmail};

use crate::catalog::normalize_username;
use crate::error::CoreError;
use crate::models::{NewAccount, ProfileChanges, ProfileLink, Project};
use crate::types::DbId;

/// Maximum length of a profile's short bio, in characters.
pub const SHORT_BIO_MAX_LEN: u64 = 250;

/// Prefix every identity-provider user id carries.
pub const EXTERNAL_ID_PREFIX: &str = "user_";

/// Event type that provisions a catalog account.
pub const USER_CREATED_EVENT: &str = "user.created";

// ---------------------------------------------------------------------------
// Identity-provider webhook
// ---------------------------------------------------------------------------

/// An event delivered by the identity provider's webhook.
///
/// `data` is kept raw because only some event types are parsed.
#[derive(Debug, Deserialize)]
pub struct IdentityEvent {
    #[serde(rename = "type")]
    pub event_type: String,
    #[serde(default)]
    pub data: serde_json::Value,
}

#[derive(Debug, Deserialize)]
pub struct IdentityEmailAddress {
    pub email_address: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct IdentityPhoneNumber {
    #[validate(length(min = 10, max = 20))]
    pub phone_number: String,
}

/// The `data` payload of a `user.created` event.
#[derive(Debug, Deserialize, Validate)]
pub struct IdentityUser {
    pub id: String,
    #[validate(length(min = 2, max = 100))]
    pub first_name: String,
    #[validate(length(min = 2, max = 100))]
    pub last_name: String,
    #[validate(length(min = 2, message = "Username missing"))]
    pub username: String,
    pub email_addresses: Vec<IdentityEmailAddress>,
    #[serde(default)]
    #[validate(nested)]
    pub phone_numbers: Vec<IdentityPhoneNumber>,
}

impl IdentityUser {
    /// Validate and convert into the provisioning input.
    ///
    /// The first email address and first phone number are the ones kept.
    pub fn into_new_account(self) -> Result<NewAccount, CoreError> {
        self.validate()?;

        if !self.id.starts_with(EXTERNAL_ID_PREFIX) {
            return Err(CoreError::Validation(format!(
                "id: must start with '{EXTERNAL_ID_PREFIX}'"
            )));
        }

        let email = self
            .email_addresses
            .first()
            .map(|e| e.email_address.clone())
            .ok_or_else(|| {
                CoreError::Validation("email_addresses: at least one is required".into())
            })?;
        if let Some(bad) = self
            .email_addresses
            .iter()
            .find(|e| !e.email_address.validate_email())
        {
            return Err(CoreError::Validation(format!(
                "email_addresses: '{}' is not a valid email address",
                bad.email_address
            )));
        }

        Ok(NewAccount {
            email,
            first_name: self.first_name,
            last_name: self.last_name,
            username: normalize_username(&self.username),
            phone: self.phone_numbers.into_iter().next().map(|p| p.phone_number),
            external_id: Some(self.id),
        })
    }
}

// ---------------------------------------------------------------------------
// Profile settings
// ---------------------------------------------------------------------------

/// Body of a profile-settings update. Absent fields are left unchanged.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct ProfileUpdate {
    #[validate(length(min = 2, message = "First name must be at least 2 characters."))]
    pub first_name: Option<String>,
    #[validate(length(min = 2, message = "Last name must be at least 2 characters."))]
    pub last_name: Option<String>,
    #[validate(email(message = "Please enter a valid email address."))]
    pub email: Option<String>,
    /// Comma-separated, e.g. `"+1234567890, +1987654321"`.
    pub phone_numbers: Option<String>,
    pub title_id: Option<DbId>,
    #[validate(length(max = SHORT_BIO_MAX_LEN))]
    pub short_bio: Option<String>,
    #[validate(url)]
    pub profile_image: Option<String>,
    pub links: Option<Vec<ProfileLink>>,
    pub projects: Option<Vec<Project>>,
}

impl ProfileUpdate {
    /// Validate and convert into store-level changes.
    ///
    /// Does not check that `title_id` exists; that needs the store.
    /// Names and email are trimmed before the rules are checked, so the
    /// stored values are the validated ones.
    pub fn into_changes(mut self) -> Result<ProfileChanges, CoreError> {
        trim_field(&mut self.first_name);
        trim_field(&mut self.last_name);
        trim_field(&mut self.email);
        self.validate()?;

        if let Some(projects) = &self.projects {
            validate_project_timelines(projects)?;
        }

        Ok(ProfileChanges {
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone_numbers: self.phone_numbers.as_deref().map(split_phone_numbers),
            title_id: self.title_id,
            short_bio: self.short_bio,
            profile_image: self.profile_image,
            links: self.links,
            projects: self.projects,
        })
    }
}

fn trim_field(field: &mut Option<String>) {
    if let Some(value) = field {
        let trimmed = value.trim();
        if trimmed.len() != value.len() {
            *value = trimmed.to_string();
        }
    }
}

/// Split a comma-separated phone list, trimming entries and dropping empties.
pub fn split_phone_numbers(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Every project's timeline must have `start <= end`.
pub fn validate_project_timelines(projects: &[Project]) -> Result<(), CoreError> {
    match projects.iter().find(|p| p.timeline.start > p.timeline.end) {
        Some(p) => Err(CoreError::Validation(format!(
            "projects: '{}' ends before it starts",
            p.title
        ))),
        None => Ok(()),
    }
}
