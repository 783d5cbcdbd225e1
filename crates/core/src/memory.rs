//! In-process [`CatalogStore`] backed by vectors behind a lock.
//!
//! Natural order is insertion order. Used by the test suites and for running
//! the API without a database.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::catalog::normalize_username;
use crate::error::CoreError;
use crate::models::{NewAccount, NewProfile, Profile, ProfileChanges, Title};
use crate::store::CatalogStore;
use crate::types::DbId;

/// An account row as the in-memory store keeps it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredAccount {
    pub id: DbId,
    pub email: String,
    pub name: String,
    pub phone: Option<String>,
    pub external_id: Option<String>,
}

#[derive(Debug, Default)]
struct MemoryState {
    titles: Vec<Title>,
    profiles: Vec<Profile>,
    accounts: Vec<StoredAccount>,
    last_id: DbId,
}

impl MemoryState {
    fn next_id(&mut self) -> DbId {
        self.last_id += 1;
        self.last_id
    }

    fn username_taken(&self, username: &str, except: Option<DbId>) -> bool {
        self.profiles
            .iter()
            .any(|p| Some(p.id) != except && p.username.to_lowercase() == username)
    }

    fn email_taken(&self, email: &str, except: Option<DbId>) -> bool {
        self.profiles
            .iter()
            .any(|p| Some(p.id) != except && p.email == email)
    }

    fn push_profile(&mut self, input: NewProfile) -> Result<Profile, CoreError> {
        let username = normalize_username(&input.username);
        if self.username_taken(&username, None) {
            return Err(CoreError::Conflict(format!(
                "username '{username}' is already taken"
            )));
        }
        if self.email_taken(&input.email, None) {
            return Err(CoreError::Conflict(format!(
                "a profile with email '{}' already exists",
                input.email
            )));
        }

        let profile = Profile {
            id: self.next_id(),
            user_id: input.user_id,
            first_name: input.first_name,
            last_name: input.last_name,
            email: input.email,
            profile_image: None,
            phone_numbers: input.phone_numbers,
            username,
            title_id: input.title_id,
            links: Vec::new(),
            short_bio: None,
            projects: Vec::new(),
        };
        self.profiles.push(profile.clone());
        Ok(profile)
    }
}

#[derive(Debug, Default)]
pub struct InMemoryCatalogStore {
    state: RwLock<MemoryState>,
}

impl InMemoryCatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert_title(
        &self,
        name: &str,
        description: Option<&str>,
        color: Option<&str>,
    ) -> Title {
        let mut state = self.state.write().await;
        let title = Title {
            id: state.next_id(),
            name: name.to_string(),
            description: description.map(str::to_string),
            color: color.map(str::to_string),
        };
        state.titles.push(title.clone());
        title
    }

    /// Insert a profile. The username is stored lowercased.
    pub async fn insert_profile(&self, input: NewProfile) -> Result<Profile, CoreError> {
        self.state.write().await.push_profile(input)
    }

    /// Delete a title without touching profiles that reference it.
    pub async fn remove_title(&self, id: DbId) -> bool {
        let mut state = self.state.write().await;
        let before = state.titles.len();
        state.titles.retain(|t| t.id != id);
        state.titles.len() != before
    }

    pub async fn accounts(&self) -> Vec<StoredAccount> {
        self.state.read().await.accounts.clone()
    }
}

#[async_trait]
impl CatalogStore for InMemoryCatalogStore {
    async fn get_title(&self, id: DbId) -> Result<Option<Title>, CoreError> {
        let state = self.state.read().await;
        Ok(state.titles.iter().find(|t| t.id == id).cloned())
    }

    async fn list_titles(&self) -> Result<Vec<Title>, CoreError> {
        Ok(self.state.read().await.titles.clone())
    }

    async fn list_profiles(&self, title_id: Option<DbId>) -> Result<Vec<Profile>, CoreError> {
        let state = self.state.read().await;
        Ok(state
            .profiles
            .iter()
            .filter(|p| title_id.is_none() || p.title_id == title_id)
            .cloned()
            .collect())
    }

    async fn find_profile_by_username(
        &self,
        username: &str,
    ) -> Result<Option<Profile>, CoreError> {
        let state = self.state.read().await;
        Ok(state
            .profiles
            .iter()
            .find(|p| p.username.to_lowercase() == username)
            .cloned())
    }

    async fn find_profile_by_email(&self, email: &str) -> Result<Option<Profile>, CoreError> {
        let state = self.state.read().await;
        Ok(state.profiles.iter().find(|p| p.email == email).cloned())
    }

    async fn provision_account(&self, account: &NewAccount) -> Result<DbId, CoreError> {
        let mut state = self.state.write().await;

        if let Some(existing) = state.accounts.iter().find(|a| a.email == account.email) {
            return Ok(existing.id);
        }

        let account_id = state.next_id();
        state.accounts.push(StoredAccount {
            id: account_id,
            email: account.email.clone(),
            name: account.display_name(),
            phone: account.phone.clone(),
            external_id: account.external_id.clone(),
        });

        let existing = state.profiles.iter().position(|p| p.email == account.email);
        if let Some(idx) = existing {
            state.profiles[idx].user_id = Some(account_id);
        } else {
            let input = NewProfile {
                user_id: Some(account_id),
                first_name: account.first_name.clone(),
                last_name: account.last_name.clone(),
                email: account.email.clone(),
                username: account.username.clone(),
                phone_numbers: account.phone.iter().cloned().collect(),
                title_id: None,
            };
            if let Err(err) = state.push_profile(input) {
                // No account without its profile.
                state.accounts.retain(|a| a.id != account_id);
                return Err(err);
            }
        }

        Ok(account_id)
    }

    async fn update_profile(
        &self,
        id: DbId,
        changes: &ProfileChanges,
    ) -> Result<Option<Profile>, CoreError> {
        let mut state = self.state.write().await;

        if let Some(email) = &changes.email {
            if state.email_taken(email, Some(id)) {
                return Err(CoreError::Conflict(format!(
                    "a profile with email '{email}' already exists"
                )));
            }
        }

        let Some(profile) = state.profiles.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };
        changes.apply_to(profile);
        Ok(Some(profile.clone()))
    }
}
