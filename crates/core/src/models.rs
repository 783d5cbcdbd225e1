//! Catalog domain types: titles, profiles and the records nested in them.

use serde::{Deserialize, Serialize};

use crate::types::DbId;

// ---------------------------------------------------------------------------
// Titles
// ---------------------------------------------------------------------------

/// A role/title a profile can be assigned (e.g. "Engineer").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Title {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub color: Option<String>,
}

// ---------------------------------------------------------------------------
// Profiles
// ---------------------------------------------------------------------------

/// An external link shown on a profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileLink {
    /// Kind of link, e.g. `linkedin`, `github`, `website`.
    pub tag: String,
    /// The link target.
    pub value: String,
    /// Display label, e.g. `LinkedIn`.
    pub title: String,
}

/// Start/end of a project, as Unix timestamps in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    pub start: i64,
    pub end: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Photo,
    Pdf,
    Video,
}

/// A media attachment on a project. `metadata` is free-form (url, title,
/// thumbnail, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Media {
    #[serde(rename = "type")]
    pub kind: MediaKind,
    #[serde(default)]
    pub metadata: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub timeline: Timeline,
    pub description: String,
    #[serde(default)]
    pub media: Vec<Media>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<Vec<String>>,
}

/// A stored profile. `title_id` is an unresolved reference into the title
/// directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
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
    pub links: Vec<ProfileLink>,
    pub short_bio: Option<String>,
    pub projects: Vec<Project>,
}

impl Profile {
    /// `"<first> <last>"`, the string the catalog search matches names against.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Replace the title reference with the resolved record.
    pub fn enrich(self, title: Option<Title>) -> EnrichedProfile {
        EnrichedProfile {
            id: self.id,
            user_id: self.user_id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            profile_image: self.profile_image,
            phone_numbers: self.phone_numbers,
            username: self.username,
            title,
            links: self.links,
            short_bio: self.short_bio,
            projects: self.projects,
        }
    }
}

/// A profile with its title reference resolved. `title` is `None` when the
/// profile has no title or the referenced title no longer exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedProfile {
    pub id: DbId,
    pub user_id: Option<DbId>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub profile_image: Option<String>,
    pub phone_numbers: Vec<String>,
    pub username: String,
    pub title: Option<Title>,
    pub links: Vec<ProfileLink>,
    pub short_bio: Option<String>,
    pub projects: Vec<Project>,
}

// ---------------------------------------------------------------------------
// Write-side inputs
// ---------------------------------------------------------------------------

/// Input for provisioning a catalog account from an identity-provider user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAccount {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    /// Already lowercased.
    pub username: String,
    pub phone: Option<String>,
    /// The identity provider's id for this user.
    pub external_id: Option<String>,
}

impl NewAccount {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Input for inserting a profile directly (seeding, tests).
#[derive(Debug, Clone, PartialEq)]
pub struct NewProfile {
    pub user_id: Option<DbId>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub username: String,
    pub phone_numbers: Vec<String>,
    pub title_id: Option<DbId>,
}

impl NewProfile {
    pub fn new(first_name: &str, last_name: &str, email: &str, username: &str) -> Self {
        Self {
            user_id: None,
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: email.to_string(),
            username: username.to_string(),
            phone_numbers: Vec::new(),
            title_id: None,
        }
    }

    pub fn with_title(mut self, title_id: DbId) -> Self {
        self.title_id = Some(title_id);
        self
    }
}

/// A validated partial update of a profile. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileChanges {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone_numbers: Option<Vec<String>>,
    pub title_id: Option<DbId>,
    pub short_bio: Option<String>,
    pub profile_image: Option<String>,
    pub links: Option<Vec<ProfileLink>>,
    pub projects: Option<Vec<Project>>,
}

impl ProfileChanges {
    /// Apply the changes to an in-memory profile.
    pub fn apply_to(&self, profile: &mut Profile) {
        if let Some(v) = &self.first_name {
            profile.first_name = v.clone();
        }
        if let Some(v) = &self.last_name {
            profile.last_name = v.clone();
        }
        if let Some(v) = &self.email {
            profile.email = v.clone();
        }
        if let Some(v) = &self.phone_numbers {
            profile.phone_numbers = v.clone();
        }
        if let Some(v) = self.title_id {
            profile.title_id = Some(v);
        }
        if let Some(v) = &self.short_bio {
            profile.short_bio = Some(v.clone());
        }
        if let Some(v) = &self.profile_image {
            profile.profile_image = Some(v.clone());
        }
        if let Some(v) = &self.links {
            profile.links = v.clone();
        }
        if let Some(v) = &self.projects {
            profile.projects = v.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn media_kind_serializes_lowercase_under_type_key() {
        let media = Media {
            kind: MediaKind::Pdf,
            metadata: serde_json::Map::new(),
        };
        let json = serde_json::to_value(&media).unwrap();
        assert_eq!(json["type"], "pdf");
    }

    #[test]
    fn project_without_link_omits_field() {
        let project: Project = serde_json::from_value(serde_json::json!({
            "title": "Atlas",
            "timeline": { "start": 1, "end": 2 },
            "description": "mapping",
        }))
        .unwrap();
        assert!(project.media.is_empty());
        assert_eq!(project.link, None);
        let json = serde_json::to_value(&project).unwrap();
        assert!(json.get("link").is_none());
    }
}
