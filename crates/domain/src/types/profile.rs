//! Profile types
//!
//! One profile row per identity, keyed by the backend user id.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted profile row.
///
/// Created implicitly on first upsert; mutated only through the profile
/// synchronizer; never deleted by this library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Identity reference; unique key of the row
    pub id: String,
    pub username: Option<String>,
    pub website: Option<String>,
    /// Storage path of the avatar blob, not the blob itself
    pub avatar_path: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    /// Build an upsert record from an identity and the edited fields, stamped
    /// with a fresh update timestamp.
    pub fn from_fields(user_id: impl Into<String>, fields: ProfileFields) -> Self {
        Self {
            id: user_id.into(),
            username: fields.username,
            website: fields.website,
            avatar_path: fields.avatar_path,
            updated_at: Utc::now(),
        }
    }

    /// The editable subset of this row.
    pub fn fields(&self) -> ProfileFields {
        ProfileFields {
            username: self.username.clone(),
            website: self.website.clone(),
            avatar_path: self.avatar_path.clone(),
        }
    }
}

/// The editable subset of a profile.
///
/// Fields may individually be absent or empty; empty strings are persisted
/// as provided, no validation is imposed here.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProfileFields {
    pub username: Option<String>,
    pub website: Option<String>,
    pub avatar_path: Option<String>,
}

impl ProfileFields {
    pub fn new(
        username: Option<String>,
        website: Option<String>,
        avatar_path: Option<String>,
    ) -> Self {
        Self { username, website, avatar_path }
    }

    /// Copy of these fields with a different avatar path.
    pub fn with_avatar_path(mut self, path: impl Into<String>) -> Self {
        self.avatar_path = Some(path.into());
        self
    }
}
