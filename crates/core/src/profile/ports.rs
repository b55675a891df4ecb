//! Port interface for profile persistence
//!
//! This trait defines the boundary between the synchronizer and the
//! infrastructure implementation of the table capability.

use async_trait::async_trait;
use profilekit_domain::{Profile, Result};

/// Trait for profile row persistence and retrieval
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Fetch the single profile row keyed by `user_id`.
    ///
    /// A missing row is `Ok(None)`, not an error; whether that is worth a
    /// warning is the caller's decision.
    async fn fetch(&self, user_id: &str) -> Result<Option<Profile>>;

    /// Insert-or-overwrite the row keyed by `profile.id`.
    async fn upsert(&self, profile: Profile) -> Result<()>;
}
