//! Port interface for the auth collaborator
//!
//! The collaborator owns token issuance and session persistence entirely;
//! this layer only asks it to start a magic-link sign-in or end the current
//! session. Session changes themselves arrive through the [`SessionWriter`]
//! the adapter holds.
//!
//! [`SessionWriter`]: super::holder::SessionWriter

use async_trait::async_trait;
use profilekit_domain::Result;

/// Trait for the external authentication service
#[async_trait]
pub trait AuthGateway: Send + Sync {
    /// Request a one-time sign-in link delivered to `email`.
    ///
    /// Success means the link was sent, not that a session exists yet; the
    /// session is established out-of-band when the link is followed.
    async fn sign_in_with_magic_link(&self, email: &str) -> Result<()>;

    /// Terminate the current session.
    async fn sign_out(&self) -> Result<()>;
}
