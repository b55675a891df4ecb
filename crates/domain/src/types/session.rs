//! Session types
//!
//! The authenticated identity established by the auth collaborator.

use serde::{Deserialize, Serialize};

/// The currently authenticated user.
///
/// Created on successful authentication, destroyed on sign-out, immutable in
/// between. The access token is opaque to this library; it is forwarded
/// as-is to the backend on every request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Backend user id; also the profile row key
    pub user_id: String,
    /// Email address the magic link was sent to
    pub email: String,
    /// Opaque bearer token for the current session
    pub access_token: String,
}

impl Identity {
    pub fn new(
        user_id: impl Into<String>,
        email: impl Into<String>,
        access_token: impl Into<String>,
    ) -> Self {
        Self { user_id: user_id.into(), email: email.into(), access_token: access_token.into() }
    }
}
