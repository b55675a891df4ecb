//! REST adapters for the backend's capability contracts.
//!
//! One adapter per capability: auth (magic-link sign-in, sign-out), table
//! (profile rows), object storage (avatar blobs). All three share the
//! retrying [`HttpClient`](crate::http::HttpClient) and read the bearer
//! token of the current session from the session holder; only the auth
//! adapter writes session state.

pub mod auth;
pub mod errors;
pub mod profiles;
pub mod storage;

pub use auth::RestAuthGateway;
pub use errors::ApiError;
pub use profiles::RestProfileRepository;
pub use storage::RestObjectStore;

use profilekit_core::SessionHolder;
use profilekit_domain::Identity;

/// The identity of the current session, or an auth error if none exists.
pub(crate) fn require_identity(session: &SessionHolder) -> Result<Identity, ApiError> {
    session.current().ok_or_else(|| ApiError::Auth("no active session".into()))
}

/// Base URL with any trailing slash removed, so paths can be appended
/// uniformly.
pub(crate) fn normalize_base_url(base_url: &str) -> String {
    base_url.trim_end_matches('/').to_string()
}
