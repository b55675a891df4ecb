//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

/// Table holding one profile row per authenticated identity.
pub const PROFILES_TABLE: &str = "profiles";

/// Object-storage bucket holding avatar blobs.
pub const AVATARS_BUCKET: &str = "avatars";

// Transport defaults
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_HTTP_MAX_ATTEMPTS: usize = 3;
pub const DEFAULT_HTTP_BACKOFF_MS: u64 = 200;

// Environment variable names consumed by the config loader
pub const ENV_BASE_URL: &str = "PROFILEKIT_BASE_URL";
pub const ENV_ANON_KEY: &str = "PROFILEKIT_ANON_KEY";
pub const ENV_HTTP_TIMEOUT_SECS: &str = "PROFILEKIT_HTTP_TIMEOUT_SECS";
pub const ENV_AVATAR_BUCKET: &str = "PROFILEKIT_AVATAR_BUCKET";

/// Fallback content type for uploads whose extension is not recognised.
pub const OCTET_STREAM: &str = "application/octet-stream";
