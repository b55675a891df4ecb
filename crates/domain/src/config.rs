//! Configuration structures
//!
//! Plain data; loading (environment probing, file fallback) lives in the
//! infra crate.

use serde::{Deserialize, Serialize};

use crate::constants::{AVATARS_BUCKET, DEFAULT_HTTP_TIMEOUT_SECS};

/// Top-level application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    pub backend: BackendConfig,
    #[serde(default)]
    pub avatars: AvatarConfig,
}

/// Connection settings for the hosted backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Base URL of the backend project (e.g. "https://xyz.supabase.co")
    pub base_url: String,
    /// Publishable API key sent as the `apikey` header on every request
    pub anon_key: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_seconds: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            anon_key: String::new(),
            timeout_seconds: DEFAULT_HTTP_TIMEOUT_SECS,
        }
    }
}

/// Avatar storage settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvatarConfig {
    /// Bucket holding avatar blobs
    pub bucket: String,
}

impl Default for AvatarConfig {
    fn default() -> Self {
        Self { bucket: AVATARS_BUCKET.to_string() }
    }
}

fn default_timeout_secs() -> u64 {
    DEFAULT_HTTP_TIMEOUT_SECS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_optional_sections() {
        let config: Config = serde_json::from_str(
            r#"{"backend": {"base_url": "https://example.test", "anon_key": "anon"}}"#,
        )
        .unwrap();

        assert_eq!(config.backend.timeout_seconds, DEFAULT_HTTP_TIMEOUT_SECS);
        assert_eq!(config.avatars.bucket, AVATARS_BUCKET);
    }
}
