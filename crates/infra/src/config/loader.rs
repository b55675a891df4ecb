//! Configuration loading: environment first, config file second.
//!
//! A `.env` file, when present, seeds the process environment via `dotenvy`
//! before anything is read. `PROFILEKIT_BASE_URL` and `PROFILEKIT_ANON_KEY`
//! are the required variables; `PROFILEKIT_HTTP_TIMEOUT_SECS` and
//! `PROFILEKIT_AVATAR_BUCKET` override defaults. When the environment is
//! incomplete the loader probes `config.{json,toml}` and
//! `profilekit.{json,toml}` in the working directory and its parent.

use std::path::{Path, PathBuf};

use profilekit_domain::constants::{
    AVATARS_BUCKET, DEFAULT_HTTP_TIMEOUT_SECS, ENV_ANON_KEY, ENV_AVATAR_BUCKET, ENV_BASE_URL,
    ENV_HTTP_TIMEOUT_SECS,
};
use profilekit_domain::{AvatarConfig, BackendConfig, Config, ProfileKitError, Result};

/// Load configuration from the environment, falling back to a probed
/// config file.
///
/// # Errors
///
/// Returns a configuration error when neither source yields a complete configuration.
pub fn load() -> Result<Config> {
    // Best-effort .env seeding; a missing file is not an error.
    let _ = dotenvy::dotenv();

    match load_from_env() {
        Ok(config) => {
            tracing::info!("configuration loaded from environment");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "environment incomplete, probing config files");
            load_from_file(None)
        }
    }
}

/// Load configuration from environment variables alone.
///
/// # Errors
///
/// Returns a configuration error when a required variable is missing or a value does
/// not parse.
pub fn load_from_env() -> Result<Config> {
    let base_url = env_var(ENV_BASE_URL)?;
    let anon_key = env_var(ENV_ANON_KEY)?;

    let timeout_seconds = match std::env::var(ENV_HTTP_TIMEOUT_SECS) {
        Ok(raw) => raw
            .parse::<u64>()
            .map_err(|e| ProfileKitError::Config(format!("Invalid timeout: {e}")))?,
        Err(_) => DEFAULT_HTTP_TIMEOUT_SECS,
    };

    let bucket =
        std::env::var(ENV_AVATAR_BUCKET).unwrap_or_else(|_| AVATARS_BUCKET.to_string());

    Ok(Config {
        backend: BackendConfig { base_url, anon_key, timeout_seconds },
        avatars: AvatarConfig { bucket },
    })
}

/// Load configuration from `path`, or from the first probed location when
/// `path` is `None`. The format (JSON or TOML) follows the file extension.
///
/// # Errors
///
/// Returns a configuration error when no file is found or the content does not parse.
pub fn load_from_file(path: Option<&Path>) -> Result<Config> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => probe_config_paths().ok_or_else(|| {
            ProfileKitError::Config("No configuration file found".to_string())
        })?,
    };

    let content = std::fs::read_to_string(&path).map_err(|e| {
        ProfileKitError::Config(format!("Failed to read {}: {e}", path.display()))
    })?;

    let config = match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => serde_json::from_str(&content)
            .map_err(|e| ProfileKitError::Config(format!("Invalid JSON config: {e}")))?,
        Some("toml") => toml::from_str(&content)
            .map_err(|e| ProfileKitError::Config(format!("Invalid TOML config: {e}")))?,
        other => {
            return Err(ProfileKitError::Config(format!(
                "Unsupported config format: {other:?}"
            )));
        }
    };

    tracing::info!(path = %path.display(), "Configuration loaded from file");
    Ok(config)
}

fn probe_config_paths() -> Option<PathBuf> {
    const NAMES: [&str; 4] = ["config.json", "config.toml", "profilekit.json", "profilekit.toml"];

    for dir in [".", ".."] {
        for name in NAMES {
            let candidate = Path::new(dir).join(name);
            if candidate.is_file() {
                return Some(candidate);
            }
        }
    }
    None
}

fn env_var(name: &str) -> Result<String> {
    std::env::var(name)
        .map_err(|_| ProfileKitError::Config(format!("Missing environment variable: {name}")))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn json_file_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(
            file,
            r#"{{"backend": {{"base_url": "https://example.test", "anon_key": "anon", "timeout_seconds": 10}}}}"#
        )
        .unwrap();

        let config = load_from_file(Some(&path)).unwrap();
        assert_eq!(config.backend.base_url, "https://example.test");
        assert_eq!(config.backend.timeout_seconds, 10);
        assert_eq!(config.avatars.bucket, AVATARS_BUCKET);
    }

    #[test]
    fn toml_file_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(
            file,
            "[backend]\nbase_url = \"https://example.test\"\nanon_key = \"anon\"\n\n[avatars]\nbucket = \"portraits\"\n"
        )
        .unwrap();

        let config = load_from_file(Some(&path)).unwrap();
        assert_eq!(config.avatars.bucket, "portraits");
        assert_eq!(config.backend.timeout_seconds, DEFAULT_HTTP_TIMEOUT_SECS);
    }

    #[test]
    fn unknown_extension_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "backend: {}").unwrap();

        let err = load_from_file(Some(&path)).unwrap_err();
        assert!(matches!(err, ProfileKitError::Config(_)));
    }

    #[test]
    fn missing_file_is_a_config_error() {
        let err = load_from_file(Some(Path::new("/nonexistent/config.json"))).unwrap_err();
        assert!(matches!(err, ProfileKitError::Config(_)));
    }
}
