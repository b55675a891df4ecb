//! Table capability adapter: the `profiles` row per identity.
//!
//! Speaks a PostgREST-style surface: filtered selects return a JSON array
//! (empty array, not an error, when no row matches) and upserts are POSTs
//! with merge-duplicates resolution keyed on the row id.

use std::time::Duration;

use async_trait::async_trait;
use profilekit_core::{ProfileRepository, SessionHolder};
use profilekit_domain::constants::PROFILES_TABLE;
use profilekit_domain::{BackendConfig, Profile, Result};
use reqwest::Method;
use tracing::{debug, instrument};

use super::errors::ApiError;
use super::{normalize_base_url, require_identity};
use crate::http::HttpClient;

/// REST implementation of the table capability.
pub struct RestProfileRepository {
    http: HttpClient,
    base_url: String,
    session: SessionHolder,
}

impl RestProfileRepository {
    /// Create a repository reading its bearer token from `session`.
    pub fn new(config: &BackendConfig, session: SessionHolder) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .default_header("apikey", &config.anon_key)?
            .build()?;

        Ok(Self { http, base_url: normalize_base_url(&config.base_url), session })
    }

    fn table_url(&self) -> String {
        format!("{}/rest/v1/{}", self.base_url, PROFILES_TABLE)
    }
}

#[async_trait]
impl ProfileRepository for RestProfileRepository {
    #[instrument(skip(self))]
    async fn fetch(&self, user_id: &str) -> Result<Option<Profile>> {
        let identity = require_identity(&self.session).map_err(ApiError::into_table_error)?;

        let url = format!(
            "{}?select=id,username,website,avatar_path,updated_at&id=eq.{user_id}&limit=1",
            self.table_url()
        );
        let request = self
            .http
            .request(Method::GET, &url)
            .header("Authorization", format!("Bearer {}", identity.access_token));

        let response = self
            .http
            .send(request)
            .await
            .map_err(|err| ApiError::from(err).into_table_error())?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::from_status(status, &url, body).into_table_error());
        }

        let mut rows: Vec<Profile> = response
            .json()
            .await
            .map_err(|err| ApiError::Client(format!("failed to parse rows: {err}")).into_table_error())?;

        debug!(user_id, found = !rows.is_empty(), "profile fetch");
        Ok(rows.pop())
    }

    #[instrument(skip(self, profile), fields(user_id = %profile.id))]
    async fn upsert(&self, profile: Profile) -> Result<()> {
        let identity = require_identity(&self.session).map_err(ApiError::into_table_error)?;

        let url = self.table_url();
        let request = self
            .http
            .request(Method::POST, &url)
            .header("Authorization", format!("Bearer {}", identity.access_token))
            .header("Prefer", "resolution=merge-duplicates,return=minimal")
            .json(&profile);

        let response = self
            .http
            .send(request)
            .await
            .map_err(|err| ApiError::from(err).into_table_error())?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::from_status(status, &url, body).into_table_error());
        }

        debug!("profile upserted");
        Ok(())
    }
}
