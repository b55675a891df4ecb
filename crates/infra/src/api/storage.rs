//! Blob storage capability adapter: avatar download and upload.
//!
//! Objects are addressed as `{bucket}/{path}`; the bucket is fixed at
//! construction time. Uploads refuse to overwrite (`x-upsert: false`) since
//! every path carries a fresh random token.

use std::time::Duration;

use async_trait::async_trait;
use profilekit_core::{AvatarStore, SessionHolder};
use profilekit_domain::constants::OCTET_STREAM;
use profilekit_domain::{AvatarImage, BackendConfig, Result};
use reqwest::header::CONTENT_TYPE;
use reqwest::Method;
use tracing::{debug, instrument};

use super::errors::ApiError;
use super::{normalize_base_url, require_identity};
use crate::http::HttpClient;

/// REST implementation of the blob storage capability.
pub struct RestObjectStore {
    http: HttpClient,
    base_url: String,
    bucket: String,
    session: SessionHolder,
}

impl RestObjectStore {
    /// Create a store for `bucket`, reading its bearer token from `session`.
    pub fn new(
        config: &BackendConfig,
        bucket: impl Into<String>,
        session: SessionHolder,
    ) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .default_header("apikey", &config.anon_key)?
            .build()?;

        Ok(Self {
            http,
            base_url: normalize_base_url(&config.base_url),
            bucket: bucket.into(),
            session,
        })
    }

    fn object_url(&self, path: &str) -> String {
        format!("{}/storage/v1/object/{}/{path}", self.base_url, self.bucket)
    }
}

#[async_trait]
impl AvatarStore for RestObjectStore {
    #[instrument(skip(self))]
    async fn download(&self, path: &str) -> Result<AvatarImage> {
        let identity = require_identity(&self.session).map_err(ApiError::into_storage_error)?;

        let url = self.object_url(path);
        let request = self
            .http
            .request(Method::GET, &url)
            .header("Authorization", format!("Bearer {}", identity.access_token));

        let response = self
            .http
            .send(request)
            .await
            .map_err(|err| ApiError::from(err).into_storage_error())?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::from_status(status, &url, body).into_storage_error());
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or(OCTET_STREAM)
            .to_string();

        let bytes = response
            .bytes()
            .await
            .map_err(|err| ApiError::Network(err.to_string()).into_storage_error())?;

        debug!(path, size = bytes.len(), "blob downloaded");
        Ok(AvatarImage::new(bytes.to_vec(), content_type))
    }

    #[instrument(skip(self, image), fields(size = image.bytes.len()))]
    async fn upload(&self, path: &str, image: AvatarImage) -> Result<()> {
        let identity = require_identity(&self.session).map_err(ApiError::into_storage_error)?;

        let url = self.object_url(path);
        let request = self
            .http
            .request(Method::POST, &url)
            .header("Authorization", format!("Bearer {}", identity.access_token))
            .header(CONTENT_TYPE, &image.content_type)
            .header("x-upsert", "false")
            .body(image.bytes);

        let response = self
            .http
            .send(request)
            .await
            .map_err(|err| ApiError::from(err).into_storage_error())?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::from_status(status, &url, body).into_storage_error());
        }

        debug!(path, "blob uploaded");
        Ok(())
    }
}
