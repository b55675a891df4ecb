//! Auth capability adapter: magic-link sign-in and sign-out.
//!
//! The gateway owns the session write side. A successful magic-link request
//! only means the email went out; the session itself is established when the
//! shell hands the redirect's identity to [`RestAuthGateway::accept_session`],
//! and it is cleared again after sign-out.

use std::time::Duration;

use async_trait::async_trait;
use profilekit_core::{session_channel, AuthGateway, SessionHolder, SessionWriter};
use profilekit_domain::{BackendConfig, Identity, Result};
use reqwest::Method;
use serde_json::json;
use tracing::{info, instrument};

use super::errors::ApiError;
use super::{normalize_base_url, require_identity};
use crate::http::HttpClient;

/// REST implementation of the auth capability.
pub struct RestAuthGateway {
    http: HttpClient,
    base_url: String,
    session: SessionWriter,
}

impl RestAuthGateway {
    /// Create the gateway together with the read side of its session state.
    ///
    /// # Errors
    ///
    /// Returns `Config` if the anon key is not a valid header value or the
    /// HTTP client cannot be built.
    pub fn new(config: &BackendConfig) -> Result<(Self, SessionHolder)> {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .default_header("apikey", &config.anon_key)?
            .build()?;

        let (writer, holder) = session_channel();
        let gateway =
            Self { http, base_url: normalize_base_url(&config.base_url), session: writer };
        Ok((gateway, holder))
    }

    /// Publish the identity carried by a followed magic link.
    pub fn accept_session(&self, identity: Identity) {
        self.session.establish(identity);
    }

    /// A read handle onto the session state this gateway maintains.
    pub fn holder(&self) -> SessionHolder {
        self.session.holder()
    }
}

#[async_trait]
impl AuthGateway for RestAuthGateway {
    #[instrument(skip(self))]
    async fn sign_in_with_magic_link(&self, email: &str) -> Result<()> {
        let url = format!("{}/auth/v1/otp", self.base_url);
        let body = json!({ "email": email, "create_user": true });

        let request = self.http.request(Method::POST, &url).json(&body);
        let response = self
            .http
            .send(request)
            .await
            .map_err(|err| ApiError::from(err).into_auth_error())?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::from_status(status, &url, body).into_auth_error());
        }

        info!("magic link requested");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn sign_out(&self) -> Result<()> {
        let identity =
            require_identity(&self.session.holder()).map_err(ApiError::into_auth_error)?;

        let url = format!("{}/auth/v1/logout", self.base_url);
        let request = self
            .http
            .request(Method::POST, &url)
            .header("Authorization", format!("Bearer {}", identity.access_token));

        let response = self
            .http
            .send(request)
            .await
            .map_err(|err| ApiError::from(err).into_auth_error())?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::from_status(status, &url, body).into_auth_error());
        }

        self.session.clear();
        info!("session terminated");
        Ok(())
    }
}
