//! HTTP transport shared by the REST adapters.
//!
//! Retry and timeout policy lives here, below the capability adapters.
//! Responses with a 5xx status, 429 responses and retryable transport
//! failures are re-sent with exponential backoff until the attempt budget
//! runs out; a 429 carrying a `Retry-After` header is honored up to the
//! computed backoff ceiling.

use std::time::Duration;

use profilekit_domain::constants::{
    DEFAULT_HTTP_BACKOFF_MS, DEFAULT_HTTP_MAX_ATTEMPTS, DEFAULT_HTTP_TIMEOUT_SECS,
};
use profilekit_domain::ProfileKitError;
use reqwest::header::{HeaderMap, HeaderValue, RETRY_AFTER};
use reqwest::{Client as ReqwestClient, Method, RequestBuilder, Response, StatusCode};
use tracing::debug;

// Upper bound on any single backoff pause, Retry-After included.
const MAX_BACKOFF: Duration = Duration::from_secs(30);

/// Retrying wrapper around a shared `reqwest` client.
#[derive(Clone)]
pub struct HttpClient {
    client: ReqwestClient,
    max_attempts: usize,
    base_backoff: Duration,
}

impl HttpClient {
    pub fn builder() -> HttpClientBuilder {
        HttpClientBuilder::default()
    }

    /// Request builder on the underlying client; default headers apply.
    pub fn request<U>(&self, method: Method, url: U) -> RequestBuilder
    where
        U: reqwest::IntoUrl,
    {
        self.client.request(method, url)
    }

    /// Send `builder`, re-sending on retryable outcomes until the attempt
    /// budget is spent. The last response is returned as-is; status
    /// classification is the caller's job.
    pub async fn send(&self, builder: RequestBuilder) -> Result<Response, ProfileKitError> {
        let budget = self.max_attempts.max(1);

        for attempt in 1..=budget {
            let request = builder
                .try_clone()
                .ok_or_else(|| {
                    ProfileKitError::Internal(
                        "streaming request bodies cannot be retried".into(),
                    )
                })?
                .build()
                .map_err(|err| ProfileKitError::Network(err.to_string()))?;

            debug!(attempt, budget, method = %request.method(), url = %request.url(), "dispatching request");

            match self.client.execute(request).await {
                Ok(response) if retryable_status(response.status()) && attempt < budget => {
                    let pause = self.pause_before_retry(attempt, &response);
                    debug!(attempt, status = %response.status(), pause_ms = pause.as_millis() as u64, "retrying response");
                    tokio::time::sleep(pause).await;
                }
                Ok(response) => return Ok(response),
                Err(err) if transient(&err) && attempt < budget => {
                    let pause = self.backoff(attempt);
                    debug!(attempt, error = %err, pause_ms = pause.as_millis() as u64, "retrying transport failure");
                    tokio::time::sleep(pause).await;
                }
                Err(err) => return Err(ProfileKitError::Network(err.to_string())),
            }
        }

        // The final attempt always returns above; budget is at least one.
        Err(ProfileKitError::Internal("attempt budget spent without an outcome".into()))
    }

    /// Exponential backoff, doubling per retry, capped at [`MAX_BACKOFF`].
    fn backoff(&self, retries_so_far: usize) -> Duration {
        let exponent = retries_so_far.saturating_sub(1).min(8) as u32;
        self.base_backoff
            .saturating_mul(1 << exponent)
            .min(MAX_BACKOFF)
    }

    /// Backoff for a retryable response, stretched to a rate limiter's
    /// `Retry-After` when the header asks for longer.
    fn pause_before_retry(&self, retries_so_far: usize, response: &Response) -> Duration {
        let backoff = self.backoff(retries_so_far);
        match retry_after_seconds(response) {
            Some(secs) => backoff.max(Duration::from_secs(secs)).min(MAX_BACKOFF),
            None => backoff,
        }
    }
}

fn retryable_status(status: StatusCode) -> bool {
    status.is_server_error() || status == StatusCode::TOO_MANY_REQUESTS
}

fn transient(err: &reqwest::Error) -> bool {
    err.is_timeout() || err.is_connect() || err.is_request()
}

fn retry_after_seconds(response: &Response) -> Option<u64> {
    response
        .headers()
        .get(RETRY_AFTER)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.parse().ok())
}

/// Builder for [`HttpClient`].
#[derive(Debug)]
pub struct HttpClientBuilder {
    timeout: Duration,
    max_attempts: usize,
    base_backoff: Duration,
    default_headers: HeaderMap,
}

impl Default for HttpClientBuilder {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
            max_attempts: DEFAULT_HTTP_MAX_ATTEMPTS,
            base_backoff: Duration::from_millis(DEFAULT_HTTP_BACKOFF_MS),
            default_headers: HeaderMap::new(),
        }
    }
}

impl HttpClientBuilder {
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn base_backoff(mut self, base_backoff: Duration) -> Self {
        self.base_backoff = base_backoff;
        self
    }

    /// Header sent on every request (the backend's `apikey`).
    pub fn default_header(
        mut self,
        name: &'static str,
        value: &str,
    ) -> Result<Self, ProfileKitError> {
        let value = HeaderValue::from_str(value)
            .map_err(|err| ProfileKitError::Config(format!("invalid header value: {err}")))?;
        self.default_headers.insert(name, value);
        Ok(self)
    }

    pub fn build(self) -> Result<HttpClient, ProfileKitError> {
        let client = ReqwestClient::builder()
            .timeout(self.timeout)
            .default_headers(self.default_headers)
            .build()
            .map_err(|err| ProfileKitError::Config(format!("failed to build HTTP client: {err}")))?;

        Ok(HttpClient { client, max_attempts: self.max_attempts, base_backoff: self.base_backoff })
    }
}
