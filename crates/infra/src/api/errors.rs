//! API-specific error types
//!
//! Classifies HTTP outcomes once, then converts into the capability-specific
//! domain error at each adapter boundary.

use profilekit_domain::ProfileKitError;
use reqwest::StatusCode;
use thiserror::Error;

/// API operation errors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Rate limit exceeded: {0}")]
    RateLimit(String),

    #[error("Server error: {0}")]
    Server(String),

    #[error("Client error: {0}")]
    Client(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ApiError {
    /// Classify a non-success HTTP status.
    pub fn from_status(status: StatusCode, url: &str, body: String) -> Self {
        let message = if body.is_empty() {
            format!("{url} returned status {status}")
        } else {
            format!("{url} returned status {status}: {body}")
        };

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            Self::Auth(message)
        } else if status == StatusCode::TOO_MANY_REQUESTS {
            Self::RateLimit(message)
        } else if status.is_server_error() {
            Self::Server(message)
        } else if status.is_client_error() {
            Self::Client(message)
        } else {
            Self::Network(message)
        }
    }

    /// Convert into the table capability's domain error.
    pub fn into_table_error(self) -> ProfileKitError {
        match self {
            Self::Auth(message) => ProfileKitError::Auth(message),
            Self::Config(message) => ProfileKitError::Config(message),
            Self::Network(message) => ProfileKitError::Network(message),
            Self::RateLimit(message) | Self::Server(message) | Self::Client(message) => {
                ProfileKitError::Table(message)
            }
        }
    }

    /// Convert into the storage capability's domain error.
    pub fn into_storage_error(self) -> ProfileKitError {
        match self {
            Self::Auth(message) => ProfileKitError::Auth(message),
            Self::Config(message) => ProfileKitError::Config(message),
            Self::Network(message) => ProfileKitError::Network(message),
            Self::RateLimit(message) | Self::Server(message) | Self::Client(message) => {
                ProfileKitError::Storage(message)
            }
        }
    }

    /// Convert into the auth capability's domain error.
    pub fn into_auth_error(self) -> ProfileKitError {
        match self {
            Self::Auth(message) | Self::Client(message) => ProfileKitError::Auth(message),
            Self::Config(message) => ProfileKitError::Config(message),
            Self::Network(message) | Self::RateLimit(message) | Self::Server(message) => {
                ProfileKitError::Network(message)
            }
        }
    }
}

impl From<ProfileKitError> for ApiError {
    fn from(err: ProfileKitError) -> Self {
        match err {
            ProfileKitError::Auth(message) => Self::Auth(message),
            ProfileKitError::Config(message) => Self::Config(message),
            err => Self::Network(err.to_string()),
        }
    }
}
