//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for ProfileKit
#[derive(Error, Debug, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum ProfileKitError {
    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Table error: {0}")]
    Table(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// An operation of the same kind is already in flight; the caller must
    /// wait for it to finish rather than queue a second one.
    #[error("Operation in flight: {0}")]
    Busy(String),

    /// The owning scope was torn down while the request was in flight; the
    /// collaborator's response was discarded.
    #[error("Operation cancelled: {0}")]
    Cancelled(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for ProfileKit operations
pub type Result<T> = std::result::Result<T, ProfileKitError>;
