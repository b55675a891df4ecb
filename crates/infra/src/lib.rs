//! # ProfileKit Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - REST adapters for the auth, table and storage capabilities
//! - The retrying HTTP client they share
//! - Configuration loading (environment variables, JSON/TOML files)
//!
//! ## Architecture
//! - Implements traits defined in `profilekit-core`
//! - Depends on `profilekit-domain` and `profilekit-core`
//! - Contains all "impure" code (network I/O, environment access)

pub mod api;
pub mod config;
pub mod http;

// Re-export commonly used items
pub use api::{ApiError, RestAuthGateway, RestObjectStore, RestProfileRepository};
pub use http::{HttpClient, HttpClientBuilder};
