//! Shared HTTP transport for the REST adapters.

pub mod client;

pub use client::{HttpClient, HttpClientBuilder};
