//! Avatar round-trip: blob download for display, blob upload for new images.

pub mod ports;
pub mod service;

pub use service::AvatarExchanger;
