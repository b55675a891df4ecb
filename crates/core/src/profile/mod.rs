//! Profile synchronization: load-on-session, edit, upsert.

pub mod ports;
pub mod service;

pub use service::{ProfileSynchronizer, SignOutOutcome};
