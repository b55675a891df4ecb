//! # ProfileKit Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - The session holder (current identity, subscribe/notify contract)
//! - Port/adapter interfaces (traits) for the auth, table and storage
//!   collaborators
//! - The profile synchronizer and avatar exchanger services
//!
//! ## Architecture Principles
//! - Only depends on `profilekit-domain`
//! - No HTTP or platform code
//! - All external collaborators via traits
//! - Pure, testable business logic

pub mod account;
pub mod avatar;
pub mod gate;
pub mod notify;
pub mod profile;
pub mod session;

// Re-export specific items to avoid ambiguity
pub use account::{AccountService, AvatarSavePolicy};
pub use avatar::ports::AvatarStore;
pub use avatar::AvatarExchanger;
pub use notify::{Notifier, TracingNotifier};
pub use profile::ports::ProfileRepository;
pub use profile::{ProfileSynchronizer, SignOutOutcome};
pub use session::ports::AuthGateway;
pub use session::{session_channel, SessionHolder, SessionWriter};
