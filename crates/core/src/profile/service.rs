//! Profile synchronizer - core business logic
//!
//! Loads the profile row for the current identity, exposes the update
//! operation that persists edited fields, and tracks an Idle/Syncing state
//! machine so the triggering control can be disabled while a request is in
//! flight.

use std::sync::{Arc, Mutex, PoisonError};

use profilekit_domain::{Identity, Profile, ProfileFields, ProfileKitError, Result};
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use super::ports::ProfileRepository;
use crate::gate::Gate;
use crate::notify::Notifier;
use crate::session::ports::AuthGateway;

/// Result of a sign-out request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignOutOutcome {
    /// Session terminated; the auth adapter has cleared the session holder.
    SignedOut,
    /// The user did not confirm; nothing was done.
    Aborted,
}

/// Profile synchronization service
pub struct ProfileSynchronizer {
    repository: Arc<dyn ProfileRepository>,
    auth: Arc<dyn AuthGateway>,
    notifier: Arc<dyn Notifier>,
    /// Local display fields; already reflect edits before they persist
    fields: Mutex<ProfileFields>,
    gate: Gate,
    cancel: CancellationToken,
}

impl ProfileSynchronizer {
    /// Create a new synchronizer with empty display fields.
    pub fn new(
        repository: Arc<dyn ProfileRepository>,
        auth: Arc<dyn AuthGateway>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            repository,
            auth,
            notifier,
            fields: Mutex::new(ProfileFields::default()),
            gate: Gate::new("profile sync"),
            cancel: CancellationToken::new(),
        }
    }

    /// Snapshot of the local display fields.
    pub fn fields(&self) -> ProfileFields {
        self.lock_fields().clone()
    }

    /// Whether a load or update is currently in flight.
    pub fn is_syncing(&self) -> bool {
        self.gate.is_busy()
    }

    /// Token that aborts in-flight requests when the owning scope is torn
    /// down. A cancelled request discards the collaborator's result instead
    /// of mutating state that no longer has a live owner.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Fetch the profile row for `identity` and populate the display fields.
    ///
    /// A missing row or a collaborator failure is non-fatal: it is surfaced
    /// as a warning and the fields keep their previous values. The returned
    /// snapshot is whatever the fields hold afterwards.
    pub async fn load(&self, identity: &Identity) -> Result<ProfileFields> {
        let _guard = self.gate.try_acquire()?;

        let fetched = tokio::select! {
            () = self.cancel.cancelled() => {
                return Err(ProfileKitError::Cancelled("profile load".into()));
            }
            res = self.repository.fetch(&identity.user_id) => res,
        };

        match fetched {
            Ok(Some(profile)) => {
                let fields = profile.fields();
                *self.lock_fields() = fields.clone();
                info!(user_id = %identity.user_id, "profile loaded");
                Ok(fields)
            }
            Ok(None) => {
                warn!(user_id = %identity.user_id, "no profile row found");
                self.notifier.warning("No profile found yet. Save once to create it.");
                Ok(self.fields())
            }
            Err(err) => {
                warn!(user_id = %identity.user_id, error = %err, "profile load failed");
                self.notifier.warning(&err.to_string());
                Ok(self.fields())
            }
        }
    }

    /// Persist the edited fields as the profile row for `identity`.
    ///
    /// The display fields take the edited values before the request goes out
    /// (optimistic); a failure leaves them as edited, surfaces an error
    /// notification and returns the error. No retry.
    pub async fn update(&self, identity: &Identity, fields: ProfileFields) -> Result<()> {
        let _guard = self.gate.try_acquire()?;

        *self.lock_fields() = fields.clone();
        let record = Profile::from_fields(&identity.user_id, fields);

        let outcome = tokio::select! {
            () = self.cancel.cancelled() => {
                return Err(ProfileKitError::Cancelled("profile update".into()));
            }
            res = self.repository.upsert(record) => res,
        };

        match outcome {
            Ok(()) => {
                info!(user_id = %identity.user_id, "profile updated");
                self.notifier.success("Your profile has been updated successfully.");
                Ok(())
            }
            Err(err) => {
                warn!(user_id = %identity.user_id, error = %err, "profile update failed");
                self.notifier.error(&err.to_string());
                Err(err)
            }
        }
    }

    /// Replace only the avatar path in the local display fields.
    ///
    /// Used by the deferred-save upload policy: the new path becomes part of
    /// the next explicit update instead of triggering one.
    pub fn stage_avatar_path(&self, path: impl Into<String>) {
        self.lock_fields().avatar_path = Some(path.into());
    }

    /// Terminate the session, but only on explicit confirmation.
    ///
    /// Without confirmation this is a no-op and the identity is untouched.
    pub async fn sign_out(&self, confirmed: bool) -> Result<SignOutOutcome> {
        if !confirmed {
            return Ok(SignOutOutcome::Aborted);
        }

        match self.auth.sign_out().await {
            Ok(()) => {
                info!("signed out");
                Ok(SignOutOutcome::SignedOut)
            }
            Err(err) => {
                warn!(error = %err, "sign-out failed");
                self.notifier.error(&err.to_string());
                Err(err)
            }
        }
    }

    fn lock_fields(&self) -> std::sync::MutexGuard<'_, ProfileFields> {
        self.fields.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
