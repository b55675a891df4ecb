//! Account facade wiring the session holder, synchronizer and exchanger.
//!
//! This is the composition point a shell (desktop app, TUI, test harness)
//! talks to: it resolves the current identity once and applies the
//! caller-selected avatar save policy.

use std::sync::Arc;

use profilekit_domain::{AvatarImage, FileSelection, ProfileFields, ProfileKitError, Result};

use crate::avatar::AvatarExchanger;
use crate::profile::{ProfileSynchronizer, SignOutOutcome};
use crate::session::SessionHolder;

/// What happens to the profile row after a successful avatar upload.
///
/// Both behaviors exist in the history of this UI; the policy belongs to the
/// caller, not to the exchanger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AvatarSavePolicy {
    /// A successful upload immediately issues a profile update with the new
    /// path.
    SaveOnUpload,
    /// The new path only lands in the local fields; it persists with the
    /// next explicit save.
    #[default]
    DeferToExplicitSave,
}

/// Facade over the three cooperating services.
pub struct AccountService {
    session: SessionHolder,
    synchronizer: Arc<ProfileSynchronizer>,
    exchanger: Arc<AvatarExchanger>,
    policy: AvatarSavePolicy,
}

impl AccountService {
    pub fn new(
        session: SessionHolder,
        synchronizer: Arc<ProfileSynchronizer>,
        exchanger: Arc<AvatarExchanger>,
    ) -> Self {
        Self { session, synchronizer, exchanger, policy: AvatarSavePolicy::default() }
    }

    /// Select the avatar save policy.
    pub fn with_policy(mut self, policy: AvatarSavePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn session(&self) -> &SessionHolder {
        &self.session
    }

    pub fn synchronizer(&self) -> &ProfileSynchronizer {
        &self.synchronizer
    }

    pub fn exchanger(&self) -> &AvatarExchanger {
        &self.exchanger
    }

    /// Load the profile of the current identity into the display fields.
    pub async fn load_profile(&self) -> Result<ProfileFields> {
        let identity = self.require_identity()?;
        self.synchronizer.load(&identity).await
    }

    /// Persist the given fields for the current identity.
    pub async fn save_profile(&self, fields: ProfileFields) -> Result<()> {
        let identity = self.require_identity()?;
        self.synchronizer.update(&identity, fields).await
    }

    /// Upload a newly selected avatar and apply the save policy.
    ///
    /// Returns the freshly generated storage path.
    pub async fn attach_avatar(&self, selection: &[FileSelection]) -> Result<String> {
        let identity = self.require_identity()?;
        let path = self.exchanger.upload(selection).await?;

        match self.policy {
            AvatarSavePolicy::SaveOnUpload => {
                let fields = self.synchronizer.fields().with_avatar_path(&path);
                self.synchronizer.update(&identity, fields).await?;
            }
            AvatarSavePolicy::DeferToExplicitSave => {
                self.synchronizer.stage_avatar_path(&path);
            }
        }

        Ok(path)
    }

    /// Resolve the avatar referenced by the current display fields.
    ///
    /// `None` when no path is staged or the download fails (placeholder).
    pub async fn current_avatar(&self) -> Option<AvatarImage> {
        let path = self.synchronizer.fields().avatar_path?;
        self.exchanger.resolve_display(&path).await
    }

    /// Terminate the session on explicit confirmation.
    pub async fn sign_out(&self, confirmed: bool) -> Result<SignOutOutcome> {
        self.synchronizer.sign_out(confirmed).await
    }

    fn require_identity(&self) -> Result<profilekit_domain::Identity> {
        self.session
            .current()
            .ok_or_else(|| ProfileKitError::Auth("no active session".into()))
    }
}
