//! Avatar exchanger - core business logic
//!
//! Resolves a stored avatar path to displayable content and uploads newly
//! selected images under a fresh storage path.

use std::sync::Arc;

use profilekit_domain::{AvatarImage, FileSelection, ProfileKitError, Result};
use tracing::{info, warn};
use uuid::Uuid;

use super::ports::AvatarStore;
use crate::gate::Gate;
use crate::notify::Notifier;

/// Avatar exchange service
pub struct AvatarExchanger {
    store: Arc<dyn AvatarStore>,
    notifier: Arc<dyn Notifier>,
    gate: Gate,
}

impl AvatarExchanger {
    pub fn new(store: Arc<dyn AvatarStore>, notifier: Arc<dyn Notifier>) -> Self {
        Self { store, notifier, gate: Gate::new("avatar upload") }
    }

    /// Whether an upload is currently in flight.
    pub fn is_uploading(&self) -> bool {
        self.gate.is_busy()
    }

    /// Fetch the blob at `path` for display.
    ///
    /// Idempotent and repeatable; a failure is logged and yields `None` so
    /// the caller falls back to a placeholder. Never fatal.
    pub async fn resolve_display(&self, path: &str) -> Option<AvatarImage> {
        match self.store.download(path).await {
            Ok(image) => Some(image),
            Err(err) => {
                warn!(path, error = %err, "avatar download failed");
                None
            }
        }
    }

    /// Upload the first selected file under a freshly generated path.
    ///
    /// Zero files selected is a precondition error raised before any network
    /// effect. On success the new path is returned to the caller, which
    /// decides when it lands in a profile update; a failed upload leaves any
    /// previously stored path untouched.
    pub async fn upload(&self, selection: &[FileSelection]) -> Result<String> {
        let Some(file) = selection.first() else {
            let err = ProfileKitError::InvalidInput("You must select an image to upload.".into());
            self.notifier.error(&err.to_string());
            return Err(err);
        };

        let _guard = self.gate.try_acquire()?;

        let path = storage_path(file);
        let image = AvatarImage::new(file.bytes.clone(), file.content_type());

        match self.store.upload(&path, image).await {
            Ok(()) => {
                info!(path, "avatar uploaded");
                Ok(path)
            }
            Err(err) => {
                warn!(path, error = %err, "avatar upload failed");
                self.notifier.error(&err.to_string());
                Err(err)
            }
        }
    }
}

/// Fresh random token plus the original file's extension.
///
/// The random component makes collisions with prior uploads impossible, so
/// an upload never overwrites an existing blob.
fn storage_path(file: &FileSelection) -> String {
    let token = Uuid::new_v4();
    match file.extension() {
        Some(ext) => format!("{token}.{ext}"),
        None => token.to_string(),
    }
}
