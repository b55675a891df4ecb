//! Port interface for the blob storage collaborator

use async_trait::async_trait;
use profilekit_domain::{AvatarImage, Result};

/// Trait for avatar blob storage
#[async_trait]
pub trait AvatarStore: Send + Sync {
    /// Fetch the blob content addressed by `path`.
    async fn download(&self, path: &str) -> Result<AvatarImage>;

    /// Store `image` under `path`.
    ///
    /// Paths are freshly generated per upload, so implementations must
    /// refuse to overwrite an existing blob rather than silently replace it.
    async fn upload(&self, path: &str, image: AvatarImage) -> Result<()>;
}
